use super::views::{ClientSummary, IndustrySummary};
use crate::schema::{BillingCode, EmployeeId, Project, WorkforceSnapshot};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Default)]
struct Tally<'a> {
    hours: f64,
    projects: HashSet<&'a BillingCode>,
    employees: HashSet<EmployeeId>,
    revenue: f64,
}

impl<'a> Tally<'a> {
    fn record(&mut self, project: &'a Project, employee_id: EmployeeId, hours: f64) {
        self.hours += hours;
        self.employees.insert(employee_id);
        if self.projects.insert(&project.billing_code) {
            self.revenue += project.dollar_amount;
        }
    }
}

impl WorkforceSnapshot {
    /// Hours, revenue, and distinct project count per industry, over billed projects.
    ///
    /// Ordered by total hours descending, then industry ascending.
    pub fn analytics_by_industry(&self) -> Vec<IndustrySummary> {
        let mut tallies: HashMap<&str, Tally<'_>> = HashMap::new();
        for (project, employee_id, hours) in self.billed_projects() {
            tallies
                .entry(project.industry.as_str())
                .or_default()
                .record(project, employee_id, hours);
        }

        let mut summary: Vec<IndustrySummary> = tallies
            .into_iter()
            .map(|(industry, tally)| IndustrySummary {
                industry: industry.to_string(),
                total_hours: tally.hours,
                total_revenue: tally.revenue,
                project_count: tally.projects.len(),
            })
            .collect();
        summary.sort_by(|a, b| {
            b.total_hours
                .total_cmp(&a.total_hours)
                .then_with(|| a.industry.cmp(&b.industry))
        });

        debug!(groups = summary.len(), "industry analytics");
        summary
    }

    /// The industry rollup split further by client, with distinct billing employees.
    pub fn analytics_by_client(&self) -> Vec<ClientSummary> {
        let mut tallies: HashMap<(&str, &str), Tally<'_>> = HashMap::new();
        for (project, employee_id, hours) in self.billed_projects() {
            tallies
                .entry((project.industry.as_str(), project.client.as_str()))
                .or_default()
                .record(project, employee_id, hours);
        }

        let mut summary: Vec<ClientSummary> = tallies
            .into_iter()
            .map(|((industry, client), tally)| ClientSummary {
                industry: industry.to_string(),
                client: client.to_string(),
                project_count: tally.projects.len(),
                total_hours: tally.hours,
                employee_count: tally.employees.len(),
                total_revenue: tally.revenue,
            })
            .collect();
        summary.sort_by(|a, b| {
            b.total_hours
                .total_cmp(&a.total_hours)
                .then_with(|| a.industry.cmp(&b.industry))
                .then_with(|| a.client.cmp(&b.client))
        });

        debug!(groups = summary.len(), "client analytics");
        summary
    }

    /// Billing rows joined to their project; rows whose project is missing are skipped.
    fn billed_projects(&self) -> impl Iterator<Item = (&Project, EmployeeId, f64)> {
        self.billing().iter().filter_map(move |record| {
            self.project(&record.billing_code)
                .map(|project| (project, record.employee_id, record.hours_billed))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    #[test]
    fn industry_revenue_counts_each_project_once() {
        let snapshot = fixtures::snapshot();
        let shape: Vec<_> = snapshot
            .analytics_by_industry()
            .into_iter()
            .map(|row| {
                (
                    row.industry,
                    row.total_hours,
                    row.total_revenue,
                    row.project_count,
                )
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Law Enforcement".to_string(), 570.0, 340_000.0, 2),
                ("Commercial".to_string(), 260.0, 150_000.0, 1),
                ("Government".to_string(), 120.0, 400_000.0, 1),
            ]
        );
    }

    #[test]
    fn client_rollup_counts_distinct_employees() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot.analytics_by_client();
        let shape: Vec<_> = rows
            .iter()
            .map(|row| (row.client.as_str(), row.total_hours, row.employee_count))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("TX Sheriff's Dept", 520.0, 2),
                ("ShopCo", 260.0, 2),
                ("Federal DHS", 120.0, 2),
                ("Austin PD", 50.0, 1),
            ]
        );
        assert_eq!(rows[0].total_revenue, 250_000.0);
        assert_eq!(rows[0].project_count, 1);
    }

    #[test]
    fn unbilled_projects_are_left_out() {
        let snapshot = fixtures::snapshot();
        let hours: f64 = snapshot
            .analytics_by_industry()
            .iter()
            .map(|row| row.total_hours)
            .sum();
        let billed: f64 = snapshot.billing().iter().map(|row| row.hours_billed).sum();
        assert_eq!(hours, billed);
    }
}
