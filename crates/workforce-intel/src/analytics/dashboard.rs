use super::views::DashboardMetrics;
use crate::schema::WorkforceSnapshot;

impl WorkforceSnapshot {
    /// Headline totals. Revenue sums every project, billed or not.
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let counts = self.counts();
        DashboardMetrics {
            total_employees: counts.employees,
            total_projects: counts.projects,
            total_hours_billed: self.billing().iter().map(|row| row.hours_billed).sum(),
            total_revenue: self
                .projects()
                .iter()
                .map(|project| project.dollar_amount)
                .sum(),
            billing_records: counts.billing,
            deliverables: counts.deliverables,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    #[test]
    fn totals_cover_every_table() {
        let metrics = fixtures::snapshot().dashboard_metrics();
        assert_eq!(metrics.total_employees, 5);
        assert_eq!(metrics.total_projects, 4);
        assert_eq!(metrics.total_hours_billed, 950.0);
        assert_eq!(metrics.total_revenue, 890_000.0);
        assert_eq!(metrics.billing_records, 8);
        assert_eq!(metrics.deliverables, 4);
    }
}
