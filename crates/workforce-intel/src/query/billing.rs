use super::views::{EmployeeBillingRow, ProjectBillingRow, YearBillingRow, YearProjectSummary};
use crate::error::QueryError;
use crate::schema::{BillingCode, EmployeeId, WorkforceSnapshot};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Rows that carry billed hours.
pub trait BilledHours {
    fn hours_billed(&self) -> f64;
}

impl BilledHours for EmployeeBillingRow {
    fn hours_billed(&self) -> f64 {
        self.hours_billed
    }
}

impl BilledHours for ProjectBillingRow {
    fn hours_billed(&self) -> f64 {
        self.hours_billed
    }
}

impl BilledHours for YearBillingRow {
    fn hours_billed(&self) -> f64 {
        self.hours_billed
    }
}

pub fn total_hours<T: BilledHours>(rows: &[T]) -> f64 {
    rows.iter().map(BilledHours::hours_billed).sum()
}

impl WorkforceSnapshot {
    /// Billing rows for one employee, Year ascending then Billing_Code.
    pub fn billing_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeBillingRow>, QueryError> {
        let employee = self
            .employee(employee_id)
            .ok_or_else(|| QueryError::not_found("employee", employee_id))?;

        let mut rows: Vec<EmployeeBillingRow> = self
            .billing_for_employee(employee_id)
            .map(|record| {
                let project = self.project(&record.billing_code);
                EmployeeBillingRow {
                    employee_id,
                    name: employee.name.clone(),
                    billing_code: record.billing_code.clone(),
                    project_name: project.map(|project| project.name.clone()),
                    client: project.map(|project| project.client.clone()),
                    year: record.year,
                    hours_billed: record.hours_billed,
                    role_in_project: record.role_in_project.clone(),
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.billing_code.cmp(&b.billing_code))
        });

        debug!(%employee_id, rows = rows.len(), "billing by employee query");
        Ok(rows)
    }

    /// Billing rows for one project, Year ascending then Employee_ID.
    pub fn billing_by_project(&self, billing_code: &str) -> Result<Vec<ProjectBillingRow>, QueryError> {
        let code = BillingCode::new(billing_code);
        let project = self
            .project(&code)
            .ok_or_else(|| QueryError::not_found("project", &code))?;

        let mut rows: Vec<ProjectBillingRow> = self
            .billing_for_project(&code)
            .map(|record| {
                let employee = self.employee(record.employee_id);
                ProjectBillingRow {
                    billing_code: code.clone(),
                    project_name: project.name.clone(),
                    client: project.client.clone(),
                    employee_id: record.employee_id,
                    name: employee.map(|employee| employee.name.clone()),
                    job_title: employee.map(|employee| employee.job_title.clone()),
                    year: record.year,
                    hours_billed: record.hours_billed,
                    role_in_project: record.role_in_project.clone(),
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        debug!(%code, rows = rows.len(), "billing by project query");
        Ok(rows)
    }

    /// Every billing row for `year`, ordered by Billing_Code then Employee_ID.
    pub fn billing_by_year(&self, year: i32) -> Vec<YearBillingRow> {
        let mut rows: Vec<YearBillingRow> = self
            .billing()
            .iter()
            .filter(|record| record.year == year)
            .map(|record| YearBillingRow {
                year,
                employee_id: record.employee_id,
                name: self
                    .employee(record.employee_id)
                    .map(|employee| employee.name.clone()),
                billing_code: record.billing_code.clone(),
                project_name: self
                    .project(&record.billing_code)
                    .map(|project| project.name.clone()),
                hours_billed: record.hours_billed,
                role_in_project: record.role_in_project.clone(),
            })
            .collect();
        rows.sort_by(|a, b| {
            a.billing_code
                .cmp(&b.billing_code)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        debug!(year, rows = rows.len(), "billing by year query");
        rows
    }

    /// Hours per (year, project), optionally restricted to one year.
    ///
    /// Ordered Year descending, then total hours descending, then Billing_Code.
    pub fn billing_summary_by_year(&self, year: Option<i32>) -> Vec<YearProjectSummary> {
        let mut groups: BTreeMap<(i32, &BillingCode), (f64, HashSet<EmployeeId>)> =
            BTreeMap::new();
        for record in self
            .billing()
            .iter()
            .filter(|record| year.map_or(true, |year| record.year == year))
        {
            let (hours, employees) = groups
                .entry((record.year, &record.billing_code))
                .or_default();
            *hours += record.hours_billed;
            employees.insert(record.employee_id);
        }

        let mut summary: Vec<YearProjectSummary> = groups
            .into_iter()
            .map(|((year, code), (total_hours, employees))| {
                let project = self.project(code);
                YearProjectSummary {
                    year,
                    billing_code: code.clone(),
                    project_name: project.map(|project| project.name.clone()),
                    client: project.map(|project| project.client.clone()),
                    industry: project.map(|project| project.industry.clone()),
                    total_hours,
                    employee_count: employees.len(),
                }
            })
            .collect();
        summary.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| b.total_hours.total_cmp(&a.total_hours))
                .then_with(|| a.billing_code.cmp(&b.billing_code))
        });
        debug!(?year, groups = summary.len(), "billing summary by year query");
        summary
    }
}
