use super::views::ProjectHistoryRow;
use crate::error::QueryError;
use crate::schema::{EmployeeId, WorkforceSnapshot};
use tracing::debug;

impl WorkforceSnapshot {
    /// Every project an employee billed to, expanded by the project's deliverables.
    ///
    /// Ordered Year descending, then hours descending. A billing row whose project has no
    /// deliverables still appears once with empty deliverable columns.
    pub fn employee_project_history(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<ProjectHistoryRow>, QueryError> {
        if self.employee(employee_id).is_none() {
            return Err(QueryError::not_found("employee", employee_id));
        }

        let mut billing: Vec<_> = self.billing_for_employee(employee_id).collect();
        billing.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| b.hours_billed.total_cmp(&a.hours_billed))
                .then_with(|| a.billing_code.cmp(&b.billing_code))
        });

        let mut rows = Vec::new();
        for record in billing {
            let project = self.project(&record.billing_code);
            let base = ProjectHistoryRow {
                billing_code: record.billing_code.clone(),
                project_name: project.map(|project| project.name.clone()),
                client: project.map(|project| project.client.clone()),
                industry: project.map(|project| project.industry.clone()),
                technologies: project.map(|project| project.technologies.raw.clone()),
                year: record.year,
                hours_billed: record.hours_billed,
                role_in_project: record.role_in_project.clone(),
                deliverable: None,
                date_completed: None,
            };

            let deliverables: Vec<_> = self
                .deliverables_for_project(&record.billing_code)
                .collect();
            if deliverables.is_empty() {
                rows.push(base);
                continue;
            }
            for deliverable in deliverables {
                rows.push(ProjectHistoryRow {
                    deliverable: Some(deliverable.name.clone()),
                    date_completed: Some(deliverable.date_completed_raw.clone()),
                    ..base.clone()
                });
            }
        }

        debug!(%employee_id, rows = rows.len(), "project history query");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn history_expands_deliverables_per_billing_row() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot
            .employee_project_history(EmployeeId(10001))
            .expect("Alice exists");
        let shape: Vec<_> = rows
            .iter()
            .map(|row| (row.year, row.billing_code.as_str(), row.deliverable.as_deref()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (2025, "PC-001", Some("Face matching pipeline")),
                (2025, "PC-001", Some("Model audit report")),
                (2024, "PC-002", Some("Border dashboard")),
            ]
        );
    }

    #[test]
    fn projects_without_deliverables_still_appear() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot
            .employee_project_history(EmployeeId(10004))
            .expect("Dan exists");
        let pc004 = rows
            .iter()
            .find(|row| row.billing_code.as_str() == "PC-004")
            .expect("PC-004 billed");
        assert_eq!(pc004.deliverable, None);
        assert_eq!(pc004.industry.as_deref(), Some("Law Enforcement"));
    }

    #[test]
    fn unknown_employee_is_not_found() {
        let snapshot = fixtures::snapshot();
        assert!(snapshot.employee_project_history(EmployeeId(1)).is_err());
    }
}
