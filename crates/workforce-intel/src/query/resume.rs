use super::views::ResumeView;
use crate::error::QueryError;
use crate::schema::{EmployeeId, WorkforceSnapshot};
use tracing::debug;

impl WorkforceSnapshot {
    /// One-to-one join of an employee with their resume.
    ///
    /// Fails with `NotFound` naming `employee` for an unknown id, and naming `resume` for a
    /// valid employee who has no resume on file.
    pub fn resume_matrix(&self, employee_id: EmployeeId) -> Result<ResumeView, QueryError> {
        let employee = self
            .employee(employee_id)
            .ok_or_else(|| QueryError::not_found("employee", employee_id))?;
        let resume = self
            .resume(employee_id)
            .ok_or_else(|| QueryError::not_found("resume", employee_id))?;
        debug!(%employee_id, "resume matrix query");

        Ok(ResumeView {
            employee_id,
            name: employee.name.clone(),
            job_title: employee.job_title.clone(),
            location: employee.location.clone(),
            standard_role: self.standard_role(employee).map(str::to_string),
            skills: employee.skills.raw.clone(),
            education: resume.education.clone(),
            experience: resume.experience.clone(),
            certifications: resume.certifications.clone(),
            summary: resume.summary.clone(),
            linkedin_url: employee.linkedin_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn joins_employee_and_resume() {
        let snapshot = fixtures::snapshot();
        let view = snapshot
            .resume_matrix(EmployeeId(10001))
            .expect("Alice has a resume");
        assert_eq!(view.name, "Alice Ward");
        assert_eq!(view.education, "MS Computer Science");
        assert_eq!(view.standard_role.as_deref(), Some("Technical Lead"));
    }

    #[test]
    fn missing_resume_and_missing_employee_are_distinct() {
        let snapshot = fixtures::snapshot();
        let no_resume = snapshot
            .resume_matrix(EmployeeId(10005))
            .expect_err("Erin has no resume");
        assert!(matches!(
            no_resume,
            QueryError::NotFound {
                entity: "resume",
                ..
            }
        ));

        let no_employee = snapshot
            .resume_matrix(EmployeeId(42))
            .expect_err("unknown employee");
        assert!(matches!(
            no_employee,
            QueryError::NotFound {
                entity: "employee",
                ..
            }
        ));
    }
}
