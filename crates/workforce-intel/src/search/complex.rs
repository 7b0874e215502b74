use super::criteria::SearchCriteria;
use super::experience::years_of_experience;
use crate::error::QueryError;
use crate::normalize::{eq_ignore_case, join_sorted};
use crate::query::{present, AttributeFilter};
use crate::schema::{Employee, EmployeeId, Project, WorkforceSnapshot};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// A search hit with its resume and a billing-derived work summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateView {
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub location: String,
    pub skills: String,
    pub standard_role: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub certifications: Option<String>,
    pub years_experience: Option<f64>,
    pub clients_worked: String,
    pub industries_worked: String,
    pub total_hours_billed: f64,
}

impl WorkforceSnapshot {
    /// Employees satisfying every present criterion, ascending by `Employee_ID`.
    ///
    /// Client and industry experience hold when at least one billing row of the employee
    /// points at a project with that client or industry, so an employee appears once no
    /// matter how many rows qualify. A minimum-years criterion drops employees whose resume
    /// is missing or carries no recognisable year figures.
    pub fn complex_search(&self, criteria: &SearchCriteria) -> Result<Vec<CandidateView>, QueryError> {
        criteria.validate()?;

        let attributes = AttributeFilter::new(
            &criteria.skills,
            criteria.skill_match,
            criteria.role.as_deref(),
            criteria.location.as_deref(),
            None,
        );
        let client = present(&criteria.client_experience);
        let industry = present(&criteria.industry_experience);

        let results: Vec<CandidateView> = self
            .employees()
            .iter()
            .filter(|employee| attributes.accepts(self, employee))
            .filter(|employee| {
                client.map_or(true, |client| {
                    self.has_billed_project(employee.id, |project| {
                        eq_ignore_case(&project.client, client)
                    })
                })
            })
            .filter(|employee| {
                industry.map_or(true, |industry| {
                    self.has_billed_project(employee.id, |project| {
                        eq_ignore_case(&project.industry, industry)
                    })
                })
            })
            .filter_map(|employee| {
                let years = self.years_for(employee);
                match (criteria.min_years_experience, years) {
                    (Some(_), None) => {
                        warn!(
                            employee_id = %employee.id,
                            "no parsable years of experience, excluded from search"
                        );
                        None
                    }
                    (Some(minimum), Some(years)) if years < minimum => None,
                    _ => Some(self.candidate(employee, years)),
                }
            })
            .collect();

        debug!(?criteria, matched = results.len(), "complex search");
        Ok(results)
    }

    fn has_billed_project(&self, id: EmployeeId, predicate: impl Fn(&Project) -> bool) -> bool {
        self.billing_for_employee(id)
            .filter_map(|record| self.project(&record.billing_code))
            .any(predicate)
    }

    fn years_for(&self, employee: &Employee) -> Option<f64> {
        self.resume(employee.id)
            .and_then(|resume| years_of_experience(&resume.experience))
    }

    fn candidate(&self, employee: &Employee, years_experience: Option<f64>) -> CandidateView {
        let resume = self.resume(employee.id);
        let mut clients = BTreeSet::new();
        let mut industries = BTreeSet::new();
        let mut total_hours_billed = 0.0;
        for record in self.billing_for_employee(employee.id) {
            total_hours_billed += record.hours_billed;
            if let Some(project) = self.project(&record.billing_code) {
                clients.insert(project.client.as_str());
                industries.insert(project.industry.as_str());
            }
        }

        CandidateView {
            employee_id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            location: employee.location.clone(),
            skills: employee.skills.raw.clone(),
            standard_role: self.standard_role(employee).map(str::to_string),
            education: resume.map(|resume| resume.education.clone()),
            experience: resume.map(|resume| resume.experience.clone()),
            certifications: resume.map(|resume| resume.certifications.clone()),
            years_experience,
            clients_worked: join_sorted(clients),
            industries_worked: join_sorted(industries),
            total_hours_billed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::query::{DirectoryFilter, SkillMatch};

    fn ids(rows: &[CandidateView]) -> Vec<u32> {
        rows.iter().map(|row| row.employee_id.0).collect()
    }

    #[test]
    fn empty_criteria_matches_the_directory() {
        let snapshot = fixtures::snapshot();
        let candidates = snapshot
            .complex_search(&SearchCriteria::new())
            .expect("empty criteria are valid");
        let directory: Vec<u32> = snapshot
            .employee_directory(&DirectoryFilter::new())
            .iter()
            .map(|row| row.employee_id.0)
            .collect();
        assert_eq!(ids(&candidates), directory);
    }

    #[test]
    fn skill_and_industry_experience_combine() {
        let snapshot = fixtures::snapshot();
        let criteria = SearchCriteria::new()
            .with_skill("Python")
            .with_industry_experience("law enforcement");
        let candidates = snapshot.complex_search(&criteria).expect("valid criteria");
        assert_eq!(ids(&candidates), vec![10001, 10002]);
    }

    #[test]
    fn many_qualifying_rows_yield_one_candidate() {
        let snapshot = fixtures::snapshot();
        let criteria = SearchCriteria::new().with_client_experience("TX Sheriff's Dept");
        let candidates = snapshot.complex_search(&criteria).expect("valid criteria");
        assert_eq!(ids(&candidates), vec![10001, 10002]);
    }

    #[test]
    fn minimum_years_excludes_unparsable_and_missing_resumes() {
        let snapshot = fixtures::snapshot();
        let criteria = SearchCriteria::new().with_min_years_experience(6.0);
        let candidates = snapshot.complex_search(&criteria).expect("valid criteria");
        assert_eq!(ids(&candidates), vec![10001, 10004]);
        assert_eq!(candidates[0].years_experience, Some(10.0));
        assert_eq!(candidates[1].years_experience, Some(12.0));
    }

    #[test]
    fn candidates_summarise_billing() {
        let snapshot = fixtures::snapshot();
        let candidates = snapshot
            .complex_search(&SearchCriteria::new().with_role("Technical Lead"))
            .expect("valid criteria");
        assert_eq!(candidates.len(), 1);
        let alice = &candidates[0];
        assert_eq!(alice.clients_worked, "Federal DHS; TX Sheriff's Dept");
        assert_eq!(alice.industries_worked, "Government; Law Enforcement");
        assert_eq!(alice.total_hours_billed, 160.0);
        assert_eq!(alice.education.as_deref(), Some("MS Computer Science"));
    }

    #[test]
    fn any_skill_mode_widens_the_search() {
        let snapshot = fixtures::snapshot();
        let criteria = SearchCriteria::new()
            .with_skill("Tableau")
            .with_skill("PyTorch")
            .with_skill_match(SkillMatch::Any);
        let candidates = snapshot.complex_search(&criteria).expect("valid criteria");
        assert_eq!(ids(&candidates), vec![10003, 10005]);
    }

    #[test]
    fn negative_minimum_years_is_rejected() {
        let snapshot = fixtures::snapshot();
        let error = snapshot
            .complex_search(&SearchCriteria::new().with_min_years_experience(-1.0))
            .expect_err("negative years are invalid");
        assert!(matches!(
            error,
            QueryError::Validation {
                field: "min_years_experience",
                ..
            }
        ));
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let snapshot = fixtures::snapshot();
        let criteria = SearchCriteria::new().with_client_experience("Nobody Inc");
        assert!(snapshot
            .complex_search(&criteria)
            .expect("valid criteria")
            .is_empty());
    }
}
