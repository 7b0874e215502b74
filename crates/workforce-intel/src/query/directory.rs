use super::filters::{non_blank, DirectoryFilter, SkillMatch};
use super::views::EmployeeView;
use crate::normalize::{contains_ignore_case, eq_ignore_case, normalize_key};
use crate::schema::{Employee, WorkforceSnapshot};
use tracing::debug;

/// Employee-level predicates shared by the directory and the complex search.
#[derive(Debug)]
pub(crate) struct AttributeFilter<'f> {
    skills: Vec<&'f str>,
    skill_match: SkillMatch,
    role: Option<&'f str>,
    location: Option<&'f str>,
    job_title: Option<&'f str>,
}

impl<'f> AttributeFilter<'f> {
    pub(crate) fn new(
        skills: &'f [String],
        skill_match: SkillMatch,
        role: Option<&'f str>,
        location: Option<&'f str>,
        job_title: Option<&'f str>,
    ) -> Self {
        Self {
            skills: skills
                .iter()
                .map(|skill| skill.as_str())
                .filter(|skill| !normalize_key(skill).is_empty())
                .collect(),
            skill_match,
            role: non_blank(role),
            location: non_blank(location),
            job_title: non_blank(job_title),
        }
    }

    pub(crate) fn accepts(&self, snapshot: &WorkforceSnapshot, employee: &Employee) -> bool {
        self.skills_match(employee)
            && self.role.map_or(true, |role| {
                snapshot
                    .standard_role(employee)
                    .is_some_and(|standard| eq_ignore_case(standard, role))
            })
            && self
                .location
                .map_or(true, |location| eq_ignore_case(&employee.location, location))
            && self
                .job_title
                .map_or(true, |title| contains_ignore_case(&employee.job_title, title))
    }

    fn skills_match(&self, employee: &Employee) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        match self.skill_match {
            SkillMatch::All => self.skills.iter().all(|skill| employee.skills.contains(skill)),
            SkillMatch::Any => self.skills.iter().any(|skill| employee.skills.contains(skill)),
        }
    }
}

impl WorkforceSnapshot {
    /// Employees passing every present filter, in ascending `Employee_ID` order.
    pub fn employee_directory(&self, filter: &DirectoryFilter) -> Vec<EmployeeView> {
        let predicate = AttributeFilter::new(
            &filter.skills,
            filter.skill_match,
            filter.role.as_deref(),
            filter.location.as_deref(),
            filter.job_title.as_deref(),
        );

        let results: Vec<EmployeeView> = self
            .employees()
            .iter()
            .filter(|employee| predicate.accepts(self, employee))
            .map(|employee| EmployeeView::new(self, employee))
            .collect();

        debug!(?filter, matched = results.len(), "employee directory query");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::schema::EmployeeId;

    fn ids(rows: &[EmployeeView]) -> Vec<u32> {
        rows.iter().map(|row| row.employee_id.0).collect()
    }

    #[test]
    fn no_filters_returns_everyone_in_id_order() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot.employee_directory(&DirectoryFilter::new());
        assert_eq!(ids(&rows), vec![10001, 10002, 10003, 10004, 10005]);
    }

    #[test]
    fn skill_filter_matches_tokens_not_substrings() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot.employee_directory(&DirectoryFilter::new().with_skill("sql"));
        assert_eq!(ids(&rows), vec![10005], "NoSQL must not match SQL");
    }

    #[test]
    fn skill_match_mode_controls_combination() {
        let snapshot = fixtures::snapshot();
        let all = DirectoryFilter::new().with_skill("Python").with_skill("AWS");
        assert_eq!(ids(&snapshot.employee_directory(&all)), vec![10002, 10003]);

        let any = DirectoryFilter::new()
            .with_skill("OpenCV")
            .with_skill("Tableau")
            .with_skill_match(SkillMatch::Any);
        assert_eq!(ids(&snapshot.employee_directory(&any)), vec![10001, 10005]);
    }

    #[test]
    fn role_location_and_title_filters_are_anded() {
        let snapshot = fixtures::snapshot();
        let filter = DirectoryFilter::new()
            .with_role("senior engineer")
            .with_location("austin, tx");
        assert_eq!(ids(&snapshot.employee_directory(&filter)), vec![10003]);

        let filter = DirectoryFilter::new().with_job_title("cv eng");
        assert_eq!(ids(&snapshot.employee_directory(&filter)), vec![10002]);
    }

    #[test]
    fn directory_rows_carry_resolved_role() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot.employee_directory(&DirectoryFilter::new());
        assert_eq!(rows[0].standard_role.as_deref(), Some("Technical Lead"));
        let erin = rows
            .iter()
            .find(|row| row.employee_id == EmployeeId(10005))
            .expect("Erin present");
        assert_eq!(erin.standard_role, None);
    }

    #[test]
    fn blank_filters_are_ignored() {
        let snapshot = fixtures::snapshot();
        let filter = DirectoryFilter {
            skills: vec!["  ".to_string()],
            location: Some(String::new()),
            ..DirectoryFilter::default()
        };
        assert_eq!(snapshot.employee_directory(&filter).len(), 5);
    }
}
