use super::resolve_candidates;
use crate::error::QueryError;
use crate::normalize::tokenize;
use crate::schema::{EmployeeId, WorkforceSnapshot};
use serde::Serialize;

/// Required skills one candidate holds and lacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRow {
    pub employee_id: EmployeeId,
    pub name: String,
    pub covered: String,
    pub missing: String,
    pub coverage_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsCoverage {
    pub required_skills: Vec<String>,
    pub rows: Vec<CoverageRow>,
    /// Required skills no candidate holds.
    pub uncovered: Vec<String>,
}

impl SkillsCoverage {
    pub fn fully_covered(&self) -> bool {
        self.uncovered.is_empty()
    }
}

impl WorkforceSnapshot {
    /// Skills matrix for a proposed team, in the order the candidates were given.
    pub fn skills_coverage(
        &self,
        candidates: &[EmployeeId],
        required_skills: &[String],
    ) -> Result<SkillsCoverage, QueryError> {
        let required: Vec<String> = tokenize(&required_skills.join(";"))
            .into_iter()
            .map(|token| token.display)
            .collect();
        if required.is_empty() {
            return Err(QueryError::validation(
                "required_skills",
                "at least one skill is required",
            ));
        }

        let employees = resolve_candidates(self, candidates)?;
        let mut held_by_anyone = vec![false; required.len()];
        let rows = employees
            .into_iter()
            .map(|employee| {
                let mut covered = Vec::new();
                let mut missing = Vec::new();
                for (position, skill) in required.iter().enumerate() {
                    if employee.skills.contains(skill) {
                        held_by_anyone[position] = true;
                        covered.push(skill.as_str());
                    } else {
                        missing.push(skill.as_str());
                    }
                }
                CoverageRow {
                    employee_id: employee.id,
                    name: employee.name.clone(),
                    coverage_pct: covered.len() as f64 * 100.0 / required.len() as f64,
                    covered: covered.join("; "),
                    missing: missing.join("; "),
                }
            })
            .collect();

        let uncovered = required
            .iter()
            .zip(&held_by_anyone)
            .filter(|(_, held)| !**held)
            .map(|(skill, _)| skill.clone())
            .collect();

        Ok(SkillsCoverage {
            required_skills: required,
            rows,
            uncovered,
        })
    }
}
