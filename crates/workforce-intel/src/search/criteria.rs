use crate::error::QueryError;
use crate::query::SkillMatch;
use serde::{Deserialize, Serialize};

/// Options recognised by the complex search. Every present option narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skill_match: SkillMatch,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub client_experience: Option<String>,
    #[serde(default)]
    pub industry_experience: Option<String>,
    #[serde(default)]
    pub min_years_experience: Option<f64>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    pub fn with_skill_match(mut self, skill_match: SkillMatch) -> Self {
        self.skill_match = skill_match;
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_client_experience(mut self, client: impl Into<String>) -> Self {
        self.client_experience = Some(client.into());
        self
    }

    pub fn with_industry_experience(mut self, industry: impl Into<String>) -> Self {
        self.industry_experience = Some(industry.into());
        self
    }

    pub fn with_min_years_experience(mut self, years: f64) -> Self {
        self.min_years_experience = Some(years);
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        match self.min_years_experience {
            Some(years) if !years.is_finite() => Err(QueryError::validation(
                "min_years_experience",
                "must be a finite number",
            )),
            Some(years) if years < 0.0 => Err(QueryError::validation(
                "min_years_experience",
                "must not be negative",
            )),
            _ => Ok(()),
        }
    }
}
