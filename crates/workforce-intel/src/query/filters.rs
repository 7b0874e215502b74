use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// How a list of skills combines: every skill present, or at least one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatch {
    #[default]
    All,
    Any,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skill_match: SkillMatch,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

impl DirectoryFilter {
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

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
    /// Inclusive lower bound.
    #[serde(default)]
    pub min_dollar_amount: Option<f64>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max_dollar_amount: Option<f64>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_min_dollar_amount(mut self, amount: f64) -> Self {
        self.min_dollar_amount = Some(amount);
        self
    }

    pub fn with_max_dollar_amount(mut self, amount: f64) -> Self {
        self.max_dollar_amount = Some(amount);
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        check_amount("min_dollar_amount", self.min_dollar_amount)?;
        check_amount("max_dollar_amount", self.max_dollar_amount)?;
        if let (Some(min), Some(max)) = (self.min_dollar_amount, self.max_dollar_amount) {
            if min > max {
                return Err(QueryError::validation(
                    "min_dollar_amount",
                    format!("{min} exceeds max_dollar_amount {max}"),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliverableFilter {
    #[serde(default)]
    pub topic_area: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub billing_code: Option<String>,
}

impl DeliverableFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic_area(mut self, topic_area: impl Into<String>) -> Self {
        self.topic_area = Some(topic_area.into());
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_billing_code(mut self, billing_code: impl Into<String>) -> Self {
        self.billing_code = Some(billing_code.into());
        self
    }
}

/// Parse user-supplied amount text; blank input means "no bound".
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Option<f64>, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cleaned: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| QueryError::validation(field, format!("'{trimmed}' is not a number")))?;
    check_amount(field, Some(amount))?;
    Ok(Some(amount))
}

fn check_amount(field: &'static str, amount: Option<f64>) -> Result<(), QueryError> {
    match amount {
        Some(value) if !value.is_finite() => {
            Err(QueryError::validation(field, "must be a finite number"))
        }
        Some(value) if value < 0.0 => Err(QueryError::validation(field, "must not be negative")),
        _ => Ok(()),
    }
}

/// A filter value that is present and not blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    non_blank(value.as_deref())
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
