use crate::normalize::normalize_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Billing rate and planned hours for one standard role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleRate {
    pub hourly_rate: f64,
    pub hours: f64,
}

impl RoleRate {
    pub fn cost(&self) -> f64 {
        self.hourly_rate * self.hours
    }
}

/// Rates keyed by Standard_Role, looked up case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCard {
    rates: BTreeMap<String, RoleRate>,
}

impl Default for RateCard {
    fn default() -> Self {
        Self::empty()
            .with_rate("Technical Lead", 225.0, 1800.0)
            .with_rate("Senior Engineer", 185.0, 1600.0)
            .with_rate("Senior Architect", 200.0, 1500.0)
            .with_rate("Project Manager", 165.0, 1400.0)
            .with_rate("AI Research Lead", 210.0, 1500.0)
    }
}

impl RateCard {
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    pub fn with_rate(mut self, role: &str, hourly_rate: f64, hours: f64) -> Self {
        self.rates
            .insert(normalize_key(role), RoleRate { hourly_rate, hours });
        self
    }

    pub fn rate_for(&self, role: &str) -> Option<&RoleRate> {
        self.rates.get(&normalize_key(role))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_covers_standard_roles() {
        let card = RateCard::default();
        assert_eq!(card.len(), 5);
        let lead = card.rate_for("technical lead").expect("lead rate");
        assert_eq!(lead.cost(), 405_000.0);
        assert_eq!(card.rate_for("Data Analyst"), None);
    }

    #[test]
    fn custom_rates_override_defaults() {
        let card = RateCard::default().with_rate("Technical Lead", 250.0, 1000.0);
        assert_eq!(
            card.rate_for("Technical Lead"),
            Some(&RoleRate {
                hourly_rate: 250.0,
                hours: 1000.0
            })
        );
    }
}
