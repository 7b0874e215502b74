use super::rates::RateCard;
use super::resolve_candidates;
use crate::error::QueryError;
use crate::schema::{EmployeeId, WorkforceSnapshot};
use serde::Serialize;
use tracing::debug;

/// Margin applied when the caller does not choose one.
pub const DEFAULT_MARGIN_PCT: f64 = 7.0;
pub const MAX_MARGIN_PCT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLineItem {
    pub employee_id: EmployeeId,
    pub name: String,
    pub standard_role: String,
    pub hourly_rate: f64,
    pub estimated_hours: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub line_items: Vec<CostLineItem>,
    /// Candidates left out because their role has no rate.
    pub unpriced: Vec<EmployeeId>,
    pub base_cost: f64,
    pub total_hours: f64,
    pub margin_pct: f64,
    pub profit_amount: f64,
    pub final_price: f64,
    pub blended_rate: f64,
    pub final_rate: f64,
}

impl WorkforceSnapshot {
    /// Price a proposed team from its members' standard roles.
    ///
    /// `margin_pct` must lie within `0..=30`. Rates are zero when no candidate is priced.
    pub fn estimate_cost(
        &self,
        candidates: &[EmployeeId],
        rate_card: &RateCard,
        margin_pct: f64,
    ) -> Result<CostEstimate, QueryError> {
        if !(0.0..=MAX_MARGIN_PCT).contains(&margin_pct) {
            return Err(QueryError::validation(
                "margin_pct",
                format!("must be between 0 and {MAX_MARGIN_PCT}, got {margin_pct}"),
            ));
        }

        let mut line_items = Vec::new();
        let mut unpriced = Vec::new();
        for employee in resolve_candidates(self, candidates)? {
            let priced = self.standard_role(employee).and_then(|role| {
                rate_card.rate_for(role).map(|rate| (role, rate))
            });
            match priced {
                Some((role, rate)) => line_items.push(CostLineItem {
                    employee_id: employee.id,
                    name: employee.name.clone(),
                    standard_role: role.to_string(),
                    hourly_rate: rate.hourly_rate,
                    estimated_hours: rate.hours,
                    subtotal: rate.cost(),
                }),
                None => unpriced.push(employee.id),
            }
        }

        let base_cost: f64 = line_items.iter().map(|item| item.subtotal).sum();
        let total_hours: f64 = line_items.iter().map(|item| item.estimated_hours).sum();
        let profit_amount = base_cost * margin_pct / 100.0;
        let final_price = base_cost + profit_amount;
        let per_hour = |amount: f64| {
            if total_hours > 0.0 {
                amount / total_hours
            } else {
                0.0
            }
        };

        debug!(
            priced = line_items.len(),
            unpriced = unpriced.len(),
            base_cost,
            margin_pct,
            "cost estimate"
        );
        Ok(CostEstimate {
            blended_rate: per_hour(base_cost),
            final_rate: per_hour(final_price),
            line_items,
            unpriced,
            base_cost,
            total_hours,
            margin_pct,
            profit_amount,
            final_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn prices_candidates_with_known_roles() {
        let snapshot = fixtures::snapshot();
        let estimate = snapshot
            .estimate_cost(
                &[EmployeeId(10001), EmployeeId(10002), EmployeeId(10005)],
                &RateCard::default(),
                10.0,
            )
            .expect("valid margin");

        assert_eq!(estimate.line_items.len(), 2);
        assert_eq!(estimate.unpriced, vec![EmployeeId(10005)]);
        assert_eq!(estimate.base_cost, 701_000.0);
        assert_eq!(estimate.total_hours, 3400.0);
        assert_eq!(estimate.profit_amount, 70_100.0);
        assert_eq!(estimate.final_price, 771_100.0);
        assert!((estimate.blended_rate - 206.18).abs() < 0.01);
    }

    #[test]
    fn margin_outside_range_is_rejected() {
        let snapshot = fixtures::snapshot();
        for margin in [-1.0, 30.5, f64::NAN] {
            let error = snapshot
                .estimate_cost(&[EmployeeId(10001)], &RateCard::default(), margin)
                .expect_err("margin out of range");
            assert!(matches!(
                error,
                QueryError::Validation {
                    field: "margin_pct",
                    ..
                }
            ));
        }
    }

    #[test]
    fn nobody_priced_yields_zero_rates() {
        let snapshot = fixtures::snapshot();
        let estimate = snapshot
            .estimate_cost(&[EmployeeId(10005)], &RateCard::default(), DEFAULT_MARGIN_PCT)
            .expect("valid margin");
        assert!(estimate.line_items.is_empty());
        assert_eq!(estimate.blended_rate, 0.0);
        assert_eq!(estimate.final_price, 0.0);
    }
}
