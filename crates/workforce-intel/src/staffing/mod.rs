//! Team staffing helpers: required-skill coverage and role-rate cost estimates.

mod coverage;
mod estimate;
mod rates;

pub use coverage::{CoverageRow, SkillsCoverage};
pub use estimate::{CostEstimate, CostLineItem, DEFAULT_MARGIN_PCT, MAX_MARGIN_PCT};
pub use rates::{RateCard, RoleRate};

use crate::error::QueryError;
use crate::schema::{Employee, EmployeeId, WorkforceSnapshot};

fn resolve_candidates<'s>(
    snapshot: &'s WorkforceSnapshot,
    candidates: &[EmployeeId],
) -> Result<Vec<&'s Employee>, QueryError> {
    candidates
        .iter()
        .map(|&id| {
            snapshot
                .employee(id)
                .ok_or_else(|| QueryError::not_found("employee", id))
        })
        .collect()
}
