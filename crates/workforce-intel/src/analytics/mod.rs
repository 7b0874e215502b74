//! Read-only aggregations over billing, projects, employees, and roles.
//!
//! Revenue is attributed once per project no matter how many billing rows reference it.
//! Grouped results are ordered by their measure descending, ties broken by the grouping
//! key ascending.

mod dashboard;
mod industry;
mod roles;
mod skills;
pub mod views;

pub use roles::UNASSIGNED_ROLE;
pub use views::{ClientSummary, DashboardMetrics, IndustrySummary, RoleSummary, SkillSummary};
