//! Filtered retrieval and joins over a [`WorkforceSnapshot`](crate::schema::WorkforceSnapshot).
//!
//! Each operation is an inherent method on the snapshot. Filters are ANDed, absent filters
//! are no-ops, and results are flat view rows ready for rendering or CSV export. Lookups by
//! primary key fail with [`QueryError::NotFound`](crate::error::QueryError::NotFound);
//! zero matching rows is an empty result, never an error.

mod billing;
mod deliverables;
mod directory;
mod filters;
mod history;
mod projects;
mod resume;
pub mod views;

pub use billing::{total_hours, BilledHours};
pub use filters::{
    parse_amount, DeliverableFilter, DirectoryFilter, ProjectFilter, SkillMatch,
};
pub use views::{
    DeliverableView, EmployeeBillingRow, EmployeeView, ProjectBillingRow, ProjectHistoryRow,
    ProjectView, ResumeView, YearBillingRow, YearProjectSummary,
};

pub(crate) use directory::AttributeFilter;
pub(crate) use filters::present;
