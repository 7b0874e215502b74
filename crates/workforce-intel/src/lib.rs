//! Workforce analytics query layer.
//!
//! Six CSV tables (employees, roles, projects, billing, resumes, deliverables) are loaded
//! into an immutable [`WorkforceSnapshot`]; the query, search, and analytics modules answer
//! filtered and aggregated questions against it.

pub mod analytics;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod normalize;
pub mod query;
pub mod schema;
pub mod search;
pub mod staffing;
pub mod store;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod fixtures;

pub use data::{LoadError, TableSources};
pub use error::{AppError, QueryError};
pub use schema::WorkforceSnapshot;
pub use store::SnapshotStore;
