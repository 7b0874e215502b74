//! Entities, keys, and the indexed snapshot every query runs against.

mod records;
mod snapshot;

pub use records::{
    BillingCode, BillingRecord, Deliverable, Employee, EmployeeId, Project, Relationship,
    Resume, Role, RoleId, RELATIONSHIPS,
};
pub use snapshot::{LoadedTables, TableCounts, WorkforceSnapshot};
