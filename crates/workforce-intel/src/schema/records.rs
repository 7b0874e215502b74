use crate::normalize::MultiValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of the role table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project identifier, shared by billing rows and deliverables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillingCode(pub String);

impl BillingCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BillingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub role_id: RoleId,
    pub job_title: String,
    pub location: String,
    pub skills: MultiValue,
    pub linkedin_url: String,
}

#[derive(Debug, Clone)]
pub struct Role {
    pub id: RoleId,
    pub standard_role: String,
    pub title_variants: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub billing_code: BillingCode,
    pub name: String,
    pub client: String,
    pub industry: String,
    pub technologies: MultiValue,
    pub dollar_amount: f64,
    pub scope: String,
}

/// One (employee, project, year) billing entry. Hours are never negative.
#[derive(Debug, Clone)]
pub struct BillingRecord {
    pub employee_id: EmployeeId,
    pub billing_code: BillingCode,
    pub year: i32,
    pub hours_billed: f64,
    pub role_in_project: String,
}

#[derive(Debug, Clone)]
pub struct Resume {
    pub employee_id: EmployeeId,
    pub education: String,
    pub experience: String,
    pub certifications: String,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct Deliverable {
    /// Position in the source file; deliverables have no natural key.
    pub row_id: usize,
    pub billing_code: BillingCode,
    pub name: String,
    pub date_completed: Option<NaiveDate>,
    pub date_completed_raw: String,
    pub topic_area: MultiValue,
    pub technologies: MultiValue,
    pub client: String,
    pub codebase: String,
}

/// A declared foreign-key link between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub key: &'static str,
    pub child: &'static str,
    pub parent: &'static str,
}

pub const RELATIONSHIPS: [Relationship; 5] = [
    Relationship {
        key: "Role_ID",
        child: "employees",
        parent: "roles",
    },
    Relationship {
        key: "Employee_ID",
        child: "billing",
        parent: "employees",
    },
    Relationship {
        key: "Employee_ID",
        child: "resume_data",
        parent: "employees",
    },
    Relationship {
        key: "Billing_Code",
        child: "billing",
        parent: "projects",
    },
    Relationship {
        key: "Billing_Code",
        child: "deliverables",
        parent: "projects",
    },
];
