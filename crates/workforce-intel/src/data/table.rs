use serde::Serialize;
use std::fmt;

/// The six source tables and their on-disk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    Employees,
    Roles,
    Projects,
    Billing,
    Resumes,
    Deliverables,
}

impl SourceTable {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Employees,
            Self::Roles,
            Self::Projects,
            Self::Billing,
            Self::Resumes,
            Self::Deliverables,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Roles => "roles",
            Self::Projects => "projects",
            Self::Billing => "billing",
            Self::Resumes => "resume_data",
            Self::Deliverables => "deliverables",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Employees => "EmployeeID-Name-Email-RoleID-JobTitle-Location-Skills-LinkedInURL.csv",
            Self::Roles => "RoleID-StandardRole-RoleTitleVariants.csv",
            Self::Projects => {
                "BillingCode-ProjectName-Client-Industry-Technologies-DollarAmount-ProjectScope.csv"
            }
            Self::Billing => "BillingCode-EmployeeID-Year-HoursBilled-RoleinProject.csv",
            Self::Resumes => "EmployeeID-Education-Experience-Certifications-Summary.csv",
            Self::Deliverables => {
                "BillingCode-Deliverable-DateCompleted-TopicArea-Technologies-Client-Codebase.csv"
            }
        }
    }

    /// Columns that must appear in the header row. Other declared columns default to empty.
    pub const fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::Employees => &[
                "Employee_ID",
                "Name",
                "Email",
                "Role_ID",
                "Job_Title",
                "Location",
                "Skills",
            ],
            Self::Roles => &["Role_ID", "Standard_Role"],
            Self::Projects => &[
                "Billing_Code",
                "Project_Name",
                "Client",
                "Industry",
                "Technologies",
                "Dollar_Amount",
            ],
            Self::Billing => &[
                "Billing_Code",
                "Employee_ID",
                "Year",
                "Hours_Billed",
                "Role_in_Project",
            ],
            Self::Resumes => &["Employee_ID", "Education", "Experience", "Certifications"],
            Self::Deliverables => &[
                "Billing_Code",
                "Deliverable",
                "Date_Completed",
                "Topic_Area",
                "Technologies",
                "Client",
            ],
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
