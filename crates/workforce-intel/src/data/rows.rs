use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeRow {
    #[serde(rename = "Employee_ID")]
    pub(crate) employee_id: String,
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Email")]
    pub(crate) email: String,
    #[serde(rename = "Role_ID")]
    pub(crate) role_id: String,
    #[serde(rename = "Job_Title")]
    pub(crate) job_title: String,
    #[serde(rename = "Location")]
    pub(crate) location: String,
    #[serde(rename = "Skills")]
    pub(crate) skills: String,
    #[serde(rename = "LinkedIn_URL", default)]
    pub(crate) linkedin_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoleRow {
    #[serde(rename = "Role_ID")]
    pub(crate) role_id: String,
    #[serde(rename = "Standard_Role")]
    pub(crate) standard_role: String,
    #[serde(rename = "Role_Title_Variants", default)]
    pub(crate) title_variants: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRow {
    #[serde(rename = "Billing_Code")]
    pub(crate) billing_code: String,
    #[serde(rename = "Project_Name")]
    pub(crate) project_name: String,
    #[serde(rename = "Client")]
    pub(crate) client: String,
    #[serde(rename = "Industry")]
    pub(crate) industry: String,
    #[serde(rename = "Technologies")]
    pub(crate) technologies: String,
    #[serde(rename = "Dollar_Amount")]
    pub(crate) dollar_amount: String,
    #[serde(rename = "Project_Scope", default)]
    pub(crate) project_scope: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BillingRow {
    #[serde(rename = "Billing_Code")]
    pub(crate) billing_code: String,
    #[serde(rename = "Employee_ID")]
    pub(crate) employee_id: String,
    #[serde(rename = "Year")]
    pub(crate) year: String,
    #[serde(rename = "Hours_Billed")]
    pub(crate) hours_billed: String,
    #[serde(rename = "Role_in_Project")]
    pub(crate) role_in_project: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeRow {
    #[serde(rename = "Employee_ID")]
    pub(crate) employee_id: String,
    #[serde(rename = "Education")]
    pub(crate) education: String,
    #[serde(rename = "Experience")]
    pub(crate) experience: String,
    #[serde(rename = "Certifications")]
    pub(crate) certifications: String,
    #[serde(rename = "Summary", default)]
    pub(crate) summary: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeliverableRow {
    #[serde(rename = "Billing_Code")]
    pub(crate) billing_code: String,
    #[serde(rename = "Deliverable")]
    pub(crate) deliverable: String,
    #[serde(rename = "Date_Completed")]
    pub(crate) date_completed: String,
    #[serde(rename = "Topic_Area")]
    pub(crate) topic_area: String,
    #[serde(rename = "Technologies")]
    pub(crate) technologies: String,
    #[serde(rename = "Client")]
    pub(crate) client: String,
    #[serde(rename = "Codebase", default)]
    pub(crate) codebase: String,
}
