//! Flat result rows. Every field is a scalar so any sequence of rows exports cleanly to CSV.

use crate::schema::{BillingCode, Deliverable, Employee, EmployeeId, Project, WorkforceSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeView {
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: String,
    pub role_id: String,
    pub standard_role: Option<String>,
    pub job_title: String,
    pub location: String,
    pub skills: String,
    pub linkedin_url: String,
}

impl EmployeeView {
    pub(crate) fn new(snapshot: &WorkforceSnapshot, employee: &Employee) -> Self {
        Self {
            employee_id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            role_id: employee.role_id.0.clone(),
            standard_role: snapshot.standard_role(employee).map(str::to_string),
            job_title: employee.job_title.clone(),
            location: employee.location.clone(),
            skills: employee.skills.raw.clone(),
            linkedin_url: employee.linkedin_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub billing_code: BillingCode,
    pub project_name: String,
    pub client: String,
    pub industry: String,
    pub technologies: String,
    pub dollar_amount: f64,
    pub project_scope: String,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            billing_code: project.billing_code.clone(),
            project_name: project.name.clone(),
            client: project.client.clone(),
            industry: project.industry.clone(),
            technologies: project.technologies.raw.clone(),
            dollar_amount: project.dollar_amount,
            project_scope: project.scope.clone(),
        }
    }
}

/// A billing row for one employee, joined with its project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeBillingRow {
    pub employee_id: EmployeeId,
    pub name: String,
    pub billing_code: BillingCode,
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub year: i32,
    pub hours_billed: f64,
    pub role_in_project: String,
}

/// A billing row for one project, joined with the billing employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectBillingRow {
    pub billing_code: BillingCode,
    pub project_name: String,
    pub client: String,
    pub employee_id: EmployeeId,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub year: i32,
    pub hours_billed: f64,
    pub role_in_project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBillingRow {
    pub year: i32,
    pub employee_id: EmployeeId,
    pub name: Option<String>,
    pub billing_code: BillingCode,
    pub project_name: Option<String>,
    pub hours_billed: f64,
    pub role_in_project: String,
}

/// Hours rolled up per (year, project).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearProjectSummary {
    pub year: i32,
    pub billing_code: BillingCode,
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub total_hours: f64,
    pub employee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    pub employee_id: EmployeeId,
    pub name: String,
    pub job_title: String,
    pub location: String,
    pub standard_role: Option<String>,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub certifications: String,
    pub summary: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverableView {
    pub billing_code: BillingCode,
    pub project_name: Option<String>,
    pub deliverable: String,
    pub date_completed: String,
    pub topic_area: String,
    pub technologies: String,
    pub client: String,
    pub codebase: String,
    pub industry: Option<String>,
    pub dollar_amount: Option<f64>,
}

impl DeliverableView {
    pub(crate) fn new(deliverable: &Deliverable, project: Option<&Project>) -> Self {
        Self {
            billing_code: deliverable.billing_code.clone(),
            project_name: project.map(|project| project.name.clone()),
            deliverable: deliverable.name.clone(),
            date_completed: deliverable.date_completed_raw.clone(),
            topic_area: deliverable.topic_area.raw.clone(),
            technologies: deliverable.technologies.raw.clone(),
            client: deliverable.client.clone(),
            codebase: deliverable.codebase.clone(),
            industry: project.map(|project| project.industry.clone()),
            dollar_amount: project.map(|project| project.dollar_amount),
        }
    }
}

/// One line of an employee's project history: a billing row plus one of its deliverables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHistoryRow {
    pub billing_code: BillingCode,
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<String>,
    pub year: i32,
    pub hours_billed: f64,
    pub role_in_project: String,
    pub deliverable: Option<String>,
    pub date_completed: Option<String>,
}
