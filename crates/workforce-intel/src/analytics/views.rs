use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustrySummary {
    pub industry: String,
    pub total_hours: f64,
    pub total_revenue: f64,
    pub project_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub industry: String,
    pub client: String,
    pub project_count: usize,
    pub total_hours: f64,
    pub employee_count: usize,
    pub total_revenue: f64,
}

/// Employees holding one skill, with the distinct locations they work from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSummary {
    pub skill: String,
    pub employee_count: usize,
    pub locations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSummary {
    pub standard_role: String,
    pub employee_count: usize,
    pub locations: String,
}

/// Headline totals for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_employees: usize,
    pub total_projects: usize,
    pub total_hours_billed: f64,
    pub total_revenue: f64,
    pub billing_records: usize,
    pub deliverables: usize,
}
