use serde::Serialize;
use workforce_intel::analytics::{ClientSummary, IndustrySummary, RoleSummary, SkillSummary};
use workforce_intel::error::AppError;
use workforce_intel::export::to_csv_string;
use workforce_intel::query::{
    DeliverableView, EmployeeBillingRow, EmployeeView, ProjectBillingRow, ProjectHistoryRow,
    ProjectView, YearBillingRow, YearProjectSummary,
};
use workforce_intel::search::CandidateView;

/// Print `rows` as CSV or as one formatted line per row with a count footer.
pub(crate) fn print_rows<T: Serialize>(
    rows: &[T],
    csv: bool,
    line: impl Fn(&T) -> String,
) -> Result<(), AppError> {
    if csv {
        print!("{}", to_csv_string(rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{}", line(row));
    }
    println!("({} rows)", rows.len());
    Ok(())
}

pub(crate) fn money(amount: f64) -> String {
    let whole = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|value| !value.is_empty()).unwrap_or("-")
}

pub(crate) fn employee_line(row: &EmployeeView) -> String {
    format!(
        "{} {:<20} {:<18} {:<16} {}",
        row.employee_id,
        row.name,
        or_dash(row.standard_role.as_deref()),
        row.location,
        row.skills
    )
}

pub(crate) fn project_line(row: &ProjectView) -> String {
    format!(
        "{} {:<28} {:<22} {:<18} {:>12}",
        row.billing_code,
        row.project_name,
        row.client,
        row.industry,
        money(row.dollar_amount)
    )
}

pub(crate) fn employee_billing_line(row: &EmployeeBillingRow) -> String {
    format!(
        "{} {} {:<28} {:>8.1}h {}",
        row.year,
        row.billing_code,
        or_dash(row.project_name.as_deref()),
        row.hours_billed,
        row.role_in_project
    )
}

pub(crate) fn project_billing_line(row: &ProjectBillingRow) -> String {
    format!(
        "{} {} {:<20} {:>8.1}h {}",
        row.year,
        row.employee_id,
        or_dash(row.name.as_deref()),
        row.hours_billed,
        row.role_in_project
    )
}

pub(crate) fn year_billing_line(row: &YearBillingRow) -> String {
    format!(
        "{} {} {:<20} {:>8.1}h {}",
        row.billing_code,
        row.employee_id,
        or_dash(row.name.as_deref()),
        row.hours_billed,
        row.role_in_project
    )
}

pub(crate) fn year_summary_line(row: &YearProjectSummary) -> String {
    format!(
        "{} {} {:<28} {:>8.1}h {} people",
        row.year,
        row.billing_code,
        or_dash(row.project_name.as_deref()),
        row.total_hours,
        row.employee_count
    )
}

pub(crate) fn history_line(row: &ProjectHistoryRow) -> String {
    format!(
        "{} {} {:<28} {:>8.1}h {:<20} {}",
        row.year,
        row.billing_code,
        or_dash(row.project_name.as_deref()),
        row.hours_billed,
        row.role_in_project,
        or_dash(row.deliverable.as_deref())
    )
}

pub(crate) fn deliverable_line(row: &DeliverableView) -> String {
    format!(
        "{:<10} {} {:<30} {}",
        or_dash(Some(row.date_completed.as_str())),
        row.billing_code,
        row.deliverable,
        row.topic_area
    )
}

pub(crate) fn candidate_line(row: &CandidateView) -> String {
    let years = row
        .years_experience
        .map(|years| format!("{years:.0}y"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {:<20} {:<18} {:>4} {:>8.1}h {}",
        row.employee_id,
        row.name,
        or_dash(row.standard_role.as_deref()),
        years,
        row.total_hours_billed,
        row.industries_worked
    )
}

pub(crate) fn industry_line(row: &IndustrySummary) -> String {
    format!(
        "{:<20} {:>10.1}h {:>14} {} projects",
        row.industry,
        row.total_hours,
        money(row.total_revenue),
        row.project_count
    )
}

pub(crate) fn client_line(row: &ClientSummary) -> String {
    format!(
        "{:<20} {:<22} {:>10.1}h {:>14} {} people",
        row.industry,
        row.client,
        row.total_hours,
        money(row.total_revenue),
        row.employee_count
    )
}

pub(crate) fn skill_line(row: &SkillSummary) -> String {
    format!("{:<20} {:>4}  {}", row.skill, row.employee_count, row.locations)
}

pub(crate) fn role_line(row: &RoleSummary) -> String {
    format!(
        "{:<20} {:>4}  {}",
        row.standard_role, row.employee_count, row.locations
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(950.0), "$950");
        assert_eq!(money(1_728_050.0), "$1,728,050");
        assert_eq!(money(-2500.0), "-$2,500");
    }
}
