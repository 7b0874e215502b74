use crate::commands::data_dir;
use crate::render::{self, money, print_rows};
use clap::Args;
use std::path::PathBuf;
use workforce_intel::data::load_dir;
use workforce_intel::error::AppError;
use workforce_intel::query::{total_hours, DeliverableFilter, DirectoryFilter, ProjectFilter};
use workforce_intel::search::SearchCriteria;
use workforce_intel::staffing::{RateCard, DEFAULT_MARGIN_PCT};
use workforce_intel::WorkforceSnapshot;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory holding the six CSV tables (defaults to WORKFORCE_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Skill used for the directory and search examples
    #[arg(long, default_value = "Python")]
    pub(crate) skill: String,
    /// Industry used for the project and search examples
    #[arg(long, default_value = "Law Enforcement")]
    pub(crate) industry: String,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        data_dir: explicit_dir,
        skill,
        industry,
    } = args;
    let dir = data_dir(explicit_dir)?;

    println!("Workforce intelligence demo");
    println!("Loading tables from {}", dir.display());
    let snapshot = load_dir(&dir)?;
    let counts = snapshot.counts();
    println!(
        "Loaded {} employees, {} roles, {} projects, {} billing rows, {} resumes, {} deliverables",
        counts.employees,
        counts.roles,
        counts.projects,
        counts.billing,
        counts.resumes,
        counts.deliverables
    );

    section("Employee directory");
    println!("Employees with {skill} skills:");
    let employees = snapshot.employee_directory(&DirectoryFilter::new().with_skill(skill.as_str()));
    print_rows(&employees, false, render::employee_line)?;

    section("Projects dashboard");
    println!("Projects in {industry}:");
    let projects =
        snapshot.projects_dashboard(&ProjectFilter::new().with_industry(industry.as_str()))?;
    print_rows(&projects, false, render::project_line)?;
    let value: f64 = projects.iter().map(|project| project.dollar_amount).sum();
    println!("Total value: {}", money(value));

    demo_billing(&snapshot)?;

    section("Deliverables tracker");
    let deliverables = snapshot.deliverables_tracker(&DeliverableFilter::new());
    print_rows(&deliverables, false, render::deliverable_line)?;

    section("Analytics by industry");
    let by_industry = snapshot.analytics_by_industry();
    print_rows(&by_industry, false, render::industry_line)?;

    section("Skills distribution");
    print_rows(&snapshot.skill_distribution(), false, render::skill_line)?;

    section("Role distribution");
    print_rows(&snapshot.role_breakdown(), false, render::role_line)?;

    section("Complex search");
    println!("{skill} engineers with {industry} experience:");
    let criteria = SearchCriteria::new()
        .with_skill(skill.as_str())
        .with_industry_experience(industry.as_str());
    let candidates = snapshot.complex_search(&criteria)?;
    print_rows(&candidates, false, render::candidate_line)?;

    section("Staffing estimate");
    let team: Vec<_> = candidates.iter().map(|candidate| candidate.employee_id).collect();
    let estimate = snapshot.estimate_cost(&team, &RateCard::default(), DEFAULT_MARGIN_PCT)?;
    for item in &estimate.line_items {
        println!(
            "{:<20} {:<18} ${}/h x {:.0}h = {}",
            item.name,
            item.standard_role,
            item.hourly_rate,
            item.estimated_hours,
            money(item.subtotal)
        );
    }
    println!(
        "Base cost {} | margin {}% | final price {} | blended rate ${:.2}/h",
        money(estimate.base_cost),
        estimate.margin_pct,
        money(estimate.final_price),
        estimate.blended_rate
    );

    Ok(())
}

fn demo_billing(snapshot: &WorkforceSnapshot) -> Result<(), AppError> {
    let Some(record) = snapshot.billing().iter().find(|record| {
        snapshot.employee(record.employee_id).is_some()
            && snapshot.project(&record.billing_code).is_some()
    }) else {
        return Ok(());
    };

    section("Billing by employee");
    let rows = snapshot.billing_by_employee(record.employee_id)?;
    print_rows(&rows, false, render::employee_billing_line)?;
    println!("Total hours: {:.1}", total_hours(&rows));

    section("Billing by project");
    let team = snapshot.billing_by_project(record.billing_code.as_str())?;
    print_rows(&team, false, render::project_billing_line)?;
    println!("Total hours: {:.1}", total_hours(&team));

    section("Resume matrix");
    match snapshot.resume_matrix(record.employee_id) {
        Ok(resume) => {
            println!("{} ({})", resume.name, resume.job_title);
            println!("  Education: {}", resume.education);
            println!("  Experience: {}", resume.experience);
            println!("  Certifications: {}", resume.certifications);
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn section(title: &str) {
    println!("\n{}", "=".repeat(72));
    println!("  {title}");
    println!("{}\n", "=".repeat(72));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const BILLING_FILE: &str = "BillingCode-EmployeeID-Year-HoursBilled-RoleinProject.csv";

    fn sample_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    fn copy_sample_data(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "workforce-intel-demo-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        for entry in fs::read_dir(sample_dir()).expect("sample data present") {
            let path = entry.expect("dir entry").path();
            if let Some(file_name) = path.file_name() {
                fs::copy(&path, dir.join(file_name)).expect("copy sample table");
            }
        }
        dir
    }

    fn demo_args(dir: PathBuf) -> DemoArgs {
        DemoArgs {
            data_dir: Some(dir),
            skill: "Python".to_string(),
            industry: "Law Enforcement".to_string(),
        }
    }

    #[test]
    fn demo_runs_against_sample_data() {
        run_demo(demo_args(sample_dir())).expect("demo completes");
    }

    #[test]
    fn demo_skips_billing_rows_with_missing_parents() {
        let dir = copy_sample_data("dangling");
        let billing_path = dir.join(BILLING_FILE);
        let contents = fs::read_to_string(&billing_path).expect("read billing table");
        let (header, rows) = contents.split_once('\n').expect("billing header");
        fs::write(
            &billing_path,
            format!("{header}\nPC-1001,55555,2025,10,Ghost\nPC-9999,10001,2025,5,Ghost\n{rows}"),
        )
        .expect("write billing table");

        let result = run_demo(demo_args(dir.clone()));
        let _ = fs::remove_dir_all(&dir);
        assert!(result.is_ok(), "demo failed: {:?}", result.err());
    }
}
