use crate::cli::{
    AnalyticsArgs, AnalyticsView, BillingCommand, DeliverableArgs, EmployeeArgs, OutputArgs,
    ProjectArgs, ResumeArgs, SearchArgs,
};
use crate::infra::split_each;
use crate::render::{self, print_rows};
use std::path::PathBuf;
use workforce_intel::config::AppConfig;
use workforce_intel::data::load_dir;
use workforce_intel::error::AppError;
use workforce_intel::export::to_csv_string;
use workforce_intel::query::{
    parse_amount, total_hours, DeliverableFilter, DirectoryFilter, ProjectFilter, SkillMatch,
};
use workforce_intel::schema::EmployeeId;
use workforce_intel::search::SearchCriteria;
use workforce_intel::WorkforceSnapshot;

pub(crate) fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(AppConfig::load()?.data.dir),
    }
}

fn snapshot(output: &OutputArgs) -> Result<WorkforceSnapshot, AppError> {
    let dir = data_dir(output.data_dir.clone())?;
    Ok(load_dir(dir)?)
}

fn skill_match(any_skill: bool) -> SkillMatch {
    if any_skill {
        SkillMatch::Any
    } else {
        SkillMatch::All
    }
}

pub(crate) fn employees(args: EmployeeArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let filter = DirectoryFilter {
        skills: split_each(&args.skills),
        skill_match: skill_match(args.any_skill),
        role: args.role,
        location: args.location,
        job_title: args.job_title,
    };
    let rows = snapshot.employee_directory(&filter);
    print_rows(&rows, args.output.csv, render::employee_line)
}

pub(crate) fn projects(args: ProjectArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let filter = ProjectFilter {
        client: args.client,
        industry: args.industry,
        technology: args.technology,
        min_dollar_amount: optional_amount("min_amount", args.min_amount.as_deref())?,
        max_dollar_amount: optional_amount("max_amount", args.max_amount.as_deref())?,
    };
    let rows = snapshot.projects_dashboard(&filter)?;
    print_rows(&rows, args.output.csv, render::project_line)
}

fn optional_amount(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    Ok(raw.map(|raw| parse_amount(field, raw)).transpose()?.flatten())
}

pub(crate) fn billing(command: BillingCommand) -> Result<(), AppError> {
    match command {
        BillingCommand::Employee {
            employee_id,
            output,
        } => {
            let rows = snapshot(&output)?.billing_by_employee(EmployeeId(employee_id))?;
            print_rows(&rows, output.csv, render::employee_billing_line)?;
            if !output.csv {
                println!("Total hours: {:.1}", total_hours(&rows));
            }
            Ok(())
        }
        BillingCommand::Project {
            billing_code,
            output,
        } => {
            let rows = snapshot(&output)?.billing_by_project(&billing_code)?;
            print_rows(&rows, output.csv, render::project_billing_line)?;
            if !output.csv {
                println!("Total hours: {:.1}", total_hours(&rows));
            }
            Ok(())
        }
        BillingCommand::Year { year, output } => {
            let rows = snapshot(&output)?.billing_by_year(year);
            print_rows(&rows, output.csv, render::year_billing_line)
        }
        BillingCommand::Summary { year, output } => {
            let rows = snapshot(&output)?.billing_summary_by_year(year);
            print_rows(&rows, output.csv, render::year_summary_line)
        }
    }
}

pub(crate) fn resume(args: ResumeArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let employee_id = EmployeeId(args.employee_id);
    let resume = snapshot.resume_matrix(employee_id)?;
    let history = snapshot.employee_project_history(employee_id)?;

    if args.output.csv {
        print!("{}", to_csv_string(std::slice::from_ref(&resume))?);
        return Ok(());
    }

    println!("{} ({})", resume.name, resume.employee_id);
    println!("  Title: {}", resume.job_title);
    println!(
        "  Role: {}",
        resume.standard_role.as_deref().unwrap_or("Unassigned")
    );
    println!("  Location: {}", resume.location);
    println!("  Skills: {}", resume.skills);
    println!("  Education: {}", resume.education);
    println!("  Experience: {}", resume.experience);
    println!("  Certifications: {}", resume.certifications);
    if !resume.summary.is_empty() {
        println!("  Summary: {}", resume.summary);
    }
    println!("\nProject history");
    print_rows(&history, false, render::history_line)
}

pub(crate) fn deliverables(args: DeliverableArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let filter = DeliverableFilter {
        topic_area: args.topic_area,
        client: args.client,
        technology: args.technology,
        billing_code: args.billing_code,
    };
    let rows = snapshot.deliverables_tracker(&filter);
    print_rows(&rows, args.output.csv, render::deliverable_line)
}

pub(crate) fn search(args: SearchArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let criteria = SearchCriteria {
        skills: split_each(&args.skills),
        skill_match: skill_match(args.any_skill),
        role: args.role,
        location: args.location,
        client_experience: args.client,
        industry_experience: args.industry,
        min_years_experience: args.min_years,
    };
    let rows = snapshot.complex_search(&criteria)?;
    print_rows(&rows, args.output.csv, render::candidate_line)
}

pub(crate) fn analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let snapshot = snapshot(&args.output)?;
    let csv = args.output.csv;
    match args.view {
        AnalyticsView::Industry => {
            print_rows(&snapshot.analytics_by_industry(), csv, render::industry_line)
        }
        AnalyticsView::Clients => {
            print_rows(&snapshot.analytics_by_client(), csv, render::client_line)
        }
        AnalyticsView::Skills => {
            print_rows(&snapshot.skill_distribution(), csv, render::skill_line)
        }
        AnalyticsView::Roles => print_rows(&snapshot.role_breakdown(), csv, render::role_line),
        AnalyticsView::Dashboard => {
            let metrics = snapshot.dashboard_metrics();
            if csv {
                print!("{}", to_csv_string(std::slice::from_ref(&metrics))?);
            } else {
                println!("Employees: {}", metrics.total_employees);
                println!("Projects: {}", metrics.total_projects);
                println!("Hours billed: {:.1}", metrics.total_hours_billed);
                println!("Revenue: {}", render::money(metrics.total_revenue));
                println!("Billing records: {}", metrics.billing_records);
                println!("Deliverables: {}", metrics.deliverables);
            }
            Ok(())
        }
    }
}
