use crate::commands;
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use workforce_intel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Workforce Intelligence",
    about = "Query employee, billing, and project data from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List employees matching skill, role, location, and title filters
    Employees(EmployeeArgs),
    /// List projects matching client, industry, technology, and amount filters
    Projects(ProjectArgs),
    /// Billing rollups by employee, project, or year
    Billing {
        #[command(subcommand)]
        command: BillingCommand,
    },
    /// Show an employee's resume and project history
    Resume(ResumeArgs),
    /// List deliverables, newest first
    Deliverables(DeliverableArgs),
    /// Multi-criteria candidate search
    Search(SearchArgs),
    /// Aggregated views for reporting
    Analytics(AnalyticsArgs),
    /// Walk through the main queries against a data directory
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured CSV data directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

/// Options shared by every query command.
#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Directory holding the six CSV tables (defaults to WORKFORCE_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print the result as CSV instead of a text listing
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EmployeeArgs {
    /// Required skill; repeat for several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Match employees holding any listed skill instead of all of them
    #[arg(long)]
    pub(crate) any_skill: bool,
    #[arg(long)]
    pub(crate) role: Option<String>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Substring of the job title
    #[arg(long)]
    pub(crate) job_title: Option<String>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProjectArgs {
    #[arg(long)]
    pub(crate) client: Option<String>,
    #[arg(long)]
    pub(crate) industry: Option<String>,
    #[arg(long)]
    pub(crate) technology: Option<String>,
    /// Inclusive minimum contract value, e.g. 100000 or $100,000
    #[arg(long)]
    pub(crate) min_amount: Option<String>,
    /// Inclusive maximum contract value
    #[arg(long)]
    pub(crate) max_amount: Option<String>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Subcommand, Debug)]
pub(crate) enum BillingCommand {
    /// Billing rows for one employee
    Employee {
        employee_id: u32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Billing rows for one project
    Project {
        billing_code: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Every billing row in one year
    Year {
        year: i32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Hours per project per year
    Summary {
        #[arg(long)]
        year: Option<i32>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
pub(crate) struct ResumeArgs {
    pub(crate) employee_id: u32,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DeliverableArgs {
    #[arg(long)]
    pub(crate) topic_area: Option<String>,
    #[arg(long)]
    pub(crate) client: Option<String>,
    #[arg(long)]
    pub(crate) technology: Option<String>,
    #[arg(long)]
    pub(crate) billing_code: Option<String>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Required skill; repeat for several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    #[arg(long)]
    pub(crate) any_skill: bool,
    #[arg(long)]
    pub(crate) role: Option<String>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Client the employee has billed
    #[arg(long)]
    pub(crate) client: Option<String>,
    /// Industry the employee has billed
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Minimum years of experience parsed from the resume
    #[arg(long)]
    pub(crate) min_years: Option<f64>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AnalyticsView {
    Industry,
    Clients,
    Skills,
    Roles,
    Dashboard,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyticsArgs {
    #[arg(value_enum)]
    pub(crate) view: AnalyticsView,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Employees(args) => commands::employees(args),
        Command::Projects(args) => commands::projects(args),
        Command::Billing { command } => commands::billing(command),
        Command::Resume(args) => commands::resume(args),
        Command::Deliverables(args) => commands::deliverables(args),
        Command::Search(args) => commands::search(args),
        Command::Analytics(args) => commands::analytics(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_commands_parse_repeated_skills() {
        let cli = Cli::try_parse_from([
            "workforce-intel-api",
            "search",
            "--skill",
            "Python",
            "--skill",
            "AWS",
            "--industry",
            "Law Enforcement",
            "--min-years",
            "5",
            "--csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.skills, vec!["Python".to_string(), "AWS".to_string()]);
                assert_eq!(args.industry.as_deref(), Some("Law Enforcement"));
                assert_eq!(args.min_years, Some(5.0));
                assert!(args.output.csv);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn billing_takes_a_target_subcommand() {
        let cli = Cli::try_parse_from(["workforce-intel-api", "billing", "year", "2025"])
            .expect("arguments parse");
        assert!(matches!(
            cli.command,
            Some(Command::Billing {
                command: BillingCommand::Year { year: 2025, .. }
            })
        ));
    }

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["workforce-intel-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
