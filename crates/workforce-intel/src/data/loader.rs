use super::rows::{BillingRow, DeliverableRow, EmployeeRow, ProjectRow, ResumeRow, RoleRow};
use super::table::SourceTable;
use super::LoadError;
use crate::normalize::MultiValue;
use crate::schema::{
    BillingCode, BillingRecord, Deliverable, Employee, EmployeeId, LoadedTables, Project, Resume,
    Role, RoleId, WorkforceSnapshot, RELATIONSHIPS,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// One reader per source table, delivered together so a snapshot is always complete.
pub struct TableSources<R> {
    pub employees: R,
    pub roles: R,
    pub projects: R,
    pub billing: R,
    pub resumes: R,
    pub deliverables: R,
}

impl TableSources<File> {
    /// Open the six sources under `dir` using their standard file names.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let open = |table: SourceTable| {
            File::open(dir.join(table.file_name())).map_err(|source| LoadError::Io { table, source })
        };

        Ok(Self {
            employees: open(SourceTable::Employees)?,
            roles: open(SourceTable::Roles)?,
            projects: open(SourceTable::Projects)?,
            billing: open(SourceTable::Billing)?,
            resumes: open(SourceTable::Resumes)?,
            deliverables: open(SourceTable::Deliverables)?,
        })
    }
}

pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<WorkforceSnapshot, LoadError> {
    load_snapshot(TableSources::from_dir(dir)?)
}

pub fn load_snapshot<R: Read>(sources: TableSources<R>) -> Result<WorkforceSnapshot, LoadError> {
    let tables = LoadedTables {
        employees: load_employees(sources.employees)?,
        roles: load_roles(sources.roles)?,
        projects: load_projects(sources.projects)?,
        billing: load_billing(sources.billing)?,
        resumes: load_resumes(sources.resumes)?,
        deliverables: load_deliverables(sources.deliverables)?,
    };

    let snapshot = WorkforceSnapshot::build(tables);
    let counts = snapshot.counts();
    info!(
        employees = counts.employees,
        roles = counts.roles,
        projects = counts.projects,
        billing = counts.billing,
        resumes = counts.resumes,
        deliverables = counts.deliverables,
        "workforce tables loaded"
    );
    for link in &RELATIONSHIPS {
        let dangling = snapshot.dangling_references(link);
        if dangling > 0 {
            warn!(
                key = link.key,
                child = link.child,
                parent = link.parent,
                dangling,
                "rows reference a missing parent"
            );
        }
    }
    Ok(snapshot)
}

fn read_rows<R: Read, T: DeserializeOwned>(
    table: SourceTable,
    reader: R,
) -> Result<Vec<T>, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv { table, source };
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').trim())
        .collect();

    for &column in table.required_columns() {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn { table, column });
        }
    }
    csv_reader.set_headers(headers);

    csv_reader
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error)
}

fn load_employees<R: Read>(reader: R) -> Result<Vec<Employee>, LoadError> {
    let table = SourceTable::Employees;
    let mut seen = HashSet::new();
    let mut employees = Vec::new();

    for (index, row) in read_rows::<_, EmployeeRow>(table, reader)?.into_iter().enumerate() {
        let id = parse_employee_id(table, index + 1, &row.employee_id)?;
        if !seen.insert(id) {
            return Err(duplicate(table, id));
        }
        employees.push(Employee {
            id,
            name: row.name,
            email: row.email,
            role_id: RoleId(row.role_id),
            job_title: row.job_title,
            location: row.location,
            skills: MultiValue::parse(&row.skills),
            linkedin_url: row.linkedin_url,
        });
    }

    Ok(employees)
}

fn load_roles<R: Read>(reader: R) -> Result<Vec<Role>, LoadError> {
    let table = SourceTable::Roles;
    let mut seen = HashSet::new();
    let mut roles = Vec::new();

    for row in read_rows::<_, RoleRow>(table, reader)? {
        if !seen.insert(row.role_id.clone()) {
            return Err(duplicate(table, &row.role_id));
        }
        roles.push(Role {
            id: RoleId(row.role_id),
            standard_role: row.standard_role,
            title_variants: row.title_variants,
        });
    }

    Ok(roles)
}

fn load_projects<R: Read>(reader: R) -> Result<Vec<Project>, LoadError> {
    let table = SourceTable::Projects;
    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for (index, row) in read_rows::<_, ProjectRow>(table, reader)?.into_iter().enumerate() {
        let billing_code = BillingCode::new(row.billing_code);
        if !seen.insert(billing_code.clone()) {
            return Err(duplicate(table, &billing_code));
        }
        let dollar_amount = parse_decimal(table, index + 1, "Dollar_Amount", &row.dollar_amount)?;
        projects.push(Project {
            billing_code,
            name: row.project_name,
            client: row.client,
            industry: row.industry,
            technologies: MultiValue::parse(&row.technologies),
            dollar_amount,
            scope: row.project_scope,
        });
    }

    Ok(projects)
}

fn load_billing<R: Read>(reader: R) -> Result<Vec<BillingRecord>, LoadError> {
    let table = SourceTable::Billing;
    let mut seen = HashSet::new();
    let mut billing = Vec::new();

    for (index, row) in read_rows::<_, BillingRow>(table, reader)?.into_iter().enumerate() {
        let line = index + 1;
        let employee_id = parse_employee_id(table, line, &row.employee_id)?;
        let year = parse_integer(table, line, "Year", &row.year)?;
        let year = i32::try_from(year).map_err(|_| invalid(table, line, "Year", &row.year))?;
        let hours_billed = parse_decimal(table, line, "Hours_Billed", &row.hours_billed)?;
        let billing_code = BillingCode::new(row.billing_code);

        if !seen.insert((employee_id, billing_code.clone(), year)) {
            return Err(duplicate(
                table,
                format!("{employee_id}/{billing_code}/{year}"),
            ));
        }

        billing.push(BillingRecord {
            employee_id,
            billing_code,
            year,
            hours_billed,
            role_in_project: row.role_in_project,
        });
    }

    Ok(billing)
}

fn load_resumes<R: Read>(reader: R) -> Result<Vec<Resume>, LoadError> {
    let table = SourceTable::Resumes;
    let mut seen = HashSet::new();
    let mut resumes = Vec::new();

    for (index, row) in read_rows::<_, ResumeRow>(table, reader)?.into_iter().enumerate() {
        let employee_id = parse_employee_id(table, index + 1, &row.employee_id)?;
        if !seen.insert(employee_id) {
            return Err(duplicate(table, employee_id));
        }
        resumes.push(Resume {
            employee_id,
            education: row.education,
            experience: row.experience,
            certifications: row.certifications,
            summary: row.summary,
        });
    }

    Ok(resumes)
}

fn load_deliverables<R: Read>(reader: R) -> Result<Vec<Deliverable>, LoadError> {
    let table = SourceTable::Deliverables;

    Ok(read_rows::<_, DeliverableRow>(table, reader)?
        .into_iter()
        .enumerate()
        .map(|(row_id, row)| Deliverable {
            row_id,
            billing_code: BillingCode::new(row.billing_code),
            name: row.deliverable,
            date_completed: parse_date(&row.date_completed),
            date_completed_raw: row.date_completed,
            topic_area: MultiValue::parse(&row.topic_area),
            technologies: MultiValue::parse(&row.technologies),
            client: row.client,
            codebase: row.codebase,
        })
        .collect())
}

fn parse_employee_id(table: SourceTable, row: usize, raw: &str) -> Result<EmployeeId, LoadError> {
    let value = parse_integer(table, row, "Employee_ID", raw)?;
    u32::try_from(value)
        .map(EmployeeId)
        .map_err(|_| invalid(table, row, "Employee_ID", raw))
}

/// Integers exported by spreadsheet tools sometimes carry a `.0` suffix; accept those.
fn parse_integer(
    table: SourceTable,
    row: usize,
    column: &'static str,
    raw: &str,
) -> Result<i64, LoadError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(invalid(table, row, column, raw)),
    }
}

/// Non-negative decimal, tolerating a currency sign and thousands separators.
fn parse_decimal(
    table: SourceTable,
    row: usize,
    column: &'static str,
    raw: &str,
) -> Result<f64, LoadError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(invalid(table, row, column, raw)),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn invalid(table: SourceTable, row: usize, column: &'static str, raw: &str) -> LoadError {
    LoadError::InvalidNumber {
        table,
        row,
        column,
        value: raw.to_string(),
    }
}

fn duplicate(table: SourceTable, key: impl ToString) -> LoadError {
    LoadError::DuplicateKey {
        table,
        key: key.to_string(),
    }
}
