use super::records::{
    BillingCode, BillingRecord, Deliverable, Employee, EmployeeId, Project, Relationship, Resume,
    Role, RoleId,
};
use serde::Serialize;
use std::collections::HashMap;

/// The six loaded tables. Built by the loader, consumed by [`WorkforceSnapshot::build`].
#[derive(Debug, Default)]
pub struct LoadedTables {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
    pub projects: Vec<Project>,
    pub billing: Vec<BillingRecord>,
    pub resumes: Vec<Resume>,
    pub deliverables: Vec<Deliverable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub employees: usize,
    pub roles: usize,
    pub projects: usize,
    pub billing: usize,
    pub resumes: usize,
    pub deliverables: usize,
}

/// Immutable set of tables plus the key indexes used for joins.
///
/// Indexes hold row positions and are built once; every join is a map lookup followed by a
/// walk over the matching rows.
#[derive(Debug)]
pub struct WorkforceSnapshot {
    employees: Vec<Employee>,
    roles: Vec<Role>,
    projects: Vec<Project>,
    billing: Vec<BillingRecord>,
    resumes: Vec<Resume>,
    deliverables: Vec<Deliverable>,
    employee_index: HashMap<EmployeeId, usize>,
    role_index: HashMap<RoleId, usize>,
    project_index: HashMap<BillingCode, usize>,
    resume_index: HashMap<EmployeeId, usize>,
    billing_by_employee: HashMap<EmployeeId, Vec<usize>>,
    billing_by_project: HashMap<BillingCode, Vec<usize>>,
    deliverables_by_project: HashMap<BillingCode, Vec<usize>>,
}

impl WorkforceSnapshot {
    pub fn build(tables: LoadedTables) -> Self {
        let LoadedTables {
            mut employees,
            mut roles,
            mut projects,
            billing,
            resumes,
            deliverables,
        } = tables;

        employees.sort_by_key(|employee| employee.id);
        roles.sort_by(|a, b| a.id.cmp(&b.id));
        projects.sort_by(|a, b| a.billing_code.cmp(&b.billing_code));

        let employee_index = position_index(&employees, |employee| employee.id);
        let role_index = position_index(&roles, |role| role.id.clone());
        let project_index = position_index(&projects, |project| project.billing_code.clone());
        let resume_index = position_index(&resumes, |resume| resume.employee_id);

        let mut billing_by_employee: HashMap<EmployeeId, Vec<usize>> = HashMap::new();
        let mut billing_by_project: HashMap<BillingCode, Vec<usize>> = HashMap::new();
        for (position, record) in billing.iter().enumerate() {
            billing_by_employee
                .entry(record.employee_id)
                .or_default()
                .push(position);
            billing_by_project
                .entry(record.billing_code.clone())
                .or_default()
                .push(position);
        }

        let mut deliverables_by_project: HashMap<BillingCode, Vec<usize>> = HashMap::new();
        for (position, deliverable) in deliverables.iter().enumerate() {
            deliverables_by_project
                .entry(deliverable.billing_code.clone())
                .or_default()
                .push(position);
        }

        Self {
            employees,
            roles,
            projects,
            billing,
            resumes,
            deliverables,
            employee_index,
            role_index,
            project_index,
            resume_index,
            billing_by_employee,
            billing_by_project,
            deliverables_by_project,
        }
    }

    /// Employees in ascending `Employee_ID` order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employee_index.get(&id).map(|&at| &self.employees[at])
    }

    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.role_index.get(id).map(|&at| &self.roles[at])
    }

    /// Standard role resolved through `Role_ID`; `None` when the role row is missing.
    pub fn standard_role(&self, employee: &Employee) -> Option<&str> {
        self.role(&employee.role_id)
            .map(|role| role.standard_role.as_str())
    }

    /// Projects in ascending `Billing_Code` order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, code: &BillingCode) -> Option<&Project> {
        self.project_index.get(code).map(|&at| &self.projects[at])
    }

    pub fn resume(&self, id: EmployeeId) -> Option<&Resume> {
        self.resume_index.get(&id).map(|&at| &self.resumes[at])
    }

    pub fn billing(&self) -> &[BillingRecord] {
        &self.billing
    }

    pub fn billing_for_employee(&self, id: EmployeeId) -> impl Iterator<Item = &BillingRecord> {
        self.billing_by_employee
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |&at| &self.billing[at])
    }

    pub fn billing_for_project(&self, code: &BillingCode) -> impl Iterator<Item = &BillingRecord> {
        self.billing_by_project
            .get(code)
            .into_iter()
            .flatten()
            .map(move |&at| &self.billing[at])
    }

    pub fn deliverables(&self) -> &[Deliverable] {
        &self.deliverables
    }

    pub fn deliverables_for_project(
        &self,
        code: &BillingCode,
    ) -> impl Iterator<Item = &Deliverable> {
        self.deliverables_by_project
            .get(code)
            .into_iter()
            .flatten()
            .map(move |&at| &self.deliverables[at])
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            employees: self.employees.len(),
            roles: self.roles.len(),
            projects: self.projects.len(),
            billing: self.billing.len(),
            resumes: self.resumes.len(),
            deliverables: self.deliverables.len(),
        }
    }

    /// Child rows whose key has no parent row for `link`. Unknown links count zero.
    pub fn dangling_references(&self, link: &Relationship) -> usize {
        match (link.child, link.parent) {
            ("employees", "roles") => self
                .employees
                .iter()
                .filter(|employee| self.role(&employee.role_id).is_none())
                .count(),
            ("billing", "employees") => self
                .billing
                .iter()
                .filter(|record| self.employee(record.employee_id).is_none())
                .count(),
            ("resume_data", "employees") => self
                .resumes
                .iter()
                .filter(|resume| self.employee(resume.employee_id).is_none())
                .count(),
            ("billing", "projects") => self
                .billing
                .iter()
                .filter(|record| self.project(&record.billing_code).is_none())
                .count(),
            ("deliverables", "projects") => self
                .deliverables
                .iter()
                .filter(|deliverable| self.project(&deliverable.billing_code).is_none())
                .count(),
            _ => 0,
        }
    }
}

fn position_index<T, K, F>(rows: &[T], key: F) -> HashMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    rows.iter()
        .enumerate()
        .map(|(position, row)| (key(row), position))
        .collect()
}
