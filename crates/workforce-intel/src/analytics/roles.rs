use super::views::RoleSummary;
use crate::normalize::join_sorted;
use crate::schema::WorkforceSnapshot;
use std::collections::BTreeMap;
use tracing::debug;

/// Group label for employees whose `Role_ID` has no role row.
pub const UNASSIGNED_ROLE: &str = "Unassigned";

impl WorkforceSnapshot {
    /// Employee count per Standard_Role.
    pub fn role_distribution(&self) -> BTreeMap<String, usize> {
        let counts: BTreeMap<String, usize> = self
            .role_groups()
            .into_iter()
            .map(|(role, locations)| (role.to_string(), locations.len()))
            .collect();
        debug!(roles = counts.len(), "role distribution");
        counts
    }

    /// Roles with headcount and locations, largest first, ties by role name.
    pub fn role_breakdown(&self) -> Vec<RoleSummary> {
        let mut rows: Vec<RoleSummary> = self
            .role_groups()
            .into_iter()
            .map(|(role, locations)| RoleSummary {
                standard_role: role.to_string(),
                employee_count: locations.len(),
                locations: join_sorted(locations.into_iter().collect()),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.employee_count
                .cmp(&a.employee_count)
                .then_with(|| a.standard_role.cmp(&b.standard_role))
        });
        debug!(roles = rows.len(), "role breakdown");
        rows
    }

    /// One location entry per employee, grouped by resolved role.
    fn role_groups(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for employee in self.employees() {
            let role = self.standard_role(employee).unwrap_or(UNASSIGNED_ROLE);
            groups
                .entry(role)
                .or_default()
                .push(employee.location.as_str());
        }
        groups
    }
}
