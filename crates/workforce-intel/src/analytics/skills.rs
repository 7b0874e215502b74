use super::views::SkillSummary;
use crate::normalize::join_sorted;
use crate::schema::WorkforceSnapshot;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

struct SkillTally<'a> {
    display: &'a str,
    employees: usize,
    locations: BTreeSet<&'a str>,
}

impl WorkforceSnapshot {
    /// Employee count per skill token, keyed by the first-seen display casing.
    ///
    /// An employee listing the same skill twice counts once.
    pub fn skills_analysis(&self) -> BTreeMap<String, usize> {
        let counts: BTreeMap<String, usize> = self
            .skill_tallies()
            .into_values()
            .map(|tally| (tally.display.to_string(), tally.employees))
            .collect();
        debug!(skills = counts.len(), "skills analysis");
        counts
    }

    /// Skills with their employee count and locations, most common first.
    pub fn skill_distribution(&self) -> Vec<SkillSummary> {
        let mut tallies: Vec<(String, SkillTally<'_>)> =
            self.skill_tallies().into_iter().collect();
        tallies.sort_by(|(a_key, a), (b_key, b)| {
            b.employees.cmp(&a.employees).then_with(|| a_key.cmp(b_key))
        });

        let rows: Vec<SkillSummary> = tallies
            .into_iter()
            .map(|(_, tally)| SkillSummary {
                skill: tally.display.to_string(),
                employee_count: tally.employees,
                locations: join_sorted(tally.locations),
            })
            .collect();
        debug!(skills = rows.len(), "skill distribution");
        rows
    }

    fn skill_tallies(&self) -> HashMap<String, SkillTally<'_>> {
        let mut tallies: HashMap<String, SkillTally<'_>> = HashMap::new();
        for employee in self.employees() {
            for token in employee.skills.tokens() {
                let tally = tallies
                    .entry(token.key.clone())
                    .or_insert_with(|| SkillTally {
                        display: &token.display,
                        employees: 0,
                        locations: BTreeSet::new(),
                    });
                tally.employees += 1;
                tally.locations.insert(employee.location.as_str());
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use crate::data::load_snapshot;
    use crate::fixtures;
    use std::io::Cursor;

    #[test]
    fn counts_each_employee_once_per_skill() {
        let snapshot = fixtures::snapshot();
        let counts = snapshot.skills_analysis();
        assert_eq!(counts.get("Python"), Some(&3));
        assert_eq!(counts.get("AWS"), Some(&2));
        assert_eq!(counts.get("SQL"), Some(&1));
        assert_eq!(counts.get("NoSQL"), Some(&1));
        assert_eq!(counts.len(), 10);
    }

    #[test]
    fn distribution_is_most_common_first_with_locations() {
        let snapshot = fixtures::snapshot();
        let rows = snapshot.skill_distribution();
        assert_eq!(rows[0].skill, "Python");
        assert_eq!(rows[0].locations, "Austin, TX; Dallas, TX");
        assert_eq!(rows[1].skill, "AWS");
        assert_eq!(rows[2].skill, "Agile", "ties break on the skill key");
        assert!(rows[2..].iter().all(|row| row.employee_count == 1));
    }

    #[test]
    fn repeated_skill_on_one_employee_counts_once() {
        let mut sources = fixtures::sources();
        sources.employees = Cursor::new(
            "Employee_ID,Name,Email,Role_ID,Job_Title,Location,Skills,LinkedIn_URL\n\
             10001,Alice Ward,alice@example.com,R1,Technical Lead,Austin,\"Python; python, PYTHON\",\n\
             10002,Bob Chen,bob@example.com,R2,Senior Engineer,Dallas,Python; AWS; aws,\n",
        );
        let snapshot = load_snapshot(sources).expect("tables load");

        let counts = snapshot.skills_analysis();
        assert_eq!(counts.get("Python"), Some(&2));
        assert_eq!(counts.get("AWS"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
