use super::filters::{present, ProjectFilter};
use super::views::ProjectView;
use crate::error::QueryError;
use crate::normalize::eq_ignore_case;
use crate::schema::{Project, WorkforceSnapshot};
use tracing::debug;

impl WorkforceSnapshot {
    /// Projects passing every present filter, in ascending `Billing_Code` order.
    ///
    /// The filter is validated first; a malformed bound fails before any row is examined.
    pub fn projects_dashboard(&self, filter: &ProjectFilter) -> Result<Vec<ProjectView>, QueryError> {
        filter.validate()?;

        let client = present(&filter.client);
        let industry = present(&filter.industry);
        let technology = present(&filter.technology);

        let accepts = |project: &Project| {
            client.map_or(true, |client| eq_ignore_case(&project.client, client))
                && industry.map_or(true, |industry| eq_ignore_case(&project.industry, industry))
                && technology.map_or(true, |technology| project.technologies.contains(technology))
                && filter
                    .min_dollar_amount
                    .map_or(true, |min| project.dollar_amount >= min)
                && filter
                    .max_dollar_amount
                    .map_or(true, |max| project.dollar_amount <= max)
        };

        let results: Vec<ProjectView> = self
            .projects()
            .iter()
            .filter(|&project| accepts(project))
            .map(ProjectView::from)
            .collect();

        debug!(?filter, matched = results.len(), "projects dashboard query");
        Ok(results)
    }
}
