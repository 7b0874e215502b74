use super::filters::{present, DeliverableFilter};
use super::views::DeliverableView;
use crate::normalize::eq_ignore_case;
use crate::schema::{Deliverable, WorkforceSnapshot};
use std::cmp::Ordering;
use tracing::debug;

impl WorkforceSnapshot {
    /// Deliverables passing every present filter, joined with their project.
    ///
    /// Newest first; rows whose completion date could not be parsed sort last.
    pub fn deliverables_tracker(&self, filter: &DeliverableFilter) -> Vec<DeliverableView> {
        let topic_area = present(&filter.topic_area);
        let client = present(&filter.client);
        let technology = present(&filter.technology);
        let billing_code = present(&filter.billing_code);

        let mut matched: Vec<&Deliverable> = self
            .deliverables()
            .iter()
            .filter(|deliverable| {
                topic_area.map_or(true, |topic| deliverable.topic_area.contains(topic))
                    && client.map_or(true, |client| eq_ignore_case(&deliverable.client, client))
                    && technology
                        .map_or(true, |technology| deliverable.technologies.contains(technology))
                    && billing_code.map_or(true, |code| {
                        eq_ignore_case(deliverable.billing_code.as_str(), code)
                    })
            })
            .collect();
        matched.sort_by(|a, b| newest_first(a, b));

        let results: Vec<DeliverableView> = matched
            .into_iter()
            .map(|deliverable| {
                DeliverableView::new(deliverable, self.project(&deliverable.billing_code))
            })
            .collect();

        debug!(?filter, matched = results.len(), "deliverables tracker query");
        results
    }
}

fn newest_first(a: &Deliverable, b: &Deliverable) -> Ordering {
    let by_date = match (a.date_completed, b.date_completed) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date
        .then_with(|| a.billing_code.cmp(&b.billing_code))
        .then_with(|| a.row_id.cmp(&b.row_id))
}
