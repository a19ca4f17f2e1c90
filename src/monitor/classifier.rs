//! Code submission classification.
//!
//! A push always counts as a code submission. A pull request only counts once
//! it was closed by merging it. Everything else is ignored.

use crate::events::{EventPayload, RepositoryEvent};

pub fn is_code_submission(event: &RepositoryEvent) -> bool {
    match &event.payload {
        EventPayload::Push { .. } => true,
        EventPayload::PullRequest { action, merged } => action == "closed" && *merged,
        EventPayload::Other => false,
    }
}

/// Keep the code submissions, in feed order.
pub fn classify(events: &[RepositoryEvent]) -> Vec<&RepositoryEvent> {
    events.iter().filter(|e| is_code_submission(e)).collect()
}

/// Most recent qualifying event. Feeds are newest first, so this is the first one.
pub fn select_latest<'a>(qualifying: &[&'a RepositoryEvent]) -> Option<&'a RepositoryEvent> {
    qualifying.first().copied()
}
