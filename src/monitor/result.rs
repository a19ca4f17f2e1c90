use serde::Serialize;

use crate::events::{EventKind, RepositoryEvent};

use super::DeadlineComparison;

/// Outcome of one analysis. Optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEventResult {
    found: bool,
    events_checked: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_code_event: Option<RepositoryEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submitted_before: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_difference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CodeEventResult {
    pub(crate) fn found(
        events_checked: usize,
        event: RepositoryEvent,
        comparison: Option<DeadlineComparison>,
    ) -> Self {
        let (submitted_before, time_difference) = match comparison {
            Some(c) => (Some(c.is_before), Some(c.human_delta)),
            None => (None, None),
        };

        Self {
            found: true,
            events_checked,
            event_description: Some(describe(&event)),
            last_code_event: Some(event),
            submitted_before,
            time_difference,
            error: None,
        }
    }

    pub(crate) fn not_found(events_checked: usize) -> Self {
        Self::failed(
            events_checked,
            format!("No code submission events found in the last {events_checked} repository events"),
        )
    }

    pub(crate) fn failed<T: Into<String>>(events_checked: usize, error: T) -> Self {
        Self {
            found: false,
            events_checked,
            last_code_event: None,
            submitted_before: None,
            time_difference: None,
            event_description: None,
            error: Some(error.into()),
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn events_checked(&self) -> usize {
        self.events_checked
    }

    pub fn last_code_event(&self) -> Option<&RepositoryEvent> {
        self.last_code_event.as_ref()
    }

    pub fn submitted_before(&self) -> Option<bool> {
        self.submitted_before
    }

    pub fn time_difference(&self) -> Option<&str> {
        self.time_difference.as_deref()
    }

    pub fn event_description(&self) -> Option<&str> {
        self.event_description.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn describe(event: &RepositoryEvent) -> String {
    let at = event.created_at.format("%Y-%m-%d %H:%M:%S UTC");
    let actor = &event.actor;

    match event.kind() {
        EventKind::Push => {
            let target = event
                .ref_name()
                .map(|r| format!(" to {r}"))
                .unwrap_or_default();
            let commits = match event.commits().len() {
                0 => String::new(),
                1 => ", 1 commit".into(),
                n => format!(", {n} commits"),
            };
            format!("Latest push event{target} by {actor} ({at}{commits})")
        }
        EventKind::PullRequest => format!("Latest merge event by {actor} ({at})"),
        EventKind::Other => format!("Latest {} by {actor} ({at})", event.event_type),
    }
}
