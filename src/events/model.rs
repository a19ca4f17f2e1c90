use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::git::RefType;

/// Coarse classification of an event, derived from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub sha: String,
    pub author: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    Push {
        #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
        commits: Vec<CommitSummary>,
    },
    PullRequest {
        action: String,
        merged: bool,
    },
    Other,
}

/// One unit of repository activity, normalized across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryEvent {
    pub id: String,
    /// Event type name as reported by the platform (e.g. `PushEvent`).
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor: String,
    pub repository: String,
    pub created_at: DateTime<Utc>,
    pub payload: EventPayload,
}

impl RepositoryEvent {
    pub fn kind(&self) -> EventKind {
        match self.payload {
            EventPayload::Push { .. } => EventKind::Push,
            EventPayload::PullRequest { .. } => EventKind::PullRequest,
            EventPayload::Other => EventKind::Other,
        }
    }

    /// Pushed ref, when the event is a push carrying one.
    pub fn reference(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::Push { reference, .. } => reference.as_deref(),
            _ => None,
        }
    }

    /// Branch or tag name of the pushed ref. Unknown ref layouts are returned verbatim.
    pub fn ref_name(&self) -> Option<String> {
        self.reference().map(|r| match r.parse::<RefType>() {
            Ok(parsed) => parsed.name().to_owned(),
            Err(_) => r.to_owned(),
        })
    }

    pub fn commits(&self) -> &[CommitSummary] {
        match &self.payload {
            EventPayload::Push { commits, .. } => commits,
            _ => &[],
        }
    }
}
