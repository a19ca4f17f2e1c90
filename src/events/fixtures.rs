use chrono::{TimeZone, Utc};

use super::{CommitSummary, EventPayload, RepositoryEvent};

pub(crate) fn event(id: &str, hour: u32, payload: EventPayload) -> RepositoryEvent {
    RepositoryEvent {
        id: id.into(),
        event_type: match payload {
            EventPayload::Push { .. } => "PushEvent",
            EventPayload::PullRequest { .. } => "PullRequestEvent",
            EventPayload::Other => "IssuesEvent",
        }
        .into(),
        actor: "alice".into(),
        repository: "owner/repo".into(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap(),
        payload,
    }
}

pub(crate) fn push(id: &str, hour: u32) -> RepositoryEvent {
    event(
        id,
        hour,
        EventPayload::Push {
            reference: Some("refs/heads/main".into()),
            commits: vec![CommitSummary {
                sha: format!("sha-{id}"),
                author: "Alice".into(),
                message: "Update".into(),
            }],
        },
    )
}

pub(crate) fn pull_request(id: &str, hour: u32, action: &str, merged: bool) -> RepositoryEvent {
    event(
        id,
        hour,
        EventPayload::PullRequest {
            action: action.into(),
            merged,
        },
    )
}

pub(crate) fn other(id: &str, hour: u32) -> RepositoryEvent {
    event(id, hour, EventPayload::Other)
}
