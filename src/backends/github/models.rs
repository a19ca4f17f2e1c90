use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    backends::payload::{decode_payload, null_as_default},
    events::{CommitSummary, EventPayload, RepositoryEvent},
};

#[derive(Debug, Deserialize)]
pub struct GitHubEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor: Actor,
    pub repo: Repo,
    /// Shape depends on `event_type`, decoded only for push and pull request events.
    #[serde(default)]
    pub payload: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Repo {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
}

#[derive(Debug, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha: String,
    pub author: Option<CommitUser>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CommitUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub merged: Option<bool>,
}

impl From<GitHubEvent> for RepositoryEvent {
    fn from(event: GitHubEvent) -> Self {
        let payload = match &event.event_type[..] {
            "PushEvent" => {
                let push: PushPayload = decode_payload(&event.event_type, event.payload);
                EventPayload::Push {
                    reference: push.reference,
                    commits: push
                        .commits
                        .into_iter()
                        .map(|c| CommitSummary {
                            sha: c.sha,
                            author: c.author.map(|a| a.name).unwrap_or_default(),
                            message: c.message,
                        })
                        .collect(),
                }
            }
            "PullRequestEvent" => {
                let pr: PullRequestPayload = decode_payload(&event.event_type, event.payload);
                EventPayload::PullRequest {
                    action: pr.action,
                    merged: pr.pull_request.and_then(|p| p.merged).unwrap_or(false),
                }
            }
            _ => EventPayload::Other,
        };

        Self {
            id: event.id,
            event_type: event.event_type,
            actor: event.actor.login,
            repository: event.repo.name,
            created_at: event.created_at,
            payload,
        }
    }
}
