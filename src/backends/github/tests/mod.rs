use pretty_assertions::assert_eq;

use crate::events::{EventKind, RepositoryEvent};

use super::models::GitHubEvent;

#[test]
fn test_parse_events_sample() {
    let events_str = include_str!("./events_sample.json");
    let events: Vec<GitHubEvent> = serde_json::from_str(events_str).expect("should deserialize");

    let kinds: Vec<_> = events
        .into_iter()
        .map(RepositoryEvent::from)
        .map(|e| e.kind())
        .collect();
    assert_eq!(kinds, vec![EventKind::Push, EventKind::PullRequest, EventKind::Other]);
}

#[test]
fn test_parse_push_without_commits() {
    let event: GitHubEvent = serde_json::from_str(
        r#"{
            "id": "1",
            "type": "PushEvent",
            "actor": { "login": "alice" },
            "repo": { "name": "owner/repo" },
            "payload": { "ref": "refs/heads/dev", "push_id": 12 },
            "created_at": "2024-03-15T10:00:00Z"
        }"#,
    )
    .expect("should deserialize");

    let event = RepositoryEvent::from(event);
    assert_eq!(event.ref_name().as_deref(), Some("dev"));
    assert!(event.commits().is_empty());
}

#[test]
fn test_parse_merged_pull_request() {
    let event: GitHubEvent = serde_json::from_str(
        r#"{
            "id": "2",
            "type": "PullRequestEvent",
            "actor": { "login": "bob" },
            "repo": { "name": "owner/repo" },
            "payload": { "action": "closed", "pull_request": { "merged": true } },
            "created_at": "2024-03-15T12:00:00Z"
        }"#,
    )
    .expect("should deserialize");

    assert_eq!(
        RepositoryEvent::from(event).payload,
        crate::events::EventPayload::PullRequest {
            action: "closed".into(),
            merged: true
        }
    );
}

#[test]
fn test_parse_feed_with_null_payloads() {
    let events: Vec<GitHubEvent> = serde_json::from_str(
        r#"[
            {
                "id": "10",
                "type": "PushEvent",
                "actor": { "login": "alice" },
                "repo": { "name": "owner/repo" },
                "payload": {
                    "ref": "refs/heads/main",
                    "commits": [{ "sha": "abc", "author": null, "message": null }]
                },
                "created_at": "2024-03-15T10:00:00Z"
            },
            {
                "id": "9",
                "type": "WatchEvent",
                "actor": { "login": "bob" },
                "repo": { "name": "owner/repo" },
                "payload": null,
                "created_at": "2024-03-15T09:00:00Z"
            },
            {
                "id": "8",
                "type": "PullRequestReviewEvent",
                "actor": { "login": "carol" },
                "repo": { "name": "owner/repo" },
                "payload": { "pull_request": { "merged": null } },
                "created_at": "2024-03-15T08:00:00Z"
            }
        ]"#,
    )
    .expect("should deserialize");

    let events: Vec<_> = events.into_iter().map(RepositoryEvent::from).collect();
    assert_eq!(
        events.iter().map(|e| e.kind()).collect::<Vec<_>>(),
        vec![EventKind::Push, EventKind::Other, EventKind::Other]
    );
    assert_eq!(events[0].commits()[0].sha, "abc");
    assert_eq!(events[0].commits()[0].author, "");
    assert_eq!(events[0].commits()[0].message, "");
}

#[test]
fn test_parse_push_with_unexpected_payload_shape() {
    let event: GitHubEvent = serde_json::from_str(
        r#"{
            "id": "11",
            "type": "PushEvent",
            "actor": { "login": "alice" },
            "repo": { "name": "owner/repo" },
            "payload": "unexpected",
            "created_at": "2024-03-15T11:00:00Z"
        }"#,
    )
    .expect("should deserialize");

    let event = RepositoryEvent::from(event);
    assert_eq!(event.kind(), EventKind::Push);
    assert_eq!(event.reference(), None);
}
