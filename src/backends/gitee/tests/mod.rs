use pretty_assertions::assert_eq;

use crate::events::{CommitSummary, EventPayload, RepositoryEvent};

use super::models::GiteeEvent;

#[test]
fn test_parse_events_sample() {
    let events_str = include_str!("./events_sample.json");
    let events: Vec<GiteeEvent> = serde_json::from_str(events_str).expect("should deserialize");
    let events: Vec<_> = events.into_iter().map(RepositoryEvent::from).collect();

    assert_eq!(events[0].actor, "zhang");
    assert_eq!(
        events[0].payload,
        EventPayload::Push {
            reference: Some("refs/heads/master".into()),
            commits: vec![CommitSummary {
                sha: "9c1e0f2a".into(),
                author: "Zhang San".into(),
                message: "初始提交".into(),
            }],
        }
    );
    assert_eq!(
        events[1].payload,
        EventPayload::PullRequest {
            action: "closed".into(),
            merged: true
        }
    );
}

#[test]
fn test_parse_commit_without_author() {
    let event: GiteeEvent = serde_json::from_str(
        r#"{
            "id": "abc",
            "type": "PushEvent",
            "actor": { "login": "li" },
            "repo": { "full_name": "owner/repo" },
            "payload": { "commits": [{ "sha": "1234" }] },
            "created_at": "2024-03-15T10:00:00+08:00"
        }"#,
    )
    .expect("should deserialize");

    let event = RepositoryEvent::from(event);
    assert_eq!(event.id, "abc");
    assert_eq!(event.commits()[0].author, "");
    assert_eq!(event.reference(), None);
}

#[test]
fn test_parse_feed_with_null_payloads() {
    let events: Vec<GiteeEvent> = serde_json::from_str(
        r#"[
            {
                "id": 7,
                "type": "PushEvent",
                "actor": { "login": "li" },
                "repo": { "full_name": "owner/repo" },
                "payload": { "ref": "refs/heads/master", "commits": null },
                "created_at": "2024-03-15T10:00:00+08:00"
            },
            {
                "id": 6,
                "type": "StarEvent",
                "actor": { "login": "wang" },
                "repo": { "full_name": "owner/repo" },
                "payload": null,
                "created_at": "2024-03-15T09:00:00+08:00"
            },
            {
                "id": 5,
                "type": "PullRequestEvent",
                "actor": { "login": "zhao" },
                "repo": { "full_name": "owner/repo" },
                "payload": { "action": null, "pull_request": null },
                "created_at": "2024-03-15T08:00:00+08:00"
            }
        ]"#,
    )
    .expect("should deserialize");
    let events: Vec<_> = events.into_iter().map(RepositoryEvent::from).collect();

    assert_eq!(
        events[0].payload,
        EventPayload::Push {
            reference: Some("refs/heads/master".into()),
            commits: vec![],
        }
    );
    assert_eq!(events[1].payload, EventPayload::Other);
    assert_eq!(
        events[2].payload,
        EventPayload::PullRequest {
            action: String::new(),
            merged: false
        }
    );
}
