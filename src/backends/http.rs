use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    app_info::{APP_NAME, APP_VERSION},
    config::Config,
    git::Platform,
};

use super::FetchError;

pub(crate) fn create_client(config: &Config, platform: Platform) -> Result<reqwest::Client, FetchError> {
    reqwest::ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(config.request_timeout())
        .user_agent(format!("{APP_NAME}/{APP_VERSION}"))
        .build()
        .map_err(|e| FetchError::transport(platform, e))
}

/// Map non-success statuses onto the fetch error taxonomy.
pub(crate) async fn check_status(platform: Platform, resp: Response) -> Result<Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::FORBIDDEN {
        tracing::warn!(platform = %platform, status = status.as_u16(), "rate limited");
        return Err(FetchError::RateLimited(platform));
    }

    let body = resp.text().await.unwrap_or_default();
    let message = upstream_message(&body)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_default();
    tracing::warn!(platform = %platform, status = status.as_u16(), message = %message, "upstream error");

    Err(FetchError::Upstream {
        platform,
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn parse_json<T: DeserializeOwned>(platform: Platform, resp: Response) -> Result<T, FetchError> {
    resp.json().await.map_err(|e| FetchError::malformed(platform, e))
}

/// Both platforms answer errors with `{"message": "..."}`; fall back to the raw body.
fn upstream_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned));
    Some(message.unwrap_or_else(|| body.to_owned()))
}
