use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    backends::{
        http::{check_status, create_client, parse_json},
        AccessToken, EventFetcher, FetchError,
    },
    config::Config,
    events::RepositoryEvent,
    git::{Platform, RepositoryPath},
};

use super::GitHubEvent;

/// Page size requested from the events endpoint.
pub const EVENTS_PAGE_SIZE: usize = 100;

const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug)]
pub struct Client {
    api_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            api_url: config.github_api_url().trim_end_matches('/').to_owned(),
            http: create_client(config, Platform::GitHub)?,
        })
    }

    fn get(&self, path: &str, token: Option<&AccessToken>) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(format!("{}{path}", self.api_url))
            .header(reqwest::header::ACCEPT, ACCEPT);

        match token {
            Some(t) => request.header(reqwest::header::AUTHORIZATION, format!("token {}", t.expose())),
            None => request,
        }
    }
}

#[async_trait]
impl EventFetcher for Client {
    fn platform(&self) -> Platform {
        Platform::GitHub
    }

    #[tracing::instrument(skip_all, fields(repository = %repository))]
    async fn fetch_events(
        &self,
        repository: &RepositoryPath,
        token: Option<&AccessToken>,
    ) -> Result<Vec<RepositoryEvent>, FetchError> {
        let owner = repository.owner();
        let name = repository.name();
        let resp = self
            .get(&format!("/repos/{owner}/{name}/events"), token)
            .query(&[("per_page", EVENTS_PAGE_SIZE)])
            .send()
            .await
            .map_err(|e| FetchError::transport(Platform::GitHub, e))?;

        let resp = check_status(Platform::GitHub, resp).await?;
        let events: Vec<GitHubEvent> = parse_json(Platform::GitHub, resp).await?;

        tracing::debug!(count = events.len(), "events received");

        Ok(events
            .into_iter()
            .take(EVENTS_PAGE_SIZE)
            .map(RepositoryEvent::from)
            .collect())
    }

    #[tracing::instrument(skip_all, fields(repository = %repository))]
    async fn has_commits(
        &self,
        repository: &RepositoryPath,
        token: Option<&AccessToken>,
    ) -> Result<bool, FetchError> {
        let owner = repository.owner();
        let name = repository.name();
        let resp = self
            .get(&format!("/repos/{owner}/{name}/commits"), token)
            .query(&[("per_page", 1)])
            .send()
            .await
            .map_err(|e| FetchError::transport(Platform::GitHub, e))?;

        // GitHub answers 409 Conflict for an empty repository.
        match resp.status() {
            StatusCode::NOT_FOUND | StatusCode::CONFLICT => Ok(false),
            _ => check_status(Platform::GitHub, resp).await.map(|_| true),
        }
    }
}
