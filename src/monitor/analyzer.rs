use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    backends::{fetcher_for, EventFetcher, FetchError},
    config::Config,
    events::RepositoryEvent,
    git::Platform,
};

use super::{classify, compare, select_latest, CodeEventResult, MonitorRequest};

/// Runs fetch, classification and deadline comparison for one platform.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Arc<dyn EventFetcher>,
}

impl Analyzer {
    pub fn new(fetcher: Arc<dyn EventFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn from_config(platform: Platform, config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(fetcher_for(platform, config)?))
    }

    pub fn platform(&self) -> Platform {
        self.fetcher.platform()
    }

    pub fn fetcher(&self) -> &dyn EventFetcher {
        self.fetcher.as_ref()
    }

    /// Analyze a repository, folding any fetch failure into a not-found result.
    pub async fn analyze(&self, request: &MonitorRequest) -> CodeEventResult {
        match self.try_analyze(request).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed");
                CodeEventResult::failed(0, e.to_string())
            }
        }
    }

    #[tracing::instrument(skip_all, fields(repository = %request.repository(), platform = %request.platform()))]
    pub async fn try_analyze(&self, request: &MonitorRequest) -> Result<CodeEventResult, FetchError> {
        if request.platform() != self.platform() {
            tracing::warn!(
                analyzer = %self.platform(),
                "request targets another platform than the analyzer"
            );
        }

        let events = self
            .fetcher
            .fetch_events(request.repository(), request.token())
            .await?;

        let result = evaluate(&events, request.deadline());
        tracing::info!(
            events_checked = result.events_checked(),
            found = result.is_found(),
            submitted_before = ?result.submitted_before(),
            "analysis complete"
        );

        Ok(result)
    }
}

/// Pick the latest code submission from a newest-first feed and compare it to the deadline.
pub fn evaluate(events: &[RepositoryEvent], deadline: Option<DateTime<Utc>>) -> CodeEventResult {
    let qualifying = classify(events);

    match select_latest(&qualifying) {
        Some(latest) => {
            let comparison = deadline.map(|d| compare(latest.created_at, d));
            CodeEventResult::found(events.len(), latest.clone(), comparison)
        }
        None => CodeEventResult::not_found(events.len()),
    }
}
