pub mod gitee;
pub mod github;

mod error;
mod http;
mod payload;
mod token;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::Config,
    events::RepositoryEvent,
    git::{Platform, RepositoryPath},
};

pub use self::error::FetchError;
pub use self::token::AccessToken;

/// Access to one platform's repository activity.
#[async_trait]
pub trait EventFetcher: std::fmt::Debug + Send + Sync {
    fn platform(&self) -> Platform;

    /// Fetch one page of repository events, newest first.
    async fn fetch_events(
        &self,
        repository: &RepositoryPath,
        token: Option<&AccessToken>,
    ) -> Result<Vec<RepositoryEvent>, FetchError>;

    /// Check whether the repository holds at least one commit.
    async fn has_commits(
        &self,
        repository: &RepositoryPath,
        token: Option<&AccessToken>,
    ) -> Result<bool, FetchError>;
}

pub fn fetcher_for(platform: Platform, config: &Config) -> Result<Arc<dyn EventFetcher>, FetchError> {
    Ok(match platform {
        Platform::GitHub => Arc::new(github::Client::new(config)?),
        Platform::Gitee => Arc::new(gitee::Client::new(config)?),
    })
}
