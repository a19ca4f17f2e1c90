use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    backends::AccessToken,
    git::{GitError, Platform, RepositoryPath},
};

use super::{parse_deadline, DeadlineError};

/// Raised before any network call when user input is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Repository(#[from] GitError),
    #[error(transparent)]
    Deadline(#[from] DeadlineError),
}

/// One user-initiated analysis query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRequest {
    repository: RepositoryPath,
    platform: Platform,
    token: Option<AccessToken>,
    deadline: Option<DateTime<Utc>>,
}

impl MonitorRequest {
    pub fn new(repository: RepositoryPath, platform: Platform) -> Self {
        Self {
            repository,
            platform,
            token: None,
            deadline: None,
        }
    }

    /// Validate raw user input.
    pub fn parse(
        repository: &str,
        platform: Platform,
        token: Option<&str>,
        deadline: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let repository = RepositoryPath::new(repository)?;
        let deadline = deadline
            .filter(|d| !d.trim().is_empty())
            .map(parse_deadline)
            .transpose()?;

        Ok(Self::new(repository, platform)
            .with_token(AccessToken::from_input(token))
            .with_deadline(deadline))
    }

    pub fn with_token(mut self, token: Option<AccessToken>) -> Self {
        self.token = token;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn repository(&self) -> &RepositoryPath {
        &self.repository
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}
