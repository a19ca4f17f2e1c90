use thiserror::Error;

use crate::git::Platform;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("API rate limit exceeded. Please provide a {0} token to increase the rate limit.")]
    RateLimited(Platform),

    #[error("{platform} API error: {status} - {message}")]
    Upstream {
        platform: Platform,
        status: u16,
        message: String,
    },

    #[error("error while requesting {platform} API: {message}")]
    Transport { platform: Platform, message: String },

    #[error("error while parsing {platform} response: {message}")]
    MalformedResponse { platform: Platform, message: String },
}

impl FetchError {
    pub(crate) fn transport(platform: Platform, error: reqwest::Error) -> Self {
        Self::Transport {
            platform,
            message: error.to_string(),
        }
    }

    pub(crate) fn malformed(platform: Platform, error: reqwest::Error) -> Self {
        Self::MalformedResponse {
            platform,
            message: error.to_string(),
        }
    }
}
