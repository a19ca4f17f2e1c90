use std::str::FromStr;

use strum::Display;

use super::GitError;

/// Hosting platform exposing a repository events feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Platform {
    #[strum(serialize = "GitHub")]
    GitHub,
    #[strum(serialize = "Gitee")]
    Gitee,
}

impl Platform {
    pub fn host(&self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::Gitee => "gitee.com",
        }
    }

    pub fn from_host(host: &str) -> Option<Self> {
        match &host.to_lowercase()[..] {
            "github.com" => Some(Self::GitHub),
            "gitee.com" => Some(Self::Gitee),
            _ => None,
        }
    }
}

impl FromStr for Platform {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "github" => Ok(Self::GitHub),
            "gitee" => Ok(Self::Gitee),
            other => Err(GitError::UnsupportedPlatform(other.into())),
        }
    }
}
