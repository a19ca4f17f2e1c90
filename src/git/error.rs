use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    #[error("Unsupported Git reference type: {0}")]
    UnsupportedRefType(String),
    #[error("Unsupported platform: {0} (supported: github, gitee)")]
    UnsupportedPlatform(String),
    #[error("Malformed repository path: '{0}'. Repository format should be 'owner/repo'.")]
    MalformedRepositoryPath(String),
    #[error("Malformed repository URL: '{0}'")]
    MalformedRepositoryUrl(String),
}
