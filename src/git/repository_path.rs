use std::{fmt, str::FromStr};

use super::GitError;

/// Validated `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryPath {
    owner: String,
    name: String,
}

impl RepositoryPath {
    pub fn new(path: &str) -> Result<Self, GitError> {
        let (owner, name) = Self::split_repo_path(path.trim())?;

        Ok(Self {
            owner: owner.into(),
            name: name.into(),
        })
    }

    pub(crate) fn from_parts<T: Into<String>>(owner: T, name: T) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    fn split_repo_path(repo_path: &str) -> Result<(&str, &str), GitError> {
        match repo_path.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok((owner, name))
            }
            _ => Err(GitError::MalformedRepositoryPath(repo_path.into())),
        }
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryPath {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
