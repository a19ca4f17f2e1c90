use std::str::FromStr;

use super::GitError;

/// Git reference carried by a push, e.g. `refs/heads/main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefType {
    Branch(String),
    Tag(String),
}

impl RefType {
    pub fn name(&self) -> &str {
        match self {
            Self::Branch(b) => b,
            Self::Tag(t) => t,
        }
    }
}

impl FromStr for RefType {
    type Err = GitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Some(tag) = value.strip_prefix("refs/tags/") {
            Ok(Self::Tag(tag.into()))
        } else if let Some(branch) = value.strip_prefix("refs/heads/") {
            Ok(Self::Branch(branch.into()))
        } else {
            Err(GitError::UnsupportedRefType(value.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::{GitError, RefType};

    #[test]
    fn test_parse_refs() {
        assert_eq!(
            "refs/heads/feature/login".parse::<RefType>(),
            Ok(RefType::Branch("feature/login".into()))
        );
        assert_eq!(
            "refs/tags/v1.0".parse::<RefType>(),
            Ok(RefType::Tag("v1.0".into()))
        );
        assert_matches!(
            "main".parse::<RefType>(),
            Err(GitError::UnsupportedRefType(_))
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(RefType::Branch("main".into()).name(), "main");
        assert_eq!(RefType::Tag("v2".into()).name(), "v2");
    }
}
