use once_cell::sync::Lazy;
use regex::Regex;

use super::{GitError, Platform, RepositoryPath};

const MIN_URL_LEN: usize = 10;
const MAX_URL_LEN: usize = 200;

static HTTPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(github\.com|gitee\.com)[/:]([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
        .expect("valid https pattern")
});
static SSH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^git@(github\.com|gitee\.com):([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
        .expect("valid ssh pattern")
});
static PLAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(github\.com|gitee\.com)[/:]([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
        .expect("valid plain pattern")
});
static SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("valid segment pattern"));

/// A repository address as people paste it: HTTPS, SSH or bare host form.
///
/// ```text
/// https://github.com/owner/repo.git
/// git@gitee.com:owner/repo.git
/// github.com/owner/repo
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    platform: Platform,
    path: RepositoryPath,
}

impl RepositoryUrl {
    pub fn parse(input: &str) -> Result<Self, GitError> {
        let url = input.trim();
        let malformed = || GitError::MalformedRepositoryUrl(url.into());

        if url.contains('\n') || url.matches("://").count() > 1 {
            return Err(malformed());
        }
        if url.len() < MIN_URL_LEN || url.len() > MAX_URL_LEN {
            return Err(malformed());
        }

        let captures = [&*HTTPS_PATTERN, &*SSH_PATTERN, &*PLAIN_PATTERN]
            .into_iter()
            .find_map(|pattern| pattern.captures(url))
            .ok_or_else(malformed)?;

        let platform = Platform::from_host(&captures[1]).ok_or_else(malformed)?;
        let (owner, name) = (&captures[2], &captures[3]);
        if !SEGMENT_PATTERN.is_match(owner) || !SEGMENT_PATTERN.is_match(name) {
            return Err(malformed());
        }

        Ok(Self {
            platform,
            path: RepositoryPath::from_parts(owner, name),
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn path(&self) -> &RepositoryPath {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::{GitError, Platform, RepositoryUrl};

    fn parsed(input: &str) -> (Platform, String) {
        let url = RepositoryUrl::parse(input).unwrap();
        (url.platform(), url.path().full_name())
    }

    #[test]
    fn test_parse_github_forms() {
        let expected = (Platform::GitHub, "owner/repo".to_string());
        assert_eq!(parsed("https://github.com/owner/repo"), expected);
        assert_eq!(parsed("https://github.com/owner/repo.git"), expected);
        assert_eq!(parsed("http://GitHub.com/owner/repo/"), expected);
        assert_eq!(parsed("git@github.com:owner/repo.git"), expected);
        assert_eq!(parsed("github.com/owner/repo"), expected);

        assert_eq!(
            parsed("https://github.com/owner/http-server"),
            (Platform::GitHub, "owner/http-server".to_string())
        );
        assert_eq!(
            parsed("https://github.com/httpie/rust-http.git"),
            (Platform::GitHub, "httpie/rust-http".to_string())
        );
    }

    #[test]
    fn test_parse_gitee_forms() {
        let expected = (Platform::Gitee, "some-org/my_repo.rs".to_string());
        assert_eq!(parsed(" https://gitee.com/some-org/my_repo.rs.git "), expected);
        assert_eq!(parsed("git@gitee.com:some-org/my_repo.rs"), expected);
        assert_eq!(parsed("gitee.com/some-org/my_repo.rs"), expected);
    }

    #[test]
    fn test_reject_unsupported_inputs() {
        for input in [
            "https://gitlab.com/owner/repo",
            "https://github.com/owner",
            "https://github.com/owner/repo/tree/main",
            "https://github.com/owner/repo https://github.com/other/repo",
            "https://github.com/owner/repohttps://github.com/other/repo",
            "https://github.com/owner/repo\nhttps://gitee.com/owner/repo",
            "https://github.com/own@r/repo",
            "a/b",
        ] {
            assert_matches!(
                RepositoryUrl::parse(input),
                Err(GitError::MalformedRepositoryUrl(_)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_overlong_input() {
        let input = format!("https://github.com/owner/{}", "r".repeat(200));
        assert_matches!(
            RepositoryUrl::parse(&input),
            Err(GitError::MalformedRepositoryUrl(_))
        );
    }
}
