use std::time::Duration;

use url::Url;

use crate::{backends::AccessToken, git::Platform};

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_GITEE_API_URL: &str = "https://gitee.com/api/v5";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Malformed API URL: '{0}'. Make sure you entered a valid http(s) URL.")]
    MalformedApiUrl(String),
    #[error("Malformed request timeout: '{0}'. Expected a positive number of seconds.")]
    MalformedTimeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    telemetry_url: Option<String>,
    github_api_url: String,
    gitee_api_url: String,
    github_token: Option<AccessToken>,
    gitee_token: Option<AccessToken>,
    request_timeout: Duration,
    raw_request_timeout: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let raw_request_timeout = env_to_str("CW_REQUEST_TIMEOUT");

        Self {
            telemetry_url: env_to_str("CW_TELEMETRY_URL"),
            github_api_url: env_to_str("CW_GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.into()),
            gitee_api_url: env_to_str("CW_GITEE_API_URL")
                .unwrap_or_else(|| DEFAULT_GITEE_API_URL.into()),
            github_token: env_to_token(&["CW_GITHUB_TOKEN", "GITHUB_TOKEN"]),
            gitee_token: env_to_token(&["CW_GITEE_TOKEN", "GITEE_TOKEN"]),
            request_timeout: raw_request_timeout
                .as_deref()
                .and_then(parse_timeout)
                .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            raw_request_timeout,
        }
    }

    pub fn empty() -> Self {
        Self {
            telemetry_url: None,
            github_api_url: "".into(),
            gitee_api_url: "".into(),
            github_token: None,
            gitee_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            raw_request_timeout: None,
        }
    }

    pub fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    pub fn gitee_api_url(&self) -> &str {
        &self.gitee_api_url
    }

    pub fn telemetry_url(&self) -> Option<&str> {
        self.telemetry_url.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Credential configured for a platform, if any.
    pub fn token_for(&self, platform: Platform) -> Option<&AccessToken> {
        match platform {
            Platform::GitHub => self.github_token.as_ref(),
            Platform::Gitee => self.gitee_token.as_ref(),
        }
    }

    pub fn set_github_api_url<T: Into<String>>(&mut self, value: T) {
        self.github_api_url = value.into();
    }

    pub fn set_gitee_api_url<T: Into<String>>(&mut self, value: T) {
        self.gitee_api_url = value.into();
    }

    pub fn set_telemetry_url<T: Into<String>>(&mut self, value: T) {
        self.telemetry_url = Some(value.into());
    }

    pub fn set_token(&mut self, platform: Platform, token: AccessToken) {
        match platform {
            Platform::GitHub => self.github_token = Some(token),
            Platform::Gitee => self.gitee_token = Some(token),
        }
    }

    pub fn set_request_timeout<T: Into<String>>(&mut self, value: T) {
        let value = value.into();
        if let Some(timeout) = parse_timeout(&value) {
            self.request_timeout = timeout;
        }
        self.raw_request_timeout = Some(value);
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        for api_url in [&self.github_api_url, &self.gitee_api_url] {
            match Url::parse(api_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => return Err(ConfigError::MalformedApiUrl(api_url.clone())),
            }
        }

        if let Some(raw) = &self.raw_request_timeout {
            if parse_timeout(raw).is_none() {
                return Err(ConfigError::MalformedTimeout(raw.clone()));
            }
        }

        Ok(())
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}

/// First non-blank token among the given environment variables.
fn env_to_token(env_keys: &[&str]) -> Option<AccessToken> {
    env_keys
        .iter()
        .find_map(|key| AccessToken::from_input(env_to_str(key).as_deref()))
}

fn parse_timeout(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::{backends::AccessToken, git::Platform};

    use super::{Config, ConfigError};

    fn valid_config() -> Config {
        let mut config = Config::empty();
        config.set_github_api_url("https://api.github.com");
        config.set_gitee_api_url("https://gitee.com/api/v5");
        config
    }

    #[test]
    fn test_valid_configuration() {
        assert!(valid_config().validate_configuration().is_ok());
    }

    #[test]
    fn test_malformed_api_url() {
        let mut config = valid_config();
        config.set_gitee_api_url("gitee.com/api");

        assert_matches!(
            config.validate_configuration(),
            Err(ConfigError::MalformedApiUrl(u)) if u == "gitee.com/api"
        );
    }

    #[test]
    fn test_request_timeout() {
        let mut config = valid_config();
        config.set_request_timeout("5");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.validate_configuration().is_ok());

        config.set_request_timeout("0");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_matches!(
            config.validate_configuration(),
            Err(ConfigError::MalformedTimeout(_))
        );
    }

    #[test]
    fn test_tokens_are_per_platform() {
        let mut config = valid_config();
        config.set_token(Platform::Gitee, AccessToken::new("gitee"));

        assert_eq!(config.token_for(Platform::GitHub), None);
        assert_eq!(
            config.token_for(Platform::Gitee).map(AccessToken::expose),
            Some("gitee")
        );
    }
}
