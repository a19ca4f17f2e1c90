use std::fmt;

/// Opaque platform credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    /// Build a token from user input, treating blank input as no token.
    pub fn from_input(value: Option<&str>) -> Option<Self> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AccessToken;

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::new("ghp_secret");
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
        assert_eq!(token.expose(), "ghp_secret");
    }

    #[test]
    fn test_blank_input_is_no_token() {
        assert_eq!(AccessToken::from_input(Some("   ")), None);
        assert_eq!(AccessToken::from_input(None), None);
        assert_eq!(
            AccessToken::from_input(Some(" abc ")),
            Some(AccessToken::new("abc"))
        );
    }
}
