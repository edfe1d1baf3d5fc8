use core::fmt;

use anyhow::Result;
use async_trait::async_trait;

/// A bearer token for the identity provider.
///
/// The token value is opaque to this crate and is redacted from `Debug`
/// output so configurations can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// An externally-managed credential that can always produce a currently
/// valid token.
///
/// A trait is used here so that callers can plug in whatever refresh
/// discipline their token service requires; the configuration only stores
/// the reference and forwards it, and never triggers a refresh itself.
#[async_trait]
pub trait RefreshingToken: fmt::Debug {
    /// Returns a token that is valid at the time of the call, refreshing
    /// it first if necessary.
    async fn token(&self) -> Result<AccessToken>;
}

/// A credential backed by a fixed token that is never refreshed.
///
/// Useful in tests and for short-lived processes where the token is known
/// to outlive the process.
#[derive(Debug, Clone)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    pub fn new(token: impl Into<AccessToken>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl RefreshingToken for StaticToken {
    async fn token(&self) -> Result<AccessToken> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_redacts_the_token() {
        let token = AccessToken::from("hunter2");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
        assert_eq!(token.as_str(), "hunter2");
    }

    #[tokio::test]
    async fn static_token_returns_its_value() {
        let credential = StaticToken::new("hunter2");
        let token = credential.token().await.expect("failed to produce token");
        assert_eq!(token.into_inner(), "hunter2");
    }
}
