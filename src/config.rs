use std::sync::Arc;

use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::base_url::BaseUrl;
use crate::error::ConfigError;
use crate::token::RefreshingToken;

const DEFAULT_AUTH_SERVER_URL: &str = "https://www.kbase.us/services/authorization/";
const DEFAULT_IDENTITY_PROVIDER_URL: &str = "https://nexus.api.globusonline.org/";
const DEFAULT_USERS_GROUP_ID: &str = "99d2a548-7218-11e2-adc0-12313d2d6e7f";

const LOGIN_PATH: &str = "Sessions/Login";
const GROUPS_SEGMENT: &str = "groups/";
const MEMBERS_SEGMENT: &str = "/members/";
const USERS_PATH: &str = "users/";

/// Client configuration for the authorization server and the identity-group
/// provider. In most use cases the default configuration will work.
///
/// Mutators consume the configuration and return the updated value, so
/// updates chain:
///
/// ```
/// use auth_client_config::AuthConfig;
///
/// # fn main() -> Result<(), auth_client_config::ConfigError> {
/// let config = AuthConfig::new()
///     .with_auth_server_url("https://auth.example.org/services/auth")?
///     .with_identity_provider_url("https://idp.example.org/")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AuthConfig {
    auth_server_url: BaseUrl,
    identity_provider_url: BaseUrl,
    users_group_id: Uuid,
    credential: Option<Arc<dyn RefreshingToken + Send + Sync>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthConfig {
    /// Create a configuration with default settings. The credential starts
    /// unset.
    ///
    /// # Panics
    /// If the built-in default constants fail to parse, which indicates a
    /// defect in the constants themselves and can never happen at runtime.
    pub fn new() -> Self {
        let auth_server_url = DEFAULT_AUTH_SERVER_URL
            .parse()
            .expect("default auth server URL must parse");
        let identity_provider_url = DEFAULT_IDENTITY_PROVIDER_URL
            .parse()
            .expect("default identity provider URL must parse");
        let users_group_id = DEFAULT_USERS_GROUP_ID
            .parse()
            .expect("default users group ID must parse");
        Self {
            auth_server_url,
            identity_provider_url,
            users_group_id,
            credential: None,
        }
    }

    /// Set the base URL of the authorization server.
    ///
    /// A trailing `/` is appended when missing, so relative endpoint paths
    /// resolve under the full configured path. Fails with
    /// [`ConfigError::MissingArgument`] on empty input and
    /// [`ConfigError::InvalidUrl`] when the normalized string is not an
    /// absolute URL.
    pub fn with_auth_server_url(mut self, url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.auth_server_url = parse_base_url(url.as_ref(), "auth server URL")?;
        Ok(self)
    }

    /// Set the base URL of the identity-group provider.
    ///
    /// Same contract as [`AuthConfig::with_auth_server_url`].
    pub fn with_identity_provider_url(mut self, url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.identity_provider_url = parse_base_url(url.as_ref(), "identity provider URL")?;
        Ok(self)
    }

    /// Set the ID of the group to use when querying users.
    pub fn with_users_group_id(mut self, group_id: Uuid) -> Self {
        self.users_group_id = group_id;
        self
    }

    /// Set the credential to use when querying the identity provider. The
    /// credential is used when validating user names and fetching user
    /// details.
    ///
    /// Note that in order to see all users in the configured group, the
    /// principal this credential represents must be an administrator of the
    /// group. Otherwise users with private profiles will not be visible and
    /// member listings may be incomplete.
    pub fn with_credential(mut self, credential: Arc<dyn RefreshingToken + Send + Sync>) -> Self {
        debug!("installing identity provider credential");
        self.credential = Some(credential);
        self
    }

    /// Returns the configured authorization server base URL.
    pub fn auth_server_url(&self) -> &BaseUrl {
        &self.auth_server_url
    }

    /// Returns the configured identity provider base URL.
    pub fn identity_provider_url(&self) -> &BaseUrl {
        &self.identity_provider_url
    }

    /// Returns the configured group ID used when querying users.
    pub fn users_group_id(&self) -> Uuid {
        self.users_group_id
    }

    /// Returns the configured credential, if one has been set.
    pub fn credential(&self) -> Option<&Arc<dyn RefreshingToken + Send + Sync>> {
        self.credential.as_ref()
    }

    /// Returns the full URL for logging a user in with the authorization
    /// server.
    pub fn auth_login_url(&self) -> Url {
        self.auth_server_url.join_base(LOGIN_PATH)
    }

    /// Returns the full URL for listing the members of the configured group
    /// with the identity provider.
    ///
    /// Listings fetched from this URL omit private-profile users unless the
    /// configured credential holds administrative rights over the group; see
    /// [`AuthConfig::with_credential`].
    pub fn group_members_url(&self) -> Url {
        self.identity_provider_url.join_base(&format!(
            "{GROUPS_SEGMENT}{}{MEMBERS_SEGMENT}",
            self.users_group_id
        ))
    }

    /// Returns the full URL for querying users with the identity provider,
    /// regardless of group.
    pub fn users_url(&self) -> Url {
        self.identity_provider_url.join_base(USERS_PATH)
    }
}

fn parse_base_url(url: &str, what: &'static str) -> Result<BaseUrl, ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::MissingArgument(what));
    }
    if !url.ends_with('/') {
        debug!(%url, "appending trailing slash to {what}");
    }
    url.parse().map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
