//! Client configuration for an authorization server and an identity-group
//! provider.
//!
//! [`AuthConfig`] stores the two service base URLs, the UUID of the group
//! used to enumerate known users, and an optional [`RefreshingToken`]
//! credential, and derives the fully-qualified query URLs collaborators
//! need: the login endpoint, the group-members listing, and the general
//! users query. It performs no I/O itself; an HTTP client consumes the
//! derived URLs and a token service drives credential refresh.
//!
//! ```
//! use auth_client_config::AuthConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AuthConfig::new()
//!     .with_identity_provider_url("https://example.org/idp")?
//!     .with_users_group_id("99d2a548-7218-11e2-adc0-12313d2d6e7f".parse()?);
//!
//! assert_eq!(
//!     config.group_members_url().as_str(),
//!     "https://example.org/idp/groups/99d2a548-7218-11e2-adc0-12313d2d6e7f/members/",
//! );
//! assert_eq!(
//!     config.users_url().as_str(),
//!     "https://example.org/idp/users/",
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Base URLs always end in `/` (appended on the way in when missing), so
//! derived URLs nest under the full configured path per RFC 3986 reference
//! resolution rather than replacing its last segment. See [`BaseUrl`].

pub mod base_url;
pub mod config;
pub mod error;
pub mod token;

pub use base_url::BaseUrl;
pub use config::AuthConfig;
pub use error::ConfigError;
pub use token::{AccessToken, RefreshingToken, StaticToken};
