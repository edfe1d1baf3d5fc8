use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// A url that is always a base (can be safely join()'ed with further path
/// elements without mangling).
///
/// Construction appends a trailing `/` when the input lacks one, so resolving
/// a relative path like `users/` against it always nests under the full
/// stored path instead of replacing its last segment.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Resolve a fixed relative path against this base.
    ///
    /// Joining a well-formed relative reference onto a base URL cannot fail,
    /// so this is reserved for compile-time path constants; caller-supplied
    /// paths should go through [`Url::join`] and handle the error.
    pub(crate) fn join_base(&self, path: &str) -> Url {
        self.0
            .join(path)
            .unwrap_or_else(|e| panic!("relative path `{path}` must be joinable: {e}"))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn into_url(self) -> Url {
        self.0
    }
}

impl Deref for BaseUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = url::ParseError;

    fn try_from(mut url: String) -> Result<Self, Self::Error> {
        // Make URL a base.
        if !url.ends_with('/') {
            url += "/"
        }
        url.parse().map(Self)
    }
}

impl TryFrom<&str> for BaseUrl {
    type Error = url::ParseError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        url.to_string().try_into()
    }
}

impl FromStr for BaseUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl From<BaseUrl> for String {
    fn from(url: BaseUrl) -> String {
        url.0.into()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn appends_trailing_slash() {
        let base: BaseUrl = "https://example.org/idp".parse().unwrap();
        assert_eq!(base.as_str(), "https://example.org/idp/");
    }

    #[test]
    fn already_a_base_is_untouched() {
        let base: BaseUrl = "https://example.org/idp/".parse().unwrap();
        assert_eq!(base.as_str(), "https://example.org/idp/");
    }

    #[test]
    fn join_nests_under_full_path() {
        let base: BaseUrl = "https://example.org/some/sub/path".parse().unwrap();
        assert_eq!(
            base.join_base("users/").as_str(),
            "https://example.org/some/sub/path/users/"
        );
    }

    #[test]
    fn relative_input_is_rejected() {
        assert!("idp/only/a/path".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn serde_round_trip_normalizes() {
        let base: BaseUrl = serde_json::from_value(serde_json::json!("https://example.org/idp"))
            .expect("failed to deserialize base url");
        assert_eq!(base.as_str(), "https://example.org/idp/");
        assert_eq!(
            serde_json::to_value(base).unwrap(),
            serde_json::json!("https://example.org/idp/")
        );
    }
}
