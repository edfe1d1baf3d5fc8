/// Configuration mutation error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A mutator received an empty value.
    #[error("{0} cannot be empty")]
    MissingArgument(&'static str),

    /// A supplied URL failed to parse as an absolute URL after
    /// trailing-slash normalization.
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_offending_url() {
        let e = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(e.to_string().contains("not a url"));
    }
}
