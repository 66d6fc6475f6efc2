/// Error type for [`crate::ToolConfig`]. Captures errors related to loading
/// configuration from the environment or command line.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but is not valid unicode.
    #[error("non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing a URL
    #[error("invalid URL in {key}: {source}")]
    Url {
        /// The variable or flag the URL came from.
        key: String,
        /// The parse error.
        #[source]
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Non-unicode env var.
    pub fn non_unicode(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
