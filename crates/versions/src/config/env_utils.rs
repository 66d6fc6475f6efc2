//! Helpers for reading configuration from the environment.

use crate::ConfigError;
use std::{
    env::{self, VarError},
    path::PathBuf,
};
use url::Url;

/// Load a variable from the environment. Unset or blank is `None`.
pub fn load_string_opt(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::non_unicode(key)),
    }
}

/// Load a URL from the environment, falling back to a default.
pub fn load_url_or(key: &str, default: &str) -> Result<Url, ConfigError> {
    match load_string_opt(key)? {
        Some(val) => parse_url(key, &val),
        None => parse_url(key, default),
    }
}

/// Load a path from the environment
pub fn load_path_opt(key: &str) -> Result<Option<PathBuf>, ConfigError> {
    load_string_opt(key).map(|val| val.map(PathBuf::from))
}

/// Parse a URL, naming the variable it came from on failure.
pub fn parse_url(key: &str, val: &str) -> Result<Url, ConfigError> {
    Url::parse(val.trim()).map_err(|source| ConfigError::Url { key: key.to_string(), source })
}
