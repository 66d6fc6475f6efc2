pub mod env_utils;

mod error;
pub use error::ConfigError;

use aastar_constants::sepolia;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the RPC endpoint.
pub const RPC_URL_ENV: &str = "SEPOLIA_RPC_URL";
/// Environment variable holding the path of the contract versions file.
pub const VERSIONS_FILE_ENV: &str = "CONTRACT_VERSIONS_FILE";
/// Environment variable holding the chain query tool executable.
pub const CAST_BIN_ENV: &str = "CAST_BIN";

/// Default chain query tool.
pub const DEFAULT_CAST_BIN: &str = "cast";
/// Default contract versions file, relative to the working directory. Run
/// the tools from the workspace root.
pub const DEFAULT_VERSIONS_FILE: &str = "crates/constants/data/contract-versions.json";

/// Resolved configuration for the version tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    rpc_url: Url,
    versions_file: PathBuf,
    cast_bin: String,
}

impl ToolConfig {
    /// Create a new configuration.
    pub const fn new(rpc_url: Url, versions_file: PathBuf, cast_bin: String) -> Self {
        Self { rpc_url, versions_file, cast_bin }
    }

    /// Load the configuration from the environment, using defaults for
    /// anything unset.
    ///
    /// - `SEPOLIA_RPC_URL` (default `https://rpc.sepolia.org`)
    /// - `CONTRACT_VERSIONS_FILE` (default [`DEFAULT_VERSIONS_FILE`])
    /// - `CAST_BIN` (default `cast`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = env_utils::load_url_or(RPC_URL_ENV, sepolia::PUBLIC_RPC_URL)?;
        let versions_file = env_utils::load_path_opt(VERSIONS_FILE_ENV)?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSIONS_FILE));
        let cast_bin = env_utils::load_string_opt(CAST_BIN_ENV)?
            .unwrap_or_else(|| DEFAULT_CAST_BIN.to_string());
        Ok(Self { rpc_url, versions_file, cast_bin })
    }

    /// Override the RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = rpc_url;
        self
    }

    /// Override the versions file.
    pub fn with_versions_file(mut self, versions_file: impl Into<PathBuf>) -> Self {
        self.versions_file = versions_file.into();
        self
    }

    /// Override the chain query tool.
    pub fn with_cast_bin(mut self, cast_bin: impl Into<String>) -> Self {
        self.cast_bin = cast_bin.into();
        self
    }

    /// Get the RPC endpoint.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Get the versions file path.
    pub fn versions_file(&self) -> &Path {
        &self.versions_file
    }

    /// Get the chain query tool executable.
    pub fn cast_bin(&self) -> &str {
        &self.cast_bin
    }
}
