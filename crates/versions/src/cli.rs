use crate::{env_utils, ConfigError, ToolConfig};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Dotenv files loaded by [`load_dotenv`], highest priority first.
pub const DOTENV_FILES: &[&str] = &[".env.local", ".env"];

/// Overrides shared by every binary. Unset flags fall back to the
/// environment.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolArgs {
    /// RPC endpoint [env: SEPOLIA_RPC_URL]
    #[arg(long)]
    pub rpc_url: Option<String>,
    /// Contract versions file [env: CONTRACT_VERSIONS_FILE]
    #[arg(long)]
    pub versions_file: Option<PathBuf>,
    /// Chain query tool executable [env: CAST_BIN]
    #[arg(long = "cast")]
    pub cast_bin: Option<String>,
}

impl ToolArgs {
    /// Apply these overrides to a configuration.
    pub fn apply(&self, mut config: ToolConfig) -> Result<ToolConfig, ConfigError> {
        if let Some(url) = &self.rpc_url {
            config = config.with_rpc_url(env_utils::parse_url("--rpc-url", url)?);
        }
        if let Some(path) = &self.versions_file {
            config = config.with_versions_file(path.clone());
        }
        if let Some(cast_bin) = &self.cast_bin {
            config = config.with_cast_bin(cast_bin.clone());
        }
        Ok(config)
    }
}

/// Outcome of loading one dotenv file.
#[derive(Debug)]
pub enum DotenvLoad {
    /// The file was loaded.
    Loaded(PathBuf),
    /// The file exists but could not be loaded.
    Failed(&'static str, dotenvy::Error),
}

/// Load `.env.local` then `.env` from the working directory. Variables
/// already set are never overridden, so the real environment wins over
/// `.env.local`, which wins over `.env`. Missing files are skipped.
pub fn load_dotenv() -> Vec<DotenvLoad> {
    DOTENV_FILES
        .iter()
        .copied()
        .filter_map(|file| match dotenvy::from_filename(file) {
            Ok(path) => Some(DotenvLoad::Loaded(path)),
            Err(e) if e.not_found() => None,
            Err(e) => Some(DotenvLoad::Failed(file, e)),
        })
        .collect()
}

/// Install the `tracing` subscriber. The filter comes from `RUST_LOG`,
/// defaulting to `warn`. Logs go to stderr.
pub fn init_tracing() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;
    Ok(())
}

/// Common startup for the binaries: load dotenv files, install logging,
/// then resolve the configuration from the environment and `args`.
pub fn setup(args: &ToolArgs) -> eyre::Result<ToolConfig> {
    let dotenv = load_dotenv();
    init_tracing()?;

    for load in dotenv {
        match load {
            DotenvLoad::Loaded(path) => debug!(path = %path.display(), "loaded dotenv file"),
            DotenvLoad::Failed(file, e) => warn!(file, %e, "failed to load dotenv file"),
        }
    }

    let config = args.apply(ToolConfig::from_env()?)?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DEFAULT_CAST_BIN, DEFAULT_VERSIONS_FILE};
    use aastar_constants::sepolia;
    use clap::Parser;
    use std::path::Path;
    use url::Url;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        tool: ToolArgs,
    }

    fn base() -> ToolConfig {
        ToolConfig::new(
            Url::parse(sepolia::PUBLIC_RPC_URL).unwrap(),
            PathBuf::from(DEFAULT_VERSIONS_FILE),
            DEFAULT_CAST_BIN.to_string(),
        )
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["tool"]);
        assert_eq!(cli.tool.apply(base()).unwrap(), base());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "tool",
            "--rpc-url",
            "http://localhost:8545",
            "--versions-file",
            "/tmp/versions.json",
            "--cast",
            "/opt/cast",
        ]);
        let config = cli.tool.apply(base()).unwrap();
        assert_eq!(config.rpc_url().as_str(), "http://localhost:8545/");
        assert_eq!(config.versions_file(), Path::new("/tmp/versions.json"));
        assert_eq!(config.cast_bin(), "/opt/cast");
    }

    #[test]
    fn bad_url_flag() {
        let cli = Cli::parse_from(["tool", "--rpc-url", "nope"]);
        let err = cli.tool.apply(base()).unwrap_err();
        assert!(matches!(err, ConfigError::Url { key, .. } if key == "--rpc-url"));
    }
}
