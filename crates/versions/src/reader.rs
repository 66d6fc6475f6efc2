use crate::{ReaderError, ToolConfig};
use aastar_constants::abi::{VERSION_CALL, VERSION_CODE_CALL};
use alloy::primitives::Address;
use std::process::Command;
use tracing::{debug, instrument};
use url::Url;

/// The VERSION data observed on chain for one address.
///
/// A `None` field means the read failed for any reason: revert, missing
/// function, bad address or an unreachable endpoint. Causes are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainVersion {
    /// The queried address.
    pub address: Address,
    /// Result of `VERSION()`.
    pub version: Option<String>,
    /// Result of `VERSION_CODE()`, as a decimal string.
    pub version_code: Option<String>,
}

impl OnChainVersion {
    /// A sample where both reads failed.
    pub const fn missing(address: Address) -> Self {
        Self { address, version: None, version_code: None }
    }
}

/// A source of on-chain VERSION data.
pub trait VersionSource {
    /// Fetch both values for an address. Never fails; failed reads are
    /// `None`.
    fn fetch(&self, address: Address) -> OnChainVersion;
}

impl<T: VersionSource + ?Sized> VersionSource for &T {
    fn fetch(&self, address: Address) -> OnChainVersion {
        (**self).fetch(address)
    }
}

/// Normalize `cast` output for a `string` return: trimmed, with quotes
/// removed. `None` if nothing is left.
pub fn parse_version(raw: &str) -> Option<String> {
    let version = raw.trim().replace('"', "");
    (!version.is_empty()).then_some(version)
}

/// Normalize `cast` output for a `uint256` return: the first token, since
/// large values are printed as `20104 [2.01e4]`.
pub fn parse_version_code(raw: &str) -> Option<String> {
    raw.split_whitespace().next().map(str::to_string)
}

/// Reads VERSION data by running `cast call` against an RPC endpoint.
#[derive(Debug, Clone)]
pub struct Cast {
    program: String,
    rpc_url: Url,
}

impl Cast {
    /// Create a new reader for the given executable and endpoint.
    pub fn new(program: impl Into<String>, rpc_url: Url) -> Self {
        Self { program: program.into(), rpc_url }
    }

    /// Create a reader from resolved tool configuration.
    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(config.cast_bin(), config.rpc_url().clone())
    }

    /// Get the endpoint.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Check that the tool can be run, returning its version line.
    #[instrument(skip(self), fields(program = %self.program))]
    pub fn ensure_available(&self) -> Result<String, ReaderError> {
        let unavailable = |reason: String| ReaderError::ToolUnavailable {
            program: self.program.clone(),
            reason,
        };

        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| unavailable(e.to_string()))?;
        if !output.status.success() {
            return Err(unavailable(format!("`--version` exited with {}", output.status)));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(%version, "chain query tool available");
        Ok(version)
    }

    /// Run `cast call <address> <signature> --rpc-url <url>` and return its
    /// raw standard output.
    #[instrument(skip(self))]
    pub fn call(&self, address: Address, signature: &str) -> Result<String, ReaderError> {
        let output = Command::new(&self.program)
            .arg("call")
            .arg(address.to_string())
            .arg(signature)
            .arg("--rpc-url")
            .arg(self.rpc_url.as_str())
            .output()?;

        if !output.status.success() {
            return Err(ReaderError::CallFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(Into::into)
    }

    /// Read `VERSION()`.
    pub fn version(&self, address: Address) -> Result<String, ReaderError> {
        parse_version(&self.call(address, VERSION_CALL)?).ok_or(ReaderError::EmptyOutput)
    }

    /// Read `VERSION_CODE()`.
    pub fn version_code(&self, address: Address) -> Result<String, ReaderError> {
        parse_version_code(&self.call(address, VERSION_CODE_CALL)?).ok_or(ReaderError::EmptyOutput)
    }
}

impl VersionSource for Cast {
    fn fetch(&self, address: Address) -> OnChainVersion {
        let version = self
            .version(address)
            .inspect_err(|e| debug!(%address, %e, "failed to read VERSION"))
            .ok();
        let version_code = self
            .version_code(address)
            .inspect_err(|e| debug!(%address, %e, "failed to read VERSION_CODE"))
            .ok();
        OnChainVersion { address, version, version_code }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[test]
    fn version_output() {
        assert_eq!(parse_version("\"2.1.4\"\n"), Some("2.1.4".to_string()));
        assert_eq!(parse_version("  2.0.0  "), Some("2.0.0".to_string()));
        assert_eq!(parse_version("\"\"\n"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn version_code_output() {
        assert_eq!(parse_version_code("20104\n"), Some("20104".to_string()));
        assert_eq!(parse_version_code("  20104 [2.01e4]\n"), Some("20104".to_string()));
        assert_eq!(parse_version_code(" \n"), None);
    }

    #[test]
    fn missing_tool_is_unavailable() {
        let cast = Cast::new(
            "definitely-not-a-real-cast-binary",
            Url::parse("http://localhost:8545").unwrap(),
        );
        let err = cast.ensure_available().unwrap_err();
        assert!(matches!(
            err,
            ReaderError::ToolUnavailable { ref program, .. } if program == "definitely-not-a-real-cast-binary"
        ));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logs_at(level: Level, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn failed_reads_log_below_warn() {
        let cast = Cast::new(
            "definitely-not-a-real-cast-binary",
            Url::parse("http://localhost:8545").unwrap(),
        );
        let address = Address::repeat_byte(0x11);

        assert_eq!(logs_at(Level::WARN, || drop(cast.fetch(address))), "");
        let debug = logs_at(Level::DEBUG, || drop(cast.fetch(address)));
        assert!(debug.contains("failed to read VERSION"));
        assert!(debug.contains("failed to read VERSION_CODE"));
    }

    #[test]
    fn spawn_failure_is_missing_sample() {
        let cast = Cast::new(
            "definitely-not-a-real-cast-binary",
            Url::parse("http://localhost:8545").unwrap(),
        );
        let address = Address::repeat_byte(0x11);
        assert!(matches!(cast.version(address), Err(ReaderError::Spawn(_))));
        assert_eq!(cast.fetch(address), OnChainVersion::missing(address));
    }
}
