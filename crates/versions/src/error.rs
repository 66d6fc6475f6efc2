use std::{path::PathBuf, process::ExitStatus};

/// Errors returned by the chain query tool.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The tool could not be run at all. Fatal for a whole run.
    #[error("'{program}' command not found or not runnable: {reason}")]
    ToolUnavailable {
        /// The executable that was tried.
        program: String,
        /// Why it could not be run.
        reason: String,
    },
    /// The tool could not be spawned for a call.
    #[error("failed to spawn chain query: {0}")]
    Spawn(#[from] std::io::Error),
    /// The call exited unsuccessfully (revert, missing function, RPC error).
    #[error("chain query failed ({status}): {stderr}")]
    CallFailed {
        /// Exit status of the tool.
        status: ExitStatus,
        /// Trimmed standard error of the tool.
        stderr: String,
    },
    /// The tool printed something that is not UTF-8.
    #[error("chain query returned non-UTF-8 output")]
    NonUtf8(#[from] std::string::FromUtf8Error),
    /// The tool printed nothing usable.
    #[error("chain query returned no value")]
    EmptyOutput,
}

/// Errors reading or writing the contract versions file.
#[derive(Debug, thiserror::Error)]
pub enum VersionFileError {
    /// The file could not be read or the replacement could not be written.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a valid versions document.
    #[error("{}: {source}", path.display())]
    Parse {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: aastar_constants::VersionsError,
    },
    /// The document could not be serialized.
    #[error(transparent)]
    Serialize(aastar_constants::VersionsError),
    /// The replacement file could not be moved into place.
    #[error("failed to replace {}: {source}", path.display())]
    Persist {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: tempfile::PersistError,
    },
}
