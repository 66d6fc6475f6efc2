//! On-chain version reconciliation for AAStar contracts.
//!
//! Reads `VERSION` / `VERSION_CODE` from deployed contracts through an
//! external chain query tool (`cast`), compares them with the declared
//! versions in `contract-versions.json`, and either reports the differences
//! ([`Reporter`]) or updates the file ([`Reconciler`]).
//!
//! Everything runs sequentially on the calling thread. Each contract costs
//! two blocking subprocess calls.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Shared command-line setup for the binaries.
pub mod cli;

mod config;
pub use config::{
    env_utils, ConfigError, ToolConfig, CAST_BIN_ENV, DEFAULT_CAST_BIN, DEFAULT_VERSIONS_FILE,
    RPC_URL_ENV, VERSIONS_FILE_ENV,
};

mod error;
pub use error::{ReaderError, VersionFileError};

mod file;
pub use file::VersionFile;

/// Console output helpers.
pub mod output;

mod reader;
pub use reader::{parse_version, parse_version_code, Cast, OnChainVersion, VersionSource};

mod reconcile;
pub use reconcile::{ReconcileEntry, ReconcileOutcome, ReconcileStatus, Reconciler, VersionUpdate};

mod report;
pub use report::{Comparison, Reporter, VersionReport};
