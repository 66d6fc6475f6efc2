//! Integration tests for [`Cast`], against a stand-in `cast` script.
#![cfg(unix)]

use aastar_versions::{Cast, OnChainVersion, ReaderError, VersionSource};
use alloy::primitives::Address;
use std::{fs, os::unix::fs::PermissionsExt, path::PathBuf};
use tempfile::TempDir;
use url::Url;

const KNOWN: Address = Address::repeat_byte(0x11);
const UNKNOWN: Address = Address::repeat_byte(0x99);

/// Answers `VERSION()` / `VERSION_CODE()` for [`KNOWN`] the way foundry's
/// `cast` prints them, and reverts for anything else.
const SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "cast 0.2.0 (fake)"
  exit 0
fi
if [ "$1" != "call" ] || [ "$4" != "--rpc-url" ] || [ "$5" != "http://localhost:8545/" ]; then
  echo "bad arguments: $*" >&2
  exit 2
fi
case "$2" in
  0x1111111111111111111111111111111111111111) ;;
  *) echo "Error: execution reverted" >&2; exit 1 ;;
esac
case "$3" in
  "VERSION()(string)") echo '"2.1.4"' ;;
  "VERSION_CODE()(uint256)") echo "20104 [2.01e4]" ;;
  *) echo "Error: unknown function" >&2; exit 1 ;;
esac
"#;

fn write_script(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("cast");
    fs::write(&path, SCRIPT).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

// One test per binary: spawning while another thread still holds the
// script open for writing fails with ETXTBSY.
#[test]
fn fake_cast() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir);
    let cast = Cast::new(path.to_string_lossy(), Url::parse("http://localhost:8545").unwrap());

    assert_eq!(cast.ensure_available().unwrap(), "cast 0.2.0 (fake)");

    assert_eq!(cast.version(KNOWN).unwrap(), "2.1.4");
    assert_eq!(cast.version_code(KNOWN).unwrap(), "20104");
    assert_eq!(
        cast.fetch(KNOWN),
        OnChainVersion {
            address: KNOWN,
            version: Some("2.1.4".to_string()),
            version_code: Some("20104".to_string()),
        }
    );

    let err = cast.version(UNKNOWN).unwrap_err();
    assert!(matches!(&err, ReaderError::CallFailed { stderr, .. } if stderr == "Error: execution reverted"));
    assert_eq!(cast.fetch(UNKNOWN), OnChainVersion::missing(UNKNOWN));
}
