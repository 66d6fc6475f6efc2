/// Sepolia testnet constants.
pub mod sepolia;

/// Test utilities for networks.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
