//! The VERSION interface implemented by AAStar V2 contracts.
//!
//! A versioned contract exposes a human-readable semantic version string and
//! a parallel integer encoding, e.g. `2.1.4` and `20104`.

#![allow(missing_docs)]

alloy::sol!(
    #[derive(Debug, PartialEq, Eq)]
    interface IVersioned {
        function VERSION() external view returns (string);
        function VERSION_CODE() external view returns (uint256);
    }
);

pub use IVersioned::{VERSIONCall, VERSION_CODECall};

/// `cast call` signature for [`VERSIONCall`], with its return type.
pub const VERSION_CALL: &str = "VERSION()(string)";

/// `cast call` signature for [`VERSION_CODECall`], with its return type.
pub const VERSION_CODE_CALL: &str = "VERSION_CODE()(uint256)";
