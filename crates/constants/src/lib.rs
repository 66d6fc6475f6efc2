//! AAStar shared configuration constants.
//!
//! This crate contains the static configuration shared by AAStar tooling:
//! contract addresses grouped by network and category, the declared
//! `VERSION` / `VERSION_CODE` of every V2 contract, network endpoints,
//! community records, branding, and the on-chain VERSION interface.
//!
//! Everything here is read-only. The contract versions are bundled from
//! `data/contract-versions.json`, which is the file the `sync-versions`
//! tool rewrites.

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

/// The on-chain VERSION interface.
pub mod abi;

/// Branding and external links.
pub mod branding;

mod chains;
pub use chains::sepolia;
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

/// Economic and testing constants.
pub mod economics;

mod types;
pub use types::{
    all_community_configs, community_config, is_registered_community, AddressBook, Community,
    CommunityConfig, ContractCategory, ContractPath, ContractVersion, ContractVersions,
    KnownNetworks, LookupError, NativeCurrency, NetworkConstants, NetworkContracts, NodeType,
    ParseCategoryError, ParseNetworkError, ParseNodeTypeError, V2Summary, VersionCategory,
    VersionEntry, VersionsError,
};

mod versions;
pub use versions::{
    all_v2_contracts, bundled_versions, is_v2_contract, v2_contract_by_address,
    v2_contract_by_name, v2_contracts_by_date, v2_summary, BUNDLED_VERSIONS_JSON,
};

/// Get the network constants for a known network.
pub const fn network(network: KnownNetworks) -> NetworkConstants {
    NetworkConstants::for_network(network)
}

/// Get the default RPC URL for a known network.
pub const fn rpc_url(network: KnownNetworks) -> &'static str {
    NetworkConstants::for_network(network).rpc_url()
}

/// Get the block explorer URL for a known network.
pub const fn block_explorer(network: KnownNetworks) -> &'static str {
    NetworkConstants::for_network(network).block_explorer()
}

/// Get the contract table for a known network.
pub const fn contracts(network: KnownNetworks) -> NetworkContracts {
    NetworkContracts::for_network(network)
}

/// Get a contract address by network, category and name.
///
/// Names are matched exactly. Fails if the category has no address table or
/// the name is not in it.
pub fn contract(
    network: KnownNetworks,
    category: ContractCategory,
    name: &str,
) -> Result<alloy::primitives::Address, LookupError> {
    contracts(network).contract(category, name)
}

/// All networks that have a contract table.
pub fn supported_networks() -> Vec<KnownNetworks> {
    KnownNetworks::all().to_vec()
}

/// True if the name is a supported network. Names are matched exactly.
pub fn is_network_supported(name: &str) -> bool {
    name.parse::<KnownNetworks>().is_ok()
}
