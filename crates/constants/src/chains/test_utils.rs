//! Constants for a local test network.
//!
//! The versions fixture deliberately contains a name that prefixes another
//! (`Registry` / `RegistryV2`) and the same name in two categories.

use crate::{
    AddressBook, Community, ContractVersions, KnownNetworks, NativeCurrency, NetworkConstants,
    NetworkContracts,
};
use alloy::primitives::Address;

/// Test chain id.
pub const CHAIN_ID: u64 = 31337;
/// Name for the test network.
pub const NAME: &str = "Test";
/// Test RPC URL.
pub const RPC_URL: &str = "http://localhost:8545";
/// Test block explorer URL.
pub const BLOCK_EXPLORER: &str = "http://localhost:4000";

/// Test address for the registry.
pub const REGISTRY: Address = Address::repeat_byte(0x11);
/// Test address for the second registry.
pub const REGISTRY_V2: Address = Address::repeat_byte(0x22);
/// Test address for the token-category registry.
pub const TOKEN_REGISTRY: Address = Address::repeat_byte(0x33);
/// Test address for the SBT.
pub const MY_SBT: Address = Address::repeat_byte(0x44);
/// Test address for the entry point.
pub const ENTRY_POINT: Address = Address::repeat_byte(0x55);
/// Test address for the community owner.
pub const COMMUNITY_OWNER: Address = Address::repeat_byte(0x66);
/// Test address for the community gas token.
pub const GAS_TOKEN: Address = Address::repeat_byte(0x77);

/// Test network constants.
pub const NETWORK: NetworkConstants = NetworkConstants::new(
    CHAIN_ID,
    NAME,
    RPC_URL,
    BLOCK_EXPLORER,
    NativeCurrency::new("Test ETH", "ETH", 18),
);

/// Test contract table.
pub const CONTRACTS: NetworkContracts = NetworkContracts::new(
    KnownNetworks::Test,
    CHAIN_ID,
    AddressBook::new(&[("registry", REGISTRY), ("registryV2", REGISTRY_V2)]),
    AddressBook::new(&[("registry", TOKEN_REGISTRY), ("mySBT", MY_SBT)]),
    AddressBook::new(&[]),
    AddressBook::new(&[]),
    AddressBook::new(&[]),
    AddressBook::new(&[("entryPoint", ENTRY_POINT)]),
    &[("test", Community::new(COMMUNITY_OWNER, GAS_TOKEN, "test.eth", "Test", "1"))],
    "2025-11-01",
    &[("registry", "2025-11-01")],
);

/// Versions fixture, in the same layout as `data/contract-versions.json`.
pub const VERSIONS_JSON: &str = r#"{
  "network": "test",
  "categories": [
    {
      "name": "core",
      "contracts": [
        {
          "key": "registry",
          "name": "Registry",
          "version": "2.1.3",
          "versionCode": 20103,
          "deployedAt": "2025-11-01",
          "address": "0x1111111111111111111111111111111111111111",
          "features": [
            "VERSION interface"
          ]
        },
        {
          "key": "registryV2",
          "name": "RegistryV2",
          "version": "2.0.0",
          "versionCode": 20000,
          "deployedAt": "2025-11-01",
          "address": "0x2222222222222222222222222222222222222222",
          "features": []
        }
      ]
    },
    {
      "name": "tokens",
      "contracts": [
        {
          "key": "registry",
          "name": "Registry",
          "version": "1.0.0",
          "versionCode": 10000,
          "deployedAt": "2025-10-01",
          "address": "0x3333333333333333333333333333333333333333",
          "features": []
        },
        {
          "key": "mySBT",
          "name": "MySBT",
          "version": "2.4.0",
          "versionCode": 20400,
          "deployedAt": "2025-11-01",
          "address": "0x4444444444444444444444444444444444444444",
          "features": [
            "VERSION interface",
            "Soulbound token (SBT)"
          ]
        }
      ]
    }
  ]
}
"#;

/// Parse the versions fixture.
pub fn versions() -> ContractVersions {
    ContractVersions::from_json_str(VERSIONS_JSON).expect("test fixture is valid")
}
