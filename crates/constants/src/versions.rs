//! The bundled contract versions document and lookups over it.

use crate::{ContractVersion, ContractVersions, V2Summary};
use alloy::primitives::Address;
use chrono::NaiveDate;
use std::sync::LazyLock;

/// The raw contents of `data/contract-versions.json` at build time.
pub const BUNDLED_VERSIONS_JSON: &str = include_str!("../data/contract-versions.json");

static BUNDLED: LazyLock<ContractVersions> = LazyLock::new(|| {
    ContractVersions::from_json_str(BUNDLED_VERSIONS_JSON)
        .expect("bundled contract-versions.json is invalid")
});

/// Get the bundled V2 contract versions for Sepolia.
pub fn bundled_versions() -> &'static ContractVersions {
    &BUNDLED
}

/// Get all V2 contracts with a VERSION interface, in declaration order.
pub fn all_v2_contracts() -> Vec<&'static ContractVersion> {
    BUNDLED.contracts().collect()
}

/// Get a V2 contract by exact name.
pub fn v2_contract_by_name(name: &str) -> Option<&'static ContractVersion> {
    BUNDLED.by_name(name)
}

/// Get a V2 contract by address. The address is compared case-insensitively;
/// unparseable input is not found.
pub fn v2_contract_by_address(address: &str) -> Option<&'static ContractVersion> {
    let address: Address = address.trim().parse().ok()?;
    BUNDLED.by_address(address)
}

/// True if the address is a V2 contract.
pub fn is_v2_contract(address: &str) -> bool {
    v2_contract_by_address(address).is_some()
}

/// Get all V2 contracts deployed on a date.
pub fn v2_contracts_by_date(date: NaiveDate) -> Vec<&'static ContractVersion> {
    BUNDLED.contracts().filter(|c| c.deployed_at == date).collect()
}

/// Summarize the bundled V2 contracts.
pub fn v2_summary() -> V2Summary {
    BUNDLED.summary()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{sepolia, ContractCategory, NetworkContracts};

    #[test]
    fn bundled_roundtrips_byte_for_byte() {
        let json = bundled_versions().to_json_string().unwrap();
        assert_eq!(json, BUNDLED_VERSIONS_JSON);
    }

    #[test]
    fn bundled_declaration_order() {
        let names: Vec<_> = all_v2_contracts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "GToken",
                "SuperPaymasterV2",
                "Registry",
                "GTokenStaking",
                "PaymasterFactory",
                "xPNTsFactory",
                "MySBT",
                "aPNTs",
                "bPNTs",
                "DVTValidator",
                "BLSAggregator",
            ]
        );
    }

    #[test]
    fn lookups() {
        let registry = v2_contract_by_name("Registry").unwrap();
        assert_eq!(registry.version, "2.1.4");
        assert_eq!(registry.version_code, 20104);
        assert_eq!(registry.address, sepolia::REGISTRY);
        assert!(v2_contract_by_name("registry").is_none());

        let lower = "0xf384c592d5258c91805128291c5d4c069dd30ca6";
        assert_eq!(v2_contract_by_address(lower), Some(registry));
        assert!(is_v2_contract("0xF384C592D5258C91805128291C5D4C069DD30CA6"));
        assert!(!is_v2_contract(&sepolia::ENTRY_POINT.to_string()));
        assert!(!is_v2_contract("0xnothex"));

        let nov_2 = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        assert_eq!(v2_contracts_by_date(nov_2), vec![registry]);
        let nov_1 = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        assert_eq!(v2_contracts_by_date(nov_1).len(), 10);
    }

    #[test]
    fn summary() {
        let summary = v2_summary();
        assert_eq!(summary.total_contracts, 11);
        assert_eq!(
            summary.categories,
            vec![
                ("core".to_string(), 5),
                ("tokens".to_string(), 2),
                ("testTokens".to_string(), 2),
                ("monitoring".to_string(), 2),
            ]
        );
        assert_eq!(summary.latest_deployment, NaiveDate::from_ymd_opt(2025, 11, 2));
        // PaymasterFactory does not list the VERSION interface
        assert!(!summary.all_contracts_have_version);
    }

    #[test]
    fn versions_agree_with_address_table() {
        let contracts = NetworkContracts::sepolia();
        for (path, record) in bundled_versions().entries() {
            let Ok(category) = path.category.parse::<ContractCategory>() else {
                panic!("unknown category {}", path.category);
            };
            // bPNTs was redeployed; the versions file tracks the older deployment
            if path.key == "bPNTs" {
                continue;
            }
            assert_eq!(contracts.contract(category, &path.key), Ok(record.address), "{path}");
        }
    }
}
