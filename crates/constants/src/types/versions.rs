use crate::types::VersionsError;
use alloy::primitives::Address;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Declared version information for a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractVersion {
    /// Contract name, as it appears on chain.
    pub name: String,
    /// Semantic version string, e.g. `2.0.0`.
    pub version: String,
    /// Numeric version code, e.g. `20000`.
    pub version_code: u64,
    /// Deployment date.
    pub deployed_at: NaiveDate,
    /// Contract address.
    #[serde(with = "checksummed")]
    pub address: Address,
    /// Key features in this version. Descriptive only.
    #[serde(default)]
    pub features: Vec<String>,
    /// Fields not listed above. Kept as-is and written after `features`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContractVersion {
    /// True if the observed on-chain version string matches.
    pub fn version_matches(&self, observed: &str) -> bool {
        self.version == observed
    }

    /// True if the observed on-chain version code matches. The code is
    /// compared in its decimal string form.
    pub fn version_code_matches(&self, observed: &str) -> bool {
        self.version_code.to_string() == observed
    }
}

/// The full path of a record in a [`ContractVersions`] document.
///
/// Names are not unique across categories, so records are always
/// addressed by category and key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractPath {
    /// Category name, e.g. `core`.
    pub category: String,
    /// Key within the category, e.g. `registry`.
    pub key: String,
}

impl ContractPath {
    /// Create a new path.
    pub fn new(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self { category: category.into(), key: key.into() }
    }
}

impl std::fmt::Display for ContractPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

/// A keyed record within a category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct VersionEntry {
    /// Key within the category.
    pub key: String,
    /// The record.
    #[serde(flatten)]
    pub contract: ContractVersion,
}

/// A named, ordered group of records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct VersionCategory {
    /// Category name.
    pub name: String,
    /// Records in declaration order.
    pub contracts: Vec<VersionEntry>,
}

/// The contract versions document for one network.
///
/// This is the parsed form of `contract-versions.json`. Iteration order is
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ContractVersions {
    network: String,
    categories: Vec<VersionCategory>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ContractVersions {
    /// Create a new document. Fails if a category and key pair repeats.
    pub fn new(
        network: impl Into<String>,
        categories: Vec<VersionCategory>,
    ) -> Result<Self, VersionsError> {
        let doc = Self { network: network.into(), categories, extra: Map::new() };
        doc.check_paths()?;
        Ok(doc)
    }

    /// Parse a document from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, VersionsError> {
        let doc: Self = serde_json::from_str(s)?;
        doc.check_paths()?;
        Ok(doc)
    }

    /// Serialize the document as pretty JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, VersionsError> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    fn check_paths(&self) -> Result<(), VersionsError> {
        let mut categories = HashSet::new();
        for category in &self.categories {
            if !categories.insert(category.name.as_str()) {
                return Err(VersionsError::DuplicateCategory(category.name.clone()));
            }
        }

        let mut seen = HashSet::new();
        for (path, _) in self.entries() {
            if !seen.insert(path.clone()) {
                return Err(VersionsError::DuplicatePath(path.to_string()));
            }
        }
        Ok(())
    }

    /// Get the network name.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Get the categories.
    pub fn categories(&self) -> &[VersionCategory] {
        &self.categories
    }

    /// Iterate over every record with its path, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ContractPath, &ContractVersion)> {
        self.categories.iter().flat_map(|category| {
            category.contracts.iter().map(move |entry| {
                (ContractPath::new(&category.name, &entry.key), &entry.contract)
            })
        })
    }

    /// Iterate mutably over every record with its path, in declaration
    /// order.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (ContractPath, &mut ContractVersion)> {
        self.categories.iter_mut().flat_map(|VersionCategory { name, contracts }| {
            let name: &String = name;
            contracts
                .iter_mut()
                .map(move |entry| (ContractPath::new(name, &entry.key), &mut entry.contract))
        })
    }

    /// Iterate over every record, in declaration order.
    pub fn contracts(&self) -> impl Iterator<Item = &ContractVersion> {
        self.categories.iter().flat_map(|c| c.contracts.iter().map(|e| &e.contract))
    }

    /// Get a record by path.
    pub fn get(&self, path: &ContractPath) -> Option<&ContractVersion> {
        self.categories
            .iter()
            .find(|c| c.name == path.category)?
            .contracts
            .iter()
            .find(|e| e.key == path.key)
            .map(|e| &e.contract)
    }

    /// Get a mutable record by path.
    pub fn get_mut(&mut self, path: &ContractPath) -> Option<&mut ContractVersion> {
        self.categories
            .iter_mut()
            .find(|c| c.name == path.category)?
            .contracts
            .iter_mut()
            .find(|e| e.key == path.key)
            .map(|e| &mut e.contract)
    }

    /// Find the first record with an exact name.
    pub fn by_name(&self, name: &str) -> Option<&ContractVersion> {
        self.contracts().find(|c| c.name == name)
    }

    /// Find the first record with the given address.
    pub fn by_address(&self, address: Address) -> Option<&ContractVersion> {
        self.contracts().find(|c| c.address == address)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.contracts.len()).sum()
    }

    /// True if the document has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Summarize the document.
    pub fn summary(&self) -> V2Summary {
        V2Summary {
            total_contracts: self.len(),
            categories: self
                .categories
                .iter()
                .map(|c| (c.name.clone(), c.contracts.len()))
                .collect(),
            latest_deployment: self.contracts().map(|c| c.deployed_at).max(),
            all_contracts_have_version: self
                .contracts()
                .all(|c| c.features.iter().any(|f| f == "VERSION interface")),
        }
    }
}

/// Summary of a versions document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V2Summary {
    /// Number of records.
    pub total_contracts: usize,
    /// Record count per category, in declaration order.
    pub categories: Vec<(String, usize)>,
    /// Most recent deployment date.
    pub latest_deployment: Option<NaiveDate>,
    /// True if every record lists the VERSION interface among its features.
    pub all_contracts_have_version: bool,
}

/// Serde for addresses in EIP-55 checksummed form.
mod checksummed {
    use alloy::primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        address: &Address,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&address.to_checksum(None))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Address, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils;

    #[test]
    fn parse_and_lookup() {
        let doc = test_utils::versions();
        assert_eq!(doc.network(), "test");
        assert_eq!(doc.len(), 4);

        let path = ContractPath::new("core", "registry");
        let registry = doc.get(&path).unwrap();
        assert_eq!(registry.name, "Registry");
        assert_eq!(registry.version, "2.1.3");
        assert_eq!(registry.version_code, 20103);
        assert_eq!(registry.deployed_at, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(path.to_string(), "core.registry");

        let token_registry = doc.get(&ContractPath::new("tokens", "registry")).unwrap();
        assert_eq!(token_registry.name, "Registry");
        assert_eq!(token_registry.version, "1.0.0");
        assert_eq!(token_registry.address, test_utils::TOKEN_REGISTRY);
        assert!(doc.get(&ContractPath::new("tokens", "registryV2")).is_none());
        assert_eq!(doc.by_address(test_utils::REGISTRY).unwrap().name, "Registry");
    }

    #[test]
    fn entries_in_declaration_order() {
        let doc = test_utils::versions();
        let paths: Vec<_> = doc.entries().map(|(p, _)| p.to_string()).collect();
        assert_eq!(
            paths,
            ["core.registry", "core.registryV2", "tokens.registry", "tokens.mySBT"]
        );
    }

    #[test]
    fn mutation_is_scoped_to_path() {
        let mut doc = test_utils::versions();
        let before = doc.clone();
        let path = ContractPath::new("tokens", "registry");
        doc.get_mut(&path).unwrap().version = "9.9.9".to_string();

        for (p, contract) in doc.entries() {
            if p == path {
                assert_eq!(contract.version, "9.9.9");
            } else {
                assert_eq!(Some(contract), before.get(&p));
            }
        }
    }

    #[test]
    fn duplicate_paths_rejected() {
        let doc = test_utils::versions();
        let mut categories = doc.categories().to_vec();
        let dup = categories[0].contracts[0].clone();
        categories[0].contracts.push(dup);

        let err = ContractVersions::new("test", categories).unwrap_err();
        assert!(matches!(err, VersionsError::DuplicatePath(p) if p == "core.registry"));
    }

    #[test]
    fn duplicate_categories_rejected() {
        let doc = test_utils::versions();
        let mut categories = doc.categories().to_vec();
        let mut second_core = categories[0].clone();
        second_core.contracts.retain(|e| e.key == "registryV2");
        categories[0].contracts.retain(|e| e.key == "registry");
        categories.push(second_core);

        let err = ContractVersions::new("test", categories).unwrap_err();
        assert!(matches!(err, VersionsError::DuplicateCategory(c) if c == "core"));

        let json = test_utils::VERSIONS_JSON.replacen("\"name\": \"tokens\"", "\"name\": \"core\"", 1);
        let err = ContractVersions::from_json_str(&json).unwrap_err();
        assert!(matches!(err, VersionsError::DuplicateCategory(c) if c == "core"));
    }

    #[test]
    fn entries_mut_reaches_every_record() {
        let mut doc = test_utils::versions();
        for (_, contract) in doc.entries_mut() {
            contract.version_code += 1;
        }
        let before = test_utils::versions();
        for (path, contract) in doc.entries() {
            assert_eq!(contract.version_code, before.get(&path).unwrap().version_code + 1, "{path}");
        }
    }

    #[test]
    fn unknown_fields_survive_rewrite() {
        let json = test_utils::VERSIONS_JSON
            .replacen(
                "\"VERSION interface\"\n          ]\n",
                "\"VERSION interface\"\n          ],\n          \"notes\": \"audited\"\n",
                1,
            )
            .replacen("\n  ]\n}\n", "\n  ],\n  \"source\": \"deploy-2025-11\"\n}\n", 1);
        assert_ne!(json, test_utils::VERSIONS_JSON);

        let mut doc = ContractVersions::from_json_str(&json).unwrap();
        let path = ContractPath::new("core", "registry");
        assert_eq!(doc.get(&path).unwrap().extra["notes"], "audited");
        assert_eq!(doc.to_json_string().unwrap(), json);

        doc.get_mut(&path).unwrap().version_code = 20104;
        assert_eq!(doc.to_json_string().unwrap(), json.replacen("20103", "20104", 1));
    }

    #[test]
    fn serialization_is_stable() {
        let doc = test_utils::versions();
        let json = doc.to_json_string().unwrap();
        assert!(json.ends_with("}\n"));
        let reparsed = ContractVersions::from_json_str(&json).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(reparsed.to_json_string().unwrap(), json);
    }

    #[test]
    fn addresses_accept_any_case() {
        let json = test_utils::VERSIONS_JSON.replace(
            &test_utils::REGISTRY.to_checksum(None),
            &test_utils::REGISTRY.to_checksum(None).to_lowercase(),
        );
        let doc = ContractVersions::from_json_str(&json).unwrap();
        assert_eq!(doc, test_utils::versions());
    }

    #[test]
    fn version_comparison() {
        let doc = test_utils::versions();
        let registry = doc.by_name("Registry").unwrap();
        assert!(registry.version_matches("2.1.3"));
        assert!(!registry.version_matches("2.1.3 "));
        assert!(registry.version_code_matches("20103"));
        assert!(!registry.version_code_matches("020103"));
    }
}
