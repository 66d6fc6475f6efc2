use crate::types::{ContractCategory, KnownNetworks};

/// Error type for lookups into the contract tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The category has no address table on the network.
    #[error("category '{category}' not found in network '{network}'")]
    CategoryNotFound {
        /// The requested category.
        category: ContractCategory,
        /// The network that was searched.
        network: KnownNetworks,
    },
    /// The contract name is not in the category.
    #[error("contract '{name}' not found in category '{category}' for network '{network}'")]
    ContractNotFound {
        /// The requested contract name.
        name: String,
        /// The category that was searched.
        category: ContractCategory,
        /// The network that was searched.
        network: KnownNetworks,
    },
    /// The community is not registered on the network.
    #[error("community '{name}' not found in network '{network}'")]
    CommunityNotFound {
        /// The requested community key.
        name: String,
        /// The network that was searched.
        network: KnownNetworks,
    },
}

/// Error type for loading a contract versions document.
#[derive(Debug, thiserror::Error)]
pub enum VersionsError {
    /// The document is not valid JSON or does not match the schema.
    #[error("failed to parse contract versions: {0}")]
    Json(#[from] serde_json::Error),
    /// The same category name appears twice.
    #[error("duplicate contract category: {0}")]
    DuplicateCategory(String),
    /// The same category and key appear twice.
    #[error("duplicate contract path: {0}")]
    DuplicatePath(String),
}
