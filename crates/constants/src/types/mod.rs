mod chains;
pub use chains::{KnownNetworks, ParseNetworkError};

mod community;
pub use community::{
    all_community_configs, community_config, is_registered_community, CommunityConfig, NodeType,
    ParseNodeTypeError,
};

mod contracts;
pub use contracts::{AddressBook, Community, ContractCategory, NetworkContracts, ParseCategoryError};

mod error;
pub use error::{LookupError, VersionsError};

mod network;
pub use network::{NativeCurrency, NetworkConstants};

mod versions;
pub use versions::{
    ContractPath, ContractVersion, ContractVersions, V2Summary, VersionCategory, VersionEntry,
};
