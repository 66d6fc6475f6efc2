use crate::types::{KnownNetworks, LookupError};
use alloy::primitives::Address;
use chrono::NaiveDate;
use std::str::FromStr;

/// The list of categories as a string.
const CATEGORIES: &str = "core, tokens, testTokens, paymaster, monitoring, official, communities";

/// Error type for parsing a [`ContractCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract category {0}. known categories: {CATEGORIES}")]
pub struct ParseCategoryError(String);

/// Contract categories in a network table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContractCategory {
    /// SuperPaymaster V2, Registry, GToken, GTokenStaking, PaymasterFactory.
    Core,
    /// xPNTsFactory, MySBT.
    Tokens,
    /// Mock tokens for development (USDT, aPNTs, bPNTs).
    TestTokens,
    /// PaymasterV4_1 (AOA mode).
    Paymaster,
    /// DVT and BLS monitoring.
    Monitoring,
    /// Official dependencies such as the EntryPoint.
    Official,
    /// Registered communities. Holds records rather than addresses.
    Communities,
}

impl ContractCategory {
    /// The key of the category in the contract table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Tokens => "tokens",
            Self::TestTokens => "testTokens",
            Self::Paymaster => "paymaster",
            Self::Monitoring => "monitoring",
            Self::Official => "official",
            Self::Communities => "communities",
        }
    }
}

impl std::fmt::Display for ContractCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "tokens" => Ok(Self::Tokens),
            "testTokens" => Ok(Self::TestTokens),
            "paymaster" => Ok(Self::Paymaster),
            "monitoring" => Ok(Self::Monitoring),
            "official" => Ok(Self::Official),
            "communities" => Ok(Self::Communities),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// An ordered table of named contract addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressBook {
    entries: &'static [(&'static str, Address)],
}

impl AddressBook {
    /// Create a new address book.
    pub const fn new(entries: &'static [(&'static str, Address)]) -> Self {
        Self { entries }
    }

    /// Get the address for an exact name.
    pub fn get(&self, name: &str) -> Option<Address> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, address)| *address)
    }

    /// Iterate over the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Address)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A community registered for development and testing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Community {
    owner: Address,
    gas_token: Address,
    ens_name: &'static str,
    name: &'static str,
    /// GToken staked in the Registry, in whole tokens.
    stake: &'static str,
}

impl Community {
    /// Create a new community record.
    pub const fn new(
        owner: Address,
        gas_token: Address,
        ens_name: &'static str,
        name: &'static str,
        stake: &'static str,
    ) -> Self {
        Self { owner, gas_token, ens_name, name, stake }
    }

    /// Get the community owner.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Get the community gas token.
    pub const fn gas_token(&self) -> Address {
        self.gas_token
    }

    /// Get the ENS name.
    pub const fn ens_name(&self) -> &'static str {
        self.ens_name
    }

    /// Get the display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the staked GToken amount.
    pub const fn stake(&self) -> &'static str {
        self.stake
    }
}

/// Contract addresses and deployment metadata for one network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkContracts {
    network: KnownNetworks,
    chain_id: u64,
    core: AddressBook,
    tokens: AddressBook,
    test_tokens: AddressBook,
    paymaster: AddressBook,
    monitoring: AddressBook,
    official: AddressBook,
    communities: &'static [(&'static str, Community)],
    last_updated: &'static str,
    deployment_dates: &'static [(&'static str, &'static str)],
}

impl NetworkContracts {
    /// Create a new contract table.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        network: KnownNetworks,
        chain_id: u64,
        core: AddressBook,
        tokens: AddressBook,
        test_tokens: AddressBook,
        paymaster: AddressBook,
        monitoring: AddressBook,
        official: AddressBook,
        communities: &'static [(&'static str, Community)],
        last_updated: &'static str,
        deployment_dates: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            network,
            chain_id,
            core,
            tokens,
            test_tokens,
            paymaster,
            monitoring,
            official,
            communities,
            last_updated,
            deployment_dates,
        }
    }

    /// Get the hard-coded sepolia contract table.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::CONTRACTS
    }

    /// Get the hard-coded local test contract table.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::CONTRACTS
    }

    /// Get the contract table for a known network.
    pub const fn for_network(network: KnownNetworks) -> Self {
        match network {
            KnownNetworks::Sepolia => Self::sepolia(),
            #[cfg(any(test, feature = "test-utils"))]
            KnownNetworks::Test => Self::test(),
        }
    }

    /// Get the network this table belongs to.
    pub const fn network(&self) -> KnownNetworks {
        self.network
    }

    /// Get the chain ID of the network.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the core system contracts.
    pub const fn core(&self) -> AddressBook {
        self.core
    }

    /// Get the token system contracts.
    pub const fn tokens(&self) -> AddressBook {
        self.tokens
    }

    /// Get the test token contracts.
    pub const fn test_tokens(&self) -> AddressBook {
        self.test_tokens
    }

    /// Get the paymaster contracts.
    pub const fn paymaster(&self) -> AddressBook {
        self.paymaster
    }

    /// Get the monitoring contracts.
    pub const fn monitoring(&self) -> AddressBook {
        self.monitoring
    }

    /// Get the official dependencies.
    pub const fn official(&self) -> AddressBook {
        self.official
    }

    /// Get the registered communities.
    pub const fn communities(&self) -> &'static [(&'static str, Community)] {
        self.communities
    }

    /// Get the address table for a category. `None` for
    /// [`ContractCategory::Communities`], which holds records.
    pub const fn address_book(&self, category: ContractCategory) -> Option<AddressBook> {
        match category {
            ContractCategory::Core => Some(self.core),
            ContractCategory::Tokens => Some(self.tokens),
            ContractCategory::TestTokens => Some(self.test_tokens),
            ContractCategory::Paymaster => Some(self.paymaster),
            ContractCategory::Monitoring => Some(self.monitoring),
            ContractCategory::Official => Some(self.official),
            ContractCategory::Communities => None,
        }
    }

    /// Get a contract address by category and exact name.
    pub fn contract(&self, category: ContractCategory, name: &str) -> Result<Address, LookupError> {
        let book = self
            .address_book(category)
            .ok_or(LookupError::CategoryNotFound { category, network: self.network })?;
        book.get(name).ok_or_else(|| LookupError::ContractNotFound {
            name: name.to_string(),
            category,
            network: self.network,
        })
    }

    /// Get a community by key.
    pub fn community(&self, key: &str) -> Result<&'static Community, LookupError> {
        self.communities.iter().find(|(k, _)| *k == key).map(|(_, c)| c).ok_or_else(|| {
            LookupError::CommunityNotFound { name: key.to_string(), network: self.network }
        })
    }

    /// Every addressed contract, in category then declaration order.
    pub fn all_addresses(&self) -> impl Iterator<Item = (ContractCategory, &'static str, Address)> {
        [
            (ContractCategory::Core, self.core),
            (ContractCategory::Tokens, self.tokens),
            (ContractCategory::TestTokens, self.test_tokens),
            (ContractCategory::Paymaster, self.paymaster),
            (ContractCategory::Monitoring, self.monitoring),
            (ContractCategory::Official, self.official),
        ]
        .into_iter()
        .flat_map(|(category, book)| {
            book.entries.iter().map(move |(name, address)| (category, *name, *address))
        })
    }

    /// Get the PaymasterV4_1 address (AOA mode).
    pub fn paymaster_v4_1(&self) -> Option<Address> {
        self.paymaster.get("paymasterV4_1")
    }

    /// Get the SuperPaymaster V2 address (AOA+ mode).
    pub fn super_paymaster_v2(&self) -> Option<Address> {
        self.core.get("superPaymasterV2")
    }

    /// Get the EntryPoint v0.7 address.
    pub fn entry_point(&self) -> Option<Address> {
        self.official.get("entryPoint")
    }

    /// Get the date the contract table was last updated.
    pub fn last_updated(&self) -> Option<NaiveDate> {
        parse_date(self.last_updated)
    }

    /// Get the deployment date of a contract by exact name.
    pub fn deployment_date(&self, name: &str) -> Option<NaiveDate> {
        self.deployment_dates.iter().find(|(n, _)| *n == name).and_then(|(_, d)| parse_date(d))
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
