use crate::types::{KnownNetworks, ParseNetworkError};
use std::str::FromStr;

/// The native currency of a network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    name: &'static str,
    symbol: &'static str,
    decimals: u8,
}

impl NativeCurrency {
    /// Create a new native currency description.
    pub const fn new(name: &'static str, symbol: &'static str, decimals: u8) -> Self {
        Self { name, symbol, decimals }
    }

    /// Get the currency name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the currency ticker.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the currency decimals.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Network metadata: chain id, display name, and the endpoints tooling
/// should use by default.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkConstants {
    chain_id: u64,
    name: &'static str,
    rpc_url: &'static str,
    block_explorer: &'static str,
    native_currency: NativeCurrency,
}

impl NetworkConstants {
    /// Create a new set of network constants.
    pub const fn new(
        chain_id: u64,
        name: &'static str,
        rpc_url: &'static str,
        block_explorer: &'static str,
        native_currency: NativeCurrency,
    ) -> Self {
        Self { chain_id, name, rpc_url, block_explorer, native_currency }
    }

    /// Get the hard-coded sepolia network constants.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::NETWORK
    }

    /// Get the hard-coded local test network constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::NETWORK
    }

    /// Get the constants for a known network.
    pub const fn for_network(network: KnownNetworks) -> Self {
        match network {
            KnownNetworks::Sepolia => Self::sepolia(),
            #[cfg(any(test, feature = "test-utils"))]
            KnownNetworks::Test => Self::test(),
        }
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the default RPC URL.
    pub const fn rpc_url(&self) -> &'static str {
        self.rpc_url
    }

    /// Get the block explorer URL.
    pub const fn block_explorer(&self) -> &'static str {
        self.block_explorer
    }

    /// Get the native currency.
    pub const fn native_currency(&self) -> NativeCurrency {
        self.native_currency
    }
}

impl FromStr for NetworkConstants {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::for_network)
    }
}
