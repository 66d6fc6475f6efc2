use std::str::FromStr;

/// The list of known networks as a string.
#[cfg(not(any(test, feature = "test-utils")))]
const KNOWN_NETWORKS: &str = "sepolia";
#[cfg(any(test, feature = "test-utils"))]
const KNOWN_NETWORKS: &str = "sepolia, test";

/// Error type for parsing a network from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network {0} is not supported. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks with AAStar deployments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownNetworks {
    /// Sepolia testnet.
    Sepolia,
    /// Local test network.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownNetworks {
    /// All known networks.
    #[cfg(not(any(test, feature = "test-utils")))]
    pub const fn all() -> &'static [Self] {
        &[Self::Sepolia]
    }

    /// All known networks.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn all() -> &'static [Self] {
        &[Self::Sepolia, Self::Test]
    }

    /// The name of the network, as used for lookups.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sepolia => "sepolia",
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => "test",
        }
    }
}

impl std::fmt::Display for KnownNetworks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "sepolia" => Ok(Self::Sepolia),
            _ => Err(ParseNetworkError::NetworkNotSupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_known_networks() {
        assert_eq!("sepolia".parse::<KnownNetworks>(), Ok(KnownNetworks::Sepolia));
        assert_eq!("test".parse::<KnownNetworks>(), Ok(KnownNetworks::Test));

        let err = "mainnet".parse::<KnownNetworks>().unwrap_err();
        assert_eq!(err, ParseNetworkError::NetworkNotSupported("mainnet".to_string()));
        assert!(err.to_string().contains("sepolia, test"));
    }

    #[test]
    fn names_match_exactly() {
        for name in ["Sepolia", "SEPOLIA", " sepolia", "sepolia\n"] {
            assert_eq!(
                name.parse::<KnownNetworks>(),
                Err(ParseNetworkError::NetworkNotSupported(name.to_string()))
            );
            assert!(!crate::is_network_supported(name));
        }
        assert!(crate::is_network_supported("sepolia"));
    }

    #[test]
    fn display_roundtrips() {
        for network in KnownNetworks::all() {
            assert_eq!(network.to_string().parse::<KnownNetworks>().unwrap(), *network);
        }
    }
}
