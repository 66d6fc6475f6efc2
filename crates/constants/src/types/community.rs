use alloy::primitives::Address;

/// Error returned when a byte is not a known [`NodeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown node type {0}")]
pub struct ParseNodeTypeError(u8);

/// The kind of node a community operates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    /// AOA independent Paymaster.
    PaymasterAoa = 0,
    /// SuperPaymaster v2 shared mode.
    PaymasterSuper = 1,
    /// Community computation node.
    Anode = 2,
    /// Key Management Service node.
    Kms = 3,
}

impl TryFrom<u8> for NodeType {
    type Error = ParseNodeTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::PaymasterAoa),
            1 => Ok(Self::PaymasterSuper),
            2 => Ok(Self::Anode),
            3 => Ok(Self::Kms),
            other => Err(ParseNodeTypeError(other)),
        }
    }
}

impl From<NodeType> for u8 {
    fn from(value: NodeType) -> Self {
        value as u8
    }
}

/// Registry configuration of a community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityConfig {
    name: &'static str,
    ens_name: &'static str,
    address: Address,
    xpnts_token: Address,
    supported_sbts: &'static [Address],
    node_type: NodeType,
    is_active: bool,
    allow_permissionless_mint: bool,
    /// Staked GToken, in whole tokens.
    staked_amount: &'static str,
    /// Registration time, unix seconds.
    registered_at: u64,
}

impl CommunityConfig {
    /// Create a new community configuration.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: &'static str,
        ens_name: &'static str,
        address: Address,
        xpnts_token: Address,
        supported_sbts: &'static [Address],
        node_type: NodeType,
        is_active: bool,
        allow_permissionless_mint: bool,
        staked_amount: &'static str,
        registered_at: u64,
    ) -> Self {
        Self {
            name,
            ens_name,
            address,
            xpnts_token,
            supported_sbts,
            node_type,
            is_active,
            allow_permissionless_mint,
            staked_amount,
            registered_at,
        }
    }

    /// Get the display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the ENS name.
    pub const fn ens_name(&self) -> &'static str {
        self.ens_name
    }

    /// Get the community address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the community gas token.
    pub const fn xpnts_token(&self) -> Address {
        self.xpnts_token
    }

    /// Get the SBT contracts accepted for identity.
    pub const fn supported_sbts(&self) -> &'static [Address] {
        self.supported_sbts
    }

    /// Get the node type.
    pub const fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// True if the community is active.
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// True if anyone may mint the community SBT.
    pub const fn allow_permissionless_mint(&self) -> bool {
        self.allow_permissionless_mint
    }

    /// Get the staked GToken amount.
    pub const fn staked_amount(&self) -> &'static str {
        self.staked_amount
    }

    /// Get the registration timestamp.
    pub const fn registered_at(&self) -> u64 {
        self.registered_at
    }
}

/// Get a community configuration by address. The address is compared
/// case-insensitively; unparseable input is not found.
pub fn community_config(address: &str) -> Option<&'static CommunityConfig> {
    let address: Address = address.trim().parse().ok()?;
    crate::sepolia::COMMUNITIES.iter().find(|c| c.address == address)
}

/// Get all community configurations.
pub fn all_community_configs() -> &'static [CommunityConfig] {
    crate::sepolia::COMMUNITIES
}

/// True if the address is a registered community.
pub fn is_registered_community(address: &str) -> bool {
    community_config(address).is_some()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sepolia;

    #[test]
    fn community_by_address_ignores_case() {
        let lower = sepolia::AASTAR_OWNER.to_string().to_lowercase();
        let config = community_config(&lower).unwrap();
        assert_eq!(config.ens_name(), "aastar.eth");
        assert_eq!(config.node_type(), NodeType::PaymasterSuper);
        assert_eq!(config.supported_sbts(), &[sepolia::MY_SBT]);

        assert!(is_registered_community(&sepolia::BREAD_OWNER.to_string().to_uppercase().replace("0X", "0x")));
        assert!(!is_registered_community("0x0000000000000000000000000000000000000001"));
        assert!(!is_registered_community("not an address"));
        assert_eq!(all_community_configs().len(), 2);
    }

    #[test]
    fn node_type_from_u8() {
        assert_eq!(NodeType::try_from(2), Ok(NodeType::Anode));
        assert_eq!(u8::from(NodeType::Kms), 3);
        assert_eq!(NodeType::try_from(4), Err(ParseNodeTypeError(4)));
    }
}
