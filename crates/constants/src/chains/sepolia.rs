//! Constants for the Sepolia testnet.
//!
//! The address constants here are the single source of truth for every
//! table in this crate.

use crate::{
    AddressBook, Community, CommunityConfig, KnownNetworks, NativeCurrency, NetworkConstants,
    NetworkContracts, NodeType,
};
use alloy::primitives::{address, Address};

/// Name for the network.
pub const NAME: &str = "Sepolia";
/// Chain ID for Sepolia.
pub const CHAIN_ID: u64 = 11155111;
/// Default RPC URL for Sepolia.
pub const RPC_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/Bx4QRW1-vnwJUePSAAD7N";
/// Public fallback RPC URL used by the version tools.
pub const PUBLIC_RPC_URL: &str = "https://rpc.sepolia.org";
/// Block explorer for Sepolia.
pub const BLOCK_EXPLORER: &str = "https://sepolia.etherscan.io";

/// `GToken` governance token.
pub const GTOKEN: Address = address!("0x99cCb70646Be7A5aeE7aF98cE853a1EA1A676DCc");
/// `SuperPaymasterV2` (AOA+ mode).
pub const SUPER_PAYMASTER_V2: Address = address!("0x95B20d8FdF173a1190ff71e41024991B2c5e58eF");
/// `Registry` for communities.
pub const REGISTRY: Address = address!("0xf384c592D5258c91805128291c5D4c069DD30CA6");
/// `GTokenStaking`.
pub const GTOKEN_STAKING: Address = address!("0x60Bd54645b0fDabA1114B701Df6f33C4ecE87fEa");
/// `PaymasterFactory`.
pub const PAYMASTER_FACTORY: Address = address!("0x65Cf6C4ab3d40f3C919b6F3CADC09Efb72817920");

/// `xPNTsFactory`.
pub const XPNTS_FACTORY: Address = address!("0x9dD72cB42427fC9F7Bf0c949DB7def51ef29D6Bd");
/// `MySBT`.
pub const MY_SBT: Address = address!("0x73E635Fc9eD362b7061495372B6eDFF511D9E18F");

/// Mock USDT for testing.
pub const MOCK_USDT: Address = address!("0x14EaC6C3D49AEDff3D59773A7d7bfb50182bCfDc");
/// aPNTs, the AAStar community gas token.
pub const APNTS: Address = address!("0xBD0710596010a157B88cd141d797E8Ad4bb2306b");
/// bPNTs, the Bread community gas token.
pub const BPNTS: Address = address!("0x70Da2c1B7Fcf471247Bc3B09f8927a4ab1751Ba3");

/// `PaymasterV4_1` proxy (AOA mode).
pub const PAYMASTER_V4_1: Address = address!("0x4D6A367aA183903968833Ec4AE361CFc8dDDBA38");
/// `PaymasterV4_1` implementation.
pub const PAYMASTER_V4_1_IMPLEMENTATION: Address =
    address!("0x3E1C6a741f4b3f8bE24f324342539982324a6f8a");

/// `DVTValidator`.
pub const DVT_VALIDATOR: Address = address!("0x937CdD172fb0674Db688149093356F6dA95498FD");
/// `BLSAggregator`.
pub const BLS_AGGREGATOR: Address = address!("0x3Cf0587912c692aa0f5FEEEDC52959ABEEEFaEc6");

/// ERC-4337 `EntryPoint` v0.7.
pub const ENTRY_POINT: Address = address!("0x0000000071727De22E5E9d8BAf0edAc6f37da032");

/// Owner of the AAStar community (deployer 1).
pub const AASTAR_OWNER: Address = address!("0x411BD567E46C0781248dbB6a9211891C032885e5");
/// Owner of the Bread community.
pub const BREAD_OWNER: Address = address!("0xe24b6f321B0140716a2b671ed0D983bb64E7DaFA");

/// Sepolia network constants.
pub const NETWORK: NetworkConstants = NetworkConstants::new(
    CHAIN_ID,
    NAME,
    RPC_URL,
    BLOCK_EXPLORER,
    NativeCurrency::new("Sepolia ETH", "ETH", 18),
);

/// Core system contracts.
pub const CORE: AddressBook = AddressBook::new(&[
    ("gToken", GTOKEN),
    ("superPaymasterV2", SUPER_PAYMASTER_V2),
    ("registry", REGISTRY),
    ("gTokenStaking", GTOKEN_STAKING),
    ("paymasterFactory", PAYMASTER_FACTORY),
]);

/// Token system contracts.
pub const TOKENS: AddressBook =
    AddressBook::new(&[("xPNTsFactory", XPNTS_FACTORY), ("mySBT", MY_SBT)]);

/// Test tokens.
pub const TEST_TOKENS: AddressBook =
    AddressBook::new(&[("mockUSDT", MOCK_USDT), ("aPNTs", APNTS), ("bPNTs", BPNTS)]);

/// Paymaster contracts.
pub const PAYMASTER: AddressBook = AddressBook::new(&[
    ("paymasterV4_1", PAYMASTER_V4_1),
    ("paymasterV4_1iImplementation", PAYMASTER_V4_1_IMPLEMENTATION),
]);

/// Monitoring contracts.
pub const MONITORING: AddressBook =
    AddressBook::new(&[("dvtValidator", DVT_VALIDATOR), ("blsAggregator", BLS_AGGREGATOR)]);

/// Official dependencies.
pub const OFFICIAL: AddressBook = AddressBook::new(&[("entryPoint", ENTRY_POINT)]);

/// Test communities, registered 2025-11-01 and 2025-11-03.
pub const TEST_COMMUNITIES: &[(&str, Community)] = &[
    ("aastar", Community::new(AASTAR_OWNER, APNTS, "aastar.eth", "AAStar", "50")),
    ("breadCommunity", Community::new(BREAD_OWNER, BPNTS, "bread.eth", "BreadCommunity", "50")),
];

/// Deployment dates by contract name.
pub const DEPLOYMENT_DATES: &[(&str, &str)] = &[
    ("gToken", "2025-11-01"),
    ("superPaymasterV2", "2025-11-01"),
    ("registry", "2025-11-02"),
    ("gTokenStaking", "2025-11-01"),
    ("xPNTsFactory", "2025-11-01"),
    ("mySBT", "2025-11-01"),
    ("paymasterV4_1", "2025-10-15"),
    ("aPNTs", "2025-10-30"),
    ("paymasterFactory", "2025-11-01"),
    ("dvtValidator", "2025-11-01"),
    ("blsAggregator", "2025-11-01"),
];

/// Sepolia contract table.
pub const CONTRACTS: NetworkContracts = NetworkContracts::new(
    KnownNetworks::Sepolia,
    CHAIN_ID,
    CORE,
    TOKENS,
    TEST_TOKENS,
    PAYMASTER,
    MONITORING,
    OFFICIAL,
    TEST_COMMUNITIES,
    "2025-11-02",
    DEPLOYMENT_DATES,
);

/// AAstar community: SuperPaymaster shared mode, aPNTs for gas, MySBT for
/// identity.
pub const AASTAR_COMMUNITY: CommunityConfig = CommunityConfig::new(
    "AAstar Community",
    "aastar.eth",
    AASTAR_OWNER,
    APNTS,
    &[MY_SBT],
    NodeType::PaymasterSuper,
    true,
    true,
    "50",
    1762588812,
);

/// Bread community: independent AOA Paymaster, bPNTs for gas, MySBT for
/// identity.
pub const BREAD_COMMUNITY: CommunityConfig = CommunityConfig::new(
    "Bread Community",
    "bread.eth",
    BREAD_OWNER,
    BPNTS,
    &[MY_SBT],
    NodeType::PaymasterAoa,
    true,
    false,
    "50",
    1762588812,
);

/// All community configurations.
pub const COMMUNITIES: &[CommunityConfig] = &[AASTAR_COMMUNITY, BREAD_COMMUNITY];
