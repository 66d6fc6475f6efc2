//! Fees, stake requirements and test defaults.

/// Default faucet API URL for testnet token requests.
pub const FAUCET_API_URL: &str = "https://faucet-aastar.vercel.app";

/// Service fee rate in basis points (200 = 2%).
pub const SERVICE_FEE_RATE: u64 = 200;

/// Maximum service fee in basis points (1000 = 10%).
pub const MAX_SERVICE_FEE: u64 = 1000;

/// Basis points denominator (100% = 10000 basis points).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Default amount of gas tokens to mint for testing, in token units.
pub const DEFAULT_GAS_TOKEN_MINT_AMOUNT: &str = "100";

/// Default amount of USDT to mint for testing.
pub const DEFAULT_USDT_MINT_AMOUNT: &str = "10";

/// Size of the test account pool.
pub const TEST_ACCOUNT_POOL_SIZE: usize = 20;

/// Default aPNTs price in USD.
pub const DEFAULT_APNTS_PRICE_USD: &str = "0.02";

/// Minimum stake for each node tier, in sGT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NodeStakeAmounts {
    /// Lite node.
    pub lite: u64,
    /// Standard node.
    pub standard: u64,
    /// Super node.
    pub super_node: u64,
    /// Enterprise node.
    pub enterprise: u64,
}

/// Minimum stake amounts.
pub const NODE_STAKE_AMOUNTS: NodeStakeAmounts =
    NodeStakeAmounts { lite: 30, standard: 100, super_node: 300, enterprise: 1000 };

/// Compute a basis-point fee on an amount, rounding down. `None` on
/// overflow.
pub const fn fee_for(amount: u128, bps: u64) -> Option<u128> {
    match amount.checked_mul(bps as u128) {
        Some(scaled) => Some(scaled / BPS_DENOMINATOR as u128),
        None => None,
    }
}

/// The default service fee on an amount.
pub const fn service_fee(amount: u128) -> Option<u128> {
    fee_for(amount, SERVICE_FEE_RATE)
}
