use soroban_sdk::{contracttype, Address};

/// Highest participation tier a wallet can reach.
pub const MAX_TIER: u32 = 3;

/// Asset a sale is denominated in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BaseAsset {
    Usdc,
    Somi,
}

/// Immutable parameters of one sale. Written once when the pool is
/// initialized and never mutated afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Which asset contributions are made in.
    pub base_asset: BaseAsset,
    /// Token contract of the base asset.
    pub base_token: Address,
    /// Token contract of the project token being sold.
    pub sale_token: Address,
    /// Tier aggregator consulted on every contribution.
    pub tier_oracle: Address,
    /// Project owner; receives proceeds and unsold tokens.
    pub owner: Address,
    /// Price of one sale token is `price_num / price_den` base units.
    pub price_num: i128,
    pub price_den: i128,
    /// Maximum total raise; reaching it closes the sale early.
    pub hard_cap: i128,
    /// Minimum total raise for the sale to succeed.
    pub soft_cap: i128,
    /// Per-wallet contribution ceiling applied on top of the tier cap.
    pub per_wallet_cap: i128,
    pub tier_cap_t1: i128,
    pub tier_cap_t2: i128,
    pub tier_cap_t3: i128,
    pub start_time: u64,
    pub end_time: u64,
    /// Token generation event; TGE share unlocks and linear vesting starts.
    pub tge_time: u64,
    /// Vesting length in seconds after `tge_time` (0 = everything at TGE).
    pub vest_duration: u64,
    /// Share of purchased tokens unlocked at TGE, in basis points.
    pub tge_percentage_bps: u32,
    /// Fee taken from TGE payouts, in basis points.
    pub token_fee_bps: u32,
    pub fee_recipient: Address,
}

impl SaleConfig {
    /// Contribution ceiling for a tier. Tier 0 cannot participate.
    pub fn tier_cap(&self, tier: u32) -> i128 {
        match tier {
            0 => 0,
            1 => self.tier_cap_t1,
            2 => self.tier_cap_t2,
            _ => self.tier_cap_t3,
        }
    }
}

/// Derived participation tier of a wallet. Always recomputed from both stake
/// books at query time, never stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierSnapshot {
    /// `somi_weight * somi_points + (1 - somi_weight) * vort_points`.
    pub combined_points: i128,
    /// 0..=3.
    pub tier: u32,
    pub somi_weight_bps: u32,
    pub vort_points: i128,
    pub somi_points: i128,
}
