use soroban_sdk::{contracttype, Address};

/// Ascending point thresholds separating tiers 0..=3.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierThresholds {
    pub t1: i128,
    pub t2: i128,
    pub t3: i128,
}

#[contracttype]
pub enum DataKey {
    Admin,
    /// Stake book holding VORT positions.
    VortBook,
    /// Stake book holding SOMI positions.
    SomiBook,
    /// Weight of SOMI points in the combined total, in basis points.
    SomiWeightBps,
    Thresholds,
}

/// Addresses of the two stake books the aggregator reads.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeBooks {
    pub vort: Address,
    pub somi: Address,
}
