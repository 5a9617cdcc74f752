use soroban_sdk::{contracttype, Address};

/// Time-derived phase of a sale, before finalization is taken into account.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalePhase {
    Pending,
    Live,
    Ended,
}

/// Externally visible status: the time phase, or `Finalized` once
/// `finalize` has run.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleStatus {
    Pending,
    Live,
    Ended,
    Finalized,
}

/// Mutable pool totals. Only `finalized` and `successful` are true state
/// flags; the phase is always derived from the clock.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    /// Base units accepted so far.
    pub total_raised: i128,
    /// Sale tokens owed to buyers.
    pub total_tokens_sold: i128,
    pub finalized: bool,
    /// Fixed at finalization: `total_raised >= soft_cap`.
    pub successful: bool,
    /// Sale tokens the project has moved into the pool.
    pub tokens_deposited: i128,
    pub proceeds_withdrawn: bool,
    pub unsold_withdrawn: bool,
}

/// One buyer's position in the sale.
///
/// `purchased_base == 0` after a refund is what blocks a second refund.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserSaleRecord {
    pub purchased_base: i128,
    pub purchased_tokens: i128,
    pub tge_claimed: bool,
    /// Vested tokens paid out so far (excludes the TGE share).
    pub vested_claimed: i128,
    pub refunded: bool,
}

#[contracttype]
pub enum DataKey {
    /// Immutable `SaleConfig`.
    Config,
    /// `SaleState`.
    State,
    /// Per-buyer record. Stored in `persistent()`.
    Record(Address),
}
