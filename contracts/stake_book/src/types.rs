use soroban_sdk::{contracttype, Address, Vec};

// ─── Lock options ──────────────────────────────────────────────────────────

/// A selectable lock duration and the multiplier it earns.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockOption {
    /// Lock period in seconds.
    pub period: u64,
    /// Point multiplier in basis points (10_000 = 1.0x).
    pub multiplier_bps: u32,
}

// ─── Positions ─────────────────────────────────────────────────────────────

/// One locked deposit. `amount`, the lock window and `multiplier_bps` are
/// fixed at creation; only the two settlement snapshots change afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub id: u64,
    pub amount: i128,
    pub lock_start: u64,
    pub lock_end: u64,
    pub multiplier_bps: u32,
    /// Points accrued as of the owner's last settlement.
    pub settled_points: i128,
    /// Rewards credited to this position and not yet paid out.
    pub unclaimed_rewards: i128,
}

/// Per-user aggregate inside one stake book.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeAccount {
    /// Open positions in creation order.
    pub positions: Vec<StakePosition>,
    /// Sum of `settled_points` over open positions. Rewards accrue on this
    /// snapshot until the next settlement.
    pub total_points: i128,
    /// Points per day added to `total_points` by positions still locked,
    /// including any opened since the last settlement.
    pub point_rate: i128,
    /// Settled, unpaid rewards. Includes rewards of closed positions that the
    /// reserve could not cover at unstake time.
    pub pending_rewards: i128,
    pub last_accrual_time: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Staked (and reward) token address.
    Token,
    /// Reward tokens paid per 10_000 points per day.
    RewardRateBps,
    /// Vec<LockOption> accepted by `stake`.
    LockOptions,
    /// Next position id to hand out.
    NextPositionId,
    /// Principal currently locked across all accounts.
    TotalStaked,
    /// Tokens set aside for reward payouts.
    RewardReserve,
    /// Per-user stake account. Stored in `persistent()`.
    Account(Address),
}
