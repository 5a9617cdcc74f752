use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new position is opened.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The staker
///
/// # Data
/// * `u64` - Position id
/// * `i128` - Locked amount
/// * `u64` - Lock end timestamp
/// * `u32` - Multiplier in basis points
pub fn emit_staked(
    e: &Env,
    user: &Address,
    position_id: u64,
    amount: i128,
    lock_end: u64,
    multiplier_bps: u32,
) {
    let topics = (Symbol::new(e, "staked"), user.clone());
    let data = (position_id, amount, lock_end, multiplier_bps);
    e.events().publish(topics, data);
}

/// Emitted when a position is closed.
///
/// # Data
/// * `u64` - Position id
/// * `i128` - Principal returned
/// * `i128` - Rewards paid with the principal
pub fn emit_unstaked(e: &Env, user: &Address, position_id: u64, principal: i128, rewards: i128) {
    let topics = (Symbol::new(e, "unstaked"), user.clone());
    e.events().publish(topics, (position_id, principal, rewards));
}

pub fn emit_rewards_claimed(e: &Env, user: &Address, amount: i128) {
    let topics = (Symbol::new(e, "rewards_claimed"), user.clone());
    e.events().publish(topics, amount);
}

/// Emitted when the reward reserve is topped up.
///
/// # Data
/// * `i128` - Amount added
/// * `i128` - New reserve balance
pub fn emit_rewards_funded(e: &Env, funder: &Address, amount: i128, reserve: i128) {
    let topics = (Symbol::new(e, "rewards_funded"), funder.clone());
    e.events().publish(topics, (amount, reserve));
}

pub fn emit_accrued(e: &Env, user: &Address, credited: i128, total_points: i128) {
    let topics = (Symbol::new(e, "accrued"), user.clone());
    e.events().publish(topics, (credited, total_points));
}
