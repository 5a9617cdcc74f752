//! Point and reward accrual.
//!
//! A position earns `amount * multiplier_bps / 10_000` points per day while
//! locked: accrual starts at `lock_start`, grows linearly, and freezes at
//! `lock_end`. Frozen points stay on the account until the position is
//! withdrawn.
//!
//! Rewards accrue at `reward_rate_bps` tokens per 10_000 points per day. A
//! settlement credits `elapsed * rate * points` using the point snapshot of
//! the previous settlement, then refreshes the snapshot to `now`.

use crate::types::{StakeAccount, StakePosition};
use launchpad_errors::ContractError;
use launchpad_math::{add, bps, mul, proportional_share, BPS_DENOMINATOR};
use soroban_sdk::{Env, Vec};

/// Seconds of locking that turn one unit of weight into one point.
pub const POINTS_PERIOD: u64 = 86_400;

/// Points per day a position earns while locked.
pub fn position_weight(e: &Env, pos: &StakePosition) -> Result<i128, ContractError> {
    bps(e, pos.amount, pos.multiplier_bps)
}

/// Points accrued by `pos` up to `now`.
pub fn position_points(e: &Env, pos: &StakePosition, now: u64) -> Result<i128, ContractError> {
    let end = core::cmp::min(now, pos.lock_end);
    if end <= pos.lock_start {
        return Ok(0);
    }
    let elapsed = (end - pos.lock_start) as i128;
    let numerator = mul(pos.multiplier_bps as i128, elapsed)?;
    let denominator = mul(BPS_DENOMINATOR as i128, POINTS_PERIOD as i128)?;
    proportional_share(e, pos.amount, numerator, denominator)
}

/// Rewards earned by `points` held for `elapsed` seconds at `rate_bps`.
pub fn rewards_for_points(
    e: &Env,
    points: i128,
    rate_bps: u32,
    elapsed: u64,
) -> Result<i128, ContractError> {
    let numerator = mul(rate_bps as i128, elapsed as i128)?;
    let denominator = mul(BPS_DENOMINATOR as i128, POINTS_PERIOD as i128)?;
    proportional_share(e, points, numerator, denominator)
}

/// Live point total of an account at `now`, without touching its snapshots.
pub fn live_points(e: &Env, account: &StakeAccount, now: u64) -> Result<i128, ContractError> {
    let mut total = 0_i128;
    for pos in account.positions.iter() {
        total = add(total, position_points(e, &pos, now)?)?;
    }
    Ok(total)
}

/// Settle every open position of `account` up to `now`.
///
/// Must run before any mutation of the position list so that a new position
/// is never credited for time before it existed. Returns the rewards newly
/// credited by this settlement.
pub fn settle(
    e: &Env,
    account: &mut StakeAccount,
    rate_bps: u32,
    now: u64,
) -> Result<i128, ContractError> {
    if now <= account.last_accrual_time {
        return Ok(0);
    }
    let elapsed = now - account.last_accrual_time;

    let mut settled = Vec::new(e);
    let mut total_points = 0_i128;
    let mut point_rate = 0_i128;
    let mut credited = 0_i128;

    for mut pos in account.positions.iter() {
        let earned = rewards_for_points(e, pos.settled_points, rate_bps, elapsed)?;
        pos.unclaimed_rewards = add(pos.unclaimed_rewards, earned)?;
        pos.settled_points = position_points(e, &pos, now)?;
        if pos.lock_end > now {
            point_rate = add(point_rate, position_weight(e, &pos)?)?;
        }
        credited = add(credited, earned)?;
        total_points = add(total_points, pos.settled_points)?;
        settled.push_back(pos);
    }

    account.positions = settled;
    account.total_points = total_points;
    account.point_rate = point_rate;
    account.pending_rewards = add(account.pending_rewards, credited)?;
    account.last_accrual_time = now;
    Ok(credited)
}

/// Pending rewards as they would be after settling at `now`.
pub fn preview_pending(
    e: &Env,
    account: &StakeAccount,
    rate_bps: u32,
    now: u64,
) -> Result<i128, ContractError> {
    let mut preview = account.clone();
    settle(e, &mut preview, rate_bps, now)?;
    Ok(preview.pending_rewards)
}
