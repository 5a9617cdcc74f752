//! Stake Book Contract
//!
//! Holds locked positions of a single asset (one deployment for VORT, one for
//! SOMI). Each position is locked for one of the configured lock options and
//! earns points at that option's multiplier; points feed the tier aggregator
//! and also drive reward accrual.
//!
//! ## Key design decisions
//!
//! - **Settle before mutate**: `stake`, `unstake`, `claim_rewards` and
//!   `accrue` settle the caller's rewards up to `now` before changing the
//!   position list.
//! - **Checks-Effects-Interactions**: storage is updated *before* token transfers.
//! - **Separate reward reserve**: rewards are paid only from tokens added with
//!   `fund_rewards`; locked principal is never used to pay rewards.
//! - **No cross-user mutation**: an account is only written by its owner's calls.

#![no_std]

mod accrual;
mod events;
mod types;

pub use accrual::POINTS_PERIOD;
pub use types::{DataKey, LockOption, StakeAccount, StakePosition};

use launchpad_common::storage::{bump_instance, load_persistent, save_persistent};
use launchpad_common::token;
use launchpad_errors::ContractError;
use launchpad_math::{add, add_u64, sub};
use soroban_sdk::{contract, contractimpl, vec, Address, Env, Vec};



#[cfg(test)]
mod test_accrual;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

/// 1.0x for a 30 day lock.
pub const LOCK_30_DAYS: LockOption = LockOption {
    period: 30 * ONE_DAY,
    multiplier_bps: 10_000,
};
/// 1.5x for a 90 day lock.
pub const LOCK_90_DAYS: LockOption = LockOption {
    period: 90 * ONE_DAY,
    multiplier_bps: 15_000,
};
/// 2.0x for a 365 day lock.
pub const LOCK_365_DAYS: LockOption = LockOption {
    period: 365 * ONE_DAY,
    multiplier_bps: 20_000,
};

/// The standard 30/90/365 day lock ladder.
pub fn default_lock_options(e: &Env) -> Vec<LockOption> {
    vec![e, LOCK_30_DAYS, LOCK_90_DAYS, LOCK_365_DAYS]
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    if stored != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

fn get_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

fn get_rate(e: &Env) -> Result<u32, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::RewardRateBps)
        .ok_or(ContractError::NotInitialized)
}

fn get_i128(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0_i128)
}

fn multiplier_for(e: &Env, lock_period: u64) -> Result<u32, ContractError> {
    let options: Vec<LockOption> = e
        .storage()
        .instance()
        .get(&DataKey::LockOptions)
        .ok_or(ContractError::NotInitialized)?;
    options
        .iter()
        .find(|opt| opt.period == lock_period)
        .map(|opt| opt.multiplier_bps)
        .ok_or(ContractError::InvalidLockPeriod)
}

fn empty_account(e: &Env) -> StakeAccount {
    StakeAccount {
        positions: Vec::new(e),
        total_points: 0,
        point_rate: 0,
        pending_rewards: 0,
        last_accrual_time: e.ledger().timestamp(),
    }
}

fn load_account(e: &Env, user: &Address) -> Option<StakeAccount> {
    load_persistent(e, &DataKey::Account(user.clone()))
}

fn save_account(e: &Env, user: &Address, account: &StakeAccount) {
    save_persistent(e, &DataKey::Account(user.clone()), account);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct StakeBook;

#[contractimpl]
impl StakeBook {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// `reward_rate_bps` is the number of reward tokens paid per 10_000 points
    /// per day.
    /// Every lock option needs a non-zero period and multiplier.
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        reward_rate_bps: u32,
        lock_options: Vec<LockOption>,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        if lock_options.is_empty()
            || lock_options
                .iter()
                .any(|opt| opt.period == 0 || opt.multiplier_bps == 0)
        {
            return Err(ContractError::InvalidLockPeriod);
        }

        let storage = e.storage().instance();
        storage.set(&DataKey::Admin, &admin);
        storage.set(&DataKey::Token, &token);
        storage.set(&DataKey::RewardRateBps, &reward_rate_bps);
        storage.set(&DataKey::LockOptions, &lock_options);
        storage.set(&DataKey::NextPositionId, &0_u64);
        storage.set(&DataKey::TotalStaked, &0_i128);
        storage.set(&DataKey::RewardReserve, &0_i128);
        bump_instance(&e);
        Ok(())
    }

    /// Add `amount` tokens to the reward reserve. Anyone may fund rewards.
    /// Returns the new reserve balance.
    pub fn fund_rewards(e: Env, funder: Address, amount: i128) -> Result<i128, ContractError> {
        funder.require_auth();
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let token = get_token(&e)?;

        let reserve = add(get_i128(&e, &DataKey::RewardReserve), amount)?;
        e.storage().instance().set(&DataKey::RewardReserve, &reserve);

        token::transfer_into_contract(&e, &token, &funder, amount)?;
        events::emit_rewards_funded(&e, &funder, amount, reserve);
        Ok(reserve)
    }

    // ── Position lifecycle ─────────────────────────────────────────────────

    /// Lock `amount` tokens for `lock_period` seconds and return the new
    /// position id.
    ///
    /// Requirements:
    /// - `amount` > 0
    /// - `lock_period` matches a configured lock option
    /// - Caller has approved the contract to spend `amount`
    pub fn stake(e: Env, user: Address, amount: i128, lock_period: u64) -> Result<u64, ContractError> {
        user.require_auth();
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let multiplier_bps = multiplier_for(&e, lock_period)?;
        let token = get_token(&e)?;
        let rate = get_rate(&e)?;

        let now = e.ledger().timestamp();
        let lock_end = add_u64(now, lock_period)?;

        let mut account = load_account(&e, &user).unwrap_or_else(|| empty_account(&e));
        accrual::settle(&e, &mut account, rate, now)?;

        let position_id: u64 = e
            .storage()
            .instance()
            .get(&DataKey::NextPositionId)
            .unwrap_or(0);
        let next_id = position_id.checked_add(1).ok_or(ContractError::Overflow)?;

        let position = StakePosition {
            id: position_id,
            amount,
            lock_start: now,
            lock_end,
            multiplier_bps,
            settled_points: 0,
            unclaimed_rewards: 0,
        };
        let weight = accrual::position_weight(&e, &position)?;
        account.point_rate = add(account.point_rate, weight)?;
        account.positions.push_back(position);

        let total_staked = add(get_i128(&e, &DataKey::TotalStaked), amount)?;
        e.storage().instance().set(&DataKey::NextPositionId, &next_id);
        e.storage().instance().set(&DataKey::TotalStaked, &total_staked);
        save_account(&e, &user, &account);

        token::transfer_into_contract(&e, &token, &user, amount)?;
        events::emit_staked(&e, &user, position_id, amount, lock_end, multiplier_bps);
        Ok(position_id)
    }

    /// Close an unlocked position and return `(principal, rewards)` paid.
    ///
    /// The position's settled rewards are paid with the principal when the
    /// reserve covers them; otherwise they stay in the account's pending
    /// rewards for a later `claim_rewards`, and only principal is returned.
    pub fn unstake(e: Env, user: Address, position_id: u64) -> Result<(i128, i128), ContractError> {
        user.require_auth();
        let token = get_token(&e)?;
        let rate = get_rate(&e)?;
        let now = e.ledger().timestamp();

        let mut account = load_account(&e, &user).ok_or(ContractError::NotFound)?;
        accrual::settle(&e, &mut account, rate, now)?;

        let index = account
            .positions
            .iter()
            .position(|pos| pos.id == position_id)
            .ok_or(ContractError::NotFound)?;
        let position = account
            .positions
            .get(index as u32)
            .ok_or(ContractError::NotFound)?;
        if now < position.lock_end {
            return Err(ContractError::PositionLocked);
        }

        let reserve = get_i128(&e, &DataKey::RewardReserve);
        let rewards = if reserve >= position.unclaimed_rewards {
            position.unclaimed_rewards
        } else {
            0
        };

        // CEI: drop the position and book the payout before any transfer.
        account.positions.remove(index as u32);
        account.total_points = sub(account.total_points, position.settled_points)?;
        account.pending_rewards = sub(account.pending_rewards, rewards)?;
        save_account(&e, &user, &account);

        let total_staked = sub(get_i128(&e, &DataKey::TotalStaked), position.amount)?;
        e.storage().instance().set(&DataKey::TotalStaked, &total_staked);
        e.storage()
            .instance()
            .set(&DataKey::RewardReserve, &sub(reserve, rewards)?);

        token::transfer_from_contract(&e, &token, &user, add(position.amount, rewards)?)?;
        events::emit_unstaked(&e, &user, position_id, position.amount, rewards);
        Ok((position.amount, rewards))
    }

    /// Settle and pay every pending reward without closing positions.
    /// Returns the amount paid; zero pending is a no-op returning 0.
    pub fn claim_rewards(e: Env, user: Address) -> Result<i128, ContractError> {
        user.require_auth();
        let token = get_token(&e)?;
        let rate = get_rate(&e)?;
        let now = e.ledger().timestamp();

        let Some(mut account) = load_account(&e, &user) else {
            return Ok(0);
        };
        accrual::settle(&e, &mut account, rate, now)?;

        let amount = account.pending_rewards;
        if amount == 0 {
            save_account(&e, &user, &account);
            return Ok(0);
        }
        let reserve = get_i128(&e, &DataKey::RewardReserve);
        if reserve < amount {
            return Err(ContractError::InsufficientRewardReserve);
        }

        let mut cleared = Vec::new(&e);
        for mut pos in account.positions.iter() {
            pos.unclaimed_rewards = 0;
            cleared.push_back(pos);
        }
        account.positions = cleared;
        account.pending_rewards = 0;
        save_account(&e, &user, &account);
        e.storage()
            .instance()
            .set(&DataKey::RewardReserve, &sub(reserve, amount)?);

        token::transfer_from_contract(&e, &token, &user, amount)?;
        events::emit_rewards_claimed(&e, &user, amount);
        Ok(amount)
    }

    /// Persist a settlement snapshot of `user`'s account up to `now`.
    /// Returns the rewards newly credited.
    pub fn accrue(e: Env, user: Address) -> Result<i128, ContractError> {
        user.require_auth();
        let rate = get_rate(&e)?;
        let now = e.ledger().timestamp();

        let Some(mut account) = load_account(&e, &user) else {
            return Ok(0);
        };
        let credited = accrual::settle(&e, &mut account, rate, now)?;
        save_account(&e, &user, &account);

        events::emit_accrued(&e, &user, credited, account.total_points);
        Ok(credited)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Live point total of `user` across all open positions.
    pub fn total_points(e: Env, user: Address) -> Result<i128, ContractError> {
        match load_account(&e, &user) {
            Some(account) => accrual::live_points(&e, &account, e.ledger().timestamp()),
            None => Ok(0),
        }
    }

    /// Rewards `user` could claim right now. Does not write storage.
    pub fn pending_rewards(e: Env, user: Address) -> Result<i128, ContractError> {
        let rate = get_rate(&e)?;
        match load_account(&e, &user) {
            Some(account) => accrual::preview_pending(&e, &account, rate, e.ledger().timestamp()),
            None => Ok(0),
        }
    }

    /// Stored account of `user` as of its last settlement.
    pub fn account(e: Env, user: Address) -> StakeAccount {
        load_account(&e, &user).unwrap_or_else(|| empty_account(&e))
    }

    pub fn positions(e: Env, user: Address) -> Vec<StakePosition> {
        load_account(&e, &user)
            .map(|account| account.positions)
            .unwrap_or_else(|| Vec::new(&e))
    }

    pub fn lock_options(e: Env) -> Vec<LockOption> {
        e.storage()
            .instance()
            .get(&DataKey::LockOptions)
            .unwrap_or_else(|| Vec::new(&e))
    }

    pub fn total_staked(e: Env) -> i128 {
        get_i128(&e, &DataKey::TotalStaked)
    }

    pub fn reward_reserve(e: Env) -> i128 {
        get_i128(&e, &DataKey::RewardReserve)
    }

    pub fn reward_rate_bps(e: Env) -> Result<u32, ContractError> {
        get_rate(&e)
    }

    pub fn token(e: Env) -> Result<Address, ContractError> {
        get_token(&e)
    }
}
