//! Point accrual and reward settlement tests.

#![cfg(test)]

use crate::accrual::{position_points, settle};
use crate::test_helpers::*;
use crate::{StakeAccount, StakePosition};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Vec};

fn position(amount: i128, lock_start: u64, lock_period: u64, multiplier_bps: u32) -> StakePosition {
    StakePosition {
        id: 0,
        amount,
        lock_start,
        lock_end: lock_start + lock_period,
        multiplier_bps,
        settled_points: 0,
        unclaimed_rewards: 0,
    }
}

// ─── Pure accrual ──────────────────────────────────────────────────────────

#[test]
fn test_points_linear_then_frozen() {
    let e = Env::default();
    let pos = position(1_000, 0, DAYS_30, 10_000);
    assert_eq!(position_points(&e, &pos, 0).unwrap(), 0);
    assert_eq!(position_points(&e, &pos, ONE_DAY / 2).unwrap(), 500);
    assert_eq!(position_points(&e, &pos, 10 * ONE_DAY).unwrap(), 10_000);
    assert_eq!(position_points(&e, &pos, DAYS_30).unwrap(), 30_000);
    assert_eq!(position_points(&e, &pos, 400 * ONE_DAY).unwrap(), 30_000);
}

#[test]
fn test_points_before_lock_start_are_zero() {
    let e = Env::default();
    let pos = position(1_000, 5 * ONE_DAY, DAYS_30, 10_000);
    assert_eq!(position_points(&e, &pos, ONE_DAY).unwrap(), 0);
}

#[test]
fn test_multiplier_scales_points() {
    let e = Env::default();
    let base = position(1_000, 0, DAYS_90, 15_000);
    let year = position(1_000, 0, DAYS_365, 20_000);
    assert_eq!(position_points(&e, &base, 10 * ONE_DAY).unwrap(), 15_000);
    assert_eq!(position_points(&e, &year, 10 * ONE_DAY).unwrap(), 20_000);
}

fn account(e: &Env, positions: &[StakePosition], last_accrual_time: u64) -> StakeAccount {
    let mut list = Vec::new(e);
    for pos in positions {
        list.push_back(pos.clone());
    }
    StakeAccount {
        positions: list,
        total_points: 0,
        point_rate: 0,
        pending_rewards: 0,
        last_accrual_time,
    }
}

#[test]
fn test_settle_credits_previous_point_snapshot() {
    let e = Env::default();
    let mut acct = account(&e, &[position(1_000, 0, DAYS_30, 10_000)], 0);

    // No points existed before the first settlement.
    assert_eq!(settle(&e, &mut acct, REWARD_RATE_BPS, 10 * ONE_DAY).unwrap(), 0);
    assert_eq!(acct.total_points, 10_000);

    // 10_000 points * 100 / 10_000 per day * 10 days.
    assert_eq!(settle(&e, &mut acct, REWARD_RATE_BPS, 20 * ONE_DAY).unwrap(), 1_000);
    assert_eq!(acct.total_points, 20_000);

    assert_eq!(settle(&e, &mut acct, REWARD_RATE_BPS, DAYS_30).unwrap(), 2_000);
    assert_eq!(acct.total_points, 30_000);
    assert_eq!(acct.pending_rewards, 3_000);
    assert_eq!(acct.positions.get(0).unwrap().unclaimed_rewards, 3_000);
}

#[test]
fn test_settle_keeps_crediting_frozen_points() {
    let e = Env::default();
    let mut acct = account(&e, &[position(1_000, 0, DAYS_30, 10_000)], 0);
    settle(&e, &mut acct, REWARD_RATE_BPS, DAYS_30).unwrap();
    assert_eq!(acct.point_rate, 0);

    // Points stay at 30_000 after unlock and keep earning 300 per day.
    assert_eq!(settle(&e, &mut acct, REWARD_RATE_BPS, 40 * ONE_DAY).unwrap(), 3_000);
    assert_eq!(acct.total_points, 30_000);
}

#[test]
fn test_settle_tracks_point_rate_of_locked_positions() {
    let e = Env::default();
    let mut acct = account(
        &e,
        &[
            position(1_000, 0, DAYS_30, 10_000),
            position(1_000, 0, DAYS_90, 15_000),
        ],
        0,
    );
    settle(&e, &mut acct, REWARD_RATE_BPS, ONE_DAY).unwrap();
    assert_eq!(acct.point_rate, 2_500);

    settle(&e, &mut acct, REWARD_RATE_BPS, DAYS_30).unwrap();
    assert_eq!(acct.point_rate, 1_500);
}

#[test]
fn test_settle_never_moves_time_backwards() {
    let e = Env::default();
    let mut acct = account(&e, &[position(1_000, 0, DAYS_30, 10_000)], 10 * ONE_DAY);
    assert_eq!(settle(&e, &mut acct, REWARD_RATE_BPS, 5 * ONE_DAY).unwrap(), 0);
    assert_eq!(acct.last_accrual_time, 10 * ONE_DAY);
    assert_eq!(acct.pending_rewards, 0);
}

// ─── Through the contract ──────────────────────────────────────────────────

#[test]
fn test_total_points_tracks_time() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup(&e);
    s.client.stake(&s.user, &1_000, &DAYS_30);

    let mut last = 0_i128;
    for day in [1_u64, 5, 10, 29, 30, 31, 90] {
        set_time(&e, day * ONE_DAY);
        let points = s.client.total_points(&s.user);
        assert!(points >= last);
        last = points;
    }
    assert_eq!(last, 30_000);
}

#[test]
fn test_pending_rewards_is_a_pure_read() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup(&e);
    s.client.stake(&s.user, &1_000, &DAYS_30);
    set_time(&e, 10 * ONE_DAY);
    s.client.accrue(&s.user);

    set_time(&e, 20 * ONE_DAY);
    assert_eq!(s.client.pending_rewards(&s.user), 1_000);
    assert_eq!(s.client.pending_rewards(&s.user), 1_000);

    let stored = s.client.account(&s.user);
    assert_eq!(stored.pending_rewards, 0);
    assert_eq!(stored.total_points, 10_000);
    assert_eq!(stored.last_accrual_time, 10 * ONE_DAY);
}

#[test]
fn test_accrue_persists_snapshot() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup(&e);
    s.client.stake(&s.user, &1_000, &DAYS_30);

    set_time(&e, 10 * ONE_DAY);
    assert_eq!(s.client.accrue(&s.user), 0);
    set_time(&e, 20 * ONE_DAY);
    assert_eq!(s.client.accrue(&s.user), 1_000);
    assert_eq!(s.client.accrue(&s.user), 0);

    let stored = s.client.account(&s.user);
    assert_eq!(stored.pending_rewards, 1_000);
    assert_eq!(stored.total_points, 20_000);
    assert_eq!(stored.last_accrual_time, 20 * ONE_DAY);
}

#[test]
fn test_stake_raises_point_rate_immediately() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup(&e);
    s.client.stake(&s.user, &1_000, &DAYS_90);

    let stored = s.client.account(&s.user);
    assert_eq!(stored.point_rate, 1_500);
    assert_eq!(stored.total_points, 0);

    set_time(&e, ONE_DAY);
    assert_eq!(s.client.total_points(&s.user), 1_500);
    s.client.stake(&s.user, &2_000, &DAYS_30);
    let stored = s.client.account(&s.user);
    assert_eq!(stored.point_rate, 3_500);
    assert_eq!(stored.total_points, 1_500);
}

#[test]
fn test_new_stake_settles_existing_positions_first() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup(&e);
    s.client.stake(&s.user, &1_000, &DAYS_30);
    set_time(&e, 10 * ONE_DAY);
    s.client.accrue(&s.user);

    set_time(&e, 20 * ONE_DAY);
    s.client.stake(&s.user, &1_000, &DAYS_30);
    let stored = s.client.account(&s.user);
    // Only the first position earned for days 10..20.
    assert_eq!(stored.pending_rewards, 1_000);
    assert_eq!(stored.total_points, 20_000);
    let second = stored.positions.get(1).unwrap();
    assert_eq!(second.settled_points, 0);
    assert_eq!(second.unclaimed_rewards, 0);

    // The new weight shows up in points from its own stake time onwards.
    set_time(&e, 25 * ONE_DAY);
    assert_eq!(s.client.total_points(&s.user), 30_000);
    // 20_000 snapshot points for 5 days -> 1_000 more.
    assert_eq!(s.client.pending_rewards(&s.user), 2_000);
}

#[test]
fn test_rewards_keep_accruing_after_unlock_until_unstake() {
    let e = Env::default();
    set_time(&e, 0);
    let s = setup_with_reserve(&e, 1_000_000);
    let id = s.client.stake(&s.user, &1_000, &DAYS_30);

    set_time(&e, DAYS_30);
    s.client.accrue(&s.user);
    let at_unlock = s.client.pending_rewards(&s.user);
    assert_eq!(s.client.total_points(&s.user), 30_000);

    set_time(&e, 100 * ONE_DAY);
    let later = s.client.pending_rewards(&s.user);
    assert!(later > at_unlock);
    // 30_000 frozen points * 100 / 10_000 per day * 70 days.
    assert_eq!(later, at_unlock + 21_000);

    assert_eq!(s.client.unstake(&s.user, &id), (1_000, later));
    set_time(&e, 200 * ONE_DAY);
    assert_eq!(s.client.pending_rewards(&s.user), 0);
    assert_eq!(s.client.total_points(&s.user), 0);
}

#[test]
fn test_unknown_user_reads_are_zero() {
    let e = Env::default();
    let s = setup(&e);
    let nobody = Address::generate(&e);
    assert_eq!(s.client.total_points(&nobody), 0);
    assert_eq!(s.client.pending_rewards(&nobody), 0);
    assert_eq!(s.client.positions(&nobody).len(), 0);
}
