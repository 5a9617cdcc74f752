//! Token allocation math for buyers.
//!
//! A purchase of `purchased` tokens splits into a TGE share of
//! `floor(purchased * tge_bps / 10_000)` and a vesting share of
//! `floor(purchased * (10_000 - tge_bps) / 10_000)` released linearly over
//! `vest_duration` seconds from `tge_time`. Every figure rounds down.

use launchpad_common::SaleConfig;
use launchpad_errors::ContractError;
use launchpad_math::{bps, proportional_share, BPS_DENOMINATOR};
use soroban_sdk::Env;

/// Sale tokens bought by `amount` base units at `price_num / price_den`.
pub fn tokens_for_base(e: &Env, config: &SaleConfig, amount: i128) -> Result<i128, ContractError> {
    proportional_share(e, amount, config.price_den, config.price_num)
}

pub fn tge_allocation(e: &Env, config: &SaleConfig, purchased: i128) -> Result<i128, ContractError> {
    bps(e, purchased, config.tge_percentage_bps)
}

pub fn vesting_allocation(
    e: &Env,
    config: &SaleConfig,
    purchased: i128,
) -> Result<i128, ContractError> {
    let vest_bps = BPS_DENOMINATOR
        .checked_sub(config.tge_percentage_bps)
        .ok_or(ContractError::InvalidConfig)?;
    bps(e, purchased, vest_bps)
}

/// Cumulative vested tokens (TGE share excluded) at `now`.
pub fn vested_amount(
    e: &Env,
    config: &SaleConfig,
    purchased: i128,
    now: u64,
) -> Result<i128, ContractError> {
    if now < config.tge_time {
        return Ok(0);
    }
    let total = vesting_allocation(e, config, purchased)?;
    if config.vest_duration == 0 {
        return Ok(total);
    }
    let elapsed = core::cmp::min(now - config.tge_time, config.vest_duration);
    proportional_share(e, total, elapsed as i128, config.vest_duration as i128)
}
