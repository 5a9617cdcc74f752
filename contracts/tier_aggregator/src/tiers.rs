//! Weighted point combination and tier mapping.
//!
//! Both functions are pure: the contract reads the two stake books and hands
//! the raw totals in.

use crate::types::TierThresholds;
use launchpad_errors::ContractError;
use launchpad_math::{add, bps, BPS_DENOMINATOR};
use soroban_sdk::Env;

/// `somi_weight * somi_points + (1 - somi_weight) * vort_points`.
///
/// Each weighted term is floored on its own, so raising either input never
/// lowers the result.
pub fn combine_points(
    e: &Env,
    vort_points: i128,
    somi_points: i128,
    somi_weight_bps: u32,
) -> Result<i128, ContractError> {
    let vort_weight_bps = BPS_DENOMINATOR
        .checked_sub(somi_weight_bps)
        .ok_or(ContractError::InvalidWeight)?;
    let somi_part = bps(e, somi_points, somi_weight_bps)?;
    let vort_part = bps(e, vort_points, vort_weight_bps)?;
    add(somi_part, vort_part)
}

/// Tier 0 below `t1`, 1 in `[t1, t2)`, 2 in `[t2, t3)`, 3 from `t3` up.
pub fn tier_for_points(points: i128, thresholds: &TierThresholds) -> u32 {
    if points >= thresholds.t3 {
        3
    } else if points >= thresholds.t2 {
        2
    } else if points >= thresholds.t1 {
        1
    } else {
        0
    }
}

/// Thresholds must be non-negative and strictly ascending.
pub fn validate_thresholds(thresholds: &TierThresholds) -> Result<(), ContractError> {
    if thresholds.t1 < 0 || thresholds.t1 >= thresholds.t2 || thresholds.t2 >= thresholds.t3 {
        return Err(ContractError::InvalidThresholds);
    }
    Ok(())
}

pub fn validate_weight(somi_weight_bps: u32) -> Result<(), ContractError> {
    if somi_weight_bps > BPS_DENOMINATOR {
        return Err(ContractError::InvalidWeight);
    }
    Ok(())
}
