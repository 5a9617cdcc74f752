//! Sale Config Validation
//!
//! A sale config is accepted only if all of the following hold:
//! - `0 <= soft_cap <= hard_cap` and `hard_cap > 0`
//! - `start_time < end_time <= tge_time`
//! - `price_num > 0` and `price_den > 0`
//! - `per_wallet_cap > 0`
//! - tier caps are non-negative and ascending (`t1 <= t2 <= t3`)
//! - `tge_percentage_bps <= 10_000` and `token_fee_bps <= 10_000`
//!
//! Any violation is reported as `ContractError::InvalidConfig`.

use crate::types::SaleConfig;
use launchpad_errors::ContractError;

/// Maximum basis-point value (100%).
pub const MAX_BPS: u32 = 10_000;

pub fn validate_sale_config(cfg: &SaleConfig) -> Result<(), ContractError> {
    let caps_ok = cfg.hard_cap > 0 && cfg.soft_cap >= 0 && cfg.soft_cap <= cfg.hard_cap;
    let times_ok = cfg.start_time < cfg.end_time && cfg.tge_time >= cfg.end_time;
    let price_ok = cfg.price_num > 0 && cfg.price_den > 0;
    let tiers_ok = cfg.tier_cap_t1 >= 0
        && cfg.tier_cap_t1 <= cfg.tier_cap_t2
        && cfg.tier_cap_t2 <= cfg.tier_cap_t3;
    let bps_ok = cfg.tge_percentage_bps <= MAX_BPS && cfg.token_fee_bps <= MAX_BPS;

    if caps_ok && times_ok && price_ok && tiers_ok && bps_ok && cfg.per_wallet_cap > 0 {
        Ok(())
    } else {
        Err(ContractError::InvalidConfig)
    }
}
