use crate::types::TierThresholds;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted by `initialize` and `set_params`.
///
/// # Topics
/// * `Symbol` - "tier_params_set"
/// * `Address` - The admin that set them
///
/// # Data
/// * `u32` - SOMI weight in basis points
/// * `i128` x3 - Thresholds t1, t2, t3
pub fn emit_tier_params_set(
    e: &Env,
    admin: &Address,
    somi_weight_bps: u32,
    thresholds: &TierThresholds,
) {
    let topics = (Symbol::new(e, "tier_params_set"), admin.clone());
    let data = (
        somi_weight_bps,
        thresholds.t1,
        thresholds.t2,
        thresholds.t3,
    );
    e.events().publish(topics, data);
}
