use crate::types::SalePhase;
use launchpad_common::SaleConfig;

/// Phase of the sale at `now`.
///
/// Live is the half-open window `[start_time, end_time)`; reaching the hard
/// cap ends the sale early.
pub fn phase_at(config: &SaleConfig, total_raised: i128, now: u64) -> SalePhase {
    if now < config.start_time {
        SalePhase::Pending
    } else if now >= config.end_time || total_raised >= config.hard_cap {
        SalePhase::Ended
    } else {
        SalePhase::Live
    }
}
