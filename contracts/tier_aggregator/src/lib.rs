//! Tier Aggregator Contract
//!
//! Reads a wallet's live point totals from the VORT and SOMI stake books,
//! weighs them into one combined figure and maps that onto a participation
//! tier. Nothing about a wallet is stored here: every call recomputes the
//! snapshot from the books.

#![no_std]

mod events;
mod tiers;
mod types;

pub use tiers::{combine_points, tier_for_points};
pub use types::{DataKey, StakeBooks, TierThresholds};

use launchpad_common::storage::bump_instance;
use launchpad_common::TierSnapshot;
use launchpad_errors::ContractError;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};



/// Read surface of a stake book consumed by the aggregator.
#[contractclient(name = "StakeBookClient")]
pub trait StakeBookInterface {
    fn total_points(env: Env, user: Address) -> Result<i128, ContractError>;
}

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

fn store_params(
    e: &Env,
    admin: &Address,
    somi_weight_bps: u32,
    thresholds: &TierThresholds,
) -> Result<(), ContractError> {
    tiers::validate_weight(somi_weight_bps)?;
    tiers::validate_thresholds(thresholds)?;
    e.storage()
        .instance()
        .set(&DataKey::SomiWeightBps, &somi_weight_bps);
    e.storage().instance().set(&DataKey::Thresholds, thresholds);
    bump_instance(e);
    events::emit_tier_params_set(e, admin, somi_weight_bps, thresholds);
    Ok(())
}

fn get_books(e: &Env) -> Result<StakeBooks, ContractError> {
    let storage = e.storage().instance();
    let vort = storage
        .get(&DataKey::VortBook)
        .ok_or(ContractError::NotInitialized)?;
    let somi = storage
        .get(&DataKey::SomiBook)
        .ok_or(ContractError::NotInitialized)?;
    Ok(StakeBooks { vort, somi })
}

fn get_weight(e: &Env) -> Result<u32, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::SomiWeightBps)
        .ok_or(ContractError::NotInitialized)
}

fn get_thresholds(e: &Env) -> Result<TierThresholds, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Thresholds)
        .ok_or(ContractError::NotInitialized)
}

#[contract]
pub struct TierAggregator;

#[contractimpl]
impl TierAggregator {
    /// One-time initialization.
    ///
    /// # Arguments
    /// * `vort_book` / `somi_book` - Stake book contracts for each asset
    /// * `somi_weight_bps` - Weight of SOMI points, 0..=10_000
    /// * `t1`, `t2`, `t3` - Strictly ascending tier thresholds
    pub fn initialize(
        e: Env,
        admin: Address,
        vort_book: Address,
        somi_book: Address,
        somi_weight_bps: u32,
        t1: i128,
        t2: i128,
        t3: i128,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::VortBook, &vort_book);
        e.storage().instance().set(&DataKey::SomiBook, &somi_book);
        store_params(&e, &admin, somi_weight_bps, &TierThresholds { t1, t2, t3 })
    }

    /// Replace the weighting and thresholds. Admin only.
    pub fn set_params(
        e: Env,
        admin: Address,
        somi_weight_bps: u32,
        t1: i128,
        t2: i128,
        t3: i128,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        store_params(&e, &admin, somi_weight_bps, &TierThresholds { t1, t2, t3 })
    }

    /// Current tier of `user`, recomputed from both stake books.
    ///
    /// A failing book read aborts the call with the book's own error.
    pub fn compute_tier(e: Env, user: Address) -> Result<TierSnapshot, ContractError> {
        let books = get_books(&e)?;
        let somi_weight_bps = get_weight(&e)?;
        let thresholds = get_thresholds(&e)?;

        let vort_points = StakeBookClient::new(&e, &books.vort).total_points(&user);
        let somi_points = StakeBookClient::new(&e, &books.somi).total_points(&user);

        let combined_points = combine_points(&e, vort_points, somi_points, somi_weight_bps)?;
        Ok(TierSnapshot {
            combined_points,
            tier: tier_for_points(combined_points, &thresholds),
            somi_weight_bps,
            vort_points,
            somi_points,
        })
    }

    /// Tier a given combined point total maps to under the current thresholds.
    pub fn tier_of(e: Env, combined_points: i128) -> Result<u32, ContractError> {
        Ok(tier_for_points(combined_points, &get_thresholds(&e)?))
    }

    pub fn thresholds(e: Env) -> Result<TierThresholds, ContractError> {
        get_thresholds(&e)
    }

    pub fn somi_weight_bps(e: Env) -> Result<u32, ContractError> {
        get_weight(&e)
    }

    pub fn books(e: Env) -> Result<StakeBooks, ContractError> {
        get_books(&e)
    }
}
