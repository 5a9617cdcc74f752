//! Sale Pool Contract
//!
//! Runs the fundraising lifecycle of one project sale:
//! `Pending -> Live -> Ended -> Finalized{Success|Failed}`.
//!
//! ## Key design decisions
//!
//! - **Derived phase**: `Pending`/`Live`/`Ended` come from `phase_at(config,
//!   total_raised, now)` on every call. Only `finalized` and `successful` are
//!   stored flags.
//! - **All three caps at once**: a contribution must fit the buyer's tier cap,
//!   the per-wallet cap and the remaining hard cap, otherwise nothing changes.
//! - **Checks-Effects-Interactions**: claim and refund markers are written
//!   before the token transfer that pays them.
//! - **Round down**: token amounts, TGE shares, fees and vesting all round
//!   toward zero.

#![no_std]

mod events;
mod phase;
mod types;
mod vesting;

pub use phase::phase_at;
pub use types::{DataKey, SalePhase, SaleState, SaleStatus, UserSaleRecord};
pub use vesting::{tge_allocation, tokens_for_base, vested_amount, vesting_allocation};

use launchpad_common::storage::{bump_instance, load_persistent, save_persistent};
use launchpad_common::{token, validate_sale_config, SaleConfig, TierSnapshot};
use launchpad_errors::ContractError;
use launchpad_math::{add, split_fee, sub};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};



#[cfg(test)]
mod test_claims;

/// Tier source consulted on every contribution.
#[contractclient(name = "TierOracleClient")]
pub trait TierOracle {
    fn compute_tier(env: Env, user: Address) -> Result<TierSnapshot, ContractError>;
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_config(e: &Env) -> Result<SaleConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

fn load_state(e: &Env) -> Result<SaleState, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(ContractError::NotInitialized)
}

fn save_state(e: &Env, state: &SaleState) {
    e.storage().instance().set(&DataKey::State, state);
    bump_instance(e);
}

fn empty_record() -> UserSaleRecord {
    UserSaleRecord {
        purchased_base: 0,
        purchased_tokens: 0,
        tge_claimed: false,
        vested_claimed: 0,
        refunded: false,
    }
}

fn load_record(e: &Env, user: &Address) -> UserSaleRecord {
    load_persistent(e, &DataKey::Record(user.clone())).unwrap_or_else(empty_record)
}

fn save_record(e: &Env, user: &Address, record: &UserSaleRecord) {
    save_persistent(e, &DataKey::Record(user.clone()), record);
}

fn require_owner(config: &SaleConfig, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != config.owner {
        return Err(ContractError::NotSaleOwner);
    }
    Ok(())
}

/// Claims need a finalized, successful sale.
fn require_successful(state: &SaleState) -> Result<(), ContractError> {
    if !state.finalized {
        return Err(ContractError::SaleNotFinalized);
    }
    if !state.successful {
        return Err(ContractError::SaleFailed);
    }
    Ok(())
}

fn require_tge(config: &SaleConfig, now: u64) -> Result<(), ContractError> {
    if now < config.tge_time {
        return Err(ContractError::TgeNotReached);
    }
    Ok(())
}

/// Newly vested tokens for `record` at `now`; `NothingToClaim` when none.
fn vested_delta(
    e: &Env,
    config: &SaleConfig,
    record: &UserSaleRecord,
    now: u64,
) -> Result<i128, ContractError> {
    let vested = vesting::vested_amount(e, config, record.purchased_tokens, now)?;
    let delta = sub(vested, record.vested_claimed)?;
    if delta <= 0 {
        return Err(ContractError::NothingToClaim);
    }
    Ok(delta)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct SalePool;

#[contractimpl]
impl SalePool {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// Store the immutable sale config. Called once by the factory in the
    /// transaction that deploys the pool.
    pub fn initialize(e: Env, config: SaleConfig) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }
        validate_sale_config(&config)?;

        e.storage().instance().set(&DataKey::Config, &config);
        save_state(
            &e,
            &SaleState {
                total_raised: 0,
                total_tokens_sold: 0,
                finalized: false,
                successful: false,
                tokens_deposited: 0,
                proceeds_withdrawn: false,
                unsold_withdrawn: false,
            },
        );
        events::emit_sale_initialized(
            &e,
            &config.owner,
            config.hard_cap,
            config.soft_cap,
            config.start_time,
            config.end_time,
        );
        Ok(())
    }

    /// Move sale tokens into the pool so buyers can be paid.
    /// Returns the total deposited so far.
    pub fn deposit_sale_tokens(
        e: Env,
        depositor: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        depositor.require_auth();
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let config = load_config(&e)?;
        let mut state = load_state(&e)?;
        if state.unsold_withdrawn {
            return Err(ContractError::AlreadyWithdrawn);
        }

        state.tokens_deposited = add(state.tokens_deposited, amount)?;
        save_state(&e, &state);

        token::transfer_into_contract(&e, &config.sale_token, &depositor, amount)?;
        events::emit_tokens_deposited(&e, &depositor, amount, state.tokens_deposited);
        Ok(state.tokens_deposited)
    }

    // ── Fundraising ────────────────────────────────────────────────────────

    /// Contribute `amount` base units and return the sale tokens bought.
    ///
    /// Requirements:
    /// - The sale is Live
    /// - `amount` > 0 and buys at least one token unit
    /// - The buyer's running total fits both the tier cap and the wallet cap
    /// - The pool total stays within the hard cap
    pub fn contribute(e: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        user.require_auth();
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let config = load_config(&e)?;
        let mut state = load_state(&e)?;
        let now = e.ledger().timestamp();
        if phase_at(&config, state.total_raised, now) != SalePhase::Live {
            return Err(ContractError::SaleNotLive);
        }

        let tokens = vesting::tokens_for_base(&e, &config, amount)?;
        if tokens == 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut record = load_record(&e, &user);
        let new_base = add(record.purchased_base, amount)?;
        let new_raised = add(state.total_raised, amount)?;
        if new_raised > config.hard_cap || new_base > config.per_wallet_cap {
            return Err(ContractError::CapExceeded);
        }
        let snapshot = TierOracleClient::new(&e, &config.tier_oracle).compute_tier(&user);
        if new_base > config.tier_cap(snapshot.tier) {
            return Err(ContractError::CapExceeded);
        }

        record.purchased_base = new_base;
        record.purchased_tokens = add(record.purchased_tokens, tokens)?;
        state.total_raised = new_raised;
        state.total_tokens_sold = add(state.total_tokens_sold, tokens)?;
        save_record(&e, &user, &record);
        save_state(&e, &state);

        token::transfer_into_contract(&e, &config.base_token, &user, amount)?;
        events::emit_contributed(&e, &user, amount, tokens, snapshot.tier, state.total_raised);
        Ok(tokens)
    }

    /// Settle the outcome once the sale has ended. Anyone may call it.
    ///
    /// Returns whether the soft cap was reached. Calling it again returns the
    /// stored outcome without changing anything.
    pub fn finalize(e: Env) -> Result<bool, ContractError> {
        let config = load_config(&e)?;
        let mut state = load_state(&e)?;
        if state.finalized {
            return Ok(state.successful);
        }
        if phase_at(&config, state.total_raised, e.ledger().timestamp()) != SalePhase::Ended {
            return Err(ContractError::SaleNotEnded);
        }

        state.finalized = true;
        state.successful = state.total_raised >= config.soft_cap;
        save_state(&e, &state);

        events::emit_sale_finalized(
            &e,
            &e.current_contract_address(),
            state.successful,
            state.total_raised,
        );
        Ok(state.successful)
    }

    // ── Buyer payouts ──────────────────────────────────────────────────────

    /// Pay the TGE share of `user`'s tokens, less the token fee.
    /// Returns the net amount paid to the buyer.
    pub fn claim_tge(e: Env, user: Address) -> Result<i128, ContractError> {
        user.require_auth();
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        require_successful(&state)?;
        require_tge(&config, e.ledger().timestamp())?;

        let mut record = load_record(&e, &user);
        if record.tge_claimed {
            return Err(ContractError::AlreadyClaimed);
        }
        if record.purchased_tokens == 0 {
            return Ok(0);
        }

        let gross = vesting::tge_allocation(&e, &config, record.purchased_tokens)?;
        let (fee, net) = split_fee(&e, gross, config.token_fee_bps)?;

        // CEI: mark claimed before paying.
        record.tge_claimed = true;
        save_record(&e, &user, &record);

        token::transfer_from_contract(&e, &config.sale_token, &user, net)?;
        token::transfer_from_contract(&e, &config.sale_token, &config.fee_recipient, fee)?;
        events::emit_tge_claimed(&e, &user, net, fee);
        Ok(net)
    }

    /// Pay tokens vested since the last claim. Nothing newly vested is a
    /// successful no-op returning 0.
    pub fn claim_vested(e: Env, user: Address) -> Result<i128, ContractError> {
        user.require_auth();
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        let now = e.ledger().timestamp();
        require_successful(&state)?;
        require_tge(&config, now)?;

        let mut record = load_record(&e, &user);
        let delta = match vested_delta(&e, &config, &record, now) {
            Ok(delta) => delta,
            Err(ContractError::NothingToClaim) => return Ok(0),
            Err(err) => return Err(err),
        };

        record.vested_claimed = add(record.vested_claimed, delta)?;
        save_record(&e, &user, &record);

        token::transfer_from_contract(&e, &config.sale_token, &user, delta)?;
        events::emit_vested_claimed(&e, &user, delta, record.vested_claimed);
        Ok(delta)
    }

    /// Return `user`'s full contribution after a failed sale. Once only.
    pub fn refund_if_softcap_failed(e: Env, user: Address) -> Result<i128, ContractError> {
        user.require_auth();
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        if !state.finalized {
            return Err(ContractError::SaleNotFinalized);
        }
        if state.successful {
            return Err(ContractError::SaleSucceeded);
        }

        let mut record = load_record(&e, &user);
        if record.purchased_base == 0 {
            return Err(ContractError::AlreadyRefunded);
        }
        let amount = record.purchased_base;

        // CEI: zero the contribution before paying it back.
        record.purchased_base = 0;
        record.purchased_tokens = 0;
        record.refunded = true;
        save_record(&e, &user, &record);

        token::transfer_from_contract(&e, &config.base_token, &user, amount)?;
        events::emit_refunded(&e, &user, amount);
        Ok(amount)
    }

    // ── Project owner ──────────────────────────────────────────────────────

    /// Send the raised base tokens to the owner after a successful sale.
    pub fn withdraw_proceeds(e: Env, owner: Address) -> Result<i128, ContractError> {
        let config = load_config(&e)?;
        require_owner(&config, &owner)?;
        let mut state = load_state(&e)?;
        require_successful(&state)?;
        if state.proceeds_withdrawn {
            return Err(ContractError::AlreadyWithdrawn);
        }

        state.proceeds_withdrawn = true;
        save_state(&e, &state);

        token::transfer_from_contract(&e, &config.base_token, &owner, state.total_raised)?;
        events::emit_proceeds_withdrawn(&e, &owner, state.total_raised);
        Ok(state.total_raised)
    }

    /// Return deposited sale tokens that no buyer is owed. After a failed
    /// sale that is everything deposited.
    pub fn withdraw_unsold(e: Env, owner: Address) -> Result<i128, ContractError> {
        let config = load_config(&e)?;
        require_owner(&config, &owner)?;
        let mut state = load_state(&e)?;
        if !state.finalized {
            return Err(ContractError::SaleNotFinalized);
        }
        if state.unsold_withdrawn {
            return Err(ContractError::AlreadyWithdrawn);
        }

        let owed = if state.successful {
            state.total_tokens_sold
        } else {
            0
        };
        let unsold = core::cmp::max(sub(state.tokens_deposited, owed)?, 0);

        state.unsold_withdrawn = true;
        save_state(&e, &state);

        token::transfer_from_contract(&e, &config.sale_token, &owner, unsold)?;
        events::emit_unsold_withdrawn(&e, &owner, unsold);
        Ok(unsold)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn config(e: Env) -> Result<SaleConfig, ContractError> {
        load_config(&e)
    }

    pub fn state(e: Env) -> Result<SaleState, ContractError> {
        load_state(&e)
    }

    /// `(total_raised, total_tokens_sold, finalized, successful)`.
    pub fn sale_stats(e: Env) -> Result<(i128, i128, bool, bool), ContractError> {
        let state = load_state(&e)?;
        Ok((
            state.total_raised,
            state.total_tokens_sold,
            state.finalized,
            state.successful,
        ))
    }

    /// `(purchased_base, purchased_tokens, tge_claimed, vested_claimed)`.
    pub fn user_info(e: Env, user: Address) -> (i128, i128, bool, i128) {
        let record = load_record(&e, &user);
        (
            record.purchased_base,
            record.purchased_tokens,
            record.tge_claimed,
            record.vested_claimed,
        )
    }

    pub fn record(e: Env, user: Address) -> UserSaleRecord {
        load_record(&e, &user)
    }

    pub fn start(e: Env) -> Result<u64, ContractError> {
        Ok(load_config(&e)?.start_time)
    }

    pub fn end(e: Env) -> Result<u64, ContractError> {
        Ok(load_config(&e)?.end_time)
    }

    pub fn hard_cap_base(e: Env) -> Result<i128, ContractError> {
        Ok(load_config(&e)?.hard_cap)
    }

    pub fn soft_cap_base(e: Env) -> Result<i128, ContractError> {
        Ok(load_config(&e)?.soft_cap)
    }

    pub fn price_num(e: Env) -> Result<i128, ContractError> {
        Ok(load_config(&e)?.price_num)
    }

    pub fn price_den(e: Env) -> Result<i128, ContractError> {
        Ok(load_config(&e)?.price_den)
    }

    /// Time-derived phase, ignoring finalization.
    pub fn phase(e: Env) -> Result<SalePhase, ContractError> {
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        Ok(phase_at(&config, state.total_raised, e.ledger().timestamp()))
    }

    pub fn status(e: Env) -> Result<SaleStatus, ContractError> {
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        if state.finalized {
            return Ok(SaleStatus::Finalized);
        }
        Ok(
            match phase_at(&config, state.total_raised, e.ledger().timestamp()) {
                SalePhase::Pending => SaleStatus::Pending,
                SalePhase::Live => SaleStatus::Live,
                SalePhase::Ended => SaleStatus::Ended,
            },
        )
    }

    /// `(tge_net, vested)` that `user` could claim right now. Both are zero
    /// unless the sale finalized successfully and TGE has passed.
    pub fn claimable(e: Env, user: Address) -> Result<(i128, i128), ContractError> {
        let config = load_config(&e)?;
        let state = load_state(&e)?;
        let now = e.ledger().timestamp();
        if require_successful(&state).is_err() || require_tge(&config, now).is_err() {
            return Ok((0, 0));
        }

        let record = load_record(&e, &user);
        let tge_net = if record.tge_claimed {
            0
        } else {
            let gross = vesting::tge_allocation(&e, &config, record.purchased_tokens)?;
            split_fee(&e, gross, config.token_fee_bps)?.1
        };
        let vested = match vested_delta(&e, &config, &record, now) {
            Ok(delta) => delta,
            Err(ContractError::NothingToClaim) => 0,
            Err(err) => return Err(err),
        };
        Ok((tge_net, vested))
    }
}
