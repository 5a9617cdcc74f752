use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the pool stores its config.
///
/// # Topics
/// * `Symbol` - "sale_initialized"
/// * `Address` - Project owner
///
/// # Data
/// * `i128` - Hard cap
/// * `i128` - Soft cap
/// * `u64` - Start time
/// * `u64` - End time
pub fn emit_sale_initialized(
    e: &Env,
    owner: &Address,
    hard_cap: i128,
    soft_cap: i128,
    start_time: u64,
    end_time: u64,
) {
    let topics = (Symbol::new(e, "sale_initialized"), owner.clone());
    e.events()
        .publish(topics, (hard_cap, soft_cap, start_time, end_time));
}

/// Emitted on every accepted contribution.
///
/// # Data
/// * `i128` - Base amount
/// * `i128` - Sale tokens bought
/// * `u32` - Buyer tier at contribution time
/// * `i128` - Pool total raised after this contribution
pub fn emit_contributed(
    e: &Env,
    user: &Address,
    amount: i128,
    tokens: i128,
    tier: u32,
    total_raised: i128,
) {
    let topics = (Symbol::new(e, "contributed"), user.clone());
    e.events()
        .publish(topics, (amount, tokens, tier, total_raised));
}

pub fn emit_sale_finalized(e: &Env, pool: &Address, successful: bool, total_raised: i128) {
    let topics = (Symbol::new(e, "sale_finalized"), pool.clone());
    e.events().publish(topics, (successful, total_raised));
}

/// # Data
/// * `i128` - Net tokens paid to the buyer
/// * `i128` - Fee routed to the fee recipient
pub fn emit_tge_claimed(e: &Env, user: &Address, net: i128, fee: i128) {
    let topics = (Symbol::new(e, "tge_claimed"), user.clone());
    e.events().publish(topics, (net, fee));
}

pub fn emit_vested_claimed(e: &Env, user: &Address, amount: i128, vested_claimed: i128) {
    let topics = (Symbol::new(e, "vested_claimed"), user.clone());
    e.events().publish(topics, (amount, vested_claimed));
}

pub fn emit_refunded(e: &Env, user: &Address, amount: i128) {
    let topics = (Symbol::new(e, "refunded"), user.clone());
    e.events().publish(topics, amount);
}

pub fn emit_tokens_deposited(e: &Env, depositor: &Address, amount: i128, total_deposited: i128) {
    let topics = (Symbol::new(e, "tokens_deposited"), depositor.clone());
    e.events().publish(topics, (amount, total_deposited));
}

pub fn emit_proceeds_withdrawn(e: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(e, "proceeds_withdrawn"), owner.clone());
    e.events().publish(topics, amount);
}

pub fn emit_unsold_withdrawn(e: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(e, "unsold_withdrawn"), owner.clone());
    e.events().publish(topics, amount);
}
