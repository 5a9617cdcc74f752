use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted for every pool the factory deploys.
///
/// # Topics
/// * `Symbol` - "sale_created"
/// * `Address` - The creator
///
/// # Data
/// * `Address` - The new pool
/// * `u32` - Registry index
pub fn emit_sale_created(e: &Env, creator: &Address, pool: &Address, index: u32) {
    let topics = (Symbol::new(e, "sale_created"), creator.clone());
    e.events().publish(topics, (pool.clone(), index));
}

pub fn emit_pool_wasm_set(e: &Env, admin: &Address, wasm_hash: &BytesN<32>) {
    let topics = (Symbol::new(e, "pool_wasm_set"), admin.clone());
    e.events().publish(topics, wasm_hash.clone());
}
