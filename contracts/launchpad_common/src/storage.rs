//! Storage TTL policy.
//!
//! Small bounded configuration lives in `instance()` storage and shares the
//! contract's TTL. Per-user records live in `persistent()` storage and get
//! their TTL bumped on every read and write.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

pub fn bump_instance(e: &Env) {
    e.storage().instance().extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read a persistent entry and bump its TTL if present.
pub fn load_persistent<K, V>(e: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    let storage = e.storage().persistent();
    let value = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

/// Write a persistent entry and bump its TTL.
pub fn save_persistent<K, V>(e: &Env, key: &K, value: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}
