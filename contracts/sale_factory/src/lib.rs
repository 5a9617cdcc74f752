#![no_std]

//! # Sale Factory Contract
//!
//! Deploys one sale pool per project from an uploaded wasm hash and keeps a
//! registry of every pool it created.
//!
//! ## Features
//! - Validate the sale config before anything is deployed
//! - Deploy and initialize the pool in the same call
//! - Lookup by index, by pool address and by creator
//!
//! ## Security
//! - Admin-controlled pool wasm
//! - Only pools deployed here are reported by `is_sale`

mod events;
mod types;

pub use types::{DataKey, SaleRecord};

use launchpad_common::storage::{bump_instance, load_persistent, save_persistent};
use launchpad_common::{validate_sale_config, SaleConfig};
use launchpad_errors::ContractError;
use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env, Vec};


/// Setup entry point of a freshly deployed sale pool.
#[contractclient(name = "SalePoolClient")]
pub trait SalePoolInterface {
    fn initialize(env: Env, config: SaleConfig) -> Result<(), ContractError>;
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    if admin != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

fn get_sale_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::SaleCount).unwrap_or(0)
}

/// Initialize a freshly deployed `pool` with `config` and append it to the
/// registry. Returns the pool's registry index.
pub(crate) fn register_sale(
    e: &Env,
    creator: &Address,
    config: &SaleConfig,
    pool: &Address,
) -> Result<u32, ContractError> {
    SalePoolClient::new(e, pool).initialize(config);

    let index = get_sale_count(e);
    let record = SaleRecord {
        index,
        pool: pool.clone(),
        creator: creator.clone(),
        owner: config.owner.clone(),
        base_asset: config.base_asset.clone(),
        created_at: e.ledger().timestamp(),
    };
    save_persistent(e, &DataKey::Sale(index), &record);
    save_persistent(e, &DataKey::PoolIndex(pool.clone()), &index);

    let creator_key = DataKey::CreatorSales(creator.clone());
    let mut created: Vec<Address> =
        load_persistent(e, &creator_key).unwrap_or_else(|| Vec::new(e));
    created.push_back(pool.clone());
    save_persistent(e, &creator_key, &created);

    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;
    e.storage().instance().set(&DataKey::SaleCount, &next);
    bump_instance(e);

    events::emit_sale_created(e, creator, pool, index);
    Ok(index)
}

#[contract]
pub struct SaleFactory;

#[contractimpl]
impl SaleFactory {
    /// Initialize the factory.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to replace the pool wasm
    /// * `pool_wasm_hash` - Hash of the uploaded sale pool wasm
    pub fn initialize(e: Env, admin: Address, pool_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::PoolWasm, &pool_wasm_hash);
        e.storage().instance().set(&DataKey::SaleCount, &0_u32);
        bump_instance(&e);

        events::emit_pool_wasm_set(&e, &admin, &pool_wasm_hash);
        Ok(())
    }

    /// Point future deployments at a new pool wasm. Existing pools are
    /// untouched.
    pub fn set_pool_wasm(e: Env, admin: Address, pool_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage().instance().set(&DataKey::PoolWasm, &pool_wasm_hash);
        bump_instance(&e);
        events::emit_pool_wasm_set(&e, &admin, &pool_wasm_hash);
        Ok(())
    }

    /// Validate `config`, deploy a sale pool and initialize it.
    ///
    /// # Arguments
    /// * `creator` - Caller paying for the deployment
    /// * `config` - Immutable sale parameters for the new pool
    /// * `salt` - Deployment salt; must be unique per factory
    ///
    /// # Returns
    /// The new pool's address
    ///
    /// # Errors
    /// * `NotInitialized` - Factory has no pool wasm yet
    /// * `InvalidConfig` - `config` breaks a cap, time, price or tier invariant
    ///
    /// # Events
    /// Emits `sale_created` with the pool address and registry index
    pub fn create_sale(
        e: Env,
        creator: Address,
        config: SaleConfig,
        salt: BytesN<32>,
    ) -> Result<Address, ContractError> {
        creator.require_auth();
        let wasm_hash: BytesN<32> = e
            .storage()
            .instance()
            .get(&DataKey::PoolWasm)
            .ok_or(ContractError::NotInitialized)?;
        validate_sale_config(&config)?;

        let pool = e
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, ());
        register_sale(&e, &creator, &config, &pool)?;
        Ok(pool)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn sale_count(e: Env) -> u32 {
        get_sale_count(&e)
    }

    /// Every pool in creation order.
    pub fn sales(e: Env) -> Vec<Address> {
        let mut pools = Vec::new(&e);
        for index in 0..get_sale_count(&e) {
            if let Some(record) = load_persistent::<_, SaleRecord>(&e, &DataKey::Sale(index)) {
                pools.push_back(record.pool);
            }
        }
        pools
    }

    pub fn sale(e: Env, index: u32) -> Result<SaleRecord, ContractError> {
        load_persistent(&e, &DataKey::Sale(index)).ok_or(ContractError::NotFound)
    }

    /// Whether `pool` was deployed by this factory.
    pub fn is_sale(e: Env, pool: Address) -> bool {
        e.storage().persistent().has(&DataKey::PoolIndex(pool))
    }

    pub fn sales_by_creator(e: Env, creator: Address) -> Vec<Address> {
        load_persistent(&e, &DataKey::CreatorSales(creator)).unwrap_or_else(|| Vec::new(&e))
    }

    pub fn pool_wasm(e: Env) -> Result<BytesN<32>, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::PoolWasm)
            .ok_or(ContractError::NotInitialized)
    }
}
