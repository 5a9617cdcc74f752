use launchpad_common::BaseAsset;
use soroban_sdk::{contracttype, Address};

/// Registry entry for one deployed sale pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleRecord {
    /// Position in creation order, starting at 0.
    pub index: u32,
    pub pool: Address,
    /// Account that called `create_sale`.
    pub creator: Address,
    /// Project owner from the sale config.
    pub owner: Address,
    pub base_asset: BaseAsset,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Wasm hash of the sale pool contract to deploy.
    PoolWasm,
    /// Number of pools created so far.
    SaleCount,
    /// Index -> SaleRecord
    Sale(u32),
    /// Reverse mapping: pool address -> index
    PoolIndex(Address),
    /// Creator -> Vec<Address> of pools they created
    CreatorSales(Address),
}
