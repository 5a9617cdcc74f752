#![no_std]

//! # Launchpad Common
//!
//! Wire types shared between the sale factory, sale pools and the tier
//! aggregator, plus the sale config validation, token transfer and storage TTL
//! helpers every contract in the workspace uses.

pub mod storage;
pub mod token;
pub mod types;
pub mod validation;

pub use types::{BaseAsset, SaleConfig, TierSnapshot, MAX_TIER};
pub use validation::validate_sale_config;
