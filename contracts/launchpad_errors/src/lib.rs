#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Rejected arguments and configuration (codes 200-299).
    Validation,
    /// Stake book position and reward errors (codes 300-399).
    Staking,
    /// Sale pool lifecycle, cap and claim errors (codes 400-499).
    Sale,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by all launchpad contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Staking
///   400 - 499 : Sale
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: stake_book, tier_aggregator, sale_pool, sale_factory
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: stake_book, tier_aggregator, sale_pool, sale_factory
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    /// Contracts: stake_book, tier_aggregator, sale_factory
    NotAdmin = 100,

    /// Caller is not the project owner recorded in the sale config.
    /// Contracts: sale_pool
    NotSaleOwner = 101,

    // --- Validation (200-299) ---
    /// Amount argument must be strictly positive and buy a non-zero quantity.
    /// Contracts: stake_book, sale_pool
    InvalidAmount = 200,

    /// Sale configuration violates one of its invariants.
    /// Contracts: sale_pool, sale_factory
    InvalidConfig = 201,

    /// Lock period is not one of the configured lock options.
    /// Contracts: stake_book
    InvalidLockPeriod = 202,

    /// SOMI weight must be in the range 0-10000 bps.
    /// Contracts: tier_aggregator
    InvalidWeight = 203,

    /// Tier thresholds must be strictly ascending (t1 < t2 < t3).
    /// Contracts: tier_aggregator
    InvalidThresholds = 204,

    /// Token allowance granted to the contract is below the amount pulled.
    /// Contracts: stake_book, sale_pool
    InsufficientAllowance = 205,

    // --- Staking (300-399) ---
    /// Position lock has not yet expired.
    /// Contracts: stake_book
    PositionLocked = 300,

    /// Position id is unknown or the position was already closed.
    /// Contracts: stake_book
    NotFound = 301,

    /// Reward reserve cannot cover the requested reward payout.
    /// Contracts: stake_book
    InsufficientRewardReserve = 302,

    // --- Sale (400-499) ---
    /// Contribution attempted outside the live window.
    /// Contracts: sale_pool
    SaleNotLive = 400,

    /// Contribution would exceed the tier, wallet or hard cap.
    /// Contracts: sale_pool
    CapExceeded = 401,

    /// Finalization attempted before the sale ended.
    /// Contracts: sale_pool
    SaleNotEnded = 402,

    /// Claim or withdrawal attempted before finalization.
    /// Contracts: sale_pool
    SaleNotFinalized = 403,

    /// Claim attempted on a sale that missed its soft cap.
    /// Contracts: sale_pool
    SaleFailed = 404,

    /// Refund attempted on a sale that reached its soft cap.
    /// Contracts: sale_pool
    SaleSucceeded = 405,

    /// Claim attempted before the token generation event.
    /// Contracts: sale_pool
    TgeNotReached = 406,

    /// TGE allocation has already been claimed.
    /// Contracts: sale_pool
    AlreadyClaimed = 407,

    /// Contribution has already been refunded (or there was none).
    /// Contracts: sale_pool
    AlreadyRefunded = 408,

    /// No newly vested tokens since the last claim. Never surfaced to callers;
    /// `claim_vested` turns it into a zero payout.
    /// Contracts: sale_pool
    NothingToClaim = 409,

    /// Proceeds or unsold tokens have already been withdrawn.
    /// Contracts: sale_pool
    AlreadyWithdrawn = 410,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: all
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: all
    Underflow = 701,

    /// Division by zero in a ratio computation.
    /// Contracts: all
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::NotAdmin | ContractError::NotSaleOwner => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::InvalidConfig
            | ContractError::InvalidLockPeriod
            | ContractError::InvalidWeight
            | ContractError::InvalidThresholds
            | ContractError::InsufficientAllowance => ErrorCategory::Validation,

            ContractError::PositionLocked
            | ContractError::NotFound
            | ContractError::InsufficientRewardReserve => ErrorCategory::Staking,

            ContractError::SaleNotLive
            | ContractError::CapExceeded
            | ContractError::SaleNotEnded
            | ContractError::SaleNotFinalized
            | ContractError::SaleFailed
            | ContractError::SaleSucceeded
            | ContractError::TgeNotReached
            | ContractError::AlreadyClaimed
            | ContractError::AlreadyRefunded
            | ContractError::NothingToClaim
            | ContractError::AlreadyWithdrawn => ErrorCategory::Sale,

            ContractError::Overflow | ContractError::Underflow | ContractError::DivisionByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::NotSaleOwner => "Caller is not the sale owner",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::InvalidConfig => "Sale configuration is invalid",
            ContractError::InvalidLockPeriod => "Lock period is not a configured lock option",
            ContractError::InvalidWeight => "Weight bps must be in range 0-10000",
            ContractError::InvalidThresholds => "Tier thresholds must be strictly ascending",
            ContractError::InsufficientAllowance => "Token allowance is below the required amount",
            ContractError::PositionLocked => "Position lock has not yet expired",
            ContractError::NotFound => "No open position found for the given id",
            ContractError::InsufficientRewardReserve => {
                "Reward reserve cannot cover the reward payout"
            }
            ContractError::SaleNotLive => "Sale is not accepting contributions",
            ContractError::CapExceeded => "Contribution exceeds the tier, wallet or hard cap",
            ContractError::SaleNotEnded => "Sale has not ended yet",
            ContractError::SaleNotFinalized => "Sale has not been finalized",
            ContractError::SaleFailed => "Sale did not reach its soft cap",
            ContractError::SaleSucceeded => "Sale reached its soft cap; refunds are closed",
            ContractError::TgeNotReached => "Token generation event has not happened yet",
            ContractError::AlreadyClaimed => "TGE allocation has already been claimed",
            ContractError::AlreadyRefunded => "Contribution has already been refunded",
            ContractError::NothingToClaim => "No newly vested tokens to claim",
            ContractError::AlreadyWithdrawn => "Funds have already been withdrawn",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in ratio computation",
        }
    }
}
