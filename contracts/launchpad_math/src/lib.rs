//! Fixed-point ledger arithmetic shared by every launchpad contract.
//!
//! All helpers are checked and return `Result<_, ContractError>` instead of
//! panicking, so a failing computation aborts only the call that triggered it.
//!
//! ## Rounding
//! Every division rounds toward zero on non-negative operands, i.e. down.
//! Payouts derived from these helpers can therefore never exceed the exact
//! rational value: the protocol keeps the dust, the user never receives more
//! than they are owed.
//!
//! ## Working width
//! `proportional_share` multiplies in the host `I256` type when the `i128`
//! product would overflow, and only fails with `Overflow` if the final quotient
//! does not fit back into `i128`.

#![no_std]

use launchpad_errors::ContractError;
use soroban_sdk::{Env, I256};

/// One hundred percent expressed in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Checked `i128` addition.
#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `u64` addition, used for timestamp arithmetic.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// `amount * numerator / denominator`, rounded down.
///
/// Operands must be non-negative; a negative operand is rejected with
/// `InvalidAmount` and a zero denominator with `DivisionByZero`.
pub fn proportional_share(
    e: &Env,
    amount: i128,
    numerator: i128,
    denominator: i128,
) -> Result<i128, ContractError> {
    if denominator == 0 {
        return Err(ContractError::DivisionByZero);
    }
    if amount < 0 || numerator < 0 || denominator < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if let Some(product) = amount.checked_mul(numerator) {
        return Ok(product / denominator);
    }

    let wide = I256::from_i128(e, amount)
        .mul(&I256::from_i128(e, numerator))
        .div(&I256::from_i128(e, denominator));
    wide.to_i128().ok_or(ContractError::Overflow)
}

/// Basis-point fraction of a value: `value * bps / 10_000`, rounded down.
#[inline]
pub fn bps(e: &Env, value: i128, bps: u32) -> Result<i128, ContractError> {
    proportional_share(e, value, bps as i128, BPS_DENOMINATOR as i128)
}

/// Splits `value` into `(fee, net)` where `fee = bps(value, fee_bps)`.
///
/// `fee + net == value` always holds; the rounding dust lands in `net`.
pub fn split_fee(e: &Env, value: i128, fee_bps: u32) -> Result<(i128, i128), ContractError> {
    let fee = bps(e, value, fee_bps)?;
    Ok((fee, sub(value, fee)?))
}
