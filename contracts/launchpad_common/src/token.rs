//! Token movement helpers.
//! Centralizes allowance checks and transfers so every value movement in a
//! contract goes through one audited path.

use launchpad_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// @notice Checks that `owner` allowed the current contract to spend `amount`.
pub fn require_allowance(
    e: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let contract = e.current_contract_address();
    let allowance = TokenClient::new(e, token).allowance(owner, &contract);
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

/// @notice Pulls `amount` of `token` from `owner` into the current contract.
/// @dev Requires prior approval for the contract as spender. Zero is a no-op.
pub fn transfer_into_contract(
    e: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    require_allowance(e, token, owner, amount)?;
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
    Ok(())
}

/// @notice Pays `amount` of `token` from the current contract to `recipient`.
/// @dev Zero is a no-op.
pub fn transfer_from_contract(
    e: &Env,
    token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, recipient, &amount);
    Ok(())
}
