//! Buyer payouts and owner withdrawals: TGE, vesting, refunds, proceeds.

#![cfg(test)]

use crate::test_helpers::*;
use crate::vesting_allocation;
use launchpad_errors::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. TGE claims
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_claim_tge_pays_share_minus_fee() {
    let e = Env::default();
    let (s, a, b) = successful_sale(&e);

    // a bought 60_000 tokens: 20% = 12_000 gross, 1% fee = 120.
    assert_eq!(s.client.claim_tge(&a), 11_880);
    assert_eq!(s.sale(&e).balance(&a), 11_880);
    assert_eq!(s.sale(&e).balance(&s.fee_recipient), 120);

    // b bought 80_000 tokens: 16_000 gross, 160 fee.
    assert_eq!(s.client.claim_tge(&b), 15_840);
    assert_eq!(s.sale(&e).balance(&s.fee_recipient), 280);
    assert!(s.client.record(&b).tge_claimed);
}

#[test]
fn test_claim_tge_pays_exactly_once() {
    let e = Env::default();
    let (s, a, _) = successful_sale(&e);

    s.client.claim_tge(&a);
    for _ in 0..3 {
        assert_eq!(
            s.client.try_claim_tge(&a),
            Err(Ok(ContractError::AlreadyClaimed))
        );
    }
    assert_eq!(s.sale(&e).balance(&a), 11_880);
}

#[test]
fn test_claim_tge_for_non_buyer_pays_nothing() {
    let e = Env::default();
    let (s, _, _) = successful_sale(&e);
    let stranger = Address::generate(&e);
    assert_eq!(s.client.claim_tge(&stranger), 0);
}

#[test]
fn test_claims_before_finalize_rejected() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.buyer(&e, 2);
    set_time(&e, START);
    s.client.contribute(&a, &30_000);

    set_time(&e, END);
    assert_eq!(
        s.client.try_claim_tge(&a),
        Err(Ok(ContractError::SaleNotFinalized))
    );
    assert_eq!(
        s.client.try_claim_vested(&a),
        Err(Ok(ContractError::SaleNotFinalized))
    );
}

#[test]
fn test_claims_before_tge_rejected() {
    let e = Env::default();
    let s = setup_with(&e, |c| {
        c.tge_time = END + 1_000;
        c.soft_cap = 20_000;
    });
    let a = s.buyer(&e, 2);
    set_time(&e, START);
    s.client.contribute(&a, &30_000);
    set_time(&e, END);
    assert!(s.client.finalize());

    assert_eq!(
        s.client.try_claim_tge(&a),
        Err(Ok(ContractError::TgeNotReached))
    );
    assert_eq!(
        s.client.try_claim_vested(&a),
        Err(Ok(ContractError::TgeNotReached))
    );
    assert_eq!(s.client.claimable(&a), (0, 0));

    set_time(&e, END + 1_000);
    assert_eq!(s.client.claim_tge(&a), 11_880);
}

#[test]
fn test_claims_on_failed_sale_rejected() {
    let e = Env::default();
    let (s, a) = failed_sale(&e);
    assert_eq!(
        s.client.try_claim_tge(&a),
        Err(Ok(ContractError::SaleFailed))
    );
    assert_eq!(
        s.client.try_claim_vested(&a),
        Err(Ok(ContractError::SaleFailed))
    );
}

// ═══════════════════════════════════════════════════════════════════
// 2. Vesting
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_vesting_is_linear_and_capped() {
    let e = Env::default();
    let (s, a, _) = successful_sale(&e);

    // Nothing has vested at the TGE instant; that is a no-op, not an error.
    assert_eq!(s.client.claim_vested(&a), 0);

    // 80% of 60_000 = 48_000 over 10_000 seconds.
    set_time(&e, TGE + VEST / 4);
    assert_eq!(s.client.claim_vested(&a), 12_000);
    assert_eq!(s.client.claim_vested(&a), 0);

    set_time(&e, TGE + VEST);
    assert_eq!(s.client.claim_vested(&a), 36_000);

    set_time(&e, TGE + 10 * VEST);
    assert_eq!(s.client.claim_vested(&a), 0);
    assert_eq!(s.client.user_info(&a).3, 48_000);
    assert_eq!(s.sale(&e).balance(&a), 48_000);
}

#[test]
fn test_vesting_is_independent_of_tge_claim() {
    let e = Env::default();
    let (s, a, _) = successful_sale(&e);
    set_time(&e, TGE + VEST);
    assert_eq!(s.client.claim_vested(&a), 48_000);
    assert_eq!(s.client.claim_tge(&a), 11_880);
}

#[test]
fn test_cumulative_vesting_never_exceeds_allocation() {
    let e = Env::default();
    let (s, _, b) = successful_sale(&e);
    let config = s.client.config();
    let allocation = vesting_allocation(&e, &config, 80_000).unwrap();
    assert_eq!(allocation, 64_000);

    let mut paid = 0_i128;
    let mut now = TGE;
    while now <= TGE + VEST + 777 {
        set_time(&e, now);
        paid += s.client.claim_vested(&b);
        assert!(paid <= allocation);
        now += 777;
    }
    assert_eq!(paid, allocation);
}

#[test]
fn test_zero_vest_duration_releases_everything_at_tge() {
    let e = Env::default();
    let s = setup_with(&e, |c| c.vest_duration = 0);
    let a = s.buyer(&e, 3);
    set_time(&e, START);
    s.client.contribute(&a, &SOFT_CAP);
    set_time(&e, END);
    s.client.finalize();

    // 100_000 tokens: 20_000 at TGE, 80_000 vested immediately.
    assert_eq!(s.client.claim_vested(&a), 80_000);
    assert_eq!(s.client.claim_vested(&a), 0);
}

#[test]
fn test_small_purchase_rounds_down() {
    let e = Env::default();
    let s = setup_with(&e, |c| c.soft_cap = 0);
    let a = s.buyer(&e, 1);
    set_time(&e, START);
    // 7 base units buy 14 tokens.
    assert_eq!(s.client.contribute(&a, &7), 14);
    set_time(&e, END);
    assert!(s.client.finalize());

    // TGE: floor(14 * 0.2) = 2, fee floor(2 * 0.01) = 0.
    assert_eq!(s.client.claim_tge(&a), 2);
    // Vesting share: floor(14 * 0.8) = 11.
    set_time(&e, TGE + 1);
    assert_eq!(s.client.claim_vested(&a), 0);
    set_time(&e, TGE + VEST / 2);
    assert_eq!(s.client.claim_vested(&a), 5);
    set_time(&e, TGE + VEST);
    assert_eq!(s.client.claim_vested(&a), 6);
    assert!(s.sale(&e).balance(&a) <= 14);
}

#[test]
fn test_claimable_preview() {
    let e = Env::default();
    let (s, a, _) = successful_sale(&e);

    set_time(&e, TGE + VEST / 4);
    assert_eq!(s.client.claimable(&a), (11_880, 12_000));
    s.client.claim_tge(&a);
    assert_eq!(s.client.claimable(&a), (0, 12_000));
    s.client.claim_vested(&a);
    assert_eq!(s.client.claimable(&a), (0, 0));
}

// ═══════════════════════════════════════════════════════════════════
// 3. Refunds
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_refund_returns_full_contribution_once() {
    let e = Env::default();
    let (s, a) = failed_sale(&e);

    assert_eq!(s.client.refund_if_softcap_failed(&a), 30_000);
    assert_eq!(s.base(&e).balance(&a), BUYER_MINT);
    assert_eq!(s.client.user_info(&a), (0, 0, false, 0));
    assert!(s.client.record(&a).refunded);

    assert_eq!(
        s.client.try_refund_if_softcap_failed(&a),
        Err(Ok(ContractError::AlreadyRefunded))
    );
    assert_eq!(s.base(&e).balance(&s.contract_id), 0);
}

#[test]
fn test_refund_without_contribution_rejected() {
    let e = Env::default();
    let (s, _) = failed_sale(&e);
    let stranger = Address::generate(&e);
    assert_eq!(
        s.client.try_refund_if_softcap_failed(&stranger),
        Err(Ok(ContractError::AlreadyRefunded))
    );
}

#[test]
fn test_refund_before_finalize_rejected() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.buyer(&e, 2);
    set_time(&e, START);
    s.client.contribute(&a, &30_000);
    set_time(&e, END);
    assert_eq!(
        s.client.try_refund_if_softcap_failed(&a),
        Err(Ok(ContractError::SaleNotFinalized))
    );
}

#[test]
fn test_refund_on_successful_sale_rejected() {
    let e = Env::default();
    let (s, a, _) = successful_sale(&e);
    assert_eq!(
        s.client.try_refund_if_softcap_failed(&a),
        Err(Ok(ContractError::SaleSucceeded))
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Owner withdrawals
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_withdraw_proceeds_once() {
    let e = Env::default();
    let (s, _, _) = successful_sale(&e);

    assert_eq!(s.client.withdraw_proceeds(&s.owner), 70_000);
    assert_eq!(s.base(&e).balance(&s.owner), 70_000);
    assert_eq!(
        s.client.try_withdraw_proceeds(&s.owner),
        Err(Ok(ContractError::AlreadyWithdrawn))
    );
}

#[test]
fn test_withdraw_proceeds_requires_owner() {
    let e = Env::default();
    let (s, _, _) = successful_sale(&e);
    let stranger = Address::generate(&e);
    assert_eq!(
        s.client.try_withdraw_proceeds(&stranger),
        Err(Ok(ContractError::NotSaleOwner))
    );
    assert_eq!(
        s.client.try_withdraw_unsold(&stranger),
        Err(Ok(ContractError::NotSaleOwner))
    );
}

#[test]
fn test_withdraw_proceeds_on_failed_sale_rejected() {
    let e = Env::default();
    let (s, _) = failed_sale(&e);
    assert_eq!(
        s.client.try_withdraw_proceeds(&s.owner),
        Err(Ok(ContractError::SaleFailed))
    );
}

#[test]
fn test_withdraw_before_finalize_rejected() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client.try_withdraw_proceeds(&s.owner),
        Err(Ok(ContractError::SaleNotFinalized))
    );
    assert_eq!(
        s.client.try_withdraw_unsold(&s.owner),
        Err(Ok(ContractError::SaleNotFinalized))
    );
}

#[test]
fn test_withdraw_unsold_after_success_keeps_buyer_tokens() {
    let e = Env::default();
    let (s, _, _) = successful_sale(&e);
    // 200_000 deposited, 140_000 sold.
    assert_eq!(s.client.withdraw_unsold(&s.owner), 60_000);
    assert_eq!(s.sale(&e).balance(&s.contract_id), 140_000);
    assert_eq!(
        s.client.try_withdraw_unsold(&s.owner),
        Err(Ok(ContractError::AlreadyWithdrawn))
    );
    assert_eq!(
        s.client.try_deposit_sale_tokens(&s.owner, &1),
        Err(Ok(ContractError::AlreadyWithdrawn))
    );
}

#[test]
fn test_withdraw_unsold_after_failure_returns_everything() {
    let e = Env::default();
    let (s, _) = failed_sale(&e);
    assert_eq!(s.client.withdraw_unsold(&s.owner), DEPOSIT);
    assert_eq!(s.sale(&e).balance(&s.owner), DEPOSIT);
}

// ═══════════════════════════════════════════════════════════════════
// 5. Conservation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_successful_sale_drains_pool_exactly() {
    let e = Env::default();
    let (s, a, b) = successful_sale(&e);

    s.client.claim_tge(&a);
    s.client.claim_tge(&b);
    set_time(&e, TGE + VEST);
    s.client.claim_vested(&a);
    s.client.claim_vested(&b);
    s.client.withdraw_proceeds(&s.owner);
    s.client.withdraw_unsold(&s.owner);

    assert_eq!(s.sale(&e).balance(&s.contract_id), 0);
    assert_eq!(s.base(&e).balance(&s.contract_id), 0);
    assert_eq!(
        s.sale(&e).balance(&a) + s.sale(&e).balance(&b) + s.sale(&e).balance(&s.fee_recipient),
        140_000
    );
}
