//! # Escrow Ledger
//!
//! Custody bookkeeping for task escrows and the platform fee accumulator.
//!
//! The fee is a fixed 3% ([`FEE_NUMERATOR`] / [`FEE_DENOMINATOR`]), computed
//! with integer floor division and carved out of the gross funding amount at
//! creation time. From then on the net amount (`gross - fee`) is the single
//! figure the escrow ever pays out (release) or refunds (cancellation,
//! expiry reclaim); the fee itself is only ever transferred by
//! [`withdraw_fees`].
//!
//! Conservation: for every task reaching a terminal state,
//! `paid + refunded + fee == funding_amount`, with at most one of
//! paid/refunded non-zero.
//!
//! All token movement goes through `try_transfer` so a rejected debit or
//! credit surfaces as [`Error::TransferFailed`] and fails the whole
//! invocation.

use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::Error;

/// Platform fee rate: 3/100.
pub const FEE_NUMERATOR: i128 = 3;
pub const FEE_DENOMINATOR: i128 = 100;

// ── Fee Calculator ───────────────────────────────────────────────────

/// `floor(gross * 3 / 100)`.
pub fn platform_fee(gross: i128) -> i128 {
    gross * FEE_NUMERATOR / FEE_DENOMINATOR
}

/// The amount available to pay out or refund for a task.
pub fn net_of_fee(gross: i128) -> i128 {
    gross - platform_fee(gross)
}

// ── Escrow operations ────────────────────────────────────────────────

/// Pull the full gross amount from `from` into contract custody and accrue
/// the platform fee. Returns the fee taken.
pub fn collect(env: &Env, from: &Address, gross: i128) -> Result<i128, Error> {
    transfer(env, from, &env.current_contract_address(), gross)?;
    let fee = platform_fee(gross);
    let accrued = storage::get_platform_fees(env) + fee;
    storage::set_platform_fees(env, &accrued);
    Ok(fee)
}

/// Pay `amount` out of contract custody to `to` (release payout or refund).
pub fn disburse(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, &env.current_contract_address(), to, amount)
}

/// Transfer the entire fee accumulator to the deployer and reset it to zero.
/// Returns the amount withdrawn. The reset and the transfer commit or revert
/// together with the surrounding invocation.
pub fn withdraw_fees(env: &Env, deployer: &Address) -> Result<i128, Error> {
    let accrued = storage::get_platform_fees(env);
    if accrued <= 0 {
        return Err(Error::InvalidState);
    }
    storage::set_platform_fees(env, &0i128);
    transfer(env, &env.current_contract_address(), deployer, accrued)?;
    Ok(accrued)
}

fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token = storage::get_token(env);
    let client = token::Client::new(env, &token);
    if client.try_transfer(from, to, &amount).is_err() {
        return Err(Error::TransferFailed);
    }
    Ok(())
}
