//! Fixed-point arithmetic for token amounts and time-weighted rewards.
//!
//! Every reward quantity is a scaled integer; nothing here touches floating
//! point. Products are formed in 256 bits before the single truncating
//! division, so intermediate values never wrap and rounding always lands in
//! the pool's favour.

use soroban_sdk::{Env, I256};

use crate::errors::ContractError;

/// Fixed-point scale shared by `rate` and `acc_reward_per_share` (10^18).
pub const WAD: i128 = 1_000_000_000_000_000_000;

/// Denominator for the unstake fee, which is a whole percentage.
pub const PERCENT_DENOMINATOR: i128 = 100;

pub fn checked_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::MathOverflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::MathOverflow)
}

/// `a * b / denominator`, truncated toward zero, with a 256-bit product.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, ContractError> {
    if denominator == 0 {
        return Err(ContractError::MathOverflow);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or(ContractError::MathOverflow)
}

/// `a * b / denominator` for non-negative operands, clamped to `i128::MAX`.
///
/// Reward quantities go through this so an extreme rate can only cap what is
/// owed, never make the pool unusable. A zero denominator yields zero.
pub fn saturating_mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        return 0;
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .unwrap_or(i128::MAX)
}

/// Per-share reward emitted over `elapsed` seconds:
///
/// ```text
/// delta = rate × elapsed / reward_period
/// ```
///
/// Both `rate` and the result are WAD-scaled amounts per unit of stake.
/// Saturates at `i128::MAX`.
pub fn reward_delta(env: &Env, rate: i128, elapsed: u64, reward_period: u64) -> i128 {
    saturating_mul_div(env, rate, i128::from(elapsed), i128::from(reward_period))
}

/// Reward owed to `staked` units for an accumulator advance of `acc_delta`:
///
/// ```text
/// owed = staked × acc_delta / WAD
/// ```
///
/// Saturates at `i128::MAX`.
pub fn share_reward(env: &Env, staked: i128, acc_delta: i128) -> i128 {
    if staked == 0 || acc_delta == 0 {
        return 0;
    }
    saturating_mul_div(env, staked, acc_delta, WAD)
}

/// Splits a withdrawal into `(fee, net)` for a whole-percent fee.
///
/// The fee truncates, so `fee + net == amount` always holds.
pub fn fee_split(env: &Env, amount: i128, fee_percent: u32) -> Result<(i128, i128), ContractError> {
    let fee = mul_div(env, amount, i128::from(fee_percent), PERCENT_DENOMINATOR)?;
    let net = checked_sub(amount, fee)?;
    Ok((fee, net))
}
