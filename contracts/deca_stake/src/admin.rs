//! Owner-gated global configuration.

use soroban_sdk::{symbol_short, Address, Env};

use crate::access::AccessControl;
use crate::accrual;
use crate::errors::ContractError;
use crate::events;
use crate::storage;

/// Upper bound for the unstake fee, in whole percent.
pub const MAX_UNSTAKE_FEE: u32 = 100;

pub fn set_deca_token<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    token: &Address,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    let mut config = storage::get_config(env)?;
    let old = core::mem::replace(&mut config.deca_token, token.clone());
    storage::set_config(env, &config);
    events::publish_token_set(env, symbol_short!("DECA"), old, token.clone());
    Ok(())
}

pub fn set_corn_token<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    token: &Address,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    let mut config = storage::get_config(env)?;
    let old = core::mem::replace(&mut config.corn_token, token.clone());
    storage::set_config(env, &config);
    events::publish_token_set(env, symbol_short!("CORN"), old, token.clone());
    Ok(())
}

/// Change the time unit every pool's `rate` refers to.
///
/// Every pool is accrued to `now` under the old period before the switch,
/// so elapsed time is never reinterpreted.
pub fn set_reward_period<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    period: u64,
    now: u64,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    if period == 0 {
        return Err(ContractError::InvalidParameter);
    }

    let mut config = storage::get_config(env)?;
    accrual::accrue_all(env, config.reward_period, now)?;

    let old = config.reward_period;
    config.reward_period = period;
    storage::set_config(env, &config);

    events::publish_reward_period_set(env, old, period);
    Ok(())
}

pub fn set_unstake_fee<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    percent: u32,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    if percent > MAX_UNSTAKE_FEE {
        return Err(ContractError::InvalidParameter);
    }

    let mut config = storage::get_config(env)?;
    let old = config.unstake_fee;
    config.unstake_fee = percent;
    storage::set_config(env, &config);

    events::publish_unstake_fee_set(env, old, percent);
    Ok(())
}
