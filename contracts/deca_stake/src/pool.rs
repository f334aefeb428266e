//! Pool registry.
//!
//! Pools form an append-only arena addressed by a zero-based index. Entries
//! are never removed; an unwanted pool is paused instead.

use soroban_sdk::{Address, Env};

use crate::access::AccessControl;
use crate::accrual;
use crate::errors::ContractError;
use crate::events;
use crate::storage::{self, Pool};

/// Registry capacity. `set_reward_period` accrues every pool in one call,
/// so the registry has to stay within a single invocation's entry budget.
pub const MAX_POOLS: u32 = 32;

fn validate_terms(rate: i128, stake_limit: i128) -> Result<(), ContractError> {
    if rate < 0 || stake_limit < 0 {
        return Err(ContractError::InvalidParameter);
    }
    Ok(())
}

/// Append a pool and return its id. Fails once [`MAX_POOLS`] exist.
pub fn register_pool<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    rate: i128,
    stake_limit: i128,
    now: u64,
) -> Result<u32, ContractError> {
    access.require_owner(env, caller)?;
    validate_terms(rate, stake_limit)?;

    let pool_id = storage::pool_count(env);
    if pool_id >= MAX_POOLS {
        return Err(ContractError::PoolLimitReached);
    }
    let next = pool_id + 1;

    storage::set_pool(
        env,
        pool_id,
        &Pool {
            rate,
            stake_limit,
            total_staked: 0,
            paused: false,
            acc_reward_per_share: 0,
            last_accrual_time: now,
        },
    );
    storage::set_pool_count(env, next);

    events::publish_pool_registered(env, pool_id, rate, stake_limit);
    Ok(pool_id)
}

/// Overwrite a pool's rate, limit and pause flag.
///
/// The pool is accrued to `now` under the old rate first, so the new rate
/// only applies to time that has not elapsed yet. Lowering `stake_limit`
/// below `total_staked` is allowed; it only blocks further stakes.
#[allow(clippy::too_many_arguments)]
pub fn update_pool<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    pool_id: u32,
    rate: i128,
    stake_limit: i128,
    paused: bool,
    now: u64,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    let mut pool = storage::get_pool(env, pool_id)?;
    validate_terms(rate, stake_limit)?;

    let config = storage::get_config(env)?;
    accrual::accrue(env, &mut pool, config.reward_period, now);

    pool.rate = rate;
    pool.stake_limit = stake_limit;
    pool.paused = paused;
    storage::set_pool(env, pool_id, &pool);

    events::publish_pool_updated(env, pool_id, rate, stake_limit, paused);
    Ok(())
}

pub fn pool_info(env: &Env, pool_id: u32) -> Result<Pool, ContractError> {
    storage::get_pool(env, pool_id)
}

pub fn pool_length(env: &Env) -> u32 {
    storage::pool_count(env)
}
