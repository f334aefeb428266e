//! Reward accrual engine.
//!
//! Two steps run before any stake-affecting mutation:
//!
//! 1. [`accrue`] advances a pool's `acc_reward_per_share` to `now` under the
//!    pool's current rate.
//! 2. [`settle`] moves everything a position earned since its last snapshot
//!    into `pending_reward` and re-snapshots `reward_debt`.
//!
//! Both operate on in-memory records. Callers decide when (and whether) the
//! results are written back, which is what keeps failed operations free of
//! partial state.

use soroban_sdk::Env;

use crate::errors::ContractError;
use crate::math;
use crate::storage::{self, Pool, Position};

/// Advance `pool` to `now`.
///
/// Nothing is emitted while the pool is empty or when no time has passed,
/// but `last_accrual_time` still moves forward so an empty stretch is never
/// paid out later. The timestamp never moves backwards.
///
/// The accumulator saturates at `i128::MAX` rather than failing, so an
/// extreme rate can never lock principal in the pool.
pub fn accrue(env: &Env, pool: &mut Pool, reward_period: u64, now: u64) {
    if now <= pool.last_accrual_time {
        return;
    }

    let elapsed = now - pool.last_accrual_time;
    if pool.total_staked > 0 && pool.rate > 0 {
        let delta = math::reward_delta(env, pool.rate, elapsed, reward_period);
        pool.acc_reward_per_share = pool.acc_reward_per_share.saturating_add(delta);
    }
    pool.last_accrual_time = now;
}

/// Credit `position` with everything accrued since its last snapshot.
///
/// Returns the newly credited amount. Calling it again without an
/// intervening [`accrue`] credits zero. `pending_reward` saturates.
pub fn settle(env: &Env, pool: &Pool, position: &mut Position) -> i128 {
    let acc_delta = pool
        .acc_reward_per_share
        .saturating_sub(position.reward_debt)
        .max(0);
    let owed = math::share_reward(env, position.staked_amount, acc_delta);
    position.pending_reward = position.pending_reward.saturating_add(owed);
    position.reward_debt = pool.acc_reward_per_share;
    owed
}

/// Total reward `position` could harvest at `now`, without touching storage.
pub fn projected_reward(
    env: &Env,
    pool: &Pool,
    position: &Position,
    reward_period: u64,
    now: u64,
) -> i128 {
    let mut pool = pool.clone();
    let mut position = position.clone();
    accrue(env, &mut pool, reward_period, now);
    settle(env, &pool, &mut position);
    position.pending_reward
}

/// Bring every registered pool up to `now`.
///
/// Run before anything that reinterprets elapsed time (a new reward period)
/// so the change only applies from here on.
pub fn accrue_all(env: &Env, reward_period: u64, now: u64) -> Result<(), ContractError> {
    let count = storage::pool_count(env);
    for pool_id in 0..count {
        let mut pool = storage::get_pool(env, pool_id)?;
        accrue(env, &mut pool, reward_period, now);
        storage::set_pool(env, pool_id, &pool);
    }
    Ok(())
}
