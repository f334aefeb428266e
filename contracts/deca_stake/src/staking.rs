//! User-facing staking operations.
//!
//! Every write follows the same shape: load pool and position into memory,
//! accrue and settle, validate, compute the new state, call the token
//! collaborators, and only then write anything back. An error at any step
//! returns before the first storage write.
//!
//! Position lifecycle: `Empty → Active ⟲ → Dormant → Empty`, where `Dormant`
//! is a fully unstaked position still holding unharvested reward.

use soroban_sdk::{contracttype, Address, Env};

use crate::accrual;
use crate::errors::ContractError;
use crate::events;
use crate::ledger::TokenLedger;
use crate::math;
use crate::storage::{self, Position};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PositionState {
    /// Nothing staked and nothing owed.
    Empty = 0,
    /// Stake in the pool.
    Active = 1,
    /// Fully unstaked, reward still waiting for `harvest`.
    Dormant = 2,
}

/// Breakdown of a completed unstake.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeReceipt {
    /// Principal withdrawn from the pool.
    pub amount: i128,
    /// Part routed to the fee receiver.
    pub fee: i128,
    /// Part paid to the staker.
    pub net: i128,
}

/// Deposit `amount` of the staking token into `pool_id`.
pub fn stake<L: TokenLedger>(
    env: &Env,
    staking_token: &L,
    staker: &Address,
    pool_id: u32,
    amount: i128,
    now: u64,
) -> Result<(), ContractError> {
    let config = storage::get_config(env)?;
    let mut pool = storage::get_pool(env, pool_id)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if pool.paused {
        return Err(ContractError::PoolPaused);
    }
    let new_total = pool
        .total_staked
        .checked_add(amount)
        .filter(|total| *total <= pool.stake_limit)
        .ok_or(ContractError::CapacityExceeded)?;

    let mut position = storage::get_position(env, staker, pool_id);
    accrual::accrue(env, &mut pool, config.reward_period, now);
    accrual::settle(env, &pool, &mut position);

    position.staked_amount = math::checked_add(position.staked_amount, amount)?;
    pool.total_staked = new_total;

    staking_token.transfer_in(staker, amount)?;

    storage::set_pool(env, pool_id, &pool);
    storage::set_position(env, staker, pool_id, &position);

    events::publish_staked(env, staker.clone(), pool_id, amount, new_total);
    Ok(())
}

/// Withdraw the whole stake of `staker` from `pool_id`, less the unstake fee.
///
/// Reward is settled but not paid; it stays on the position until
/// [`harvest`].
pub fn unstake<L: TokenLedger>(
    env: &Env,
    staking_token: &L,
    staker: &Address,
    pool_id: u32,
    now: u64,
) -> Result<UnstakeReceipt, ContractError> {
    let config = storage::get_config(env)?;
    let mut pool = storage::get_pool(env, pool_id)?;
    let mut position = storage::get_position(env, staker, pool_id);

    if position.staked_amount == 0 {
        return Err(ContractError::NoStake);
    }

    accrual::accrue(env, &mut pool, config.reward_period, now);
    accrual::settle(env, &pool, &mut position);

    let amount = position.staked_amount;
    let (fee, net) = math::fee_split(env, amount, config.unstake_fee)?;
    pool.total_staked = math::checked_sub(pool.total_staked, amount)?;
    position.staked_amount = 0;

    if fee > 0 {
        staking_token.transfer_out(&config.fee_receiver, fee)?;
    }
    if net > 0 {
        staking_token.transfer_out(staker, net)?;
    }

    storage::set_pool(env, pool_id, &pool);
    storage::set_position(env, staker, pool_id, &position);

    events::publish_unstaked(env, staker.clone(), pool_id, amount, fee, net);
    Ok(UnstakeReceipt { amount, fee, net })
}

/// Pay out everything settled for `staker` in `pool_id`. Returns the amount
/// paid; zero owed is a successful no-op.
pub fn harvest<L: TokenLedger>(
    env: &Env,
    reward_token: &L,
    staker: &Address,
    pool_id: u32,
    now: u64,
) -> Result<i128, ContractError> {
    let config = storage::get_config(env)?;
    let mut pool = storage::get_pool(env, pool_id)?;
    let mut position = storage::get_position(env, staker, pool_id);

    accrual::accrue(env, &mut pool, config.reward_period, now);
    accrual::settle(env, &pool, &mut position);

    let amount = position.pending_reward;
    if amount > 0 {
        reward_token.transfer_out(staker, amount)?;
        position.pending_reward = 0;
    }

    storage::set_pool(env, pool_id, &pool);
    // An inert position stays inert; don't materialise storage for it.
    if amount > 0 || position.staked_amount > 0 {
        storage::set_position(env, staker, pool_id, &position);
    }

    if amount > 0 {
        events::publish_harvested(env, staker.clone(), pool_id, amount);
    }
    Ok(amount)
}

/// Reward `account` could harvest from `pool_id` at `now`.
pub fn pending_reward(
    env: &Env,
    account: &Address,
    pool_id: u32,
    now: u64,
) -> Result<i128, ContractError> {
    let config = storage::get_config(env)?;
    let pool = storage::get_pool(env, pool_id)?;
    let position = storage::get_position(env, account, pool_id);
    Ok(accrual::projected_reward(
        env,
        &pool,
        &position,
        config.reward_period,
        now,
    ))
}

/// Stored bookkeeping for `account` in `pool_id`.
pub fn position(env: &Env, account: &Address, pool_id: u32) -> Result<Position, ContractError> {
    storage::get_pool(env, pool_id)?;
    Ok(storage::get_position(env, account, pool_id))
}

pub fn position_state(
    env: &Env,
    account: &Address,
    pool_id: u32,
    now: u64,
) -> Result<PositionState, ContractError> {
    let owed = pending_reward(env, account, pool_id, now)?;
    let staked = storage::get_position(env, account, pool_id).staked_amount;
    Ok(match (staked > 0, owed > 0) {
        (true, _) => PositionState::Active,
        (false, true) => PositionState::Dormant,
        (false, false) => PositionState::Empty,
    })
}
