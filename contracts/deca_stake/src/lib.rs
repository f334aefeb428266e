#![no_std]

//! # DecaStake
//!
//! Multi-pool staking ledger. Holders lock the DECA token into one of several
//! owner-defined pools and accrue CORN over time at each pool's rate, subject
//! to per-pool capacity and pause controls. Unstaking withholds a percentage
//! fee that is routed to the fee receiver.
//!
//! Rewards use a per-share accumulator: every state-changing call first
//! advances the affected pool to the current ledger timestamp and settles
//! the caller's position, so a rate or period change never applies
//! retroactively.

pub mod access;
pub mod accrual;
pub mod admin;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod staking;
pub mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

use access::OwnerAccess;
use ledger::StellarToken;

pub use errors::ContractError;
pub use staking::{PositionState, UnstakeReceipt};
pub use storage::{Config, Pool, Position};

/// Reward period applied until the owner sets one (one day).
pub const DEFAULT_REWARD_PERIOD: u64 = 86_400;

/// Unstake fee applied until the owner sets one.
pub const DEFAULT_UNSTAKE_FEE: u32 = 0;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct DecaStakeContract;

#[contractimpl]
impl DecaStakeContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `deca_token` – token users stake.
    /// * `corn_token` – token rewards are paid in. The contract must hold
    ///   enough of it to cover harvests.
    ///
    /// The owner also becomes the fee receiver, permanently.
    pub fn initialize(
        env: Env,
        owner: Address,
        deca_token: Address,
        corn_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_config(
            &env,
            &Config {
                deca_token: deca_token.clone(),
                corn_token: corn_token.clone(),
                reward_period: DEFAULT_REWARD_PERIOD,
                unstake_fee: DEFAULT_UNSTAKE_FEE,
                fee_receiver: owner.clone(),
            },
        );
        storage::set_pool_count(&env, 0);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(
            &env,
            owner,
            deca_token,
            corn_token,
            DEFAULT_REWARD_PERIOD,
            DEFAULT_UNSTAKE_FEE,
        );
        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` DECA into `pool_id`.
    pub fn stake(
        env: Env,
        staker: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        staker.require_auth();
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let deca = StellarToken::new(&env, &config.deca_token);
        staking::stake(
            &env,
            &deca,
            &staker,
            pool_id,
            amount,
            env.ledger().timestamp(),
        )
    }

    /// Withdraw the caller's whole stake from `pool_id`.
    ///
    /// Accrued CORN stays pending on the position until `harvest`.
    pub fn unstake(
        env: Env,
        staker: Address,
        pool_id: u32,
    ) -> Result<UnstakeReceipt, ContractError> {
        staker.require_auth();
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let deca = StellarToken::new(&env, &config.deca_token);
        staking::unstake(&env, &deca, &staker, pool_id, env.ledger().timestamp())
    }

    /// Pay out the caller's accrued CORN from `pool_id`. Returns the amount paid.
    pub fn harvest(env: Env, staker: Address, pool_id: u32) -> Result<i128, ContractError> {
        staker.require_auth();
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let corn = StellarToken::new(&env, &config.corn_token);
        staking::harvest(&env, &corn, &staker, pool_id, env.ledger().timestamp())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Append a pool. `rate` is WAD-scaled CORN per DECA per reward period.
    pub fn register_pool(
        env: Env,
        caller: Address,
        rate: i128,
        stake_limit: i128,
    ) -> Result<u32, ContractError> {
        storage::extend_instance_ttl(&env);
        pool::register_pool(
            &env,
            &OwnerAccess,
            &caller,
            rate,
            stake_limit,
            env.ledger().timestamp(),
        )
    }

    pub fn update_pool(
        env: Env,
        caller: Address,
        pool_id: u32,
        rate: i128,
        stake_limit: i128,
        paused: bool,
    ) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        pool::update_pool(
            &env,
            &OwnerAccess,
            &caller,
            pool_id,
            rate,
            stake_limit,
            paused,
            env.ledger().timestamp(),
        )
    }

    pub fn pool_length(env: Env) -> u32 {
        pool::pool_length(&env)
    }

    pub fn pool_info(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        pool::pool_info(&env, pool_id)
    }

    // ── Admin configuration ─────────────────────────────────────────────────

    pub fn set_deca_token(env: Env, caller: Address, token: Address) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        admin::set_deca_token(&env, &OwnerAccess, &caller, &token)
    }

    pub fn set_corn_token(env: Env, caller: Address, token: Address) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        admin::set_corn_token(&env, &OwnerAccess, &caller, &token)
    }

    /// Set the number of seconds each pool's `rate` covers.
    ///
    /// All pools are accrued under the old period before the change.
    pub fn set_reward_period(env: Env, caller: Address, period: u64) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        admin::set_reward_period(
            &env,
            &OwnerAccess,
            &caller,
            period,
            env.ledger().timestamp(),
        )
    }

    /// Set the unstake fee in whole percent (`0..=100`).
    pub fn set_unstake_fee(env: Env, caller: Address, percent: u32) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        admin::set_unstake_fee(&env, &OwnerAccess, &caller, percent)
    }

    // ── Ownership transfer (two-step) ───────────────────────────────────────

    /// Nominate a new owner. Completes when they call `accept_owner`.
    pub fn propose_owner(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        access::propose_owner(&env, &OwnerAccess, &caller, &new_owner)
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        access::accept_owner(&env, &new_owner).map(|_| ())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        storage::extend_instance_ttl(&env);
        access::cancel_owner_transfer(&env, &OwnerAccess, &caller).map(|_| ())
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        storage::get_pending_owner(&env)
    }

    // ── View functions ──────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env)
    }

    pub fn fee_receiver(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.fee_receiver)
    }

    pub fn deca_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.deca_token)
    }

    pub fn corn_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.corn_token)
    }

    pub fn reward_period(env: Env) -> Result<u64, ContractError> {
        Ok(storage::get_config(&env)?.reward_period)
    }

    pub fn unstake_fee(env: Env) -> Result<u32, ContractError> {
        Ok(storage::get_config(&env)?.unstake_fee)
    }

    /// CORN `account` could harvest from `pool_id` right now, without
    /// mutating state.
    pub fn pending_reward(env: Env, account: Address, pool_id: u32) -> Result<i128, ContractError> {
        staking::pending_reward(&env, &account, pool_id, env.ledger().timestamp())
    }

    /// Stored bookkeeping for `account` in `pool_id`; zeroed if it never staked.
    pub fn position(env: Env, account: Address, pool_id: u32) -> Result<Position, ContractError> {
        staking::position(&env, &account, pool_id)
    }

    pub fn position_state(
        env: Env,
        account: Address,
        pool_id: u32,
    ) -> Result<PositionState, ContractError> {
        staking::position_state(&env, &account, pool_id, env.ledger().timestamp())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
