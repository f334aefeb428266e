//! Persistent layout of the ledger.
//!
//! Global configuration and the owner live in instance storage; pools and
//! positions are persistent entries keyed by tuple, with their TTL bumped on
//! every access so long-lived positions never expire under a staker.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL_COUNT: Symbol = symbol_short!("POOL_CNT");

// Persistent entries use tuple keys: (prefix, pool_id) and (prefix, account, pool_id)
const POOL: Symbol = symbol_short!("POOL");
const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Records ──────────────────────────────────────────────────────────────────

/// Global settings owned by the admin surface.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token users stake.
    pub deca_token: Address,
    /// Token rewards are paid in.
    pub corn_token: Address,
    /// Seconds over which a pool's `rate` is granted.
    pub reward_period: u64,
    /// Whole percent withheld on unstake, `0..=100`.
    pub unstake_fee: u32,
    /// Recipient of unstake fees. Fixed at initialisation.
    pub fee_receiver: Address,
}

/// One reward stream. Addressed by its index; never removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// WAD-scaled reward per unit staked per reward period.
    pub rate: i128,
    pub stake_limit: i128,
    pub total_staked: i128,
    pub paused: bool,
    /// WAD-scaled cumulative reward per unit staked. Never decreases.
    pub acc_reward_per_share: i128,
    pub last_accrual_time: u64,
}

/// A single account's stake and reward bookkeeping within one pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub staked_amount: i128,
    /// Pool accumulator value at the last settlement.
    pub reward_debt: i128,
    /// Settled reward not yet harvested.
    pub pending_reward: i128,
}

// ── TTL helpers ──────────────────────────────────────────────────────────────

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn pool_key(pool_id: u32) -> (Symbol, u32) {
    (POOL, pool_id)
}

fn position_key(account: &Address, pool_id: u32) -> (Symbol, Address, u32) {
    (POSITION, account.clone(), pool_id)
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&OWNER)
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

pub fn set_pending_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&PENDING_OWNER, owner);
}

pub fn remove_pending_owner(env: &Env) {
    env.storage().instance().remove(&PENDING_OWNER);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

// ── Pools ────────────────────────────────────────────────────────────────────

pub fn pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_COUNT).unwrap_or(0)
}

pub fn set_pool_count(env: &Env, count: u32) {
    env.storage().instance().set(&POOL_COUNT, &count);
}

pub fn get_pool(env: &Env, pool_id: u32) -> Result<Pool, ContractError> {
    if pool_id >= pool_count(env) {
        return Err(ContractError::PoolNotFound);
    }
    let key = pool_key(pool_id);
    let pool: Pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(pool)
}

pub fn set_pool(env: &Env, pool_id: u32, pool: &Pool) {
    let key = pool_key(pool_id);
    env.storage().persistent().set(&key, pool);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Positions ────────────────────────────────────────────────────────────────

/// Returns the stored position, or a zeroed one if the account never staked.
pub fn get_position(env: &Env, account: &Address, pool_id: u32) -> Position {
    let key = position_key(account, pool_id);
    let position: Option<Position> = env.storage().persistent().get(&key);
    match position {
        Some(p) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            p
        }
        None => Position::default(),
    }
}

pub fn set_position(env: &Env, account: &Address, pool_id: u32, position: &Position) {
    let key = position_key(account, pool_id);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
