#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub deca_token: Address,
    pub corn_token: Address,
    pub reward_period: u64,
    pub unstake_fee: u32,
    pub timestamp: u64,
}

/// Fired when the owner appends a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRegisteredEvent {
    pub pool_id: u32,
    pub rate: i128,
    pub stake_limit: i128,
    pub timestamp: u64,
}

/// Fired when the owner rewrites a pool's rate, limit or pause flag.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolUpdatedEvent {
    pub pool_id: u32,
    pub rate: i128,
    pub stake_limit: i128,
    pub paused: bool,
    pub timestamp: u64,
}

/// Fired when the staking or reward token address is replaced.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenSetEvent {
    pub old_token: Address,
    pub new_token: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPeriodSetEvent {
    pub old_period: u64,
    pub new_period: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeFeeSetEvent {
    pub old_fee: u32,
    pub new_fee: u32,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws their whole stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub fee: i128,
    pub net: i128,
    pub timestamp: u64,
}

/// Fired when a user collects settled rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestedEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    deca_token: Address,
    corn_token: Address,
    reward_period: u64,
    unstake_fee: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            deca_token,
            corn_token,
            reward_period,
            unstake_fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_registered(env: &Env, pool_id: u32, rate: i128, stake_limit: i128) {
    env.events().publish(
        (symbol_short!("POOL_REG"), pool_id),
        PoolRegisteredEvent {
            pool_id,
            rate,
            stake_limit,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_updated(
    env: &Env,
    pool_id: u32,
    rate: i128,
    stake_limit: i128,
    paused: bool,
) {
    env.events().publish(
        (symbol_short!("POOL_UPD"), pool_id),
        PoolUpdatedEvent {
            pool_id,
            rate,
            stake_limit,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

/// `role` is `DECA` or `CORN`.
pub fn publish_token_set(env: &Env, role: Symbol, old_token: Address, new_token: Address) {
    env.events().publish(
        (symbol_short!("TOKEN_SET"), role),
        TokenSetEvent {
            old_token,
            new_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_period_set(env: &Env, old_period: u64, new_period: u64) {
    env.events().publish(
        (symbol_short!("PERIOD"),),
        RewardPeriodSetEvent {
            old_period,
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstake_fee_set(env: &Env, old_fee: u32, new_fee: u32) {
    env.events().publish(
        (symbol_short!("FEE_SET"),),
        UnstakeFeeSetEvent {
            old_fee,
            new_fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    pool_id: u32,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone(), pool_id),
        StakedEvent {
            staker,
            pool_id,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    pool_id: u32,
    amount: i128,
    fee: i128,
    net: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone(), pool_id),
        UnstakedEvent {
            staker,
            pool_id,
            amount,
            fee,
            net,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_harvested(env: &Env, staker: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("HARVESTED"), staker.clone(), pool_id),
        HarvestedEvent {
            staker,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
