extern crate std;

use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger as _},
    Address, Env,
};

use crate::math::WAD;
use crate::pool::MAX_POOLS;
use crate::{ContractError, DecaStakeContract, DecaStakeContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, DecaStakeContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let deca = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let corn = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(DecaStakeContract, ());
    let client = DecaStakeContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &deca.address(), &corn.address());
    client.register_pool(&owner, &WAD, &1_000);

    (env, client, owner)
}

fn instance_ttl(env: &Env, client: &DecaStakeContractClient) -> u32 {
    env.as_contract(&client.address, || env.storage().instance().get_ttl())
}

/// Age the ledger far enough that the instance entry falls below the
/// extension threshold.
fn age_ledger(env: &Env) {
    let sequence = env.ledger().sequence();
    env.ledger().set_sequence_number(sequence + 2_000_000);
}

// ── Owner-only operations reject strangers ───────────────────────────────────

#[test]
fn test_stranger_cannot_register_pool() {
    let (env, client, _owner) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_register_pool(&stranger, &WAD, &1_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.pool_length(), 1);
}

#[test]
fn test_stranger_cannot_update_pool() {
    let (env, client, _owner) = setup();
    let stranger = Address::generate(&env);
    let before = client.pool_info(&0);

    let result = client.try_update_pool(&stranger, &0, &0, &0, &true);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.pool_info(&0), before);
}

#[test]
fn test_stranger_cannot_change_tokens() {
    let (env, client, _owner) = setup();
    let stranger = Address::generate(&env);
    let token = Address::generate(&env);
    let deca = client.deca_token();
    let corn = client.corn_token();

    assert_eq!(
        client.try_set_deca_token(&stranger, &token),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        client.try_set_corn_token(&stranger, &token),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.deca_token(), deca);
    assert_eq!(client.corn_token(), corn);
}

#[test]
fn test_stranger_cannot_change_reward_period_or_fee() {
    let (env, client, _owner) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_set_reward_period(&stranger, &10),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        client.try_set_unstake_fee(&stranger, &10),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.reward_period(), crate::DEFAULT_REWARD_PERIOD);
    assert_eq!(client.unstake_fee(), 0);
}

// ── Owner configuration ──────────────────────────────────────────────────────

#[test]
fn test_owner_replaces_tokens() {
    let (env, client, owner) = setup();
    let new_deca = Address::generate(&env);
    let new_corn = Address::generate(&env);

    client.set_deca_token(&owner, &new_deca);
    client.set_corn_token(&owner, &new_corn);

    assert_eq!(client.deca_token(), new_deca);
    assert_eq!(client.corn_token(), new_corn);
}

#[test]
fn test_same_token_may_fill_both_roles() {
    let (env, client, owner) = setup();
    let token = Address::generate(&env);

    client.set_deca_token(&owner, &token);
    client.set_corn_token(&owner, &token);
    assert_eq!(client.deca_token(), client.corn_token());
}

#[test]
fn test_owner_sets_reward_period_and_fee() {
    let (_env, client, owner) = setup();

    client.set_reward_period(&owner, &3_600);
    client.set_unstake_fee(&owner, &100);

    assert_eq!(client.reward_period(), 3_600);
    assert_eq!(client.unstake_fee(), 100);
}

#[test]
fn test_zero_reward_period_rejected() {
    let (_env, client, owner) = setup();

    let result = client.try_set_reward_period(&owner, &0);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidParameter),
        _ => unreachable!("Expected InvalidParameter error"),
    }
    assert_eq!(client.reward_period(), crate::DEFAULT_REWARD_PERIOD);
}

#[test]
fn test_fee_above_hundred_rejected() {
    let (_env, client, owner) = setup();
    client.set_unstake_fee(&owner, &7);

    let result = client.try_set_unstake_fee(&owner, &101);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidParameter),
        _ => unreachable!("Expected InvalidParameter error"),
    }
    assert_eq!(client.unstake_fee(), 7);
}

#[test]
fn test_negative_pool_terms_rejected() {
    let (_env, client, owner) = setup();

    assert_eq!(
        client.try_register_pool(&owner, &-1, &1_000),
        Err(Ok(ContractError::InvalidParameter))
    );
    assert_eq!(
        client.try_update_pool(&owner, &0, &WAD, &-1, &false),
        Err(Ok(ContractError::InvalidParameter))
    );
}

#[test]
fn test_update_pool_checks_existence_before_terms() {
    let (_env, client, owner) = setup();

    assert_eq!(
        client.try_update_pool(&owner, &9, &-1, &-1, &false),
        Err(Ok(ContractError::PoolNotFound))
    );
}

#[test]
fn test_full_registry_still_accepts_period_change() {
    let (_env, client, owner) = setup();
    while client.pool_length() < MAX_POOLS {
        client.register_pool(&owner, &WAD, &1_000);
    }

    assert_eq!(
        client.try_register_pool(&owner, &WAD, &1_000),
        Err(Ok(ContractError::PoolLimitReached))
    );
    client.set_reward_period(&owner, &3_600);
    assert_eq!(client.reward_period(), 3_600);
}

// ── Two-step ownership transfer ──────────────────────────────────────────────

#[test]
fn test_ownership_transfer_flow() {
    let (env, client, owner) = setup();
    let nominee = Address::generate(&env);

    client.propose_owner(&owner, &nominee);
    assert_eq!(client.pending_owner(), Some(nominee.clone()));
    assert_eq!(client.owner(), owner);

    client.accept_owner(&nominee);
    assert_eq!(client.owner(), nominee);
    assert_eq!(client.pending_owner(), None);

    // The old owner lost its rights, the new one has them.
    assert_eq!(
        client.try_set_unstake_fee(&owner, &1),
        Err(Ok(ContractError::Unauthorized))
    );
    client.set_unstake_fee(&nominee, &1);
}

#[test]
fn test_fee_receiver_survives_ownership_transfer() {
    let (env, client, owner) = setup();
    let nominee = Address::generate(&env);

    client.propose_owner(&owner, &nominee);
    client.accept_owner(&nominee);

    assert_eq!(client.fee_receiver(), owner);
}

#[test]
fn test_only_nominee_can_accept() {
    let (env, client, owner) = setup();
    let nominee = Address::generate(&env);
    let stranger = Address::generate(&env);

    client.propose_owner(&owner, &nominee);
    let result = client.try_accept_owner(&stranger);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.owner(), owner);
}

#[test]
fn test_accept_without_nomination_fails() {
    let (env, client, _owner) = setup();
    let someone = Address::generate(&env);

    assert_eq!(
        client.try_accept_owner(&someone),
        Err(Ok(ContractError::NoPendingOwner))
    );
}

#[test]
fn test_cancel_ownership_transfer() {
    let (env, client, owner) = setup();
    let nominee = Address::generate(&env);

    client.propose_owner(&owner, &nominee);
    client.cancel_owner_transfer(&owner);
    assert_eq!(client.pending_owner(), None);

    assert_eq!(
        client.try_accept_owner(&nominee),
        Err(Ok(ContractError::NoPendingOwner))
    );
    assert_eq!(
        client.try_cancel_owner_transfer(&owner),
        Err(Ok(ContractError::NoPendingOwner))
    );
}

#[test]
fn test_stranger_cannot_propose_or_cancel() {
    let (env, client, owner) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_propose_owner(&stranger, &stranger),
        Err(Ok(ContractError::Unauthorized))
    );

    client.propose_owner(&owner, &stranger);
    assert_eq!(
        client.try_cancel_owner_transfer(&stranger),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.pending_owner(), Some(stranger));
}

#[test]
fn test_new_proposal_replaces_previous_nominee() {
    let (env, client, owner) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.propose_owner(&owner, &first);
    client.propose_owner(&owner, &second);

    assert_eq!(
        client.try_accept_owner(&first),
        Err(Ok(ContractError::Unauthorized))
    );
    client.accept_owner(&second);
    assert_eq!(client.owner(), second);
}

#[test]
fn test_ownership_calls_keep_instance_alive() {
    let (env, client, owner) = setup();
    let nominee = Address::generate(&env);

    age_ledger(&env);
    let before = instance_ttl(&env, &client);
    client.propose_owner(&owner, &nominee);
    assert!(instance_ttl(&env, &client) > before);

    age_ledger(&env);
    let before = instance_ttl(&env, &client);
    client.cancel_owner_transfer(&owner);
    assert!(instance_ttl(&env, &client) > before);

    client.propose_owner(&owner, &nominee);
    age_ledger(&env);
    let before = instance_ttl(&env, &client);
    client.accept_owner(&nominee);
    assert!(instance_ttl(&env, &client) > before);
}
