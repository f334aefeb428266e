//! Owner gating and two-step ownership transfer.
//!
//! Admin paths take an [`AccessControl`] rather than reading the owner
//! themselves, so the check can be swapped for a double in tests.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::storage;

/// Capability consulted at the top of every admin operation.
pub trait AccessControl {
    fn require_owner(&self, env: &Env, caller: &Address) -> Result<(), ContractError>;
}

/// Grants admin rights to the stored owner only.
pub struct OwnerAccess;

impl AccessControl for OwnerAccess {
    fn require_owner(&self, env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner = storage::get_owner(env)?;
        if *caller != owner {
            return Err(ContractError::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }
}

/// Nominate `new_owner`. Ownership only moves once they accept.
pub fn propose_owner<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), ContractError> {
    access.require_owner(env, caller)?;
    storage::set_pending_owner(env, new_owner);
    events::publish_owner_proposed(env, caller.clone(), new_owner.clone());
    Ok(())
}

/// Complete a transfer started by [`propose_owner`]. Returns the previous owner.
pub fn accept_owner(env: &Env, new_owner: &Address) -> Result<Address, ContractError> {
    new_owner.require_auth();

    let pending = storage::get_pending_owner(env).ok_or(ContractError::NoPendingOwner)?;
    if *new_owner != pending {
        return Err(ContractError::Unauthorized);
    }

    let old_owner = storage::get_owner(env)?;
    storage::set_owner(env, new_owner);
    storage::remove_pending_owner(env);

    events::publish_owner_accepted(env, old_owner.clone(), new_owner.clone());
    Ok(old_owner)
}

/// Drop a pending nomination. Returns the address that was nominated.
pub fn cancel_owner_transfer<A: AccessControl>(
    env: &Env,
    access: &A,
    caller: &Address,
) -> Result<Address, ContractError> {
    access.require_owner(env, caller)?;

    let pending = storage::get_pending_owner(env).ok_or(ContractError::NoPendingOwner)?;
    storage::remove_pending_owner(env);

    events::publish_owner_transfer_cancelled(env, caller.clone(), pending.clone());
    Ok(pending)
}
