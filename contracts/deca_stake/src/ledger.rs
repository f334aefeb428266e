//! Collaborator token interface.
//!
//! The staking facade only ever moves value through [`TokenLedger`]. Each
//! call either fully succeeds or reports `TransferFailed` and leaves balances
//! alone; the facade commits ledger state only after every leg succeeded.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::ContractError;

pub trait TokenLedger {
    /// Pull `amount` from `from` into the contract.
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError>;
    /// Pay `amount` from the contract to `to`.
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError>;
}

/// A Stellar token contract (SAC or any SEP-41 token) held by this contract.
pub struct StellarToken<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> StellarToken<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            env,
            client: token::Client::new(env, token),
        }
    }
}

impl TokenLedger for StellarToken<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        match self
            .client
            .try_transfer(from, &self.env.current_contract_address(), &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer_in rejected", from.clone(), amount);
                Err(ContractError::TransferFailed)
            }
        }
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        match self
            .client
            .try_transfer(&self.env.current_contract_address(), to, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer_out rejected", to.clone(), amount);
                Err(ContractError::TransferFailed)
            }
        }
    }
}
