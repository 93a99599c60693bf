//! Ownership Gate
//!
//! Single-owner access control for the ledger's owner-only entry points
//! (tax withdrawal, tax views, ownership transfer).

use odra::prelude::*;
use crate::errors::{LedgerError, LedgerResult};

/// Ownership submodule
#[odra::module]
pub struct OwnershipGate {
    /// Current owner
    owner: Var<Address>,
}

#[odra::module]
impl OwnershipGate {
    /// Initialize with the first owner
    pub fn init(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    /// Get owner address
    pub fn get_owner(&self) -> Address {
        self.owner
            .get()
            .unwrap_or_else(|| self.env().revert(LedgerError::InvalidConfig))
    }

    /// Check if account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get() == Some(account)
    }
}

impl OwnershipGate {
    /// Fail with `Unauthorized` unless the caller owns the contract
    pub fn require_owner(&self) -> LedgerResult<Address> {
        let caller = self.env().caller();
        if !self.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        Ok(caller)
    }

    /// Hand ownership to `new_owner`, returning the previous owner
    pub fn transfer_ownership(&mut self, new_owner: Address) -> LedgerResult<Address> {
        let previous = self.require_owner()?;
        self.owner.set(new_owner);
        Ok(previous)
    }
}
