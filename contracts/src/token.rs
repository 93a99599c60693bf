//! Collateral Token Contract
//!
//! The stock Odra `Cep18` module holds balances, allowances and supply.
//! This contract only adds an admin-managed minter set on top, so the
//! ledger can mint on deposit and burn on redemption. The same contract,
//! deployed a second time, serves as the wrapped collateral asset.
//!
//! Transfer entry points return `true` on success to match the
//! `Cep18Token` interface the ledger calls; `Cep18` reverts on failure.

use odra::prelude::*;
use odra::casper_types::U256;
use odra_modules::cep18_token::Cep18;
use crate::errors::LedgerError;

/// CEP-18 token with authorized minters
#[odra::module]
pub struct CollateralToken {
    cep18: SubModule<Cep18>,
    /// Address allowed to manage minters
    admin: Var<Address>,
    /// Accounts allowed to mint and burn
    minters: Mapping<Address, bool>,
}

#[odra::module]
impl CollateralToken {
    /// Initialize with zero supply; issuance happens only through minters
    pub fn init(&mut self, name: String, symbol: String, decimals: u8, admin: Address) {
        self.cep18
            .init(symbol, name, decimals, U256::zero());
        self.admin.set(admin);
    }

    pub fn name(&self) -> String {
        self.cep18.name()
    }

    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.cep18.balance_of(&account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.cep18.allowance(&owner, &spender)
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        self.cep18.transfer(&recipient, &amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.cep18.approve(&spender, &amount);
        true
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        self.cep18.transfer_from(&owner, &recipient, &amount);
        true
    }

    // ========== Issuance ==========

    /// Mint to `to` (minters only)
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.require_minter();
        if self.total_supply().checked_add(amount).is_none() {
            self.env().revert(LedgerError::ArithmeticOverflow);
        }
        self.cep18.raw_mint(&to, &amount);
    }

    /// Burn from `from` without an allowance (minters only)
    pub fn burn_from(&mut self, from: Address, amount: U256) {
        self.require_minter();
        self.burn_checked(from, amount);
    }

    /// Burn the caller's own tokens
    pub fn burn(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.burn_checked(caller, amount);
    }

    // ========== Minter Set ==========

    /// Authorize a minter (admin only)
    pub fn add_minter(&mut self, minter: Address) {
        self.require_admin();
        self.minters.set(&minter, true);
    }

    /// Revoke a minter (admin only)
    pub fn remove_minter(&mut self, minter: Address) {
        self.require_admin();
        self.minters.set(&minter, false);
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.minters.get(&account).unwrap_or(false)
    }

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }
}

impl CollateralToken {
    fn burn_checked(&mut self, from: Address, amount: U256) {
        if self.balance_of(from) < amount {
            self.env().revert(LedgerError::InsufficientTokenBalance);
        }
        self.cep18.raw_burn(&from, &amount);
    }

    fn require_minter(&self) {
        if !self.is_minter(self.env().caller()) {
            self.env().revert(LedgerError::UnauthorizedMinter);
        }
    }

    fn require_admin(&self) {
        if self.admin.get() != Some(self.env().caller()) {
            self.env().revert(LedgerError::Unauthorized);
        }
    }
}
