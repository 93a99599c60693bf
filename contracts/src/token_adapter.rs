//! Token Adapter
//!
//! Narrow interfaces to the token contracts the ledger consumes, and the
//! collateral transfer strategies the ledger flows are generic over:
//! - `NativeTransfer`: CSPR attached to the call, paid out with native transfers
//! - `TokenTransfer`: CEP-18 wrapped asset, pulled with approve/transfer_from
//!
//! Strategies only move value. Accounting is finalized by the ledger before
//! `settle_payment` / `pay` are invoked.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractEnv;
use crate::errors::{LedgerError, LedgerResult};
use crate::types::{u256_to_u512, u512_to_u256, CollateralAsset};

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
}

/// Issued token interface (ledger is an authorized minter)
#[odra::external_contract]
pub trait MintableToken {
    fn mint(&mut self, to: Address, amount: U256);
    fn burn_from(&mut self, from: Address, amount: U256);
    fn balance_of(&self, account: Address) -> U256;
    fn total_supply(&self) -> U256;
}

/// Value movement for one collateral asset
pub trait CollateralTransfer {
    /// Asset moved by this strategy
    fn asset(&self) -> CollateralAsset;

    /// Balance of the asset held by the ledger
    fn held_balance(&self) -> LedgerResult<U256>;

    /// Check that `payer` can supply `amount` without moving anything
    fn check_payment(&self, payer: Address, amount: U256) -> LedgerResult<()>;

    /// Take exactly `amount` from `payer`
    fn settle_payment(&mut self, payer: Address, amount: U256) -> LedgerResult<()>;

    /// Send `amount` out of the reserve
    fn pay(&mut self, recipient: Address, amount: U256) -> LedgerResult<()>;
}

/// Native CSPR strategy
pub struct NativeTransfer<'a> {
    env: &'a ContractEnv,
    attached: U256,
}

impl<'a> NativeTransfer<'a> {
    /// Strategy for a call carrying `attached` motes
    pub fn new(env: &'a ContractEnv, attached: U256) -> Self {
        Self { env, attached }
    }

    /// Strategy for a call that carries no value
    pub fn unfunded(env: &'a ContractEnv) -> Self {
        Self::new(env, U256::zero())
    }
}

impl CollateralTransfer for NativeTransfer<'_> {
    fn asset(&self) -> CollateralAsset {
        CollateralAsset::Native
    }

    fn held_balance(&self) -> LedgerResult<U256> {
        u512_to_u256(self.env.self_balance())
    }

    fn check_payment(&self, _payer: Address, amount: U256) -> LedgerResult<()> {
        if self.attached < amount {
            return Err(LedgerError::InsufficientPayment);
        }
        Ok(())
    }

    // The attached value already sits in the contract purse; only the excess moves.
    fn settle_payment(&mut self, payer: Address, amount: U256) -> LedgerResult<()> {
        self.check_payment(payer, amount)?;
        let excess = self.attached - amount;
        self.attached = amount;
        self.pay(payer, excess)
    }

    fn pay(&mut self, recipient: Address, amount: U256) -> LedgerResult<()> {
        if amount.is_zero() {
            return Ok(());
        }
        if self.held_balance()? < amount {
            return Err(LedgerError::TransferFailed);
        }
        self.env.transfer_tokens(&recipient, &u256_to_u512(amount));
        Ok(())
    }
}

/// CEP-18 wrapped asset strategy
pub struct TokenTransfer {
    token: Cep18TokenContractRef,
    ledger: Address,
}

impl TokenTransfer {
    /// Strategy moving `token` in and out of `ledger`
    pub fn new(token: Cep18TokenContractRef, ledger: Address) -> Self {
        Self { token, ledger }
    }
}

impl CollateralTransfer for TokenTransfer {
    fn asset(&self) -> CollateralAsset {
        CollateralAsset::Wrapped
    }

    fn held_balance(&self) -> LedgerResult<U256> {
        Ok(self.token.balance_of(self.ledger))
    }

    fn check_payment(&self, payer: Address, amount: U256) -> LedgerResult<()> {
        if self.token.allowance(payer, self.ledger) < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        if self.token.balance_of(payer) < amount {
            return Err(LedgerError::InsufficientPayment);
        }
        Ok(())
    }

    fn settle_payment(&mut self, payer: Address, amount: U256) -> LedgerResult<()> {
        if !self.token.transfer_from(payer, self.ledger, amount) {
            return Err(LedgerError::TransferFailed);
        }
        Ok(())
    }

    fn pay(&mut self, recipient: Address, amount: U256) -> LedgerResult<()> {
        if amount.is_zero() {
            return Ok(());
        }
        if !self.token.transfer(recipient, amount) {
            return Err(LedgerError::TransferFailed);
        }
        Ok(())
    }
}
