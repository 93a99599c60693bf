//! Collateral Ledger Contract
//!
//! Issues tokens against collateral at a fixed ratio and redeems them for a
//! taxed share of the reserve. Supports two collateral assets:
//! - native CSPR attached to the call
//! - one CEP-18 wrapped equivalent, pulled with approve/transfer_from
//!
//! Both assets run through the same generic flows, parameterized by a
//! `CollateralTransfer` strategy, and keep separate reserves and tax
//! accumulators.
//!
//! ## Mint / redeem asymmetry
//!
//! Minting uses `ratio` alone: `dollar_amount * SCALE * ratio` tokens, whatever
//! the price. Redemption values tokens at the live oracle price. The dollar
//! backing of the reserve is therefore an economic property of the model,
//! not something the contract enforces.
//!
//! ## Ordering
//!
//! Every flow runs checks, then accounting (mint, burn, tax accrual), then
//! value transfers. Any failure reverts the whole call.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::access_control::OwnershipGate;
use crate::converter::{self, RedemptionQuote};
use crate::errors::{LedgerError, LedgerResult};
use crate::events::{Deposit, OwnershipTransferred, Redeem, Withdrawn};
use crate::oracle_adapter::PriceOracleAdapter;
use crate::reserve::ReserveAccountant;
use crate::token_adapter::{
    Cep18TokenContractRef, CollateralTransfer, MintableTokenContractRef, NativeTransfer,
    TokenTransfer,
};
use crate::types::{u512_to_u256, CollateralAsset, ProtocolParameters};

/// Collateral ledger contract
#[odra::module(events = [Deposit, Redeem, Withdrawn, OwnershipTransferred])]
pub struct CollateralLedger {
    /// Owner gate for tax withdrawal and views
    ownership: SubModule<OwnershipGate>,
    /// Price feed adapter
    oracle: SubModule<PriceOracleAdapter>,
    /// Accrued tax per asset
    reserve: SubModule<ReserveAccountant>,
    /// Issued token contract address
    token: Var<Address>,
    /// Wrapped collateral token contract address
    wrapped_token: Var<Address>,
    /// Protocol parameters
    params: Var<ProtocolParameters>,
}

#[odra::module]
impl CollateralLedger {
    /// Initialize the ledger
    pub fn init(
        &mut self,
        owner: Address,
        token: Address,
        wrapped_token: Address,
        price_feed: Address,
        params: ProtocolParameters,
    ) {
        if let Err(err) = params.validate() {
            self.env().revert(err);
        }

        self.ownership.init(owner);
        self.oracle.init(price_feed);
        self.token.set(token);
        self.wrapped_token.set(wrapped_token);
        self.params.set(params);
    }

    // ========== Deposit ==========

    /// Deposit native CSPR worth `dollar_amount` dollars and mint tokens.
    ///
    /// The attached value must cover the required collateral; the excess is
    /// refunded to the caller in the same call.
    #[odra(payable)]
    pub fn deposit_collateral(&mut self, dollar_amount: U256) {
        let env = self.env();
        let attached = self.or_revert(u512_to_u256(env.attached_value()));
        let result = self.deposit_with(NativeTransfer::new(&env, attached), dollar_amount);
        self.or_revert(result);
    }

    /// Deposit wrapped collateral worth `dollar_amount` dollars and mint tokens.
    ///
    /// The caller must have approved the ledger for the required collateral.
    pub fn deposit_collateral_with_wrapped_asset(&mut self, dollar_amount: U256) {
        let result = self
            .wrapped_transfer()
            .and_then(|transfer| self.deposit_with(transfer, dollar_amount));
        self.or_revert(result);
    }

    // ========== Redeem ==========

    /// Burn `token_amount` whole tokens for native CSPR, net of tax
    pub fn withdraw_collateral(&mut self, token_amount: U256) {
        let env = self.env();
        let result = self.redeem_with(NativeTransfer::unfunded(&env), token_amount);
        self.or_revert(result);
    }

    /// Burn `token_amount` whole tokens for wrapped collateral, net of tax
    pub fn withdraw_collateral_with_wrapped_asset(&mut self, token_amount: U256) {
        let result = self
            .wrapped_transfer()
            .and_then(|transfer| self.redeem_with(transfer, token_amount));
        self.or_revert(result);
    }

    // ========== Owner Functions ==========

    /// Pay accrued native tax to the owner (owner only)
    pub fn withdraw_tax(&mut self) {
        let env = self.env();
        let result = self.withdraw_tax_with(NativeTransfer::unfunded(&env));
        self.or_revert(result);
    }

    /// Pay accrued wrapped tax to the owner (owner only)
    pub fn withdraw_tax_in_wrapped_asset(&mut self) {
        let result = self
            .wrapped_transfer()
            .and_then(|transfer| self.withdraw_tax_with(transfer));
        self.or_revert(result);
    }

    /// Accrued native tax (owner only)
    pub fn view_tax(&self) -> U256 {
        self.get_accrued_tax(CollateralAsset::Native)
    }

    /// Accrued wrapped tax (owner only)
    pub fn view_wrapped_tax(&self) -> U256 {
        self.get_accrued_tax(CollateralAsset::Wrapped)
    }

    /// Accrued tax of any asset (owner only)
    pub fn get_accrued_tax(&self, asset: CollateralAsset) -> U256 {
        let result = self.ownership.require_owner();
        self.or_revert(result);
        self.reserve.accrued_tax(asset)
    }

    /// Hand ownership to `new_owner` (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        let result = self.ownership.transfer_ownership(new_owner);
        let previous_owner = self.or_revert(result);
        self.env().emit_event(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    // ========== Quotes ==========

    /// Collateral required for `dollar_amount` dollars at the current price
    pub fn get_exchange_rate(&self, dollar_amount: U256) -> U256 {
        let result = self
            .oracle
            .snapshot()
            .and_then(|price| converter::dollars_to_collateral(dollar_amount, price));
        self.or_revert(result)
    }

    /// (net, tax) collateral for redeeming `token_amount` whole tokens now
    pub fn calculate_price_for_sale(&self, token_amount: U256) -> (U256, U256) {
        let result = self.quote_redemption(token_amount);
        let quote = self.or_revert(result);
        (quote.net, quote.tax)
    }

    /// Raw price of the feed's latest round
    pub fn get_usd_exchange_rate(&self) -> i64 {
        self.oracle.latest_price()
    }

    // ========== View Functions ==========

    /// Balance of an asset held by the ledger, accrued tax included
    pub fn get_reserve(&self, asset: CollateralAsset) -> U256 {
        let result = match asset {
            CollateralAsset::Native => NativeTransfer::unfunded(&self.env()).held_balance(),
            CollateralAsset::Wrapped => self
                .wrapped_transfer()
                .and_then(|transfer| transfer.held_balance()),
        };
        self.or_revert(result)
    }

    /// Get protocol parameters
    pub fn get_parameters(&self) -> ProtocolParameters {
        let result = self.parameters();
        self.or_revert(result)
    }

    /// Get owner address
    pub fn get_owner(&self) -> Address {
        self.ownership.get_owner()
    }

    /// Get issued token address
    pub fn get_token(&self) -> Option<Address> {
        self.token.get()
    }

    /// Get wrapped collateral token address
    pub fn get_wrapped_token(&self) -> Option<Address> {
        self.wrapped_token.get()
    }

    /// Get price feed address
    pub fn get_price_feed(&self) -> Option<Address> {
        self.oracle.get_feed()
    }
}

impl CollateralLedger {
    fn deposit_with<T: CollateralTransfer>(
        &mut self,
        mut transfer: T,
        dollar_amount: U256,
    ) -> LedgerResult<()> {
        if dollar_amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let params = self.parameters()?;
        let caller = self.env().caller();
        let mut token = self.issued_token()?;

        let minted = converter::dollars_to_tokens(dollar_amount, params.ratio)?;
        let new_supply = token
            .total_supply()
            .checked_add(minted)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        if new_supply > params.supply_cap {
            return Err(LedgerError::SupplyCapExceeded);
        }

        let price = self.oracle.snapshot()?;
        let required = converter::dollars_to_collateral(dollar_amount, price)?;
        // A price that rounds the collateral to zero would mint for free.
        if required.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        transfer.check_payment(caller, required)?;

        token.mint(caller, minted);
        transfer.settle_payment(caller, required)?;

        self.env().emit_event(Deposit {
            caller,
            asset: transfer.asset(),
            dollar_amount,
            price,
        });
        Ok(())
    }

    fn redeem_with<T: CollateralTransfer>(
        &mut self,
        mut transfer: T,
        token_amount: U256,
    ) -> LedgerResult<()> {
        if token_amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let caller = self.env().caller();
        let asset = transfer.asset();
        let mut token = self.issued_token()?;

        let burn_amount = converter::whole_tokens_to_units(token_amount)?;
        if token.balance_of(caller) < burn_amount {
            return Err(LedgerError::InsufficientTokenBalance);
        }

        let held = transfer.held_balance()?;
        if !self.reserve.can_redeem(asset, held) {
            return Err(LedgerError::InsufficientReserve);
        }

        let price = self.oracle.snapshot()?;
        let params = self.parameters()?;
        let quote = converter::tokens_to_collateral_with_tax(
            token_amount,
            params.ratio,
            price,
            params.tax_rate,
        )?;
        self.reserve.ensure_covers(asset, held, quote.gross())?;

        self.reserve.record_tax(asset, quote.tax)?;
        token.burn_from(caller, burn_amount);
        transfer.pay(caller, quote.net)?;

        self.env().emit_event(Redeem {
            caller,
            asset,
            token_amount,
            price,
        });
        Ok(())
    }

    fn withdraw_tax_with<T: CollateralTransfer>(&mut self, mut transfer: T) -> LedgerResult<()> {
        let owner = self.ownership.require_owner()?;
        let asset = transfer.asset();

        let amount = self.reserve.withdraw_tax(asset)?;
        transfer.pay(owner, amount)?;

        self.env().emit_event(Withdrawn {
            contract: self.env().self_address(),
            caller: owner,
            asset,
            amount,
            timestamp: self.env().get_block_time(),
        });
        Ok(())
    }

    fn quote_redemption(&self, token_amount: U256) -> LedgerResult<RedemptionQuote> {
        let params = self.parameters()?;
        let price = self.oracle.snapshot()?;
        converter::tokens_to_collateral_with_tax(token_amount, params.ratio, price, params.tax_rate)
    }

    fn parameters(&self) -> LedgerResult<ProtocolParameters> {
        self.params.get().ok_or(LedgerError::InvalidConfig)
    }

    fn issued_token(&self) -> LedgerResult<MintableTokenContractRef> {
        let address = self.token.get().ok_or(LedgerError::InvalidConfig)?;
        Ok(MintableTokenContractRef::new(self.env(), address))
    }

    fn wrapped_transfer(&self) -> LedgerResult<TokenTransfer> {
        let address = self.wrapped_token.get().ok_or(LedgerError::InvalidConfig)?;
        let token = Cep18TokenContractRef::new(self.env(), address);
        Ok(TokenTransfer::new(token, self.env().self_address()))
    }

    fn or_revert<T>(&self, result: LedgerResult<T>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.env().revert(err),
        }
    }
}
