//! Reserve accounting for owner tax.
//!
//! Tracks, per collateral asset, the collateral earmarked for the owner by
//! redemptions and not yet withdrawn. Accrued tax is never redeemable: the
//! redeemable reserve of an asset is `held_balance - accrued_tax`.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::types::CollateralAsset;
use crate::errors::{LedgerError, LedgerResult};

/// Per-asset accrued tax bookkeeping
#[odra::module]
pub struct ReserveAccountant {
    /// Accrued, unwithdrawn tax per collateral asset
    accrued_tax: Mapping<CollateralAsset, U256>,
}

#[odra::module]
impl ReserveAccountant {
    /// Accrued tax of an asset
    pub fn accrued_tax(&self, asset: CollateralAsset) -> U256 {
        self.accrued_tax.get(&asset).unwrap_or(U256::zero())
    }
}

impl ReserveAccountant {
    /// True iff the reserve holds anything beyond the owner's accrued tax
    pub fn can_redeem(&self, asset: CollateralAsset, held_balance: U256) -> bool {
        held_balance > self.accrued_tax(asset)
    }

    /// Collateral available to redeemers
    pub fn redeemable(&self, asset: CollateralAsset, held_balance: U256) -> U256 {
        held_balance.saturating_sub(self.accrued_tax(asset))
    }

    /// Fail unless the redeemable reserve covers `gross` collateral, so that
    /// accrued tax stays covered by the held balance after the payout.
    pub fn ensure_covers(
        &self,
        asset: CollateralAsset,
        held_balance: U256,
        gross: U256,
    ) -> LedgerResult<()> {
        if gross > self.redeemable(asset, held_balance) {
            return Err(LedgerError::InsufficientReserve);
        }
        Ok(())
    }

    /// Add redemption tax to the asset's accumulator
    pub fn record_tax(&mut self, asset: CollateralAsset, amount: U256) -> LedgerResult<()> {
        let updated = self
            .accrued_tax(asset)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.accrued_tax.set(&asset, updated);
        Ok(())
    }

    /// Reset the accumulator and return what it held
    pub fn withdraw_tax(&mut self, asset: CollateralAsset) -> LedgerResult<U256> {
        let amount = self.accrued_tax(asset);
        if amount.is_zero() {
            return Err(LedgerError::NothingToWithdraw);
        }
        self.accrued_tax.set(&asset, U256::zero());
        Ok(amount)
    }
}
