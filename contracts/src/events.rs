//! Events emitted by the collateral ledger.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::types::CollateralAsset;

/// Collateral deposited and tokens minted
#[odra::event]
pub struct Deposit {
    pub caller: Address,
    pub asset: CollateralAsset,
    /// Whole dollars deposited
    pub dollar_amount: U256,
    /// Price snapshot used for the deposit
    pub price: U256,
}

/// Tokens burned and collateral paid out
#[odra::event]
pub struct Redeem {
    pub caller: Address,
    pub asset: CollateralAsset,
    /// Whole tokens redeemed
    pub token_amount: U256,
    /// Price snapshot used for the redemption
    pub price: U256,
}

/// Accrued tax withdrawn by the owner
#[odra::event]
pub struct Withdrawn {
    pub contract: Address,
    pub caller: Address,
    pub asset: CollateralAsset,
    pub amount: U256,
    pub timestamp: u64,
}

/// Owner changed
#[odra::event]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
