//! Common types shared by the ledger modules.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use crate::errors::{LedgerError, LedgerResult};

/// Highest tax rate accepted, in percent
pub const MAX_TAX_RATE: u8 = 100;

/// Collateral asset identifier
///
/// Each asset keeps its own reserve and its own accrued-tax accumulator.
/// Only one wrapped asset is supported, so `Wrapped` carries no token id:
/// its token address is fixed in the ledger at construction.
#[odra::odra_type]
#[derive(Copy, PartialOrd, Ord)]
pub enum CollateralAsset {
    /// Native CSPR attached to the call
    Native,
    /// CEP-18 wrapped equivalent configured at construction
    Wrapped,
}

/// Protocol parameters, fixed at construction
#[odra::odra_type]
pub struct ProtocolParameters {
    /// Whole tokens minted per dollar of collateral (>= 1)
    pub ratio: u32,
    /// Redemption tax in percent (0-100)
    pub tax_rate: u8,
    /// Deposit fee in bps. Stored for reference, never charged.
    pub deposit_fee_bps: u32,
    /// Maximum total supply, in the token's smallest unit
    pub supply_cap: U256,
}

impl ProtocolParameters {
    /// Reject parameters the conversion math cannot work with
    pub fn validate(&self) -> LedgerResult<()> {
        if self.ratio == 0 || self.tax_rate > MAX_TAX_RATE || self.supply_cap.is_zero() {
            return Err(LedgerError::InvalidConfig);
        }
        Ok(())
    }
}

/// Convert U512 to U256, failing if the value does not fit
pub fn u512_to_u256(value: U512) -> LedgerResult<U256> {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|b| *b != 0) {
        return Err(LedgerError::ArithmeticOverflow);
    }
    Ok(U256::from_little_endian(&bytes[..32]))
}

/// Convert U256 to U512
pub fn u256_to_u512(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}
