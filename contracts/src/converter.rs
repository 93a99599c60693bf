//! Exchange rate conversions between dollars, issued tokens and collateral.
//!
//! All functions are pure integer math over `U256`:
//! - Mint rate is fixed by `ratio` and never looks at the oracle
//! - Redemption rate follows the live price snapshot
//! - Every multiplication is checked; division truncates toward zero
//!
//! Units:
//! - dollar amounts passed in by callers are whole dollars
//! - minted amounts are in the token's smallest unit (`SCALE` = 1e18)
//! - redeemed amounts are whole tokens
//! - price is collateral-asset fixed point units per dollar, oracle-native decimals

use odra::casper_types::U256;
use crate::errors::{LedgerError, LedgerResult};

/// Issued token decimals
pub const TOKEN_DECIMALS: u8 = 18;

/// Fixed-point scale of the issued token (1e18)
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Percent scale for the redemption tax
pub const PERCENT_SCALE: u64 = 100;

/// Collateral split of a redemption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedemptionQuote {
    /// Collateral paid to the redeemer
    pub net: U256,
    /// Collateral earmarked for the owner
    pub tax: U256,
}

impl RedemptionQuote {
    /// Full collateral value of the redemption (net + tax)
    pub fn gross(&self) -> U256 {
        self.net + self.tax
    }
}

/// Validate a raw oracle answer. Zero and negative prices are rejected.
pub fn validate_price(raw_price: i64) -> LedgerResult<U256> {
    if raw_price <= 0 {
        return Err(LedgerError::InvalidPrice);
    }
    Ok(U256::from(raw_price as u64))
}

/// Collateral required for `dollar_amount` whole dollars:
/// `dollar_amount * SCALE / price`
pub fn dollars_to_collateral(dollar_amount: U256, price: U256) -> LedgerResult<U256> {
    let scaled = dollar_amount
        .checked_mul(U256::from(SCALE))
        .ok_or(LedgerError::ArithmeticOverflow)?;
    scaled_dollars_to_collateral(scaled, price)
}

/// Tokens (smallest unit) minted for `dollar_amount` whole dollars:
/// `dollar_amount * SCALE * ratio`
pub fn dollars_to_tokens(dollar_amount: U256, ratio: u32) -> LedgerResult<U256> {
    dollar_amount
        .checked_mul(U256::from(SCALE))
        .and_then(|v| v.checked_mul(U256::from(ratio)))
        .ok_or(LedgerError::ArithmeticOverflow)
}

/// Dollar value of `token_amount` whole tokens, in `SCALE` fixed point:
/// `token_amount * SCALE / ratio`
pub fn tokens_to_dollars(token_amount: U256, ratio: u32) -> LedgerResult<U256> {
    if ratio == 0 {
        return Err(LedgerError::InvalidConfig);
    }
    let scaled = token_amount
        .checked_mul(U256::from(SCALE))
        .ok_or(LedgerError::ArithmeticOverflow)?;
    Ok(scaled / U256::from(ratio))
}

/// Split the collateral value of `token_amount` whole tokens into net and tax.
///
/// Tax is taken on the full collateral value: `tax = collateral * tax_rate / 100`.
pub fn tokens_to_collateral_with_tax(
    token_amount: U256,
    ratio: u32,
    price: U256,
    tax_rate: u8,
) -> LedgerResult<RedemptionQuote> {
    let dollars = tokens_to_dollars(token_amount, ratio)?;
    let collateral = scaled_dollars_to_collateral(dollars, price)?;

    let tax = collateral
        .checked_mul(U256::from(tax_rate))
        .ok_or(LedgerError::ArithmeticOverflow)?
        / U256::from(PERCENT_SCALE);

    Ok(RedemptionQuote {
        net: collateral - tax,
        tax,
    })
}

/// Whole tokens expressed in the token's smallest unit
pub fn whole_tokens_to_units(token_amount: U256) -> LedgerResult<U256> {
    token_amount
        .checked_mul(U256::from(SCALE))
        .ok_or(LedgerError::ArithmeticOverflow)
}

// Fixed-point dollars are already multiplied by SCALE, so one division lands in collateral units.
fn scaled_dollars_to_collateral(scaled_dollars: U256, price: U256) -> LedgerResult<U256> {
    if price.is_zero() {
        return Err(LedgerError::InvalidPrice);
    }
    Ok(scaled_dollars / price)
}
