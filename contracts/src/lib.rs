//! Collateral Mint Contracts
//!
//! Collateral-backed token issuance for Casper.
//!
//! ## Architecture
//!
//! - **CollateralLedger**: Deposit / redeem / tax-withdraw flows per collateral asset
//! - **Converter**: Fixed-point dollar, token and collateral conversions
//! - **ReserveAccountant**: Accrued owner tax and the redeemable-reserve guard
//! - **PriceOracleAdapter**: Latest price from an external feed, fetched per call
//! - **CollateralToken**: CEP-18 token, minted and burned by the ledger
//!
//! ## Reserve guard
//!
//! Accrued tax is excluded from the redeemable reserve. When an asset's held
//! balance does not exceed its accrued tax, every redemption against that
//! asset is rejected, whatever the caller's token balance.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod converter;

// Submodules and adapters
pub mod access_control;
pub mod reserve;
pub mod oracle_adapter;
pub mod price_feed;
pub mod token_adapter;

// Contract modules
pub mod ledger;
pub mod token;
