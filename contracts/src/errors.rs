//! Protocol error definitions.

use odra::prelude::*;

/// Result type for ledger bookkeeping and conversion math
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Collateral ledger errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LedgerError {
    // Amount / payment errors (1xx)
    InvalidAmount = 100,
    InsufficientPayment = 101,
    InsufficientAllowance = 102,
    InsufficientTokenBalance = 103,
    SupplyCapExceeded = 104,

    // Oracle errors (2xx)
    InvalidPrice = 200,
    PriceFeedNotConfigured = 201,

    // Reserve errors (3xx)
    InsufficientReserve = 300,
    NothingToWithdraw = 301,

    // Access control errors (4xx)
    Unauthorized = 400,
    UnauthorizedMinter = 401,

    // Transfer errors (5xx)
    TransferFailed = 500,

    // Configuration / arithmetic errors (9xx)
    ArithmeticOverflow = 900,
    InvalidConfig = 901,
}

impl LedgerError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Amount / payment
            LedgerError::InvalidAmount => "Amount must be greater than zero",
            LedgerError::InsufficientPayment => "Supplied collateral below required amount",
            LedgerError::InsufficientAllowance => "Collateral allowance below required amount",
            LedgerError::InsufficientTokenBalance => "Insufficient token balance",
            LedgerError::SupplyCapExceeded => "Mint would exceed supply cap",

            // Oracle
            LedgerError::InvalidPrice => "Oracle price is zero or negative",
            LedgerError::PriceFeedNotConfigured => "Price feed not configured",

            // Reserve
            LedgerError::InsufficientReserve => "Reserve does not cover redemption",
            LedgerError::NothingToWithdraw => "No accrued tax to withdraw",

            // Access control
            LedgerError::Unauthorized => "Unauthorized: caller is not owner",
            LedgerError::UnauthorizedMinter => "Unauthorized: caller is not minter",

            // Transfer
            LedgerError::TransferFailed => "Collateral transfer failed",

            // Config / arithmetic
            LedgerError::ArithmeticOverflow => "Arithmetic overflow",
            LedgerError::InvalidConfig => "Invalid configuration parameter",
        }
    }
}

impl core::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<LedgerError> for OdraError {
    fn from(error: LedgerError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
