//! Price Feed Integration
//!
//! External interface of the collateral/USD price feed, plus an
//! operator-fed implementation used for testnet deployments.

use odra::prelude::*;

use crate::errors::LedgerError;

/// Round data reported by a price feed: (round_id, price, updated_at)
pub type RoundData = (u64, i64, u64);

/// Price feed trait for cross-contract calls
#[odra::external_contract]
pub trait PriceFeed {
    /// Signed price of the latest round
    fn latest_round_price(&self) -> i64;
}

/// Operator-fed price feed
///
/// Every `set_price` opens a new round. The answer is stored as given,
/// including zero or negative values; consumers decide what is valid.
#[odra::module]
pub struct ManualPriceFeed {
    /// Address allowed to push prices
    operator: Var<Address>,
    /// Latest answer
    price: Var<i64>,
    /// Latest round id (starts at 1 after init)
    round_id: Var<u64>,
    /// Block time of the latest answer
    updated_at: Var<u64>,
}

#[odra::module]
impl ManualPriceFeed {
    /// Initialize the feed with its operator and first answer
    pub fn init(&mut self, operator: Address, initial_price: i64) {
        self.operator.set(operator);
        self.round_id.set(0);
        self.store_round(initial_price);
    }

    /// Push a new answer (operator only)
    pub fn set_price(&mut self, price: i64) {
        let caller = self.env().caller();
        if Some(caller) != self.operator.get() {
            self.env().revert(LedgerError::Unauthorized);
        }
        self.store_round(price);
    }

    /// Signed price of the latest round
    pub fn latest_round_price(&self) -> i64 {
        self.price.get().unwrap_or(0)
    }

    /// Latest round metadata
    pub fn latest_round(&self) -> RoundData {
        (
            self.round_id.get().unwrap_or(0),
            self.latest_round_price(),
            self.updated_at.get().unwrap_or(0),
        )
    }

    /// Get operator address
    pub fn get_operator(&self) -> Option<Address> {
        self.operator.get()
    }

    fn store_round(&mut self, price: i64) {
        let round = self.round_id.get().unwrap_or(0) + 1;
        self.round_id.set(round);
        self.price.set(price);
        self.updated_at.set(self.env().get_block_time());
    }
}
