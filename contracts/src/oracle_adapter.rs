//! Oracle Adapter
//!
//! Wraps the external price feed behind a single "latest price" query.
//! Prices are fetched fresh on every call: no caching, no staleness or
//! round-completeness checks. The feed is trusted to report a validated
//! answer; the only rejection is a non-positive price.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::converter::validate_price;
use crate::errors::{LedgerError, LedgerResult};
use crate::price_feed::PriceFeedContractRef;

/// Oracle adapter submodule
#[odra::module]
pub struct PriceOracleAdapter {
    /// External price feed address
    feed: Var<Address>,
}

#[odra::module]
impl PriceOracleAdapter {
    /// Bind the adapter to a feed
    pub fn init(&mut self, feed: Address) {
        self.feed.set(feed);
    }

    /// Raw signed price of the feed's latest round
    pub fn latest_price(&self) -> i64 {
        match self.feed.get() {
            Some(feed) => PriceFeedContractRef::new(self.env(), feed).latest_round_price(),
            None => self.env().revert(LedgerError::PriceFeedNotConfigured),
        }
    }

    /// Get feed address
    pub fn get_feed(&self) -> Option<Address> {
        self.feed.get()
    }
}

impl PriceOracleAdapter {
    /// Fresh price snapshot, rejected with `InvalidPrice` when non-positive
    pub fn snapshot(&self) -> LedgerResult<U256> {
        validate_price(self.latest_price())
    }
}
