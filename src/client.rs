//! The [`Client`] interface and its HTTP implementation.

use crate::error::Result;
use crate::models::{Market, Price, Ticker};
use crate::queries::{HistoryQuery, MarketQuery, PricesOptions, TickerQuery, TickersOptions};
use crate::WebClient;

/// Read access to CoinMarketCap market data.
///
/// Every call performs exactly one request and either returns all records or
/// the first error; there are no retries and no partial results.
pub trait Client {
    /// List tickers. `None` returns the provider's default top 100.
    fn tickers(&self, options: Option<&TickersOptions>) -> Result<Vec<Ticker>>;

    /// Get a single ticker by coin id, e.g. `"bitcoin"`.
    fn ticker(&self, id: &str) -> Result<Ticker>;

    /// Get historical daily prices. Scraped, so inherently brittle.
    fn prices(&self, id: &str, options: Option<&PricesOptions>) -> Result<Vec<Price>>;

    /// Get the volume breakdown per exchange pair. Scraped.
    fn markets(&self, id: &str) -> Result<Vec<Market>>;
}

impl Client for WebClient {
    fn tickers(&self, options: Option<&TickersOptions>) -> Result<Vec<Ticker>> {
        TickerQuery::new(self).list(options)
    }

    fn ticker(&self, id: &str) -> Result<Ticker> {
        TickerQuery::new(self).get(id)
    }

    fn prices(&self, id: &str, options: Option<&PricesOptions>) -> Result<Vec<Price>> {
        HistoryQuery::new(self).get(id, options)
    }

    fn markets(&self, id: &str) -> Result<Vec<Market>> {
        MarketQuery::new(self).get(id)
    }
}
