//! Query modules for the CoinMarketCap SDK.
//!
//! Each module provides a query struct that borrows a [`WebClient`](crate::WebClient)
//! and turns one provider resource into typed records. Tickers come from the JSON
//! API; history and markets are scraped from the website.

pub mod history;
pub mod markets;
pub mod tickers;

pub use history::{HistoryQuery, PricesOptions};
pub use markets::MarketQuery;
pub use tickers::{TickerQuery, TickersOptions};

use crate::error::{CmcError, Result};

/// Reject empty coin ids before any request is made.
pub(crate) fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CmcError::InvalidArgument("coin id must not be empty".into()));
    }
    Ok(id)
}
