//! Ticker queries against the provider's JSON API.

use tracing::debug;

use crate::error::{CmcError, Result};
use crate::models::Ticker;
use crate::WebClient;

// ---------------------------------------------------------------------------
// TickersOptions
// ---------------------------------------------------------------------------

/// Pagination window for [`TickerQuery::list`].
///
/// Passing no options at all returns the provider's default top 100.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickersOptions {
    /// Return results from this rank onwards.
    pub start: Option<u32>,
    /// Maximum number of results; `0` asks for every ticker.
    pub limit: Option<u32>,
}

impl TickersOptions {
    pub fn new(start: u32, limit: u32) -> Self {
        Self {
            start: Some(start),
            limit: Some(limit),
        }
    }
}

// ---------------------------------------------------------------------------
// TickerQuery
// ---------------------------------------------------------------------------

/// Query interface for the `ticker` endpoints.
pub struct TickerQuery<'a> {
    client: &'a WebClient,
}

impl<'a> TickerQuery<'a> {
    /// Create a new `TickerQuery` bound to the given client.
    pub fn new(client: &'a WebClient) -> Self {
        Self { client }
    }

    /// List tickers, optionally windowed by `options`.
    ///
    /// `start` and `limit` are only sent when options are supplied and the
    /// field is set.
    pub fn list(&self, options: Option<&TickersOptions>) -> Result<Vec<Ticker>> {
        let mut url = self.client.api_url(&["ticker"])?;
        if let Some(opts) = options {
            if let Some(start) = opts.start {
                url.query_pairs_mut().append_pair("start", &start.to_string());
            }
            if let Some(limit) = opts.limit {
                url.query_pairs_mut().append_pair("limit", &limit.to_string());
            }
        }

        let body = self.client.get_text(url)?;
        let tickers: Vec<Ticker> = serde_json::from_str(&body)?;
        debug!(count = tickers.len(), "decoded tickers");
        Ok(tickers)
    }

    /// Get one ticker by coin id (e.g. `"bitcoin"`).
    ///
    /// The endpoint answers with an array; anything other than exactly one
    /// element is a [`CmcError::ResponseShape`].
    pub fn get(&self, id: &str) -> Result<Ticker> {
        let id = crate::queries::require_id(id)?;
        let url = self.client.api_url(&["ticker", id])?;

        let body = self.client.get_text(url)?;
        let mut tickers: Vec<Ticker> = serde_json::from_str(&body)?;
        let count = tickers.len();
        match (count, tickers.pop()) {
            (1, Some(ticker)) => Ok(ticker),
            _ => Err(CmcError::ResponseShape(format!(
                "unexpected result cardinality for ticker '{}': expected 1, got {}",
                id, count
            ))),
        }
    }
}
