//! Historical daily prices, scraped from the `historical-data` page.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Price;
use crate::scrape::{self, CellGroup, RowCells, TableRecord};
use crate::WebClient;

// ---------------------------------------------------------------------------
// PricesOptions
// ---------------------------------------------------------------------------

/// Date range for [`HistoryQuery::get`].
///
/// Dates are passed to the website untouched (it expects `YYYYMMDD`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricesOptions {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl PricesOptions {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row layout
// ---------------------------------------------------------------------------

impl TableRecord for Price {
    /// Date cell, then open, high, low, close, volume and market cap.
    const LAYOUT: &'static [CellGroup] = &[
        CellGroup::new("td.text-left", 1),
        CellGroup::new("[data-format-value]", 6),
    ];

    fn from_cells(cells: &RowCells) -> Self {
        let value = |i| scrape::strip_separators(cells.get(1, i));
        Price {
            date: cells.get(0, 0).to_string(),
            open_usd: value(0),
            high_usd: value(1),
            low_usd: value(2),
            close_usd: value(3),
            volume_usd_24h: value(4),
            market_cap_usd: value(5),
        }
    }
}

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

/// Query interface for historical price pages.
///
/// This page is not part of the documented API, so parsing is brittle.
pub struct HistoryQuery<'a> {
    client: &'a WebClient,
}

impl<'a> HistoryQuery<'a> {
    /// Create a new `HistoryQuery` bound to the given client.
    pub fn new(client: &'a WebClient) -> Self {
        Self { client }
    }

    /// Get daily prices for a coin, in page order (newest first on the live site).
    pub fn get(&self, id: &str, options: Option<&PricesOptions>) -> Result<Vec<Price>> {
        let id = crate::queries::require_id(id)?;
        let mut url = self.client.website_url(&[id, "historical-data"])?;
        if let Some(opts) = options {
            if let Some(start) = &opts.start {
                url.query_pairs_mut().append_pair("start", start);
            }
            if let Some(end) = &opts.end {
                url.query_pairs_mut().append_pair("end", end);
            }
        }

        let body = self.client.get_text(url)?;
        let prices = scrape::extract_table::<Price>(&body).inspect_err(|e| {
            warn!(id, error = %e, "historical-data page did not match the expected layout");
        })?;
        debug!(count = prices.len(), "extracted prices");
        Ok(prices)
    }
}
