//! Per-exchange market breakdown, scraped from a coin's detail page.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Market;
use crate::scrape::{self, CellGroup, RowCells, TableRecord};
use crate::WebClient;

impl TableRecord for Market {
    /// Exchange and pair links, then volume, price and volume share.
    const LAYOUT: &'static [CellGroup] = &[CellGroup::new("td a", 2), CellGroup::new("td span", 3)];

    fn from_cells(cells: &RowCells) -> Self {
        Market {
            source: cells.get(0, 0).to_string(),
            pair: cells.get(0, 1).to_string(),
            volume_usd_24h: cells.get(1, 0).to_string(),
            price_usd: cells.get(1, 1).to_string(),
            volume_percentage: cells.get(1, 2).to_string(),
        }
    }
}

/// Query interface for the markets table on a coin's page.
pub struct MarketQuery<'a> {
    client: &'a WebClient,
}

impl<'a> MarketQuery<'a> {
    /// Create a new `MarketQuery` bound to the given client.
    pub fn new(client: &'a WebClient) -> Self {
        Self { client }
    }

    /// Get every exchange pair listed for a coin, in page order.
    pub fn get(&self, id: &str) -> Result<Vec<Market>> {
        let id = crate::queries::require_id(id)?;
        let mut url = self.client.website_url(&[id])?;
        // Same-page anchor only; never sent on the wire.
        url.set_fragment(Some("markets"));

        let body = self.client.get_text(url)?;
        let markets = scrape::extract_table::<Market>(&body).inspect_err(|e| {
            warn!(id, error = %e, "markets page did not match the expected layout");
        })?;
        debug!(count = markets.len(), "extracted markets");
        Ok(markets)
    }
}
