//! Shared test fixtures for the CoinMarketCap SDK integration tests.
//!
//! Provides [`MockSite`], a local wiremock server standing in for both the JSON
//! API (`/v1`) and the website (`/currencies`), plus canned response bodies.
//! The SDK is blocking, so the mock server lives on its own Tokio runtime and
//! the tests drive the client from the plain test thread.

#![allow(dead_code)]

use cmc_sdk::{Ticker, WebClient};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

/// A mock provider plus the runtime that owns it.
pub struct MockSite {
    // Dropped before the runtime.
    pub server: MockServer,
    rt: Runtime,
}

impl MockSite {
    pub fn start() -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    /// A client whose API and website bases both point at this server.
    pub fn client(&self) -> WebClient {
        WebClient::builder()
            .api_base(format!("{}/v1", self.server.uri()))
            .website_base(format!("{}/currencies", self.server.uri()))
            .build()
            .unwrap()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// JSON API bodies
// ---------------------------------------------------------------------------

pub const TICKERS_BODY: &str = r#"
[
    {
        "id": "bitcoin",
        "name": "Bitcoin",
        "symbol": "BTC",
        "rank": "1",
        "price_usd": "573.137",
        "price_btc": "1.0",
        "24h_volume_usd": "72855700.0",
        "market_cap_usd": "9080883500.0",
        "available_supply": "15844176.0",
        "total_supply": "15844176.0",
        "percent_change_1h": "0.04",
        "percent_change_24h": "-0.3",
        "percent_change_7d": "-0.57",
        "last_updated": "1472762067"
    },
    {
        "id": "ethereum",
        "name": "Ethereum",
        "symbol": "ETH",
        "rank": "2",
        "price_usd": "12.1844",
        "price_btc": "0.021262",
        "24h_volume_usd": "24085900.0",
        "market_cap_usd": "1018098455.0",
        "available_supply": "83557537.0",
        "total_supply": "83557537.0",
        "percent_change_1h": "-0.58",
        "percent_change_24h": "6.34",
        "percent_change_7d": "8.59",
        "last_updated": "1472762062"
    }
]"#;

pub const BITCOIN_BODY: &str = r#"
[
    {
        "id": "bitcoin",
        "name": "Bitcoin",
        "symbol": "BTC",
        "rank": "1",
        "price_usd": "573.137",
        "price_btc": "1.0",
        "24h_volume_usd": "72855700.0",
        "market_cap_usd": "9080883500.0",
        "available_supply": "15844176.0",
        "total_supply": "15844176.0",
        "percent_change_1h": "0.04",
        "percent_change_24h": "-0.3",
        "percent_change_7d": "-0.57",
        "last_updated": "1472762067"
    }
]"#;

pub fn bitcoin() -> Ticker {
    Ticker {
        id: "bitcoin".into(),
        name: "Bitcoin".into(),
        symbol: "BTC".into(),
        rank: 1,
        price_usd: "573.137".into(),
        price_btc: "1.0".into(),
        volume_usd_24h: "72855700.0".into(),
        market_cap_usd: "9080883500.0".into(),
        supply_available: "15844176.0".into(),
        supply_total: "15844176.0".into(),
        percent_change_1h: "0.04".into(),
        percent_change_24h: "-0.3".into(),
        percent_change_7d: "-0.57".into(),
        last_updated: "1472762067".into(),
    }
}

pub fn ethereum() -> Ticker {
    Ticker {
        id: "ethereum".into(),
        name: "Ethereum".into(),
        symbol: "ETH".into(),
        rank: 2,
        price_usd: "12.1844".into(),
        price_btc: "0.021262".into(),
        volume_usd_24h: "24085900.0".into(),
        market_cap_usd: "1018098455.0".into(),
        supply_available: "83557537.0".into(),
        supply_total: "83557537.0".into(),
        percent_change_1h: "-0.58".into(),
        percent_change_24h: "6.34".into(),
        percent_change_7d: "8.59".into(),
        last_updated: "1472762062".into(),
    }
}

// ---------------------------------------------------------------------------
// Website pages
// ---------------------------------------------------------------------------

/// Build a historical-data page from `[date, open, high, low, close, volume, cap]` rows.
pub fn history_page(rows: &[[&str; 7]]) -> String {
    let mut body = String::from(
        r#"<!DOCTYPE html>
<html><head><title>Historical data</title></head>
<body>
<div class="table-responsive">
<table class="table">
<thead>
<tr class="text-right">
  <th class="text-left">Date</th><th>Open</th><th>High</th><th>Low</th>
  <th>Close</th><th>Volume</th><th>Market Cap</th>
</tr>
</thead>
<tbody>
"#,
    );
    for row in rows {
        body.push_str("<tr class=\"text-right\">\n");
        body.push_str(&format!("  <td class=\"text-left\">{}</td>\n", row[0]));
        for value in &row[1..] {
            body.push_str(&format!(
                "  <td data-format-fiat data-format-value=\"{}\">{}</td>\n",
                value.replace(',', ""),
                value
            ));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n</div>\n</body></html>\n");
    body
}

/// Build a coin page whose markets table has `[exchange, pair, volume, price, percent]` rows.
pub fn markets_page(rows: &[[&str; 5]]) -> String {
    let mut body = String::from(
        r#"<!DOCTYPE html>
<html><head><title>Bitcoin</title></head>
<body>
<div id="markets">
<table id="markets-table" class="table">
<thead>
<tr>
  <th>#</th><th>Source</th><th>Pair</th><th>Volume (24h)</th>
  <th>Price</th><th>Volume (%)</th><th>Updated</th>
</tr>
</thead>
<tbody>
"#,
    );
    for (i, row) in rows.iter().enumerate() {
        body.push_str(&format!(
            r#"<tr>
  <td class="text-right">{rank}</td>
  <td class="no-wrap currency-name"><img class="logo-sprite" alt="{ex}"> <a href="/exchanges/{slug}/">{ex}</a></td>
  <td><a href="https://example.com/trade/{slug}" target="_blank">{pair}</a></td>
  <td class="text-right"><span class="volume">{vol}</span></td>
  <td class="text-right"><span class="price">{price}</span></td>
  <td class="text-right"><span data-format-percentage>{pct}</span></td>
  <td class="text-right">Recently</td>
</tr>
"#,
            rank = i + 1,
            ex = row[0],
            slug = row[0].to_lowercase(),
            pair = row[1],
            vol = row[2],
            price = row[3],
            pct = row[4],
        ));
    }
    body.push_str("</tbody>\n</table>\n</div>\n</body></html>\n");
    body
}
