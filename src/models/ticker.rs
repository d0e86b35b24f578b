use serde::{Deserialize, Serialize};

use super::de::{de_text, rank};

// ---------------------------------------------------------------------------
// Ticker — Snapshot of one coin's market state (JSON API)
// ---------------------------------------------------------------------------

/// Current market statistics for one cryptocurrency.
///
/// Every numeric field except `rank` is kept as the provider's decimal text so
/// no precision is lost to floating point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(with = "rank")]
    pub rank: u32,
    #[serde(default, deserialize_with = "de_text")]
    pub price_usd: String,
    #[serde(default, deserialize_with = "de_text")]
    pub price_btc: String,
    #[serde(rename = "24h_volume_usd", default, deserialize_with = "de_text")]
    pub volume_usd_24h: String,
    #[serde(default, deserialize_with = "de_text")]
    pub market_cap_usd: String,
    #[serde(rename = "available_supply", default, deserialize_with = "de_text")]
    pub supply_available: String,
    #[serde(rename = "total_supply", default, deserialize_with = "de_text")]
    pub supply_total: String,
    #[serde(default, deserialize_with = "de_text")]
    pub percent_change_1h: String,
    #[serde(default, deserialize_with = "de_text")]
    pub percent_change_24h: String,
    #[serde(default, deserialize_with = "de_text")]
    pub percent_change_7d: String,
    /// Seconds since the Unix epoch, as text.
    #[serde(default, deserialize_with = "de_text")]
    pub last_updated: String,
}
