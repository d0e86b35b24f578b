use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Price — One day of historical data (scraped)
// ---------------------------------------------------------------------------

/// One daily OHLC data point in USD.
///
/// Values are stored as text with thousands separators removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub date: String,
    #[serde(rename = "open")]
    pub open_usd: String,
    pub high_usd: String,
    pub low_usd: String,
    pub close_usd: String,
    #[serde(rename = "24hr_volume_usd")]
    pub volume_usd_24h: String,
    pub market_cap_usd: String,
}
