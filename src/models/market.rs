use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Market — One exchange/pair listing (scraped)
// ---------------------------------------------------------------------------

/// Trading activity for a coin on one exchange pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Market {
    /// Exchange name.
    pub source: String,
    pub pair: String,
    #[serde(rename = "24hr_volume_usd")]
    pub volume_usd_24h: String,
    pub price_usd: String,
    /// Share of the coin's total 24h volume, e.g. `"12.34%"`.
    #[serde(rename = "volume_percent")]
    pub volume_percentage: String,
}
