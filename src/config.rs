use std::time::Duration;

pub const API_BASE: &str = "https://api.coinmarketcap.com/v1";
pub const WEBSITE_BASE: &str = "https://coinmarketcap.com/currencies";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_user_agent() -> String {
    format!("cmc-sdk/{}", env!("CARGO_PKG_VERSION"))
}

/// Trim trailing slashes so paths can be joined with a single `/`.
pub fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
