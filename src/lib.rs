//! CoinMarketCap SDK for Rust.
//!
//! Provides a blocking client for CoinMarketCap's public market data. Tickers
//! are decoded from the JSON API; historical prices and per-exchange markets
//! are scraped from the website, so those two operations are best-effort and
//! break when the provider changes its markup.
//!
//! # Quick start
//!
//! ```no_run
//! use cmc_sdk::{Client, TickersOptions, WebClient};
//!
//! let client = WebClient::builder().build().unwrap();
//!
//! // Top ten coins by market cap
//! let top = client.tickers(Some(&TickersOptions::new(0, 10))).unwrap();
//!
//! // One coin, then its markets
//! let btc = client.ticker("bitcoin").unwrap();
//! let markets = client.markets(&btc.id).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod scrape;

#[cfg(feature = "async")]
pub use async_client::AsyncWebClient;
pub use client::Client;
pub use error::{CmcError, Result};
pub use models::{Market, Price, Ticker};
pub use queries::{PricesOptions, TickersOptions};

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use tracing::{debug, trace};
use url::Url;

// ---------------------------------------------------------------------------
// WebClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`WebClient`].
///
/// Use [`WebClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](WebClientBuilder::build).
pub struct WebClientBuilder {
    api_base: String,
    website_base: String,
    timeout: Duration,
    user_agent: String,
    http_client: Option<HttpClient>,
}

impl Default for WebClientBuilder {
    fn default() -> Self {
        Self {
            api_base: config::API_BASE.to_string(),
            website_base: config::WEBSITE_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
            http_client: None,
        }
    }
}

impl WebClientBuilder {
    /// Set the JSON API base address (defaults to [`config::API_BASE`]).
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set the website base address (defaults to [`config::WEBSITE_BASE`]).
    pub fn website_base(mut self, url: impl Into<String>) -> Self {
        self.website_base = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. Ignored when [`http_client`](Self::http_client)
    /// is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header. Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a prebuilt HTTP client (custom proxy, TLS, timeouts, ...).
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`CmcError::InvalidArgument`] if a base address is not an
    /// absolute URL, or [`CmcError::Transport`] if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<WebClient> {
        let api_base = parse_base(&self.api_base)?;
        let website_base = parse_base(&self.website_base)?;
        let http = match self.http_client {
            Some(client) => client,
            None => HttpClient::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent)
                .build()?,
        };
        Ok(WebClient {
            api_base,
            website_base,
            http,
        })
    }
}

fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(&config::normalize_base(base))
        .map_err(|e| CmcError::InvalidArgument(format!("invalid base address '{}': {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(CmcError::InvalidArgument(format!(
            "base address '{}' cannot carry a path",
            base
        )));
    }
    Ok(url)
}

// ---------------------------------------------------------------------------
// WebClient
// ---------------------------------------------------------------------------

/// The [`Client`] implementation that talks to CoinMarketCap over HTTP.
///
/// Holds only immutable configuration and a pooled HTTP client, so it is cheap
/// to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct WebClient {
    api_base: Url,
    website_base: Url,
    http: HttpClient,
}

impl WebClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> WebClientBuilder {
        WebClientBuilder::default()
    }

    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Base address of the JSON API, without a trailing slash.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Base address of the website pages that get scraped.
    pub fn website_base(&self) -> &Url {
        &self.website_base
    }

    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url> {
        join_segments(&self.api_base, segments)
    }

    pub(crate) fn website_url(&self, segments: &[&str]) -> Result<Url> {
        join_segments(&self.website_base, segments)
    }

    /// Issue one GET and return the full body as text.
    ///
    /// Non-success statuses are reported as [`CmcError::Transport`].
    pub(crate) fn get_text(&self, url: Url) -> Result<String> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send()?.error_for_status()?;
        let body = resp.text()?;
        trace!(bytes = body.len(), "response body");
        Ok(body)
    }
}

/// Append percent-encoded path segments to a base address.
fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| CmcError::InvalidArgument(format!("base address '{}' cannot carry a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for WebClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WebClient(api_base={}, website_base={})",
            self.api_base, self.website_base
        )
    }
}
