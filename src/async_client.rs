//! Async wrapper around [`WebClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on Tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! blocking HTTP client must not be built, used, or dropped on an async worker
//! thread, so construction and [`close()`](AsyncWebClient::close) go through
//! the pool as well.
//!
//! # Example
//!
//! ```no_run
//! use cmc_sdk::{AsyncWebClient, WebClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncWebClient::build(WebClient::builder()).await.unwrap();
//!     let btc = client.ticker("bitcoin").await.unwrap();
//!     println!("{} {}", btc.symbol, btc.price_usd);
//!     client.close().await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::client::Client;
use crate::error::{CmcError, Result};
use crate::models::{Market, Price, Ticker};
use crate::queries::{PricesOptions, TickersOptions};
use crate::{WebClient, WebClientBuilder};

/// Async wrapper around [`WebClient`].
///
/// Cloning is cheap; all clones share one underlying HTTP client.
#[derive(Clone)]
pub struct AsyncWebClient {
    inner: Arc<WebClient>,
}

impl AsyncWebClient {
    /// Build the wrapped client on the blocking thread pool.
    pub async fn build(builder: WebClientBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let client = builder.build()?;
            Ok(AsyncWebClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| CmcError::Task(format!("join error: {e}")))?
    }

    /// Build a client with default settings.
    pub async fn new() -> Result<Self> {
        Self::build(WebClient::builder()).await
    }

    /// Run a blocking client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&WebClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| CmcError::Task(format!("join error: {e}")))?
    }

    /// See [`Client::tickers`].
    pub async fn tickers(&self, options: Option<TickersOptions>) -> Result<Vec<Ticker>> {
        self.run(move |c| c.tickers(options.as_ref())).await
    }

    /// See [`Client::ticker`].
    pub async fn ticker(&self, id: &str) -> Result<Ticker> {
        let id = id.to_string();
        self.run(move |c| c.ticker(&id)).await
    }

    /// See [`Client::prices`].
    pub async fn prices(&self, id: &str, options: Option<PricesOptions>) -> Result<Vec<Price>> {
        let id = id.to_string();
        self.run(move |c| c.prices(&id, options.as_ref())).await
    }

    /// See [`Client::markets`].
    pub async fn markets(&self, id: &str) -> Result<Vec<Market>> {
        let id = id.to_string();
        self.run(move |c| c.markets(&id)).await
    }

    /// Release this handle on the blocking pool.
    ///
    /// The HTTP client is torn down once the last clone is closed or dropped.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| CmcError::Task(format!("join error: {e}")))
    }
}
