//! Async wrapper around [`PokeTrade`] for use in async runtimes (Tokio, etc.).
//!
//! The REST backend uses a blocking HTTP client, so every operation is run
//! on the blocking thread pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use poketrade::{AsyncPokeTrade, Tab};
//!
//! # async fn example() -> poketrade::Result<()> {
//! let client = AsyncPokeTrade::builder()
//!     .url("https://xyzcompany.supabase.co")
//!     .anon_key("public-anon-key")
//!     .build()
//!     .await?;
//!
//! let cards = client.run(|c| c.cards().all_by_rarity()).await?;
//! let html = client.render_page(Tab::Market).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::app::Tab;
use crate::error::{PokeTradeError, Result};
use crate::models::Card;
use crate::PokeTrade;

// ---------------------------------------------------------------------------
// AsyncPokeTradeBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncPokeTrade`]. Mirrors [`PokeTradeBuilder`](crate::PokeTradeBuilder).
#[derive(Default)]
pub struct AsyncPokeTradeBuilder {
    url: Option<String>,
    anon_key: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncPokeTradeBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client on the blocking pool.
    ///
    /// The blocking HTTP client must not be created on an async worker thread.
    pub async fn build(self) -> Result<AsyncPokeTrade> {
        tokio::task::spawn_blocking(move || {
            let mut builder = PokeTrade::builder();
            if let Some(url) = self.url {
                builder = builder.url(url);
            }
            if let Some(key) = self.anon_key {
                builder = builder.anon_key(key);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            Ok(AsyncPokeTrade {
                inner: Arc::new(builder.build()?),
            })
        })
        .await
        .map_err(|e| PokeTradeError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPokeTrade
// ---------------------------------------------------------------------------

/// Async wrapper around [`PokeTrade`].
///
/// Cloning is cheap; clones share the same HTTP client.
#[derive(Clone)]
pub struct AsyncPokeTrade {
    inner: Arc<PokeTrade>,
}

impl AsyncPokeTrade {
    pub fn builder() -> AsyncPokeTradeBuilder {
        AsyncPokeTradeBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PokeTrade) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| PokeTradeError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the catalog, rarity descending.
    pub async fn cards(&self) -> Result<Vec<Card>> {
        self.run(|c| c.cards().all_by_rarity()).await
    }

    /// Asynchronous [`PokeTrade::render_page`].
    pub async fn render_page(&self, tab: Tab) -> Result<String> {
        self.run(move |c| Ok(c.render_page(tab))).await
    }

    /// Borrow the wrapped sync client.
    pub fn inner(&self) -> &PokeTrade {
        &self.inner
    }
}
