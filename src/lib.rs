//! PokéTrade client for Rust.
//!
//! Browses a Pokémon card catalog kept in a hosted Supabase/PostgREST record
//! store and renders it as cards. The application shell ([`App`]) loads the
//! catalog once, switches between a market and a collection tab, and renders
//! a [`Page`](view::Page) that the [`html`] module turns into markup.
//!
//! # Quick start
//!
//! ```no_run
//! use poketrade::{PokeTrade, Tab};
//!
//! let client = PokeTrade::builder()
//!     .url("https://xyzcompany.supabase.co")
//!     .anon_key("public-anon-key")
//!     .build()
//!     .unwrap();
//!
//! // Query cards directly
//! let cards = client.cards().all_by_rarity().unwrap();
//!
//! // Or drive the shell
//! let mut app = client.app();
//! app.mount();
//! app.set_active_tab(Tab::Collection);
//! let html = poketrade::html::render_page(&app.render());
//! ```

pub mod app;
#[cfg(feature = "async")]
pub mod async_client;
pub mod backend;
pub mod component;
pub mod config;
pub mod error;
pub mod html;
pub mod models;
pub mod queries;
pub mod query;
pub mod rest;
pub mod view;

pub use app::{App, Tab};
#[cfg(feature = "async")]
pub use async_client::AsyncPokeTrade;
pub use backend::Backend;
pub use config::BackendConfig;
pub use error::{PokeTradeError, Result};
pub use query::Query;
pub use rest::RestBackend;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokeTradeBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PokeTrade`] client.
///
/// Use [`PokeTrade::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokeTradeBuilder::build).
pub struct PokeTradeBuilder {
    url: Option<String>,
    anon_key: Option<String>,
    timeout: Duration,
}

impl Default for PokeTradeBuilder {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl PokeTradeBuilder {
    /// Set the project base URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the public anon key.
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. A backend that does not answer within this
    /// window surfaces as a failed load instead of an endless spinner.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Take the URL and key from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    pub fn from_env(self) -> Result<Self> {
        let cfg = BackendConfig::from_env()?;
        Ok(self.url(cfg.url).anon_key(cfg.anon_key))
    }

    /// Build the client. No request is made until the first query.
    pub fn build(self) -> Result<PokeTrade> {
        let url = self
            .url
            .ok_or_else(|| PokeTradeError::Config("backend URL not set".into()))?;
        let anon_key = self
            .anon_key
            .ok_or_else(|| PokeTradeError::Config("anon key not set".into()))?;

        let mut cfg = BackendConfig::new(url, anon_key);
        cfg.timeout = self.timeout;

        Ok(PokeTrade {
            backend: RestBackend::new(cfg)?,
        })
    }
}

// ---------------------------------------------------------------------------
// PokeTrade
// ---------------------------------------------------------------------------

/// The main entry point: a REST backend plus accessors for queries and the
/// application shell.
pub struct PokeTrade {
    backend: RestBackend,
}

impl PokeTrade {
    pub fn builder() -> PokeTradeBuilder {
        PokeTradeBuilder::default()
    }

    /// Access the card query interface.
    pub fn cards(&self) -> queries::CardQuery<'_, RestBackend> {
        queries::CardQuery::new(&self.backend)
    }

    /// A fresh, unmounted shell reading from this client's backend.
    pub fn app(&self) -> App<&RestBackend> {
        App::new(&self.backend)
    }

    /// Mount a shell, switch it to `tab` and render the page as HTML.
    pub fn render_page(&self, tab: Tab) -> String {
        let mut app = self.app();
        app.mount();
        app.set_active_tab(tab);
        html::render_page(&app.render())
    }

    pub fn config(&self) -> &BackendConfig {
        self.backend.config()
    }

    pub fn backend(&self) -> &RestBackend {
        &self.backend
    }
}

impl fmt::Display for PokeTrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cfg = self.backend.config();
        write!(
            f,
            "PokeTrade(url={}, timeout={}s)",
            cfg.url,
            cfg.timeout.as_secs()
        )
    }
}
