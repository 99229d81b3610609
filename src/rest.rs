//! PostgREST-over-HTTP implementation of [`Backend`].
//!
//! Talks to the `/rest/v1` endpoint of a Supabase project with the public
//! anon key. Only `GET` requests are ever issued.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::backend::Backend;
use crate::config::BackendConfig;
use crate::error::{PokeTradeError, Result};
use crate::query::Query;

/// Blocking HTTP client for the hosted record store.
pub struct RestBackend {
    config: BackendConfig,
    client: Client,
}

impl RestBackend {
    /// Create a backend for the given project settings.
    ///
    /// Fails if the URL is empty or the HTTP client cannot be constructed.
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(PokeTradeError::Config("backend URL is empty".into()));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { config, client })
    }

    /// The settings this backend was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl Backend for RestBackend {
    fn select(&self, query: &Query) -> Result<Option<Vec<Value>>> {
        let (table, params) = query.build();
        let url = self.config.table_url(&table);
        tracing::debug!(%query, "querying backend");

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Accept", "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "failed to read error body");
                String::new()
            });
            return Err(PokeTradeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Option<Vec<Value>> = resp.json()?;
        Ok(rows)
    }
}
