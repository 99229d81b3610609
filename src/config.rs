use std::env;
use std::time::Duration;

use crate::error::{PokeTradeError, Result};

pub const CARDS_TABLE: &str = "pokemon_cards";

/// Path prefix of the PostgREST endpoint on a Supabase project.
pub const REST_PREFIX: &str = "/rest/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TAB_VAR: &str = "POKETRADE_TAB";

/// Connection settings for the hosted record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Public (anon) API key, sent as both `apikey` and bearer token.
    pub anon_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the process environment.
    pub fn from_env() -> Result<Self> {
        let url = require_var(URL_VAR)?;
        let anon_key = require_var(ANON_KEY_VAR)?;
        Ok(Self::new(url, anon_key))
    }

    /// Full URL of the REST resource backing `table`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.url.trim_end_matches('/'), REST_PREFIX, table)
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Ok(_) => Err(PokeTradeError::Config(format!("{} is empty", name))),
        Err(_) => Err(PokeTradeError::Config(format!("{} must be set", name))),
    }
}
