//! Environment-driven configuration.
//!
//! Kept as the only test in this binary because it mutates process env.

use poketrade::config::{BackendConfig, ANON_KEY_VAR, DEFAULT_TIMEOUT, URL_VAR};
use poketrade::{PokeTrade, PokeTradeError};

#[test]
fn from_env_reads_and_validates_settings() {
    std::env::remove_var(URL_VAR);
    std::env::remove_var(ANON_KEY_VAR);
    match BackendConfig::from_env() {
        Err(PokeTradeError::Config(msg)) => assert!(msg.contains(URL_VAR)),
        other => panic!("expected config error, got {other:?}"),
    }

    std::env::set_var(URL_VAR, "https://demo.supabase.co");
    std::env::set_var(ANON_KEY_VAR, "   ");
    match BackendConfig::from_env() {
        Err(PokeTradeError::Config(msg)) => assert!(msg.contains("empty")),
        other => panic!("expected config error, got {other:?}"),
    }

    std::env::set_var(ANON_KEY_VAR, " anon-key ");
    let cfg = BackendConfig::from_env().unwrap();
    assert_eq!(cfg.url, "https://demo.supabase.co");
    assert_eq!(cfg.anon_key, "anon-key");
    assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);

    let client = PokeTrade::builder().from_env().unwrap().build().unwrap();
    assert_eq!(client.config().url, "https://demo.supabase.co");

    std::env::remove_var(URL_VAR);
    std::env::remove_var(ANON_KEY_VAR);
}
