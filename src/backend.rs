//! The record-store seam.
//!
//! Everything that reads from the hosted backend goes through [`Backend`], so
//! the shell and the query wrappers can run against a fake in tests.

use serde_json::Value;

use crate::error::Result;
use crate::query::Query;

/// A read-only record store answering `select table, filter, order → rows`.
pub trait Backend {
    /// Run `query` and return the raw rows.
    ///
    /// `Ok(None)` means the store answered without a row set (a JSON `null`
    /// body); callers treat it as an empty result.
    fn select(&self, query: &Query) -> Result<Option<Vec<Value>>>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn select(&self, query: &Query) -> Result<Option<Vec<Value>>> {
        (**self).select(query)
    }
}
