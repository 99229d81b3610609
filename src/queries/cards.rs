//! Card queries against the `pokemon_cards` table.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::Backend;
use crate::config::CARDS_TABLE;
use crate::error::Result;
use crate::models::Card;
use crate::query::{Direction, Query};

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for the card catalog.
pub struct CardQuery<'a, B: Backend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> CardQuery<'a, B> {
    /// Create a new `CardQuery` bound to the given backend.
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// The query used to list the market: every card, rarity descending.
    pub fn all_by_rarity_query() -> Query {
        let mut q = Query::new(CARDS_TABLE);
        q.order("rarity", Direction::Desc);
        q
    }

    /// Fetch every card ordered by rarity descending.
    ///
    /// Rows are returned in the order the backend produced them. An absent
    /// row set yields an empty vector.
    pub fn all_by_rarity(&self) -> Result<Vec<Card>> {
        let rows = self.backend.select(&Self::all_by_rarity_query())?;
        rows_into(rows.unwrap_or_default())
    }

    /// Retrieve a single card by its id.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Card>> {
        let mut q = Query::new(CARDS_TABLE);
        q.where_eq("id", id).limit(1);

        let rows = self.backend.select(&q)?.unwrap_or_default();
        Ok(rows_into::<Card>(rows)?.into_iter().next())
    }
}

fn rows_into<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(serde_json::from_value(row)?);
    }
    Ok(out)
}
