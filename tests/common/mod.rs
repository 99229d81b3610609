//! Shared fixtures for the PokéTrade integration tests.
//!
//! Provides a [`FakeBackend`] that answers every query with a canned response
//! and records the queries it was asked, plus JSON rows shaped like the
//! `pokemon_cards` table.

#![allow(dead_code)]

use std::cell::RefCell;

use poketrade::{Backend, PokeTradeError, Query, Result};
use serde_json::{json, Value};

/// What the fake answers with.
#[derive(Debug, Clone)]
pub enum Canned {
    Rows(Vec<Value>),
    /// JSON `null` body.
    Absent,
    /// Non-2xx status.
    Fail(u16),
}

pub struct FakeBackend {
    canned: RefCell<Canned>,
    queries: RefCell<Vec<Query>>,
}

impl FakeBackend {
    pub fn new(canned: Canned) -> Self {
        Self {
            canned: RefCell::new(canned),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self::new(Canned::Rows(rows))
    }

    pub fn failing() -> Self {
        Self::new(Canned::Fail(503))
    }

    /// Change what later queries answer with.
    pub fn set_canned(&self, canned: Canned) {
        *self.canned.borrow_mut() = canned;
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<Query> {
        self.queries.borrow().clone()
    }
}

impl Backend for FakeBackend {
    fn select(&self, query: &Query) -> Result<Option<Vec<Value>>> {
        self.queries.borrow_mut().push(query.clone());
        match &*self.canned.borrow() {
            Canned::Rows(rows) => Ok(Some(rows.clone())),
            Canned::Absent => Ok(None),
            Canned::Fail(status) => Err(PokeTradeError::Api {
                status: *status,
                body: "{\"message\":\"service unavailable\"}".to_string(),
            }),
        }
    }
}

pub fn card_row(id: &str, name: &str, card_type: &str, hp: u32, rarity: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": card_type,
        "hp": hp,
        "rarity": rarity,
        "image_url": null,
        "created_at": "2025-01-15T10:30:00.000000+00:00"
    })
}

/// Three cards in the order a `rarity.desc` query returns them.
pub fn sample_rows() -> Vec<Value> {
    vec![
        card_row("3", "Mewtwo", "Psychic", 130, "Ultra Rare"),
        card_row("1", "Pikachu", "Electric", 35, "Rare"),
        card_row("2", "Bulbasaur", "Grass", 45, "Common"),
    ]
}
