//! The application shell.
//!
//! [`App`] owns all UI state, loads the card catalog once on mount and
//! composes [`PokemonCard`]s into the market and collection views. It is the
//! only mutator of its state; the injected [`Backend`] is read from once.

use std::fmt;
use std::str::FromStr;

use crate::backend::Backend;
use crate::component::PokemonCard;
use crate::error::PokeTradeError;
use crate::models::{Card, CollectionEntry};
use crate::queries::CardQuery;
use crate::view::{self, CollectionContent, Main, Page};

/// Which listing the shell shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Market,
    Collection,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Market => "market",
            Tab::Collection => "collection",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = PokeTradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => Ok(Tab::Market),
            "collection" => Ok(Tab::Collection),
            other => Err(PokeTradeError::InvalidArgument(format!(
                "unknown tab '{}' (expected 'market' or 'collection')",
                other
            ))),
        }
    }
}

pub struct App<B: Backend> {
    backend: B,
    cards: Vec<Card>,
    // Nothing populates this yet; the view handles it as if something did.
    collection: Vec<CollectionEntry>,
    loading: bool,
    active_tab: Tab,
    mounted: bool,
}

impl<B: Backend> App<B> {
    /// Create an unmounted shell in its initial state: no cards, empty
    /// collection, loading, market tab.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cards: Vec::new(),
            collection: Vec::new(),
            loading: true,
            active_tab: Tab::Market,
            mounted: false,
        }
    }

    /// First render. Runs [`load_cards`](Self::load_cards) the first time
    /// only; later calls are no-ops.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load_cards();
    }

    /// Load the whole catalog, rarity descending.
    ///
    /// On failure the error is logged and `cards` is left untouched. The
    /// loading flag is cleared either way.
    pub fn load_cards(&mut self) {
        match CardQuery::new(&self.backend).all_by_rarity() {
            Ok(cards) => {
                tracing::debug!(count = cards.len(), "loaded cards");
                self.cards = cards;
            }
            Err(e) => tracing::error!(error = %e, "error loading cards"),
        }
        self.loading = false;
    }

    /// Placeholder for adding a card to the user's collection. Only logs.
    pub fn handle_add_to_collection(&self, card_id: &str) {
        tracing::info!(card_id, "adding card to collection");
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// The empty-state "Browse Market" button.
    pub fn browse_market(&mut self) {
        self.set_active_tab(Tab::Market);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn collection(&self) -> &[CollectionEntry] {
        &self.collection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One card per loaded catalog entry, each wired to
    /// [`handle_add_to_collection`](Self::handle_add_to_collection).
    pub fn market_cards(&self) -> Vec<PokemonCard<'_>> {
        self.cards
            .iter()
            .map(|card| {
                let id = card.id.as_str();
                PokemonCard::new(card).on_add(move || self.handle_add_to_collection(id))
            })
            .collect()
    }

    /// One card per collection entry that carries its embedded card.
    pub fn collection_cards(&self) -> Vec<PokemonCard<'_>> {
        self.collection
            .iter()
            .filter_map(|entry| {
                entry.card.as_ref().map(|card| {
                    PokemonCard::new(card)
                        .quantity(entry.quantity)
                        .for_trade(entry.for_trade)
                        .show_actions(false)
                })
            })
            .collect()
    }

    /// Describe the current screen.
    pub fn render(&self) -> Page {
        let main = if self.loading {
            Main::Loading
        } else {
            match self.active_tab {
                Tab::Market => Main::Market {
                    welcome: view::MARKET_WELCOME,
                    cards: self.market_cards().iter().map(PokemonCard::view).collect(),
                },
                Tab::Collection => {
                    let content = if self.collection.is_empty() {
                        CollectionContent::Empty(view::EMPTY_COLLECTION)
                    } else {
                        CollectionContent::Grid(
                            self.collection_cards()
                                .iter()
                                .map(PokemonCard::view)
                                .collect(),
                        )
                    };
                    Main::Collection {
                        welcome: view::COLLECTION_WELCOME,
                        content,
                    }
                }
            }
        };

        Page::new(self.collection.len(), self.active_tab, main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::query::Query;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    struct EmptyStore;

    impl Backend for EmptyStore {
        fn select(&self, _query: &Query) -> Result<Option<Vec<Value>>> {
            Ok(Some(Vec::new()))
        }
    }

    fn card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            type_field: "Water".to_string(),
            hp: std::num::NonZeroU32::new(50).unwrap(),
            rarity: "Uncommon".to_string(),
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn entry(id: &str, quantity: u32, for_trade: bool, card: Option<Card>) -> CollectionEntry {
        CollectionEntry {
            id: id.to_string(),
            user_id: "trainer-1".to_string(),
            card_id: card.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
            quantity,
            for_trade,
            created_at: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            card,
        }
    }

    fn mounted_on_collection(collection: Vec<CollectionEntry>) -> App<EmptyStore> {
        let mut app = App::new(EmptyStore);
        app.mount();
        app.collection = collection;
        app.set_active_tab(Tab::Collection);
        app
    }

    #[test]
    fn collection_grid_skips_entries_without_card() {
        let app = mounted_on_collection(vec![
            entry("e1", 2, true, Some(card("7", "Squirtle"))),
            entry("e2", 1, false, None),
            entry("e3", 0, false, Some(card("9", "Psyduck"))),
        ]);

        let page = app.render();
        let cards = match &page.main {
            Main::Collection {
                content: CollectionContent::Grid(cards),
                ..
            } => cards,
            other => panic!("expected collection grid, got {other:?}"),
        };

        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Squirtle", "Psyduck"]);

        let own: Vec<(u32, bool)> = cards
            .iter()
            .map(|c| {
                let o = c.ownership.expect("ownership passed through");
                (o.quantity, o.for_trade)
            })
            .collect();
        assert_eq!(own, vec![(2, true), (0, false)]);
        assert!(cards.iter().all(|c| !c.add_action));

        assert_eq!(page.header.collection_count, 3);
    }

    #[test]
    fn collection_cards_cannot_be_added() {
        let app = mounted_on_collection(vec![entry("e1", 1, false, Some(card("7", "Squirtle")))]);
        let cards = app.collection_cards();
        assert_eq!(cards.len(), 1);
        assert!(!cards[0].click_add());
    }

    #[test]
    fn entries_without_cards_still_avoid_empty_state() {
        let app = mounted_on_collection(vec![entry("e1", 1, false, None)]);
        match app.render().main {
            Main::Collection {
                content: CollectionContent::Grid(cards),
                ..
            } => assert!(cards.is_empty()),
            other => panic!("expected empty grid, got {other:?}"),
        }
    }
}
