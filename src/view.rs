//! Screen description produced by [`App::render`](crate::app::App::render).
//!
//! A [`Page`] is plain data: page chrome, the two navigation tabs and exactly
//! one main view. The [`html`](crate::html) module turns it into markup.

use crate::app::Tab;
use crate::component::CardView;

pub const BRAND: &str = "PokéTrade";
pub const TAGLINE: &str = "Gotta Trade 'Em All!";
pub const TRADING_BADGE: &str = "Trading";
pub const LOADING_TEXT: &str = "Loading cards...";
pub const FOOTER_TEXT: &str = "Trade Pokemon cards with trainers around the world";

/// A titled block of static copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
    /// Tab the button switches to.
    pub button_target: Tab,
}

pub const MARKET_WELCOME: Panel = Panel {
    title: "Welcome to the Card Market!",
    body: "Browse and collect amazing Pokemon cards. Build your collection and trade with others!",
};

pub const COLLECTION_WELCOME: Panel = Panel {
    title: "My Collection",
    body: "View and manage your Pokemon card collection.",
};

pub const EMPTY_COLLECTION: EmptyState = EmptyState {
    title: "Your collection is empty",
    body: "Start collecting cards from the market!",
    button_label: "Browse Market",
    button_target: Tab::Market,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub collection_count: usize,
    pub trading_badge: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionContent {
    Empty(EmptyState),
    Grid(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Main {
    /// Shown alone while the catalog is loading.
    Loading,
    Market {
        welcome: Panel,
        cards: Vec<CardView>,
    },
    Collection {
        welcome: Panel,
        content: CollectionContent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub header: Header,
    pub nav: [NavTab; 2],
    pub main: Main,
    pub footer: &'static str,
}

impl Page {
    pub fn new(collection_count: usize, active_tab: Tab, main: Main) -> Self {
        Self {
            header: Header {
                brand: BRAND,
                tagline: TAGLINE,
                collection_count,
                trading_badge: TRADING_BADGE,
            },
            nav: [
                NavTab {
                    tab: Tab::Market,
                    label: "Card Market",
                    active: active_tab == Tab::Market,
                },
                NavTab {
                    tab: Tab::Collection,
                    label: "My Collection",
                    active: active_tab == Tab::Collection,
                },
            ],
            main,
            footer: FOOTER_TEXT,
        }
    }

    /// The card grid currently on screen, if any.
    pub fn cards(&self) -> &[CardView] {
        match &self.main {
            Main::Market { cards, .. } => cards.as_slice(),
            Main::Collection {
                content: CollectionContent::Grid(cards),
                ..
            } => cards.as_slice(),
            _ => &[],
        }
    }
}
