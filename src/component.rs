//! The card presentation component.
//!
//! [`PokemonCard`] turns one [`Card`] (plus optional ownership metadata) into a
//! [`CardView`]. It holds no state beyond its props and never touches the
//! backend. Unknown types and rarities fall back to default styling.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::Card;

pub const DEFAULT_TYPE_COLOR: &str = "bg-gray-400";
pub const DEFAULT_RARITY_COLOR: &str = "text-gray-600";

pub const ADD_LABEL: &str = "Add to Collection";
pub const FOR_TRADE_LABEL: &str = "For Trade";

// ---------------------------------------------------------------------------
// Color tables
// ---------------------------------------------------------------------------

/// Badge color per card type.
pub fn type_colors() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("Electric", "bg-yellow-400"),
            ("Fire", "bg-red-500"),
            ("Water", "bg-blue-500"),
            ("Grass", "bg-green-500"),
            ("Psychic", "bg-purple-500"),
        ])
    })
}

/// Text color per rarity.
pub fn rarity_colors() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("Common", "text-gray-600"),
            ("Uncommon", "text-green-600"),
            ("Rare", "text-blue-600"),
            ("Ultra Rare", "text-purple-600"),
        ])
    })
}

pub fn type_color(card_type: &str) -> &'static str {
    type_colors()
        .get(card_type)
        .copied()
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

pub fn rarity_color(rarity: &str) -> &'static str {
    rarity_colors()
        .get(rarity)
        .copied()
        .unwrap_or(DEFAULT_RARITY_COLOR)
}

// ---------------------------------------------------------------------------
// Rendered output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    Image { src: String, alt: String },
    /// No image reference on the card; a lightning-bolt icon stands in.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub quantity: u32,
    pub for_trade: bool,
}

/// Everything needed to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub card_id: String,
    pub name: String,
    pub hp: u32,
    pub type_label: String,
    pub type_color: &'static str,
    pub rarity_label: String,
    pub rarity_color: &'static str,
    pub artwork: Artwork,
    /// Set only when a quantity was passed in.
    pub ownership: Option<Ownership>,
    /// Whether the "Add to Collection" control is drawn.
    pub add_action: bool,
}

// ---------------------------------------------------------------------------
// PokemonCard
// ---------------------------------------------------------------------------

/// Props for a single rendered card.
///
/// Built with chained setters:
///
/// ```rust
/// # use poketrade::component::PokemonCard;
/// # use poketrade::models::Card;
/// # fn demo(card: &Card) {
/// let view = PokemonCard::new(card).quantity(2).for_trade(true).show_actions(false).view();
/// assert!(view.ownership.is_some());
/// # }
/// ```
pub struct PokemonCard<'a> {
    card: &'a Card,
    quantity: Option<u32>,
    for_trade: Option<bool>,
    on_add: Option<Box<dyn Fn() + 'a>>,
    show_actions: bool,
}

impl<'a> PokemonCard<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            quantity: None,
            for_trade: None,
            on_add: None,
            show_actions: true,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn for_trade(mut self, for_trade: bool) -> Self {
        self.for_trade = Some(for_trade);
        self
    }

    /// Callback fired by [`click_add`](Self::click_add).
    pub fn on_add<F: Fn() + 'a>(mut self, f: F) -> Self {
        self.on_add = Some(Box::new(f));
        self
    }

    /// Defaults to `true`.
    pub fn show_actions(mut self, show: bool) -> Self {
        self.show_actions = show;
        self
    }

    pub fn card(&self) -> &'a Card {
        self.card
    }

    fn has_add_action(&self) -> bool {
        self.show_actions && self.on_add.is_some()
    }

    pub fn view(&self) -> CardView {
        let card = self.card;
        let artwork = match &card.image_url {
            Some(src) => Artwork::Image {
                src: src.clone(),
                alt: card.name.clone(),
            },
            None => Artwork::Placeholder,
        };

        CardView {
            card_id: card.id.clone(),
            name: card.name.clone(),
            hp: card.hp.get(),
            type_label: card.type_field.clone(),
            type_color: type_color(&card.type_field),
            rarity_label: card.rarity.clone(),
            rarity_color: rarity_color(&card.rarity),
            artwork,
            ownership: self.quantity.map(|quantity| Ownership {
                quantity,
                for_trade: self.for_trade.unwrap_or(false),
            }),
            add_action: self.has_add_action(),
        }
    }

    /// Activate the add control.
    ///
    /// Returns `false` without doing anything when the control is not drawn.
    pub fn click_add(&self) -> bool {
        match &self.on_add {
            Some(f) if self.show_actions => {
                f();
                true
            }
            _ => false,
        }
    }
}
