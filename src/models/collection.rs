use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::card::Card;

// ---------------------------------------------------------------------------
// CollectionEntry -- Ownership link between a user and a card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: String,
    pub user_id: String,
    pub card_id: String,
    pub quantity: u32,
    pub for_trade: bool,
    pub created_at: DateTime<Utc>,
    /// Embedded card row, present when the query joins `pokemon_cards(*)`.
    #[serde(
        rename = "pokemon_cards",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card: Option<Card>,
}
