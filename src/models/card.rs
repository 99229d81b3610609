use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card -- One catalog entry from the `pokemon_cards` table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    /// Category tag such as `"Electric"` or `"Fire"`. Unknown values are kept as-is.
    #[serde(rename = "type")]
    pub type_field: String,
    /// Hit points; a row with `0` fails to decode.
    pub hp: NonZeroU32,
    pub rarity: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
