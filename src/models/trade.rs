use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TradeRequest -- Proposed exchange between two users
// ---------------------------------------------------------------------------
//
// Mirrors the `trades` table. Nothing in the client constructs or queries
// trades yet.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub offered_card_id: String,
    pub requested_card_id: String,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
