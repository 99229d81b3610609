//! Deserialization of backend rows into the record models.

use chrono::{Datelike, TimeZone, Utc};
use poketrade::models::{Card, CollectionEntry, TradeRequest, TradeStatus};
use serde_json::json;

#[test]
fn card_reads_type_field_and_null_image() {
    let card: Card = serde_json::from_value(json!({
        "id": "1",
        "name": "Pikachu",
        "type": "Electric",
        "hp": 35,
        "rarity": "Rare",
        "image_url": null,
        "created_at": "2025-01-15T10:30:00+00:00"
    }))
    .unwrap();

    assert_eq!(card.type_field, "Electric");
    assert_eq!(card.hp.get(), 35);
    assert!(card.image_url.is_none());
    assert_eq!(card.created_at.year(), 2025);
}

#[test]
fn card_accepts_fractional_timestamps() {
    let card: Card = serde_json::from_value(json!({
        "id": "7",
        "name": "Squirtle",
        "type": "Water",
        "hp": 44,
        "rarity": "Common",
        "image_url": "https://img.example/squirtle.png",
        "created_at": "2025-01-15T10:30:00.123456+00:00"
    }))
    .unwrap();

    assert_eq!(card.image_url.as_deref(), Some("https://img.example/squirtle.png"));
    assert_eq!(
        card.created_at.date_naive(),
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap().date_naive()
    );
}

#[test]
fn card_rejects_negative_hp() {
    let result = serde_json::from_value::<Card>(json!({
        "id": "1",
        "name": "Broken",
        "type": "Fire",
        "hp": -5,
        "rarity": "Common",
        "image_url": null,
        "created_at": "2025-01-15T10:30:00+00:00"
    }));
    assert!(result.is_err());
}

#[test]
fn card_rejects_zero_hp() {
    let result = serde_json::from_value::<Card>(json!({
        "id": "1",
        "name": "Fainted",
        "type": "Water",
        "hp": 0,
        "rarity": "Common",
        "image_url": null,
        "created_at": "2025-01-15T10:30:00+00:00"
    }));
    assert!(result.is_err());
}

#[test]
fn collection_entry_embedded_card_is_optional() {
    let bare: CollectionEntry = serde_json::from_value(json!({
        "id": "c1",
        "user_id": "u1",
        "card_id": "1",
        "quantity": 0,
        "for_trade": false,
        "created_at": "2025-02-01T00:00:00+00:00"
    }))
    .unwrap();
    assert!(bare.card.is_none());
    assert_eq!(bare.quantity, 0);

    let joined: CollectionEntry = serde_json::from_value(json!({
        "id": "c2",
        "user_id": "u1",
        "card_id": "1",
        "quantity": 3,
        "for_trade": true,
        "created_at": "2025-02-01T00:00:00+00:00",
        "pokemon_cards": {
            "id": "1",
            "name": "Pikachu",
            "type": "Electric",
            "hp": 35,
            "rarity": "Rare",
            "image_url": null,
            "created_at": "2025-01-15T10:30:00+00:00"
        }
    }))
    .unwrap();
    assert_eq!(joined.card.as_ref().map(|c| c.name.as_str()), Some("Pikachu"));
    assert!(joined.for_trade);
}

#[test]
fn collection_entry_omits_missing_card_when_serialized() {
    let entry: CollectionEntry = serde_json::from_value(json!({
        "id": "c1",
        "user_id": "u1",
        "card_id": "1",
        "quantity": 1,
        "for_trade": false,
        "created_at": "2025-02-01T00:00:00+00:00"
    }))
    .unwrap();
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("pokemon_cards").is_none());
}

#[test]
fn trade_status_uses_lowercase_names() {
    let trade: TradeRequest = serde_json::from_value(json!({
        "id": "t1",
        "from_user_id": "u1",
        "to_user_id": "u2",
        "offered_card_id": "1",
        "requested_card_id": "2",
        "status": "cancelled",
        "created_at": "2025-03-01T12:00:00+00:00",
        "updated_at": "2025-03-02T12:00:00+00:00"
    }))
    .unwrap();
    assert_eq!(trade.status, TradeStatus::Cancelled);
    assert_eq!(serde_json::to_value(TradeStatus::Pending).unwrap(), "pending");
    assert!(serde_json::from_value::<TradeStatus>(json!("expired")).is_err());
}
