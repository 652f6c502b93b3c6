//! # Snapshots
//!
//! Read-only views of the inventory for the presentation layer to render
//! after each operation. They are plain serializable data and carry no
//! behaviour; nothing read from a snapshot can change the inventory.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::card::{Card, CardId};
use crate::money::Money;
use crate::types::{ContainerKind, Rarity, Variant};

/// A card as shown in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: CardId,
    pub name: String,
    pub rarity: Rarity,
    pub variant: Variant,
    pub value: Money,
}

impl CardSummary {
    pub fn new(id: CardId, card: &Card) -> Self {
        CardSummary {
            id,
            name: card.name().to_string(),
            rarity: card.rarity(),
            variant: card.variant(),
            value: card.value(),
        }
    }
}

/// A Collection row: the card plus its free quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
    pub card: CardSummary,
    pub quantity: i64,
}

/// A binder or deck with its cards and current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    pub name: String,
    pub kind: ContainerKind,
    pub capacity: usize,
    pub sellable: bool,
    pub cards: Vec<CardSummary>,
    pub card_sum: Money,
    /// `None` for types that cannot be sold.
    pub price: Option<Money>,
    pub custom_price: Option<Money>,
}

/// Everything the presentation layer needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub collector_name: String,
    pub collection: Vec<CollectionRow>,
    pub binders: Vec<ContainerSummary>,
    pub decks: Vec<ContainerSummary>,
    pub balance: Money,
}

impl InventorySnapshot {
    /// Serializes to pretty JSON for logs or a web front end.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
