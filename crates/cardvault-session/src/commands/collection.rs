//! # Collection Commands

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cardvault_core::snapshot::CardSummary;
use cardvault_core::{Card, CardId, InventorySnapshot, Money, Rarity, Variant};

use super::declined;
use crate::error::ApiError;
use crate::state::InventoryState;

/// A card as typed in by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    pub name: String,
    pub rarity: Rarity,
    pub variant: Variant,
    pub base_price: Money,
}

impl CardRequest {
    pub fn new(name: impl Into<String>, rarity: Rarity, variant: Variant, base_price: Money) -> Self {
        CardRequest {
            name: name.into(),
            rarity,
            variant,
            base_price,
        }
    }

    /// Builds the card through the valuation rules.
    pub fn to_card(&self) -> Result<Card, ApiError> {
        Ok(Card::new(self.name.as_str(), self.rarity, self.variant, self.base_price)?)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCardResponse {
    pub card: CardSummary,
    pub snapshot: InventorySnapshot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub proceeds: Money,
    pub snapshot: InventorySnapshot,
}

/// Adds `quantity` copies of a card to the Collection.
///
/// ## Behavior
/// - Identity already in the Collection: quantity increases
/// - New identity: appended with `quantity`
/// - Non-positive base price or blank name: `VALIDATION_ERROR`
pub fn add_card(
    state: &InventoryState,
    request: &CardRequest,
    quantity: i64,
) -> Result<AddCardResponse, ApiError> {
    debug!(name = %request.name, quantity, "add_card command");

    state.with_inventory_mut(|inv| {
        let id = inv.add_card_with_quantity(
            &request.name,
            request.rarity,
            request.variant,
            request.base_price,
            quantity,
        )?;
        let card = inv
            .card(id)
            .map(|c| CardSummary::new(id, c))
            .ok_or_else(|| ApiError::internal("Card vanished after insert"))?;

        Ok(AddCardResponse {
            card,
            snapshot: inv.snapshot(),
        })
    })
}

/// Adjusts a card's free quantity by `delta`.
pub fn adjust_card_count(
    state: &InventoryState,
    card_id: CardId,
    delta: i64,
) -> Result<InventorySnapshot, ApiError> {
    debug!(card = %card_id, delta, "adjust_card_count command");

    state.with_inventory_mut(|inv| {
        inv.adjust_card_count(card_id, delta)
            .map_err(|e| declined("adjust_card_count", e))?;
        Ok(inv.snapshot())
    })
}

/// Sells one free copy of a card.
pub fn sell_card(state: &InventoryState, card_id: CardId) -> Result<SaleResponse, ApiError> {
    debug!(card = %card_id, "sell_card command");

    state.with_inventory_mut(|inv| {
        let proceeds = inv
            .sell_card(card_id)
            .map_err(|e| declined("sell_card", e))?;
        info!(card = %card_id, %proceeds, balance = %inv.balance(), "Card sold");

        Ok(SaleResponse {
            proceeds,
            snapshot: inv.snapshot(),
        })
    })
}

/// Finds a Collection card by name, ignoring case.
pub fn find_card(state: &InventoryState, name: &str) -> Result<CardSummary, ApiError> {
    debug!(name, "find_card command");

    state.with_inventory(|inv| {
        inv.find_card(name)
            .and_then(|id| inv.card(id).map(|c| CardSummary::new(id, c)))
            .ok_or_else(|| ApiError::not_found("Card", name))
    })
}

/// Whether a free copy of the card exists to sell.
pub fn is_card_sellable(state: &InventoryState, card_id: CardId) -> bool {
    state.with_inventory(|inv| inv.is_card_sellable(card_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn rock() -> CardRequest {
        CardRequest::new("Rock", Rarity::Common, Variant::Normal, Money::from_cents(100))
    }

    #[test]
    fn test_add_card_returns_card_and_snapshot() {
        let state = InventoryState::new();
        let response = add_card(&state, &rock(), 3).unwrap();

        assert_eq!(response.card.name, "Rock");
        assert_eq!(response.snapshot.collection[0].quantity, 3);
    }

    #[test]
    fn test_add_card_validation_error() {
        let state = InventoryState::new();
        let mut request = rock();
        request.base_price = Money::zero();

        let err = add_card(&state, &request, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.with_inventory(|inv| !inv.has_cards()));
    }

    #[test]
    fn test_adjust_below_zero_is_declined() {
        let state = InventoryState::new();
        let id = add_card(&state, &rock(), 1).unwrap().card.id;

        let err = adjust_card_count(&state, id, -2).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientQuantity);

        let snapshot = adjust_card_count(&state, id, -1).unwrap();
        assert_eq!(snapshot.collection[0].quantity, 0);
    }

    #[test]
    fn test_sell_card_credits_ledger() {
        let state = InventoryState::new();
        let id = add_card(&state, &rock(), 1).unwrap().card.id;
        assert!(is_card_sellable(&state, id));

        let response = sell_card(&state, id).unwrap();
        assert_eq!(response.proceeds, Money::from_cents(100));
        assert_eq!(response.snapshot.balance, Money::from_cents(100));
        assert!(response.snapshot.collection.is_empty());

        assert_eq!(sell_card(&state, id).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_find_card() {
        let state = InventoryState::new();
        add_card(&state, &rock(), 1).unwrap();

        assert_eq!(find_card(&state, "ROCK").unwrap().name, "Rock");
        assert_eq!(find_card(&state, "Paper").unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_card_request_from_json() {
        let request: CardRequest = serde_json::from_str(
            r#"{"name":"Foo","rarity":"RARE","variant":"ALT_ART","basePrice":1000}"#,
        )
        .unwrap();
        assert_eq!(request.to_card().unwrap().value(), Money::from_cents(3000));
    }
}
