//! # Binder and Deck Commands
//!
//! ## Container Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Container Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Create  │────►│  Filled  │────►│ Sold         │ cards consumed      │
//! │  │  (empty) │     │          │     │ (ledger +$)  │                     │
//! │  └──────────┘     └──────────┘     └──────────────┘                     │
//! │                    │    ▲                                               │
//! │     add_card_to_container   remove_card_from_container                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │               delete_container ─────► cards back to the Collection      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use cardvault_core::snapshot::ContainerSummary;
use cardvault_core::{BinderType, CardId, ContainerKey, DeckType, InventorySnapshot, Money, Namespace};

use super::collection::SaleResponse;
use super::declined;
use crate::error::ApiError;
use crate::state::InventoryState;

pub fn create_binder(
    state: &InventoryState,
    name: &str,
    binder_type: BinderType,
) -> Result<InventorySnapshot, ApiError> {
    debug!(name, %binder_type, "create_binder command");

    state.with_inventory_mut(|inv| {
        inv.create_binder(name, binder_type)
            .map_err(|e| declined("create_binder", e))?;
        Ok(inv.snapshot())
    })
}

pub fn create_deck(
    state: &InventoryState,
    name: &str,
    deck_type: DeckType,
) -> Result<InventorySnapshot, ApiError> {
    debug!(name, %deck_type, "create_deck command");

    state.with_inventory_mut(|inv| {
        inv.create_deck(name, deck_type)
            .map_err(|e| declined("create_deck", e))?;
        Ok(inv.snapshot())
    })
}

/// Gets one binder or deck with its cards and current price.
pub fn get_container(state: &InventoryState, key: &ContainerKey) -> Result<ContainerSummary, ApiError> {
    debug!(container = %key, "get_container command");

    state.with_inventory(|inv| {
        inv.container(key)
            .map(|c| inv.summarize(c))
            .ok_or_else(|| ApiError::not_found(&key.namespace.to_string(), &key.name))
    })
}

/// Moves one free copy of a card into a binder or deck.
pub fn add_card_to_container(
    state: &InventoryState,
    key: &ContainerKey,
    card_id: CardId,
) -> Result<InventorySnapshot, ApiError> {
    debug!(container = %key, card = %card_id, "add_card_to_container command");

    state.with_inventory_mut(|inv| {
        inv.add_card_to_container(key, card_id)
            .map_err(|e| declined("add_card_to_container", e))?;
        Ok(inv.snapshot())
    })
}

/// Moves one copy of a card back to the Collection.
pub fn remove_card_from_container(
    state: &InventoryState,
    key: &ContainerKey,
    card_id: CardId,
) -> Result<InventorySnapshot, ApiError> {
    debug!(container = %key, card = %card_id, "remove_card_from_container command");

    state.with_inventory_mut(|inv| {
        inv.remove_card_from_container(key, card_id)
            .map_err(|e| declined("remove_card_from_container", e))?;
        Ok(inv.snapshot())
    })
}

/// Deletes a binder or deck, returning its cards to the Collection.
pub fn delete_container(
    state: &InventoryState,
    key: &ContainerKey,
) -> Result<InventorySnapshot, ApiError> {
    debug!(container = %key, "delete_container command");

    state.with_inventory_mut(|inv| {
        let returned = inv
            .delete_container(key)
            .map_err(|e| declined("delete_container", e))?;
        info!(container = %key, returned, "Container deleted");
        Ok(inv.snapshot())
    })
}

/// Sets the asking price of a luxury binder.
pub fn set_custom_price(
    state: &InventoryState,
    binder: &str,
    price: Money,
) -> Result<InventorySnapshot, ApiError> {
    debug!(binder, %price, "set_custom_price command");

    state.with_inventory_mut(|inv| {
        inv.set_custom_price(binder, price)
            .map_err(|e| declined("set_custom_price", e))?;
        Ok(inv.snapshot())
    })
}

/// What a binder or deck would sell for now.
pub fn quote_container(state: &InventoryState, key: &ContainerKey) -> Result<Money, ApiError> {
    debug!(container = %key, "quote_container command");

    state.with_inventory(|inv| {
        inv.quote_container(key)
            .map_err(|e| declined("quote_container", e))
    })
}

/// Whether the container can be offered for sale right now.
///
/// Binders answer by type alone; decks also need at least one card.
pub fn is_container_sellable(state: &InventoryState, key: &ContainerKey) -> bool {
    state.with_inventory(|inv| match key.namespace {
        Namespace::Binder => inv.is_binder_sellable(&key.name),
        Namespace::Deck => inv.is_deck_sellable(&key.name),
    })
}

/// Whether a deck already holds this card identity.
pub fn is_deck_card_dupe(state: &InventoryState, deck: &str, card_id: CardId) -> bool {
    state.with_inventory(|inv| inv.is_deck_card_dupe(deck, card_id))
}

/// Sells a whole binder or deck.
pub fn sell_container(state: &InventoryState, key: &ContainerKey) -> Result<SaleResponse, ApiError> {
    debug!(container = %key, "sell_container command");

    state.with_inventory_mut(|inv| {
        let proceeds = inv
            .sell_container(key)
            .map_err(|e| declined("sell_container", e))?;
        info!(container = %key, %proceeds, balance = %inv.balance(), "Container sold");

        Ok(SaleResponse {
            proceeds,
            snapshot: inv.snapshot(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::collection::{add_card, CardRequest};
    use crate::error::ErrorCode;
    use cardvault_core::{Rarity, Variant};

    fn add(state: &InventoryState, name: &str, rarity: Rarity, variant: Variant, cents: i64) -> CardId {
        let request = CardRequest::new(name, rarity, variant, Money::from_cents(cents));
        add_card(state, &request, 1).unwrap().card.id
    }

    #[test]
    fn test_create_and_fill_binder() {
        let state = InventoryState::new();
        let rock = add(&state, "Rock", Rarity::Common, Variant::Normal, 100);

        create_binder(&state, "Commons", BinderType::Pauper).unwrap();
        let key = ContainerKey::binder("Commons");
        let snapshot = add_card_to_container(&state, &key, rock).unwrap();

        assert_eq!(snapshot.binders[0].cards.len(), 1);
        assert_eq!(snapshot.collection[0].quantity, 0);
        assert_eq!(get_container(&state, &key).unwrap().card_sum, Money::from_cents(100));
    }

    #[test]
    fn test_duplicate_name_and_missing_container() {
        let state = InventoryState::new();
        create_deck(&state, "Main", DeckType::Normal).unwrap();

        let err = create_deck(&state, "Main", DeckType::Sellable).unwrap_err();
        assert_eq!(err.code, ErrorCode::NameTaken);

        let err = get_container(&state, &ContainerKey::binder("Main")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_rejected_card_code() {
        let state = InventoryState::new();
        let dragon = add(&state, "Dragon", Rarity::Rare, Variant::Normal, 500);
        create_binder(&state, "Commons", BinderType::Pauper).unwrap();

        let err = add_card_to_container(&state, &ContainerKey::binder("Commons"), dragon).unwrap_err();
        assert_eq!(err.code, ErrorCode::CardRejected);
        assert!(err.message.contains("Dragon"));
    }

    #[test]
    fn test_deck_duplicate_code() {
        let state = InventoryState::new();
        let request = CardRequest::new("Rock", Rarity::Common, Variant::Normal, Money::from_cents(100));
        let rock = add_card(&state, &request, 2).unwrap().card.id;
        create_deck(&state, "Main", DeckType::Normal).unwrap();
        let key = ContainerKey::deck("Main");

        add_card_to_container(&state, &key, rock).unwrap();
        assert!(is_deck_card_dupe(&state, "Main", rock));
        let err = add_card_to_container(&state, &key, rock).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateCard);
    }

    #[test]
    fn test_remove_and_delete() {
        let state = InventoryState::new();
        let rock = add(&state, "Rock", Rarity::Common, Variant::Normal, 100);
        create_binder(&state, "B", BinderType::Basic).unwrap();
        let key = ContainerKey::binder("B");
        add_card_to_container(&state, &key, rock).unwrap();

        let snapshot = remove_card_from_container(&state, &key, rock).unwrap();
        assert_eq!(snapshot.collection[0].quantity, 1);

        add_card_to_container(&state, &key, rock).unwrap();
        let snapshot = delete_container(&state, &key).unwrap();
        assert!(snapshot.binders.is_empty());
        assert_eq!(snapshot.collection[0].quantity, 1);
    }

    #[test]
    fn test_luxury_sale() {
        let state = InventoryState::new();
        let foo = add(&state, "Foo", Rarity::Rare, Variant::AltArt, 1000);
        create_binder(&state, "Showcase", BinderType::Luxury).unwrap();
        let key = ContainerKey::binder("Showcase");
        add_card_to_container(&state, &key, foo).unwrap();

        let err = set_custom_price(&state, "Showcase", Money::from_cents(2000)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);

        set_custom_price(&state, "Showcase", Money::from_cents(4000)).unwrap();
        assert_eq!(quote_container(&state, &key), Ok(Money::from_cents(4400)));
        assert!(is_container_sellable(&state, &key));

        let sale = sell_container(&state, &key).unwrap();
        assert_eq!(sale.proceeds, Money::from_cents(4400));
        assert!(sale.snapshot.binders.is_empty());
    }

    #[test]
    fn test_unsellable_container() {
        let state = InventoryState::new();
        create_deck(&state, "Main", DeckType::Sellable).unwrap();
        let key = ContainerKey::deck("Main");

        assert!(!is_container_sellable(&state, &key));
        let err = sell_container(&state, &key).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotSellable);
    }
}
