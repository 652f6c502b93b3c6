//! # Inventory
//!
//! The orchestrator: the only thing that mutates the Collection, the
//! binders and decks, and the money ledger.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Presentation layer          Inventory                 State change     │
//! │  ──────────────────          ─────────                 ────────────     │
//! │                                                                         │
//! │  "Add card" ───────────────► add_card_to_collection ─► qty +1 / new row │
//! │                                                                         │
//! │  "Put in binder" ──────────► add_card_to_container ──► qty -1, push id  │
//! │                                                                         │
//! │  "Take out" ───────────────► remove_card_from_container ► qty +1        │
//! │                                                                         │
//! │  "Trade" ──────────────────► execute_trade ──────────► swap ids, slot   │
//! │                                                                         │
//! │  "Sell" ───────────────────► sell_card / sell_container ► ledger +price │
//! │                                                                         │
//! │  Every operation checks everything first and only then mutates, so a   │
//! │  declined call leaves all state exactly as it was.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use cardvault_core::container::ContainerKey;
//! use cardvault_core::inventory::Inventory;
//! use cardvault_core::money::Money;
//! use cardvault_core::types::{BinderType, Rarity, Variant};
//!
//! let mut inventory = Inventory::new();
//! let rock = inventory
//!     .add_card_to_collection("Rock", Rarity::Common, Variant::Normal, Money::from_cents(100))
//!     .unwrap();
//!
//! let b1 = inventory.create_binder("B1", BinderType::Pauper).unwrap();
//! inventory.add_card_to_container(&b1, rock).unwrap();
//! assert_eq!(inventory.quantity_of(rock), Some(0));
//!
//! assert_eq!(inventory.sell_container(&b1).unwrap(), Money::from_cents(100));
//! assert_eq!(inventory.balance(), Money::from_cents(100));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::card::{Card, CardId, CardRegistry};
use crate::collection::{Collection, CollectionEntry};
use crate::config::InventoryConfig;
use crate::container::{Container, ContainerKey};
use crate::error::{CoreResult, Declined, Outcome, ValidationError};
use crate::money::Money;
use crate::snapshot::{CardSummary, CollectionRow, ContainerSummary, InventorySnapshot};
use crate::types::{BinderType, ContainerKind, DeckType, Namespace, Rarity, Variant};
use crate::validation::{validate_container_name, validate_quantity};

/// What a proposed trade is worth to each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TradeQuote {
    pub outgoing_value: Money,
    pub incoming_value: Money,
    /// `incoming - outgoing`; negative when giving away more than received.
    pub difference: Money,
    /// The absolute difference reached the configured warning threshold.
    pub requires_confirmation: bool,
}

/// The collector's whole inventory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    config: InventoryConfig,
    registry: CardRegistry,
    collection: Collection,
    binders: Vec<Container>,
    decks: Vec<Container>,
    balance: Money,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Inventory {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    // =========================================================================
    // Queries: cards
    // =========================================================================

    /// The money ledger.
    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Looks up any card the session has seen, in the Collection or not.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.registry.get(id)
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn has_cards(&self) -> bool {
        !self.collection.is_empty()
    }

    /// Number of Collection entries (distinct identities, slots included).
    pub fn card_count(&self) -> usize {
        self.collection.len()
    }

    /// The Collection entry at `index`, in insertion order.
    pub fn card_at(&self, index: usize) -> Option<CardId> {
        self.collection.get(index).map(|e| e.card)
    }

    /// First Collection entry whose name matches, ignoring case.
    pub fn find_card(&self, name: &str) -> Option<CardId> {
        self.collection
            .entries()
            .iter()
            .map(|e| e.card)
            .find(|id| self.registry.get(*id).map_or(false, |c| c.has_name(name)))
    }

    /// The free quantity of a card, `None` if it has no Collection entry.
    pub fn quantity_of(&self, id: CardId) -> Option<i64> {
        self.collection.quantity(id)
    }

    /// A card can be sold on its own when a free copy exists.
    pub fn is_card_sellable(&self, id: CardId) -> bool {
        self.quantity_of(id).map_or(false, |q| q > 0)
    }

    // =========================================================================
    // Queries: containers
    // =========================================================================

    fn namespace(&self, namespace: Namespace) -> &Vec<Container> {
        match namespace {
            Namespace::Binder => &self.binders,
            Namespace::Deck => &self.decks,
        }
    }

    fn namespace_mut(&mut self, namespace: Namespace) -> &mut Vec<Container> {
        match namespace {
            Namespace::Binder => &mut self.binders,
            Namespace::Deck => &mut self.decks,
        }
    }

    fn position(&self, key: &ContainerKey) -> Outcome<usize> {
        let name = key.name.trim();
        self.namespace(key.namespace)
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| Declined::ContainerNotFound {
                namespace: key.namespace.to_string(),
                name: key.name.clone(),
            })
    }

    pub fn container(&self, key: &ContainerKey) -> Option<&Container> {
        let index = self.position(key).ok()?;
        self.namespace(key.namespace).get(index)
    }

    pub fn binder(&self, name: &str) -> Option<&Container> {
        self.container(&ContainerKey::binder(name))
    }

    pub fn deck(&self, name: &str) -> Option<&Container> {
        self.container(&ContainerKey::deck(name))
    }

    /// The binder at `index`, in creation order.
    pub fn binder_at(&self, index: usize) -> Option<&Container> {
        self.binders.get(index)
    }

    /// The deck at `index`, in creation order.
    pub fn deck_at(&self, index: usize) -> Option<&Container> {
        self.decks.get(index)
    }

    pub fn binders(&self) -> &[Container] {
        &self.binders
    }

    pub fn decks(&self) -> &[Container] {
        &self.decks
    }

    pub fn binder_names(&self) -> Vec<&str> {
        self.binders.iter().map(Container::name).collect()
    }

    pub fn deck_names(&self) -> Vec<&str> {
        self.decks.iter().map(Container::name).collect()
    }

    pub fn binder_count(&self) -> usize {
        self.binders.len()
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn has_binders(&self) -> bool {
        !self.binders.is_empty()
    }

    pub fn has_decks(&self) -> bool {
        !self.decks.is_empty()
    }

    /// Binder sellability depends on its type alone.
    pub fn is_binder_sellable(&self, name: &str) -> bool {
        self.binder(name).map_or(false, Container::is_sellable)
    }

    /// A deck can be offered for sale when its type allows it and it holds
    /// at least one card.
    pub fn is_deck_sellable(&self, name: &str) -> bool {
        self.deck(name)
            .map_or(false, |d| d.is_sellable() && !d.is_empty())
    }

    pub fn is_container_empty(&self, key: &ContainerKey) -> Option<bool> {
        self.container(key).map(Container::is_empty)
    }

    /// Whether `deck` already holds the identity `id`.
    pub fn is_deck_card_dupe(&self, deck: &str, id: CardId) -> bool {
        self.deck(deck).map_or(false, |d| d.contains(id))
    }

    /// Sum of the stored values of every card in the container.
    pub fn card_sum(&self, container: &Container) -> Money {
        container
            .cards()
            .iter()
            .filter_map(|id| self.registry.get(*id))
            .map(Card::value)
            .sum()
    }

    fn price_of(&self, container: &Container) -> Option<Money> {
        container
            .policy()
            .price(self.card_sum(container), container.custom_price())
    }

    /// What the container would sell for right now.
    pub fn quote_container(&self, key: &ContainerKey) -> Outcome<Money> {
        let index = self.position(key)?;
        let container = &self.namespace(key.namespace)[index];

        self.price_of(container).ok_or_else(|| Declined::NotSellable {
            container: container.name().to_string(),
            kind: container.kind().to_string(),
        })
    }

    /// Compares an outgoing card with a proposed incoming one.
    pub fn quote_trade(&self, outgoing: CardId, incoming: &Card) -> Outcome<TradeQuote> {
        let outgoing_value = self.known_card(outgoing)?.value();
        let incoming_value = incoming.value();
        let difference = incoming_value - outgoing_value;

        Ok(TradeQuote {
            outgoing_value,
            incoming_value,
            difference,
            requires_confirmation: difference.abs() >= self.config.trade_warning_threshold,
        })
    }

    fn referenced_by_any_container(&self, id: CardId) -> bool {
        self.binders
            .iter()
            .chain(self.decks.iter())
            .any(|c| c.contains(id))
    }

    fn known_card(&self, id: CardId) -> Outcome<&Card> {
        self.registry
            .get(id)
            .ok_or_else(|| Declined::CardNotFound(id.to_string()))
    }

    /// The ledger after crediting `amount`, declining if it would overflow.
    fn credited_balance(&self, amount: Money) -> Outcome<Money> {
        self.balance.checked_add(amount).ok_or_else(|| {
            Declined::Invalid(ValidationError::OutOfRange {
                field: "balance".to_string(),
                min: i64::MIN,
                max: i64::MAX,
            })
        })
    }

    /// The free quantity of `id`, declining if it has no entry.
    fn entry_quantity(&self, id: CardId) -> Outcome<i64> {
        let card = self.known_card(id)?;
        self.collection
            .quantity(id)
            .ok_or_else(|| Declined::CardNotFound(card.name().to_string()))
    }

    // =========================================================================
    // Commands: collection
    // =========================================================================

    /// Adds one copy of a card to the Collection.
    ///
    /// The card is built through the valuation policy; an identity-equal
    /// entry gets its quantity raised by one, otherwise a new entry with
    /// quantity 1 is appended.
    pub fn add_card_to_collection(
        &mut self,
        name: &str,
        rarity: Rarity,
        variant: Variant,
        base_price: Money,
    ) -> CoreResult<CardId> {
        self.add_card_with_quantity(name, rarity, variant, base_price, 1)
    }

    /// Adds `quantity` copies of a card to the Collection.
    ///
    /// `quantity` may be 0, which only makes the identity known.
    pub fn add_card_with_quantity(
        &mut self,
        name: &str,
        rarity: Rarity,
        variant: Variant,
        base_price: Money,
        quantity: i64,
    ) -> CoreResult<CardId> {
        validate_quantity(quantity)?;
        let card = Card::new(name, rarity, variant, base_price)?;
        if let Some(known) = self.registry.find(&card) {
            if !self.collection.can_credit(known, quantity) {
                return Err(quantity_overflow().into());
            }
        }

        let value = card.value();
        let id = self.registry.intern(card);
        self.collection.credit(id, quantity);

        debug!(card = %id, name = %name, value = %value, quantity, "Added card to collection");
        Ok(id)
    }

    /// Adjusts the free quantity of a card by `delta`.
    ///
    /// Declines if the result would be negative. Returns the new quantity.
    /// An entry adjusted down to zero stays in the Collection as a slot.
    pub fn adjust_card_count(&mut self, id: CardId, delta: i64) -> Outcome<i64> {
        let available = self.entry_quantity(id)?;
        let updated = available.checked_add(delta).ok_or_else(quantity_overflow)?;

        if updated < 0 {
            return Err(Declined::NegativeCount {
                card: self.known_card(id)?.name().to_string(),
                available,
                delta,
            });
        }

        self.collection.set_quantity(id, updated);
        debug!(card = %id, delta, quantity = updated, "Adjusted card count");
        Ok(updated)
    }

    /// Sells one free copy of a card.
    ///
    /// The ledger is credited with the card's stored value. When the last
    /// free copy goes, the Collection entry goes with it.
    pub fn sell_card(&mut self, id: CardId) -> Outcome<Money> {
        let available = self.entry_quantity(id)?;
        let card = self.known_card(id)?;
        if available <= 0 {
            return Err(Declined::InsufficientQuantity {
                card: card.name().to_string(),
            });
        }

        let value = card.value();
        self.balance = self.credited_balance(value)?;
        if available == 1 {
            self.collection.remove(id);
        } else {
            self.collection.set_quantity(id, available - 1);
        }

        debug!(card = %id, value = %value, balance = %self.balance, "Sold card");
        Ok(value)
    }

    // =========================================================================
    // Commands: containers
    // =========================================================================

    fn create(&mut self, name: &str, kind: ContainerKind) -> Outcome<ContainerKey> {
        validate_container_name(name)?;
        let name = name.trim();
        let namespace = kind.namespace();

        if self.namespace(namespace).iter().any(|c| c.name() == name) {
            return Err(Declined::NameTaken {
                namespace: namespace.to_string(),
                name: name.to_string(),
            });
        }

        let container = Container::new(name, kind);
        let key = container.key();
        self.namespace_mut(namespace).push(container);

        debug!(container = %key, kind = %kind, "Created container");
        Ok(key)
    }

    /// Creates an empty binder. Declines if the name is taken.
    pub fn create_binder(&mut self, name: &str, binder_type: BinderType) -> Outcome<ContainerKey> {
        self.create(name, ContainerKind::Binder(binder_type))
    }

    /// Creates an empty deck. Declines if the name is taken.
    pub fn create_deck(&mut self, name: &str, deck_type: DeckType) -> Outcome<ContainerKey> {
        self.create(name, ContainerKind::Deck(deck_type))
    }

    /// Moves one free copy of a card from the Collection into a container.
    ///
    /// ## Declines when
    /// - the container does not exist
    /// - the Collection has no free copy
    /// - the container's type rejects the card, it is full, or (decks) it
    ///   already holds this identity
    pub fn add_card_to_container(&mut self, key: &ContainerKey, id: CardId) -> Outcome<()> {
        let index = self.position(key)?;
        let available = self.entry_quantity(id)?;
        let card = self.known_card(id)?.clone();

        if available <= 0 {
            return Err(Declined::InsufficientQuantity {
                card: card.name().to_string(),
            });
        }

        self.namespace_mut(key.namespace)[index].add(id, &card)?;
        self.collection.set_quantity(id, available - 1);

        debug!(card = %id, container = %key, "Moved card into container");
        Ok(())
    }

    /// Moves one copy of a card out of a container and back into the
    /// Collection, recreating its Collection entry if needed.
    pub fn remove_card_from_container(&mut self, key: &ContainerKey, id: CardId) -> Outcome<()> {
        let index = self.position(key)?;
        let card_name = self.known_card(id)?.name().to_string();
        if !self.collection.can_credit(id, 1) {
            return Err(quantity_overflow().into());
        }
        let container = &mut self.namespace_mut(key.namespace)[index];

        if !container.remove(id) {
            return Err(Declined::NotInContainer {
                card: card_name,
                container: container.name().to_string(),
            });
        }
        self.collection.credit(id, 1);

        debug!(card = %id, container = %key, "Returned card to collection");
        Ok(())
    }

    /// Deletes a container, returning every card it held to the Collection.
    ///
    /// Returns how many cards went back.
    pub fn delete_container(&mut self, key: &ContainerKey) -> Outcome<usize> {
        let index = self.position(key)?;
        let container = &self.namespace(key.namespace)[index];
        let fits = container
            .cards()
            .iter()
            .all(|id| self.collection.can_credit(*id, container.count_of(*id) as i64));
        if !fits {
            return Err(quantity_overflow().into());
        }

        let mut container = self.namespace_mut(key.namespace).remove(index);

        let returned = container.drain();
        for id in &returned {
            self.collection.credit(*id, 1);
        }

        debug!(container = %key, returned = returned.len(), "Deleted container");
        Ok(returned.len())
    }

    pub fn delete_binder(&mut self, name: &str) -> Outcome<usize> {
        self.delete_container(&ContainerKey::binder(name))
    }

    pub fn delete_deck(&mut self, name: &str) -> Outcome<usize> {
        self.delete_container(&ContainerKey::deck(name))
    }

    /// Sets the collector's asking price on a luxury binder.
    ///
    /// Declines if the price is below the current value of the cards in the
    /// binder; the previous custom price (if any) is kept.
    pub fn set_custom_price(&mut self, binder: &str, price: Money) -> Outcome<()> {
        let key = ContainerKey::binder(binder);
        let index = self.position(&key)?;
        let container = &self.binders[index];

        if container.kind() != ContainerKind::Binder(BinderType::Luxury) {
            return Err(Declined::NotLuxury {
                container: container.name().to_string(),
            });
        }

        let minimum = self.card_sum(container);
        if price < minimum {
            return Err(Declined::PriceBelowCardValue {
                container: container.name().to_string(),
                proposed: price.to_string(),
                minimum: minimum.to_string(),
            });
        }

        self.binders[index].set_custom_price(price);
        debug!(container = %key, price = %price, "Set custom price");
        Ok(())
    }

    /// Sells a whole binder or deck.
    ///
    /// The ledger is credited with the type's price and the container is
    /// removed. The cards are consumed by the sale: the Collection is left
    /// exactly as it was.
    ///
    /// ## Declines when
    /// - the type is not sellable
    /// - a deck is empty
    /// - the computed price is zero
    pub fn sell_container(&mut self, key: &ContainerKey) -> Outcome<Money> {
        let index = self.position(key)?;
        let container = &self.namespace(key.namespace)[index];

        let price = self.price_of(container).ok_or_else(|| Declined::NotSellable {
            container: container.name().to_string(),
            kind: container.kind().to_string(),
        })?;

        if key.namespace == Namespace::Deck && container.is_empty() {
            return Err(Declined::EmptyContainer {
                container: container.name().to_string(),
            });
        }

        if !price.is_positive() {
            return Err(Declined::NonPositivePrice {
                container: container.name().to_string(),
                price: price.to_string(),
            });
        }

        self.balance = self.credited_balance(price)?;
        self.namespace_mut(key.namespace).remove(index);

        debug!(container = %key, price = %price, balance = %self.balance, "Sold container");
        Ok(price)
    }

    pub fn sell_binder(&mut self, name: &str) -> Outcome<Money> {
        self.sell_container(&ContainerKey::binder(name))
    }

    pub fn sell_deck(&mut self, name: &str) -> Outcome<Money> {
        self.sell_container(&ContainerKey::deck(name))
    }

    /// Swaps `outgoing` in a binder for a card received from someone else.
    ///
    /// ## Steps
    /// 1. `incoming` becomes known: a zero-quantity Collection slot is
    ///    created unless the identity already has an entry
    /// 2. `incoming` takes the place of one copy of `outgoing` in the
    ///    binder, without needing a free copy in the Collection
    /// 3. `outgoing`'s Collection entry is dropped when it has no free copy
    ///    left and no binder or deck still holds it. A free copy counts as a
    ///    remaining copy, so an entry with quantity above zero always stays
    ///
    /// Declines (changing nothing) if the binder does not hold `outgoing`
    /// or its type would not accept `incoming`.
    pub fn execute_trade(&mut self, binder: &str, incoming: Card, outgoing: CardId) -> Outcome<CardId> {
        let key = ContainerKey::binder(binder);
        let index = self.position(&key)?;
        let outgoing_name = self.known_card(outgoing)?.name().to_string();
        let container = &self.binders[index];

        if !container.contains(outgoing) {
            return Err(Declined::NotInContainer {
                card: outgoing_name,
                container: container.name().to_string(),
            });
        }

        if !container.policy().accepts(&incoming) {
            return Err(Declined::Rejected {
                card: incoming.name().to_string(),
                container: container.name().to_string(),
                kind: container.kind().to_string(),
            });
        }

        let incoming_id = self.registry.intern(incoming);
        self.collection.insert(incoming_id, 0);
        self.binders[index].swap(outgoing, incoming_id);

        if outgoing != incoming_id
            && self.collection.quantity(outgoing) == Some(0)
            && !self.referenced_by_any_container(outgoing)
        {
            self.collection.remove(outgoing);
        }

        debug!(container = %key, outgoing = %outgoing, incoming = %incoming_id, "Executed trade");
        Ok(incoming_id)
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// A serializable view of one binder or deck.
    pub fn summarize(&self, container: &Container) -> ContainerSummary {
        let policy = container.policy();
        ContainerSummary {
            name: container.name().to_string(),
            kind: container.kind(),
            capacity: policy.capacity,
            sellable: policy.sellable,
            cards: container
                .cards()
                .iter()
                .filter_map(|id| self.registry.get(*id).map(|c| CardSummary::new(*id, c)))
                .collect(),
            card_sum: self.card_sum(container),
            price: self.price_of(container),
            custom_price: container.custom_price(),
        }
    }

    /// A serializable picture of the whole inventory.
    pub fn snapshot(&self) -> InventorySnapshot {
        let collection = self
            .collection
            .entries()
            .iter()
            .filter_map(|CollectionEntry { card, quantity }| {
                self.registry.get(*card).map(|c| CollectionRow {
                    card: CardSummary::new(*card, c),
                    quantity: *quantity,
                })
            })
            .collect();

        InventorySnapshot {
            collector_name: self.config.collector_name.clone(),
            collection,
            binders: self.binders.iter().map(|b| self.summarize(b)).collect(),
            decks: self.decks.iter().map(|d| self.summarize(d)).collect(),
            balance: self.balance,
        }
    }
}

/// A Collection count that would no longer fit in an `i64`.
fn quantity_overflow() -> ValidationError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: i64::MAX,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
