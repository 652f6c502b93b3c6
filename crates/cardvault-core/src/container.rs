//! # Containers
//!
//! Binders and decks share one representation: a name, a type tag and an
//! ordered list of card ids. Everything type-specific comes from the policy
//! table in [`crate::policy`].
//!
//! A container on its own knows nothing about the Collection. Moving copies
//! in and out of the Collection is the orchestrator's job; the methods here
//! only check and apply the container-local rules.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::error::{Declined, Outcome};
use crate::money::Money;
use crate::policy::{policy_for, ContainerPolicy};
use crate::types::{ContainerKind, Namespace};

/// Names a container: which namespace and which name in it.
///
/// ## Example
/// ```rust
/// use cardvault_core::container::ContainerKey;
/// use cardvault_core::types::Namespace;
///
/// let key = ContainerKey::binder("Trade Binder");
/// assert_eq!(key.namespace, Namespace::Binder);
/// assert_eq!(key.name, "Trade Binder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerKey {
    pub namespace: Namespace,
    pub name: String,
}

impl ContainerKey {
    pub fn binder(name: impl Into<String>) -> Self {
        ContainerKey {
            namespace: Namespace::Binder,
            name: name.into(),
        }
    }

    pub fn deck(name: impl Into<String>) -> Self {
        ContainerKey {
            namespace: Namespace::Deck,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.namespace, self.name)
    }
}

/// A binder or deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    name: String,
    kind: ContainerKind,
    cards: Vec<CardId>,
    /// Only ever set on luxury binders.
    custom_price: Option<Money>,
}

impl Container {
    pub fn new(name: impl Into<String>, kind: ContainerKind) -> Self {
        Container {
            name: name.into(),
            kind,
            cards: Vec::new(),
            custom_price: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn key(&self) -> ContainerKey {
        ContainerKey {
            namespace: self.kind.namespace(),
            name: self.name.clone(),
        }
    }

    #[inline]
    pub fn policy(&self) -> ContainerPolicy {
        policy_for(self.kind)
    }

    /// Card ids in insertion order. Binders may repeat an id.
    #[inline]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.policy().capacity
    }

    #[inline]
    pub fn is_sellable(&self) -> bool {
        self.policy().sellable
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    /// How many copies of `id` this container holds.
    pub fn count_of(&self, id: CardId) -> usize {
        self.cards.iter().filter(|c| **c == id).count()
    }

    #[inline]
    pub fn custom_price(&self) -> Option<Money> {
        self.custom_price
    }

    /// Checks whether `card` (registered as `id`) may be added right now.
    ///
    /// ## Order of checks
    /// 1. type acceptance
    /// 2. capacity
    /// 3. duplicate identity (decks only)
    pub fn check_add(&self, id: CardId, card: &Card) -> Outcome<()> {
        let policy = self.policy();

        if !policy.accepts(card) {
            return Err(Declined::Rejected {
                card: card.name().to_string(),
                container: self.name.clone(),
                kind: self.kind.to_string(),
            });
        }

        if self.is_full() {
            return Err(Declined::ContainerFull {
                container: self.name.clone(),
                capacity: policy.capacity,
            });
        }

        if policy.unique_cards && self.contains(id) {
            return Err(Declined::DuplicateInDeck {
                card: card.name().to_string(),
                deck: self.name.clone(),
            });
        }

        Ok(())
    }

    /// Checks and appends.
    pub fn add(&mut self, id: CardId, card: &Card) -> Outcome<()> {
        self.check_add(id, card)?;
        self.cards.push(id);
        Ok(())
    }

    /// Removes the first copy of `id`. Returns false if there was none.
    pub fn remove(&mut self, id: CardId) -> bool {
        match self.cards.iter().position(|c| *c == id) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the first copy of `outgoing` with `incoming`, which lands at
    /// the end of the list. Capacity is unaffected.
    pub(crate) fn swap(&mut self, outgoing: CardId, incoming: CardId) -> bool {
        if !self.remove(outgoing) {
            return false;
        }
        self.cards.push(incoming);
        true
    }

    /// Takes every card id out, leaving the container empty.
    pub(crate) fn drain(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }

    pub(crate) fn set_custom_price(&mut self, price: Money) {
        self.custom_price = Some(price);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
