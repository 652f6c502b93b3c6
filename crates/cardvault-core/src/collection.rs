//! # Collection
//!
//! The collector's pool of free copies: one entry per card identity, in the
//! order identities were first added, each with a quantity that may be zero.
//!
//! A zero-quantity entry is a *slot*: the identity is known (for example a
//! card received in a trade) but no free copy is on hand.

use crate::card::CardId;

/// One Collection row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionEntry {
    pub card: CardId,
    pub quantity: i64,
}

/// Insertion-ordered quantities keyed by card id.
///
/// ## Invariants
/// - at most one entry per card id
/// - every quantity is ≥ 0
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<CollectionEntry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.entries.iter().position(|e| e.card == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// The free quantity of `id`, or `None` if the identity has no entry.
    pub fn quantity(&self, id: CardId) -> Option<i64> {
        self.position(id).map(|i| self.entries[i].quantity)
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CollectionEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a new entry. Callers must check [`Collection::contains`]
    /// first; a second entry for the same id is never created.
    pub(crate) fn insert(&mut self, id: CardId, quantity: i64) {
        debug_assert!(quantity >= 0);
        if !self.contains(id) {
            self.entries.push(CollectionEntry { card: id, quantity });
        }
    }

    /// Overwrites the quantity of an existing entry.
    pub(crate) fn set_quantity(&mut self, id: CardId, quantity: i64) {
        debug_assert!(quantity >= 0);
        if let Some(i) = self.position(id) {
            self.entries[i].quantity = quantity;
        }
    }

    /// Whether `amount` more copies of `id` still fit in an `i64` count.
    pub fn can_credit(&self, id: CardId, amount: i64) -> bool {
        self.quantity(id).unwrap_or(0).checked_add(amount).is_some()
    }

    /// Adds `amount` to an existing entry, or creates the entry with
    /// `amount`. On overflow nothing changes and `false` is returned.
    pub(crate) fn credit(&mut self, id: CardId, amount: i64) -> bool {
        match self.position(id) {
            Some(i) => match self.entries[i].quantity.checked_add(amount) {
                Some(quantity) => {
                    self.entries[i].quantity = quantity;
                    true
                }
                None => false,
            },
            None => {
                self.entries.push(CollectionEntry {
                    card: id,
                    quantity: amount,
                });
                true
            }
        }
    }

    pub(crate) fn remove(&mut self, id: CardId) -> bool {
        match self.position(id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
