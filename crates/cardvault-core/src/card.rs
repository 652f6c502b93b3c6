//! # Cards
//!
//! Immutable card records and the registry that gives each distinct card a
//! stable [`CardId`].
//!
//! ## Identity
//! Two cards are the same card when their case-folded name, rarity,
//! variant and stored value match. How many copies exist is not part of
//! identity: quantities live in the [`Collection`](crate::collection), and
//! containers only hold `CardId`s.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CardRegistry                                                           │
//! │  ┌──────┬──────────────────────────────────────────────┐                │
//! │  │ id 0 │ "Rock"  Common  Normal   $1.00               │ ◄── Collection │
//! │  │ id 1 │ "Foo"   Rare    Alt-art  $30.00              │ ◄── Binder B1  │
//! │  │ id 2 │ ...                                          │ ◄── Deck D1    │
//! │  └──────┴──────────────────────────────────────────────┘                │
//! │  Entries are never dropped during a session, so an id held by a        │
//! │  container stays valid after its Collection entry is gone.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Rarity, Variant};
use crate::valuation::appraise;
use crate::validation::validate_card_name;

// =============================================================================
// Card Id
// =============================================================================

/// Stable handle to a card in the [`CardRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Card
// =============================================================================

/// A printed card: name, rarity, variant and the value it is stored with.
///
/// ## Example
/// ```rust
/// use cardvault_core::card::Card;
/// use cardvault_core::money::Money;
/// use cardvault_core::types::{Rarity, Variant};
///
/// let foo = Card::new("Foo", Rarity::Rare, Variant::AltArt, Money::from_cents(1000)).unwrap();
/// assert_eq!(foo.value().cents(), 3000);
///
/// let same = Card::new("FOO", Rarity::Rare, Variant::AltArt, Money::from_cents(1000)).unwrap();
/// assert_eq!(foo, same);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    name: String,
    rarity: Rarity,
    variant: Variant,
    value: Money,
}

impl Card {
    /// Builds a card through the valuation policy.
    ///
    /// ## Errors
    /// - blank or overlong name
    /// - base price ≤ 0
    pub fn new(
        name: impl Into<String>,
        rarity: Rarity,
        variant: Variant,
        base_price: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_card_name(&name)?;
        let (variant, value) = appraise(rarity, variant, base_price)?;

        Ok(Card {
            name: name.trim().to_string(),
            rarity,
            variant,
            value,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// The effective variant (after the rarity gate).
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The stored value (after the variant multiplier).
    #[inline]
    pub fn value(&self) -> Money {
        self.value
    }

    /// The identity key of this card.
    pub fn key(&self) -> CardKey {
        CardKey {
            folded_name: self.name.to_lowercase(),
            rarity: self.rarity,
            variant: self.variant,
            value: self.value,
        }
    }

    /// Case-insensitive name match.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identity of a card: (case-folded name, rarity, variant, value).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardKey {
    folded_name: String,
    rarity: Rarity,
    variant: Variant,
    value: Money,
}

// =============================================================================
// Card Registry
// =============================================================================

/// Interns every card the session has seen.
///
/// Registering an identity-equal card twice returns the same id.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    by_key: HashMap<CardKey, CardId>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `card`, registering it if the identity is new.
    pub fn intern(&mut self, card: Card) -> CardId {
        let key = card.key();
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }

        let id = CardId(self.cards.len() as u32);
        self.cards.push(card);
        self.by_key.insert(key, id);
        id
    }

    /// Looks up an already-registered identity without registering it.
    pub fn find(&self, card: &Card) -> Option<CardId> {
        self.by_key.get(&card.key()).copied()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
