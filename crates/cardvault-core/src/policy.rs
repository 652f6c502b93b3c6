//! # Container Type Policy
//!
//! One fixed record per binder/deck type: what it accepts, how many cards
//! it holds, whether it can be sold and how it is priced.
//!
//! ## Policy Table
//! ```text
//! ┌────────────────────┬──────────────────────────────┬─────┬──────┬──────────────────────┐
//! │ Type               │ Accepts                      │ Cap │ Sell │ Price                │
//! ├────────────────────┼──────────────────────────────┼─────┼──────┼──────────────────────┤
//! │ Binder: Basic      │ any                          │ 20  │ no   │ n/a                  │
//! │ Binder: Pauper     │ Common / Uncommon            │ 20  │ yes  │ sum                  │
//! │ Binder: Rares      │ Rare / Legendary             │ 20  │ yes  │ sum × 1.10           │
//! │ Binder: Luxury     │ Rare+ and variant ≠ Normal   │ 20  │ yes  │ custom|sum × 1.10    │
//! │ Binder: Collector  │ Rare+ and variant ≠ Normal   │ 20  │ no   │ n/a                  │
//! │ Deck: Normal       │ any, no duplicate identity   │ 10  │ no   │ n/a                  │
//! │ Deck: Sellable     │ any, no duplicate identity   │ 10  │ yes  │ sum                  │
//! └────────────────────┴──────────────────────────────┴─────┴──────┴──────────────────────┘
//! ```
//!
//! Capability checks are plain data looked up by the container's type tag;
//! nothing here inspects a container's concrete type at runtime.

use crate::card::Card;
use crate::money::{Money, Rate};
use crate::types::{BinderType, ContainerKind, DeckType, Variant};
use crate::{BINDER_CAPACITY, DECK_CAPACITY};

/// Which cards a container type admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Any,
    CommonOrUncommon,
    RareOrLegendary,
    /// Rare or legendary with a non-normal variant.
    SpecialVariantRare,
}

impl Acceptance {
    pub fn admits(&self, card: &Card) -> bool {
        match self {
            Acceptance::Any => true,
            Acceptance::CommonOrUncommon => !card.rarity().is_rare_or_better(),
            Acceptance::RareOrLegendary => card.rarity().is_rare_or_better(),
            Acceptance::SpecialVariantRare => {
                card.rarity().is_rare_or_better() && card.variant() != Variant::Normal
            }
        }
    }
}

/// How a sellable container's price is derived from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// Not for sale.
    NotApplicable,
    /// Sum of card values.
    CardSum,
    /// Sum of card values plus the handling fee.
    CardSumWithFee,
    /// Custom price when set and not below the card sum, else the card sum;
    /// either way plus the handling fee.
    CustomOrCardSumWithFee,
}

/// The rule record for one container type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerPolicy {
    pub acceptance: Acceptance,
    pub capacity: usize,
    pub sellable: bool,
    /// Decks refuse a second copy of an identity they already hold.
    pub unique_cards: bool,
    pub pricing: Pricing,
}

impl ContainerPolicy {
    #[inline]
    pub fn accepts(&self, card: &Card) -> bool {
        self.acceptance.admits(card)
    }

    /// The sale price for a container whose cards sum to `card_sum`.
    ///
    /// Returns `None` for types that are not sellable. The handling fee is
    /// rounded half-up to cents.
    ///
    /// ## Example
    /// ```rust
    /// use cardvault_core::money::Money;
    /// use cardvault_core::policy::policy_for;
    /// use cardvault_core::types::BinderType;
    ///
    /// let luxury = policy_for(BinderType::Luxury.into());
    /// let sum = Money::from_cents(3000);
    ///
    /// assert_eq!(luxury.price(sum, None), Some(Money::from_cents(3300)));
    /// assert_eq!(luxury.price(sum, Some(Money::from_cents(4000))), Some(Money::from_cents(4400)));
    /// // A custom price the cards have since outgrown is ignored
    /// assert_eq!(luxury.price(sum, Some(Money::from_cents(2000))), Some(Money::from_cents(3300)));
    /// ```
    pub fn price(&self, card_sum: Money, custom_price: Option<Money>) -> Option<Money> {
        match self.pricing {
            Pricing::NotApplicable => None,
            Pricing::CardSum => Some(card_sum),
            Pricing::CardSumWithFee => Some(card_sum.scale(Rate::HANDLING_FEE)),
            Pricing::CustomOrCardSumWithFee => {
                let base = match custom_price {
                    Some(custom) if custom >= card_sum => custom,
                    _ => card_sum,
                };
                Some(base.scale(Rate::HANDLING_FEE))
            }
        }
    }
}

const fn binder(acceptance: Acceptance, sellable: bool, pricing: Pricing) -> ContainerPolicy {
    ContainerPolicy {
        acceptance,
        capacity: BINDER_CAPACITY,
        sellable,
        unique_cards: false,
        pricing,
    }
}

const fn deck(sellable: bool, pricing: Pricing) -> ContainerPolicy {
    ContainerPolicy {
        acceptance: Acceptance::Any,
        capacity: DECK_CAPACITY,
        sellable,
        unique_cards: true,
        pricing,
    }
}

/// Looks up the policy for a container type tag.
pub const fn policy_for(kind: ContainerKind) -> ContainerPolicy {
    match kind {
        ContainerKind::Binder(BinderType::Basic) => {
            binder(Acceptance::Any, false, Pricing::NotApplicable)
        }
        ContainerKind::Binder(BinderType::Pauper) => {
            binder(Acceptance::CommonOrUncommon, true, Pricing::CardSum)
        }
        ContainerKind::Binder(BinderType::Rares) => {
            binder(Acceptance::RareOrLegendary, true, Pricing::CardSumWithFee)
        }
        ContainerKind::Binder(BinderType::Luxury) => binder(
            Acceptance::SpecialVariantRare,
            true,
            Pricing::CustomOrCardSumWithFee,
        ),
        ContainerKind::Binder(BinderType::Collector) => {
            binder(Acceptance::SpecialVariantRare, false, Pricing::NotApplicable)
        }
        ContainerKind::Deck(DeckType::Normal) => deck(false, Pricing::NotApplicable),
        ContainerKind::Deck(DeckType::Sellable) => deck(true, Pricing::CardSum),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    fn card(rarity: Rarity, variant: Variant) -> Card {
        Card::new("Probe", rarity, variant, Money::from_cents(100)).unwrap()
    }

    fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for rarity in Rarity::ALL {
            for variant in Variant::ALL {
                cards.push(card(rarity, variant));
            }
        }
        cards
    }

    #[test]
    fn test_capacities() {
        for binder_type in BinderType::ALL {
            assert_eq!(policy_for(binder_type.into()).capacity, 20);
            assert!(!policy_for(binder_type.into()).unique_cards);
        }
        for deck_type in DeckType::ALL {
            assert_eq!(policy_for(deck_type.into()).capacity, 10);
            assert!(policy_for(deck_type.into()).unique_cards);
        }
    }

    #[test]
    fn test_sellable_flags() {
        let sellable = |kind: ContainerKind| policy_for(kind).sellable;
        assert!(!sellable(BinderType::Basic.into()));
        assert!(sellable(BinderType::Pauper.into()));
        assert!(sellable(BinderType::Rares.into()));
        assert!(sellable(BinderType::Luxury.into()));
        assert!(!sellable(BinderType::Collector.into()));
        assert!(!sellable(DeckType::Normal.into()));
        assert!(sellable(DeckType::Sellable.into()));
    }

    #[test]
    fn test_pauper_rejects_rare_or_better() {
        let pauper = policy_for(BinderType::Pauper.into());
        for c in all_cards() {
            assert_eq!(pauper.accepts(&c), !c.rarity().is_rare_or_better());
        }
    }

    #[test]
    fn test_rares_rejects_common_and_uncommon() {
        let rares = policy_for(BinderType::Rares.into());
        for c in all_cards() {
            assert_eq!(rares.accepts(&c), c.rarity().is_rare_or_better());
        }
    }

    #[test]
    fn test_luxury_and_collector_need_special_rare() {
        for binder_type in [BinderType::Luxury, BinderType::Collector] {
            let policy = policy_for(binder_type.into());
            for c in all_cards() {
                let expected = c.rarity().is_rare_or_better() && c.variant() != Variant::Normal;
                assert_eq!(policy.accepts(&c), expected, "{binder_type} {:?}", c);
            }
        }
    }

    #[test]
    fn test_basic_and_decks_accept_anything() {
        for kind in [
            ContainerKind::Binder(BinderType::Basic),
            ContainerKind::Deck(DeckType::Normal),
            ContainerKind::Deck(DeckType::Sellable),
        ] {
            assert!(all_cards().iter().all(|c| policy_for(kind).accepts(c)));
        }
    }

    #[test]
    fn test_prices() {
        let sum = Money::from_cents(1000);
        assert_eq!(policy_for(BinderType::Basic.into()).price(sum, None), None);
        assert_eq!(policy_for(BinderType::Collector.into()).price(sum, None), None);
        assert_eq!(policy_for(DeckType::Normal.into()).price(sum, None), None);
        assert_eq!(policy_for(BinderType::Pauper.into()).price(sum, None), Some(sum));
        assert_eq!(policy_for(DeckType::Sellable.into()).price(sum, None), Some(sum));
        assert_eq!(
            policy_for(BinderType::Rares.into()).price(sum, None),
            Some(Money::from_cents(1100))
        );
    }

    #[test]
    fn test_luxury_custom_price_equal_to_sum_is_used() {
        let luxury = policy_for(BinderType::Luxury.into());
        let sum = Money::from_cents(1000);
        assert_eq!(luxury.price(sum, Some(sum)), Some(Money::from_cents(1100)));
    }
}
