//! # Valuation Policy
//!
//! Turns a base price and a requested variant into the value a card is
//! stored with.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Rarity gates variant                                               │
//! │     Common / Uncommon ──► variant forced to Normal                      │
//! │     Rare / Legendary  ──► variant kept as requested                     │
//! │                                                                         │
//! │  2. Multiplier on the base price                                       │
//! │     Normal ×1.0   Extended-art ×1.5   Full-art ×2.0   Alt-art ×3.0      │
//! │                                                                         │
//! │  3. Round half-up to cents                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use cardvault_core::money::Money;
//! use cardvault_core::types::{Rarity, Variant};
//! use cardvault_core::valuation::appraise;
//!
//! let (variant, value) = appraise(Rarity::Rare, Variant::AltArt, Money::from_cents(1000)).unwrap();
//! assert_eq!(variant, Variant::AltArt);
//! assert_eq!(value.cents(), 3000);
//!
//! // Commons never keep a special variant
//! let (variant, value) = appraise(Rarity::Common, Variant::AltArt, Money::from_cents(1000)).unwrap();
//! assert_eq!(variant, Variant::Normal);
//! assert_eq!(value.cents(), 1000);
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::money::{Money, Rate};
use crate::types::{Rarity, Variant};
use crate::validation::validate_base_price;

/// The variant a card of `rarity` actually gets when `requested` is asked
/// for.
#[inline]
pub const fn effective_variant(rarity: Rarity, requested: Variant) -> Variant {
    if rarity.is_rare_or_better() {
        requested
    } else {
        Variant::Normal
    }
}

/// Price multiplier for each variant.
pub const fn variant_multiplier(variant: Variant) -> Rate {
    match variant {
        Variant::Normal => Rate::from_bps(10_000),
        Variant::ExtendedArt => Rate::from_bps(15_000),
        Variant::FullArt => Rate::from_bps(20_000),
        Variant::AltArt => Rate::from_bps(30_000),
    }
}

/// Applies the valuation policy.
///
/// Returns the effective variant together with the stored value. Fails if
/// the base price is not positive or the multiplied value does not fit in
/// cents.
pub fn appraise(rarity: Rarity, requested: Variant, base_price: Money) -> CoreResult<(Variant, Money)> {
    validate_base_price(base_price)?;

    let variant = effective_variant(rarity, requested);
    let value = base_price
        .checked_scale(variant_multiplier(variant))
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "card value".to_string(),
            min: 1,
            max: i64::MAX,
        })?;

    Ok((variant, value))
}

// =============================================================================
// Unit Tests
// =============================================================================
