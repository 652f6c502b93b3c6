//! # Validation Module
//!
//! Construction-time checks. Anything rejected here never becomes a card or
//! a container; the caller gets a [`ValidationError`] instead of a
//! [`Declined`](crate::error::Declined) outcome.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation layer                                           │
//! │  ├── Prompting, re-asking on bad input                                 │
//! │  └── Parsing text into Rarity / Variant / Money                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present and bounded                                         │
//! │  ├── Base price > 0                                                    │
//! │  └── Initial quantity >= 0                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory rule engine                                        │
//! │  └── Capacity, acceptance, duplicates, availability (Declined)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cardvault_core::money::Money;
//! use cardvault_core::validation::{validate_base_price, validate_card_name};
//!
//! assert!(validate_card_name("Lightning Bolt").is_ok());
//! assert!(validate_base_price(Money::from_cents(0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a card name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most `MAX_NAME_LENGTH` characters
pub fn validate_card_name(name: &str) -> ValidationResult<()> {
    validate_name("card name", name)
}

/// Validates a binder or deck name. Same rules as card names.
pub fn validate_container_name(name: &str) -> ValidationResult<()> {
    validate_name("container name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a card's base price.
///
/// ## Rules
/// - Must be strictly positive; a free card has no meaningful value
///
/// ## Example
/// ```rust
/// use cardvault_core::money::Money;
/// use cardvault_core::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(1)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_err());
/// assert!(validate_base_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "base price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial card quantity.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (a known card with no free copy)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_card_name() {
        assert!(validate_card_name("Black Lotus").is_ok());
        assert!(validate_card_name("").is_err());
        assert!(validate_card_name("   ").is_err());
        assert!(validate_card_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_card_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_container_name() {
        assert!(validate_container_name("Trade Binder").is_ok());
        assert_eq!(
            validate_container_name(""),
            Err(ValidationError::Required {
                field: "container name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::from_cents(1)).is_ok());
        assert!(validate_base_price(Money::from_cents(1099)).is_ok());
        assert!(validate_base_price(Money::zero()).is_err());
        assert!(validate_base_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(-1).is_err());
    }
}
