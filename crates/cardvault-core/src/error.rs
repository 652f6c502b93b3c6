//! # Error Types
//!
//! Domain-specific error types for cardvault-core.
//!
//! ## Error Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Tier 1: construction-time validation (this file)                      │
//! │  ├── CoreError        - a record could not be built at all             │
//! │  └── ValidationError  - the offending field and rule                   │
//! │                                                                         │
//! │  Tier 2: operation declined (this file)                                │
//! │  └── Declined         - valid request the current state refuses        │
//! │                         (full binder, wrong rarity, name taken, ...)   │
//! │                                                                         │
//! │  Session layer (cardvault-session)                                     │
//! │  └── ApiError         - what the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                          Declined ──┴──► ApiError → presentation       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (card name, container name, etc.)
//! 3. A declined operation never mutates state, so callers may simply retry
//!    with different input

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Construction-time failures.
///
/// Raised when a card cannot be created at all, for example because its
/// base price is not positive. Distinct from [`Declined`], which is the
/// normal "no" of a well-formed request.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable amount or unknown rarity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Declined
// =============================================================================

/// Why an inventory operation was declined.
///
/// Every variant leaves the inventory exactly as it was before the call.
///
/// ## User Workflow
/// ```text
/// Add "Rock" to binder "B1" (RARES)
///      │
///      ▼
/// Policy check: RARES accepts RARE/LEGENDARY only
///      │
///      ▼
/// Declined::Rejected { card: "Rock", container: "B1", .. }
///      │
///      ▼
/// UI shows: "Rock does not fit Rares binder B1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Declined {
    /// The card id is unknown, or the card has no Collection entry.
    #[error("Card not found in collection: {0}")]
    CardNotFound(String),

    /// The Collection holds no free copy of the card.
    #[error("No free copy of {card} in the collection")]
    InsufficientQuantity { card: String },

    /// A count adjustment would take the quantity below zero.
    #[error("Cannot adjust {card} by {delta}: only {available} copies")]
    NegativeCount {
        card: String,
        available: i64,
        delta: i64,
    },

    /// No binder or deck with this name exists.
    #[error("{namespace} not found: {name}")]
    ContainerNotFound { namespace: String, name: String },

    /// A binder or deck with this name already exists.
    #[error("{namespace} '{name}' already exists")]
    NameTaken { namespace: String, name: String },

    /// The container is at its type's capacity.
    #[error("{container} is full ({capacity} cards)")]
    ContainerFull { container: String, capacity: usize },

    /// The container's type does not accept this card.
    #[error("{card} does not fit {kind} {container}")]
    Rejected {
        card: String,
        container: String,
        kind: String,
    },

    /// The deck already holds a card with this identity.
    #[error("{card} is already in deck {deck}")]
    DuplicateInDeck { card: String, deck: String },

    /// The container does not hold this card.
    #[error("{card} is not in {container}")]
    NotInContainer { card: String, container: String },

    /// The container's type cannot be sold.
    #[error("{kind} {container} cannot be sold")]
    NotSellable { container: String, kind: String },

    /// Selling requires at least one card.
    #[error("{container} is empty")]
    EmptyContainer { container: String },

    /// The computed sale price is zero.
    #[error("{container} would sell for {price}")]
    NonPositivePrice { container: String, price: String },

    /// A luxury custom price below the contained card value.
    #[error("Custom price {proposed} is below the card value {minimum} of {container}")]
    PriceBelowCardValue {
        container: String,
        proposed: String,
        minimum: String,
    },

    /// Custom prices only exist on luxury binders.
    #[error("{container} is not a luxury binder")]
    NotLuxury { container: String },

    /// The request carried a malformed value (blank name, count overflow).
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result of an inventory operation that may be declined.
pub type Outcome<T> = Result<T, Declined>;

// =============================================================================
// Unit Tests
// =============================================================================
