//! # Session Errors
//!
//! What a presentation layer sees when something goes wrong.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Card Vault                             │
//! │                                                                         │
//! │  Presentation                Session / Core                             │
//! │  ────────────                ──────────────                             │
//! │                                                                         │
//! │  commands::add_card_to_binder(..)                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ─────── CoreError::Validation(..) ───┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Rules say no? ─── Declined::ContainerFull ──── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "CONTAINER_FULL", "message": "B1 is full (20 cards)" }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use cardvault_core::{CoreError, Declined};

// =============================================================================
// API Error
// =============================================================================

/// Error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Binder not found: Trades"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Card, binder or deck does not exist
    NotFound,

    /// Input failed validation
    ValidationError,

    /// No free copy of a card, or a count would go negative
    InsufficientQuantity,

    /// Name already used in that namespace
    NameTaken,

    /// Binder or deck at capacity
    ContainerFull,

    /// The container type does not accept the card
    CardRejected,

    /// A deck already holds this card
    DuplicateCard,

    /// Container type or state does not allow a sale
    NotSellable,

    /// Custom price rules were not met
    InvalidPrice,

    /// Session failure unrelated to inventory rules
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<Declined> for ApiError {
    fn from(err: Declined) -> Self {
        let code = match &err {
            Declined::CardNotFound(_) | Declined::ContainerNotFound { .. } => ErrorCode::NotFound,
            Declined::NotInContainer { .. } => ErrorCode::NotFound,
            Declined::InsufficientQuantity { .. } | Declined::NegativeCount { .. } => {
                ErrorCode::InsufficientQuantity
            }
            Declined::NameTaken { .. } => ErrorCode::NameTaken,
            Declined::ContainerFull { .. } => ErrorCode::ContainerFull,
            Declined::Rejected { .. } => ErrorCode::CardRejected,
            Declined::DuplicateInDeck { .. } => ErrorCode::DuplicateCard,
            Declined::NotSellable { .. }
            | Declined::EmptyContainer { .. }
            | Declined::NonPositivePrice { .. } => ErrorCode::NotSellable,
            Declined::PriceBelowCardValue { .. } | Declined::NotLuxury { .. } => {
                ErrorCode::InvalidPrice
            }
            Declined::Invalid(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading or saving [`SessionConfig`](crate::config::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
