//! # cardvault-core: Rule Engine for Card Vault
//!
//! This crate holds the whole domain of a trading-card collector's inventory:
//! cards and their valuation, the Collection of free copies, binders and
//! decks with their type rules, trading and selling, and the money ledger.
//! It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Card Vault Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (menus, prompts)                   │   │
//! │  │    Main menu ──► Collection menu ──► Binder / Deck menus       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             cardvault-session (commands, config, logs)          │   │
//! │  │    add_card, create_binder, execute_trade, sell_deck, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cardvault-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   card    │  │  policy   │  │ container │  │ inventory │  │   │
//! │  │   │ valuation │  │   table   │  │ Binder /  │  │ Collection│  │   │
//! │  │   │ registry  │  │ per type  │  │   Deck    │  │  ledger   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PROMPTS • NO FILES • DETERMINISTIC               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rarity, variant and container type tags
//! - [`money`] - Integer-cent money and basis-point rates
//! - [`valuation`] - Effective variant and stored value of a card
//! - [`card`] - Immutable cards and the id registry
//! - [`collection`] - Free copies per card identity
//! - [`policy`] - The per-type rule table
//! - [`container`] - Binders and decks
//! - [`inventory`] - The orchestrator every operation goes through
//! - [`snapshot`] - Serializable views for rendering
//! - [`config`] - Inventory tunables
//! - [`error`] - Construction errors and declined outcomes
//! - [`validation`] - Input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use cardvault_core::{Inventory, Money, Rarity, Variant};
//!
//! let mut inventory = Inventory::new();
//!
//! // A full-art common is stored as a normal common: $2.00 × 1.0
//! let id = inventory
//!     .add_card_to_collection("Forest", Rarity::Common, Variant::FullArt, Money::from_cents(200))
//!     .unwrap();
//!
//! let card = inventory.card(id).unwrap();
//! assert_eq!(card.variant(), Variant::Normal);
//! assert_eq!(card.value(), Money::from_cents(200));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod collection;
pub mod config;
pub mod container;
pub mod error;
pub mod inventory;
pub mod money;
pub mod policy;
pub mod snapshot;
pub mod types;
pub mod validation;
pub mod valuation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use card::{Card, CardId};
pub use config::InventoryConfig;
pub use container::{Container, ContainerKey};
pub use error::{CoreError, CoreResult, Declined, Outcome, ValidationError};
pub use inventory::{Inventory, TradeQuote};
pub use money::{Money, Rate};
pub use snapshot::InventorySnapshot;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cards a binder of any type can hold.
pub const BINDER_CAPACITY: usize = 20;

/// Cards a deck of any type can hold.
pub const DECK_CAPACITY: usize = 10;

/// Longest card or container name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Trades whose value difference reaches this are flagged for confirmation.
pub const DEFAULT_TRADE_WARNING_THRESHOLD: Money = Money::from_cents(100);
