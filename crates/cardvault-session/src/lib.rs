//! # cardvault-session
//!
//! The layer a presentation front end links against: shared inventory
//! state, configuration loading, logging setup and the command facade.
//!
//! ## Module Organization
//! ```text
//! cardvault_session/
//! ├── lib.rs          ◄─── You are here (startup & tracing)
//! ├── state.rs        ◄─── Arc<Mutex<Inventory>> wrapper
//! ├── config.rs       ◄─── TOML + environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, snapshot
//! │   ├── collection.rs
//! │   ├── container.rs
//! │   └── trade.rs
//! └── error.rs        ◄─── ApiError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults ◄ config.toml ◄ CARDVAULT_* environment                  │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • RUST_LOG if set, else the configured filter                       │
//! │                                                                         │
//! │  3. Create InventoryState ────────────────────────────────────────────► │
//! │     • empty inventory, ledger at $0.00                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use cardvault_session::commands::collection::{add_card, CardRequest};
//! use cardvault_session::{start_session, SessionConfig};
//! use cardvault_core::{Money, Rarity, Variant};
//!
//! let state = start_session(&SessionConfig::default());
//! let request = CardRequest::new("Rock", Rarity::Common, Variant::Normal, Money::from_cents(100));
//!
//! let response = add_card(&state, &request, 2).unwrap();
//! assert_eq!(response.snapshot.collection[0].quantity, 2);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{LoggingConfig, SessionConfig};
pub use error::{ApiError, ConfigError, ErrorCode};
pub use state::InventoryState;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including declined operations
/// - `RUST_LOG=cardvault_core=debug` - Mutations only
/// - Otherwise the configured filter (default `info`)
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Sets up logging and returns a fresh inventory for the session.
pub fn start_session(config: &SessionConfig) -> InventoryState {
    init_tracing(&config.logging);
    info!(collector = %config.inventory.collector_name, "Starting Card Vault session");

    InventoryState::with_config(config.inventory.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        let logging = LoggingConfig {
            filter: "not a [valid filter".to_string(),
        };
        init_tracing(&logging);
        init_tracing(&LoggingConfig::default());
    }

    #[test]
    fn test_start_session_uses_inventory_config() {
        let mut config = SessionConfig::default();
        config.inventory.collector_name = "Ash".into();

        let state = start_session(&config);
        assert_eq!(commands::get_snapshot(&state).collector_name, "Ash");
    }
}
