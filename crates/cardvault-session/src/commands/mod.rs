//! # Session Commands
//!
//! Everything a presentation layer can ask of the inventory.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports, snapshot)
//! ├── collection.rs  ◄─── Adding, counting and selling single cards
//! ├── container.rs   ◄─── Binders and decks
//! └── trade.rs       ◄─── Quoting and executing trades
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation (menus)                                                   │
//! │  ────────────────────                                                   │
//! │  "Add card to binder" ─► prompts for binder name and card               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::container::add_card_to_container(                            │
//! │      &state,                  ◄── shared InventoryState                 │
//! │      &ContainerKey::binder("Trades"),                                   │
//! │      card_id,                                                           │
//! │  ) -> Result<InventorySnapshot, ApiError>                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Presentation re-renders from the snapshot, or shows error.message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Request and response types are serde types, so the same commands can sit
//! behind a JSON transport unchanged.

pub mod collection;
pub mod container;
pub mod trade;

use tracing::debug;

use cardvault_core::{Declined, InventorySnapshot};

use crate::error::ApiError;
use crate::state::InventoryState;

/// Gets the whole inventory for rendering.
pub fn get_snapshot(state: &InventoryState) -> InventorySnapshot {
    debug!("get_snapshot command");
    state.with_inventory(|inv| inv.snapshot())
}

/// Logs a declined operation and converts it for the caller.
pub(crate) fn declined(command: &'static str, err: Declined) -> ApiError {
    debug!(command, reason = %err, "Operation declined");
    ApiError::from(err)
}
