//! # Inventory State
//!
//! Shares one [`Inventory`] between whatever threads a presentation layer
//! runs commands on.
//!
//! ## Thread Safety
//! The inventory is wrapped in `Arc<Mutex<T>>`. Every command locks the
//! whole inventory for its duration, so an operation's checks and its
//! mutation are never interleaved with another command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command A ──► lock ──► check ─► mutate ──► unlock                     │
//! │  command B ─────────────── waits ────────────────► lock ──► ...        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use cardvault_core::{Inventory, InventoryConfig};

/// Cloneable handle to the session's inventory.
#[derive(Debug, Clone)]
pub struct InventoryState {
    inventory: Arc<Mutex<Inventory>>,
}

impl InventoryState {
    /// Creates a state holding an empty inventory with default settings.
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        InventoryState {
            inventory: Arc::new(Mutex::new(Inventory::with_config(config))),
        }
    }

    /// Every inventory operation checks before it mutates, so the data
    /// behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inventory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ## Usage
    /// ```rust
    /// use cardvault_session::state::InventoryState;
    ///
    /// let state = InventoryState::new();
    /// assert!(!state.with_inventory(|inv| inv.has_cards()));
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self.lock();
        f(&inventory)
    }

    /// Executes a function with write access to the inventory.
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.lock();
        f(&mut inventory)
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new()
    }
}
