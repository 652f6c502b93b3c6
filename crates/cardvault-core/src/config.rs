//! # Inventory Configuration
//!
//! Plain data; loading from files and the environment happens in the
//! session crate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_TRADE_WARNING_THRESHOLD;

/// Tunables for one inventory session.
///
/// ## TOML
/// ```toml
/// [inventory]
/// collector_name = "Ash"
/// trade_warning_threshold = 250   # cents
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryConfig {
    /// Shown by the presentation layer; not used by any rule.
    #[serde(default = "default_collector_name")]
    pub collector_name: String,

    /// Trades whose value difference reaches this amount are flagged as
    /// needing confirmation in [`TradeQuote`](crate::inventory::TradeQuote).
    #[serde(default = "default_trade_warning_threshold")]
    pub trade_warning_threshold: Money,
}

fn default_collector_name() -> String {
    "Collector".to_string()
}

fn default_trade_warning_threshold() -> Money {
    DEFAULT_TRADE_WARNING_THRESHOLD
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            collector_name: default_collector_name(),
            trade_warning_threshold: default_trade_warning_threshold(),
        }
    }
}
