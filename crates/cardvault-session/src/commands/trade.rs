//! # Trade Commands
//!
//! ## Trade Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. quote_trade(outgoing, incoming)                                     │
//! │       └─► requiresConfirmation = |incoming - outgoing| ≥ threshold      │
//! │                                                                         │
//! │  2. Presentation asks the collector to confirm when flagged             │
//! │                                                                         │
//! │  3. execute_trade(binder, incoming, outgoing)                           │
//! │       └─► incoming replaces outgoing in the binder                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cardvault_core::snapshot::CardSummary;
use cardvault_core::{CardId, InventorySnapshot, TradeQuote};

use super::collection::CardRequest;
use super::declined;
use crate::error::ApiError;
use crate::state::InventoryState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub binder: String,
    pub outgoing: CardId,
    pub incoming: CardRequest,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub received: CardSummary,
    pub snapshot: InventorySnapshot,
}

/// Compares the values of both sides of a proposed trade.
pub fn quote_trade(
    state: &InventoryState,
    outgoing: CardId,
    incoming: &CardRequest,
) -> Result<TradeQuote, ApiError> {
    debug!(outgoing = %outgoing, incoming = %incoming.name, "quote_trade command");

    let incoming = incoming.to_card()?;
    state.with_inventory(|inv| {
        inv.quote_trade(outgoing, &incoming)
            .map_err(|e| declined("quote_trade", e))
    })
}

/// Swaps a card in a binder for one received from another collector.
///
/// Confirmation of lopsided trades is the caller's job; see
/// [`quote_trade`].
pub fn execute_trade(state: &InventoryState, request: &TradeRequest) -> Result<TradeResponse, ApiError> {
    debug!(
        binder = %request.binder,
        outgoing = %request.outgoing,
        incoming = %request.incoming.name,
        "execute_trade command"
    );

    let incoming = request.incoming.to_card()?;
    state.with_inventory_mut(|inv| {
        let id = inv
            .execute_trade(&request.binder, incoming, request.outgoing)
            .map_err(|e| declined("execute_trade", e))?;
        let received = inv
            .card(id)
            .map(|c| CardSummary::new(id, c))
            .ok_or_else(|| ApiError::internal("Traded card missing from registry"))?;
        info!(binder = %request.binder, received = %received.name, "Trade completed");

        Ok(TradeResponse {
            received,
            snapshot: inv.snapshot(),
        })
    })
}
