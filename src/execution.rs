//! Trades and trade sinks.
//!
//! [`Trade`] is emitted once per matched pair, in match order. Besides being
//! returned from a submission, trades can be pushed to any registered [`TradeSink`].

use crate::types::{OrderId, Price, Quantity};
use std::fmt;
use std::sync::{Arc, Mutex};

/// One execution between a resting order and the incoming order.
///
/// Carries copied values; never refers back into the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Trade {
    pub resting_order_id: OrderId,
    pub incoming_order_id: OrderId,
    /// Always the resting order's price.
    pub price: Price,
    pub quantity: Quantity,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.resting_order_id, self.incoming_order_id, self.price, self.quantity
        )
    }
}

/// Receives trades as they are produced by the engine.
pub trait TradeSink: Send {
    fn on_trade(&mut self, trade: &Trade);
}

/// In-memory sink that stores trades. Clone shares the same backing buffer.
#[derive(Clone, Default)]
pub struct InMemoryTradeSink {
    trades: Arc<Mutex<Vec<Trade>>>,
}

impl InMemoryTradeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trades(&self) -> Vec<Trade> {
        self.trades.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl TradeSink for InMemoryTradeSink {
    fn on_trade(&mut self, trade: &Trade) {
        if let Ok(mut trades) = self.trades.lock() {
            trades.push(*trade);
        }
    }
}
