//! Single-entry matching engine facade.
//!
//! Holds the order book, remembers every id submitted in the run, logs each
//! submission and trade, and forwards trades to registered sinks.

use crate::error::{EngineError, Result};
use crate::execution::{Trade, TradeSink};
use crate::order::Order;
use crate::order_book::{BookSnapshot, OrderBook};
use crate::types::{OrderId, Price};
use log::info;
use std::collections::HashSet;

/// Anything that accepts orders one at a time and reports the resulting trades.
pub trait MatchingEngine {
    fn submit_order(&mut self, order: Order) -> Result<Vec<Trade>>;
}

/// Single-instrument matching engine.
///
/// Not internally synchronized: callers that share one engine between threads
/// must hold an exclusive lock for the duration of [`Engine::submit_order`].
#[derive(Default)]
pub struct Engine {
    book: OrderBook,
    seen: HashSet<OrderId>,
    sinks: Vec<Box<dyn TradeSink>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sink that receives every trade, in match order.
    pub fn add_sink(&mut self, sink: Box<dyn TradeSink>) {
        self.sinks.push(sink);
    }

    /// Submits an order: matches it, rests any remainder, and returns the trades.
    ///
    /// Returns `Err` without touching the book if the id was already used in this run.
    pub fn submit_order(&mut self, order: Order) -> Result<Vec<Trade>> {
        info!(
            "order submitted order_id={} side={:?} price={} quantity={} kind={:?}",
            order.id,
            order.side,
            order.price,
            order.quantity,
            order.kind()
        );
        if !self.seen.insert(order.id) {
            return Err(EngineError::invariant(order.id, "order id was already used"));
        }
        let order_id = order.id;
        let trades = self.book.submit(order)?;
        for trade in &trades {
            info!(
                "trade resting_order={} incoming_order={} price={} quantity={}",
                trade.resting_order_id, trade.incoming_order_id, trade.price, trade.quantity
            );
            for sink in &mut self.sinks {
                sink.on_trade(trade);
            }
        }
        if self.book.contains(order_id) {
            info!("order rested order_id={}", order_id);
        }
        Ok(trades)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn snapshot(&self) -> BookSnapshot {
        self.book.snapshot()
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.book.best_bid()
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.book.best_ask()
    }
}

impl MatchingEngine for Engine {
    fn submit_order(&mut self, order: Order) -> Result<Vec<Trade>> {
        Engine::submit_order(self, order)
    }
}
