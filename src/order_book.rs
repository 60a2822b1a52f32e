//! Single-instrument order book: bids and asks in price-time priority.
//!
//! Each side is a `Vec<Order>` kept sorted by ascending [`Order::sort_key`], so the
//! head of each side is top-of-book and equal keys keep arrival order. Matching
//! lives in [`crate::matching`]; this module only owns the structure.

use crate::error::{EngineError, Result};
use crate::execution::Trade;
use crate::matching;
use crate::order::Order;
use crate::types::{OrderId, Price, Quantity, Side};
use std::collections::HashSet;

/// What an observer may see of a resting order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RestingOrderView {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Disclosed quantity: the peak for icebergs, the full remainder otherwise.
    pub displayed_volume: Quantity,
}

impl From<&Order> for RestingOrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            side: order.side,
            price: order.price,
            displayed_volume: order.displayed_volume(),
        }
    }
}

/// Both sides of the book, best-to-worst.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<RestingOrderView>,
    pub asks: Vec<RestingOrderView>,
}

#[derive(Debug, Default)]
pub struct OrderBook {
    bids: Vec<Order>,
    asks: Vec<Order>,
    /// Ids currently resting on either side.
    resting: HashSet<OrderId>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rests `order` on its own side without matching.
    ///
    /// Lands after every order with an equal `sort_key`. Rejects a zero quantity or
    /// an id that is already resting, leaving the book untouched.
    pub fn insert(&mut self, order: Order) -> Result<()> {
        if order.is_filled() {
            return Err(EngineError::invariant(order.id, "cannot rest an order with zero quantity"));
        }
        if self.resting.contains(&order.id) {
            return Err(EngineError::invariant(order.id, "order is already resting"));
        }
        self.resting.insert(order.id);
        let orders = self.side_mut(order.side);
        let key = order.sort_key();
        let at = orders.partition_point(|o| o.sort_key() <= key);
        orders.insert(at, order);
        Ok(())
    }

    /// Aggressive phase only: trades `incoming` against the opposite side.
    /// `incoming.quantity` is left at whatever did not fill; it is never rested.
    pub fn match_order(&mut self, incoming: &mut Order) -> Vec<Trade> {
        matching::match_order(self, incoming)
    }

    /// Matches `order`, then rests any remainder.
    pub fn submit(&mut self, order: Order) -> Result<Vec<Trade>> {
        matching::submit(self, order)
    }

    /// Resting bids, best (highest price, earliest) first.
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Resting asks, best (lowest price, earliest) first.
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    pub fn side(&self, side: Side) -> &[Order] {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Order> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Top-of-book on `side`, mutable for quantity reduction during matching.
    pub(crate) fn front_mut(&mut self, side: Side) -> Option<&mut Order> {
        self.side_mut(side).first_mut()
    }

    /// Drops the top-of-book on `side` once it is fully filled.
    pub(crate) fn remove_front(&mut self, side: Side) -> Option<Order> {
        let orders = self.side_mut(side);
        if orders.is_empty() {
            return None;
        }
        let order = orders.remove(0);
        self.resting.remove(&order.id);
        Some(order)
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.resting.contains(&order_id)
    }

    /// Best bid price (None if empty).
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|o| o.price)
    }

    /// Best ask price (None if empty).
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|o| o.price)
    }

    /// Number of resting orders on both sides.
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.iter().map(RestingOrderView::from).collect(),
            asks: self.asks.iter().map(RestingOrderView::from).collect(),
        }
    }
}
