//! Synthetic order stream generator.
//!
//! Deterministic, configurable order stream for replay tests, demos, and load tests.
//! Same seed ⇒ same sequence of orders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::engine::MatchingEngine;
use crate::error::Result;
use crate::order::Order;
use crate::types::{OrderId, Price, Quantity, Side};

/// Configuration for the synthetic order generator.
/// All ranges are inclusive; a range given as `max < min` is read as `max..=min`.
/// Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed ⇒ same order stream.
    pub seed: u64,
    /// Number of orders produced by [`Generator::all_orders`].
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Probability of an iceberg order (0.0..=1.0). Plain limit otherwise.
    pub iceberg_ratio: f64,
    pub price_min: Price,
    pub price_max: Price,
    pub quantity_min: Quantity,
    pub quantity_max: Quantity,
    /// Peak range for iceberg orders.
    pub peak_min: Quantity,
    pub peak_max: Quantity,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            iceberg_ratio: 0.2,
            price_min: 95,
            price_max: 105,
            quantity_min: 1,
            quantity_max: 100,
            peak_min: 1,
            peak_max: 20,
        }
    }
}

/// Deterministic order stream. Ids are sequential from 1, so a stream never reuses one.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    next_order_id: u64,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            config,
            next_order_id: 1,
        }
    }

    /// Generates the next order. Advances the id counter and the RNG.
    pub fn next_order(&mut self) -> Order {
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self
            .rng
            .gen_range(inclusive(self.config.price_min, self.config.price_max));
        let quantity = self
            .rng
            .gen_range(inclusive(self.config.quantity_min, self.config.quantity_max));
        if self.rng.gen::<f64>() < self.config.iceberg_ratio {
            let peak = self
                .rng
                .gen_range(inclusive(self.config.peak_min, self.config.peak_max));
            Order::iceberg(id, side, price, quantity, peak)
        } else {
            Order::limit(id, side, price, quantity)
        }
    }

    pub fn take_orders(&mut self, n: usize) -> Vec<Order> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// Returns the full stream of orders as defined by config.num_orders.
    pub fn all_orders(&mut self) -> Vec<Order> {
        self.take_orders(self.config.num_orders)
    }
}

fn inclusive<T: PartialOrd>(a: T, b: T) -> RangeInclusive<T> {
    if a <= b {
        a..=b
    } else {
        b..=a
    }
}

/// Replays a sequence of orders into the engine. Returns the total trade count (or first error).
pub fn replay_into_engine<E>(engine: &mut E, orders: impl IntoIterator<Item = Order>) -> Result<usize>
where
    E: MatchingEngine,
{
    let mut total_trades = 0usize;
    for order in orders {
        total_trades += engine.submit_order(order)?.len();
    }
    Ok(total_trades)
}
