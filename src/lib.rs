//! # Iceberg Matching Engine
//!
//! Deterministic single-instrument matching engine: order model with plain and
//! iceberg orders, a price-time priority book, and the match-then-rest submission
//! sequence that produces trades.
//!
//! ## Entry point
//!
//! Use [`Engine`] as the single entry point: create with [`Engine::new`], then
//! [`Engine::submit_order`]. Inspect the book with [`Engine::snapshot`].
//!
//! ## Example
//!
//! ```rust
//! use iceberg_matching_engine::{Engine, Order, OrderId, Side};
//!
//! let mut engine = Engine::new();
//! let trades = engine.submit_order(Order::iceberg(OrderId(4), Side::Sell, 50, 100, 10)).unwrap();
//! assert!(trades.is_empty());
//! assert_eq!(engine.snapshot().asks[0].displayed_volume, 10);
//!
//! let trades = engine.submit_order(Order::limit(OrderId(5), Side::Buy, 50, 100)).unwrap();
//! assert_eq!(trades[0].to_string(), "4,5,50,100");
//! assert!(engine.book().is_empty());
//! ```
//!
//! ## Lower-level API
//!
//! You can also use [`OrderBook`] directly ([`OrderBook::insert`],
//! [`OrderBook::match_order`], [`OrderBook::submit`]) if you track ids yourself.
//! The [`protocol`], [`render`] and [`driver`] modules turn the engine into a
//! line-oriented filter; [`api`] serves it over HTTP.

pub mod api;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod execution;
pub mod market_data_gen;
pub mod matching;
pub mod order;
pub mod order_book;
pub mod protocol;
pub mod render;
pub mod types;

pub use config::{Config, MalformedPolicy};
pub use driver::{run_stream, StreamSummary};
pub use engine::{Engine, MatchingEngine};
pub use error::{EngineError, StreamError};
pub use execution::{InMemoryTradeSink, Trade, TradeSink};
pub use market_data_gen::{replay_into_engine, Generator, GeneratorConfig};
pub use matching::is_trade_possible;
pub use order::{Order, OrderKind};
pub use order_book::{BookSnapshot, OrderBook, RestingOrderView};
pub use types::{OrderId, Price, Quantity, Side};
