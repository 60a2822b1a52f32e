//! Core identifiers and scalar types shared by the order model and the book.
//!
//! Prices are integer ticks; ordering is purely by arrival sequence, so there is
//! no timestamp anywhere in the model.

use std::fmt;

/// Price in ticks.
pub type Price = i64;

/// Remaining tradeable amount. Unsigned so a negative quantity cannot be represented.
pub type Quantity = u64;

/// Externally assigned order identifier. Unique for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an incoming order of this side trades against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}
