//! Order model: economic terms, remaining quantity, and the display capability.
//!
//! An [`Order`] is either a plain limit order or an iceberg order that discloses
//! only `peak` of its remaining quantity. The disclosed amount is for observers of
//! the book only; matching always trades against the full remaining quantity.

use crate::error::{EngineError, Result};
use crate::types::{OrderId, Price, Quantity, Side};

/// Field count of a plain limit instruction: `side,id,price,quantity`.
pub const LIMIT_FIELDS: usize = 4;
/// Field count of an iceberg instruction: `side,id,price,quantity,peak`.
pub const ICEBERG_FIELDS: usize = 5;

/// How much of an order is shown on the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderKind {
    /// Shows its full remaining quantity.
    Limit,
    /// Shows at most `peak`. Fixed at creation.
    Iceberg { peak: Quantity },
}

impl OrderKind {
    /// Disclosed volume for an order of this kind with `quantity` remaining.
    pub fn displayed_volume(self, quantity: Quantity) -> Quantity {
        match self {
            OrderKind::Limit => quantity,
            OrderKind::Iceberg { peak } => peak.min(quantity),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining quantity. Only the matching algorithm reduces it.
    pub quantity: Quantity,
    kind: OrderKind,
}

impl Order {
    pub fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            kind: OrderKind::Limit,
        }
    }

    pub fn iceberg(id: OrderId, side: Side, price: Price, quantity: Quantity, peak: Quantity) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            kind: OrderKind::Iceberg { peak },
        }
    }

    /// Builds an order from the fields of one instruction.
    ///
    /// Four fields give a limit order, five an iceberg. `instruction` is only used
    /// to give rejections their context.
    pub fn from_fields(instruction: &str, fields: &[&str]) -> Result<Self> {
        if fields.len() != LIMIT_FIELDS && fields.len() != ICEBERG_FIELDS {
            return Err(EngineError::malformed(
                instruction,
                format!(
                    "expected {} or {} fields, got {}",
                    LIMIT_FIELDS,
                    ICEBERG_FIELDS,
                    fields.len()
                ),
            ));
        }
        let side = match fields[0].trim() {
            "B" => Side::Buy,
            "S" => Side::Sell,
            other => {
                return Err(EngineError::malformed(
                    instruction,
                    format!("unknown side {:?}", other),
                ))
            }
        };
        let id = OrderId(parse_field(instruction, "id", fields[1])?);
        let price: Price = parse_field(instruction, "price", fields[2])?;
        let quantity: Quantity = parse_field(instruction, "quantity", fields[3])?;
        match fields.get(4) {
            Some(peak) => {
                let peak: Quantity = parse_field(instruction, "peak", peak)?;
                Ok(Order::iceberg(id, side, price, quantity, peak))
            }
            None => Ok(Order::limit(id, side, price, quantity)),
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn is_iceberg(&self) -> bool {
        matches!(self.kind, OrderKind::Iceberg { .. })
    }

    /// Quantity disclosed to observers of the book. Never used for matching.
    pub fn displayed_volume(&self) -> Quantity {
        self.kind.displayed_volume(self.quantity)
    }

    /// Ascending `sort_key` is economic priority on both sides: lowest ask first,
    /// highest bid first.
    pub fn sort_key(&self) -> i128 {
        match self.side {
            Side::Sell => i128::from(self.price),
            Side::Buy => -i128::from(self.price),
        }
    }

    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}

fn parse_field<T: std::str::FromStr>(instruction: &str, name: &str, raw: &str) -> Result<T> {
    let raw = raw.trim();
    raw.parse::<T>().map_err(|_| {
        EngineError::malformed(instruction, format!("invalid {} {:?}", name, raw))
    })
}
