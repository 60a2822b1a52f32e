//! Error types for the engine and its stream driver.

use crate::types::OrderId;
use thiserror::Error;

/// Errors raised by order construction and by the book.
///
/// Every variant is produced before the book is mutated, so a rejected
/// instruction never leaves a partially applied state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The instruction could not be turned into a valid order.
    #[error("malformed instruction {instruction:?}: {reason}")]
    MalformedInput { instruction: String, reason: String },

    /// A caller broke the book's contract (collaborator bug, not a runtime condition).
    #[error("invariant violated for order {order_id}: {reason}")]
    InvariantViolation { order_id: OrderId, reason: String },
}

impl EngineError {
    pub(crate) fn malformed(instruction: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::MalformedInput {
            instruction: instruction.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(order_id: OrderId, reason: impl Into<String>) -> Self {
        EngineError::InvariantViolation {
            order_id,
            reason: reason.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, EngineError::MalformedInput { .. })
    }
}

/// Errors from the line-by-line driver.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line_no}: {source}")]
    Engine {
        line_no: usize,
        #[source]
        source: EngineError,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
