//! Line protocol: one comma-separated instruction per line.
//!
//! `S,1,100,10` is a limit sell, `B,4,50,100,10` an iceberg buy with peak 10.
//! Blank lines and lines starting with `#` carry no instruction.

use crate::error::Result;
use crate::order::Order;

pub const INPUT_SEPARATOR: char = ',';
pub const COMMENT_PREFIX: char = '#';

/// Parses one input line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Order>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }
    let fields: Vec<&str> = line.split(INPUT_SEPARATOR).collect();
    Order::from_fields(line, &fields).map(Some)
}
