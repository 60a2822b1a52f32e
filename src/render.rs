//! Fixed-width rendering of the book and of trades for the line driver.

use crate::execution::Trade;
use crate::order_book::{BookSnapshot, RestingOrderView};

const BORDER: &str = "+-----------------------------------------------------------------+";
const TITLE: &str = "| BUY                            | SELL                           |";
const COLUMNS: &str = "| Id       | Volume      | Price | Price | Volume      | Id       |";
const RULE: &str = "+----------+-------------+-------+-------+-------------+----------+";
const BUY_EMPTY: &str = "|          |             |       |";
const SELL_EMPTY: &str = "|       |             |          |";

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn buy_cell(order: &RestingOrderView) -> String {
    format!(
        "{:>10}|{:>13}|{:>7}",
        order.id,
        group_thousands(i128::from(order.displayed_volume)),
        group_thousands(i128::from(order.price))
    )
}

fn sell_cell(order: &RestingOrderView) -> String {
    format!(
        "{:>7}|{:>13}|{:>10}",
        group_thousands(i128::from(order.price)),
        group_thousands(i128::from(order.displayed_volume)),
        order.id
    )
}

/// Renders both sides side by side, best prices on the first row.
pub fn render_book(snapshot: &BookSnapshot) -> String {
    let mut out = String::new();
    for line in [BORDER, TITLE, COLUMNS, RULE] {
        out.push_str(line);
        out.push('\n');
    }
    let rows = snapshot.bids.len().max(snapshot.asks.len());
    for i in 0..rows {
        let row = match (snapshot.bids.get(i), snapshot.asks.get(i)) {
            (Some(bid), Some(ask)) => format!("|{}|{}|", buy_cell(bid), sell_cell(ask)),
            (Some(bid), None) => format!("|{}{}", buy_cell(bid), SELL_EMPTY),
            (None, Some(ask)) => format!("{}{}|", BUY_EMPTY, sell_cell(ask)),
            (None, None) => break,
        };
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}

/// One `resting,incoming,price,quantity` line per trade.
pub fn render_trades(trades: &[Trade]) -> String {
    let mut out = String::new();
    for trade in trades {
        out.push_str(&trade.to_string());
        out.push('\n');
    }
    out
}
