//! Price-time priority matching.
//!
//! [`match_order`] runs one incoming order against the opposite side of the book;
//! [`submit`] composes it with insertion of whatever remains.

use crate::error::{EngineError, Result};
use crate::execution::Trade;
use crate::order::Order;
use crate::order_book::OrderBook;
use crate::types::Side;

/// Whether `incoming` may trade at `resting`'s price without breaching its limit.
pub fn is_trade_possible(resting: &Order, incoming: &Order) -> bool {
    match incoming.side {
        Side::Buy => resting.price <= incoming.price,
        Side::Sell => resting.price >= incoming.price,
    }
}

/// Trades `incoming` against the opposite side until it is filled, the side is
/// empty, or the best resting price no longer crosses.
///
/// Every trade executes at the resting price and for the full remaining
/// quantities (iceberg peaks do not limit fills). Filled resting orders are
/// removed. `incoming` is never inserted.
pub fn match_order(book: &mut OrderBook, incoming: &mut Order) -> Vec<Trade> {
    let opposite = incoming.side.opposite();
    let mut trades = Vec::new();
    while incoming.quantity > 0 {
        let Some(resting) = book.front_mut(opposite) else {
            break;
        };
        if !is_trade_possible(resting, incoming) {
            break;
        }
        let quantity = incoming.quantity.min(resting.quantity);
        resting.quantity -= quantity;
        incoming.quantity -= quantity;
        trades.push(Trade {
            resting_order_id: resting.id,
            incoming_order_id: incoming.id,
            price: resting.price,
            quantity,
        });
        if resting.is_filled() {
            book.remove_front(opposite);
        }
    }
    trades
}

/// Matches `order`, then rests it iff quantity remains. Runs to completion.
///
/// An id that is already resting is rejected before matching, so a rejected
/// submission never trades and never changes the book.
pub fn submit(book: &mut OrderBook, mut order: Order) -> Result<Vec<Trade>> {
    if book.contains(order.id) {
        return Err(EngineError::invariant(order.id, "order is already resting"));
    }
    let trades = match_order(book, &mut order);
    if !order.is_filled() {
        book.insert(order)?;
    }
    Ok(trades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderId;

    fn trade(resting: u64, incoming: u64, price: i64, quantity: u64) -> Trade {
        Trade {
            resting_order_id: OrderId(resting),
            incoming_order_id: OrderId(incoming),
            price,
            quantity,
        }
    }

    fn levels(orders: &[Order]) -> Vec<(u64, i64, u64)> {
        orders.iter().map(|o| (o.id.0, o.price, o.quantity)).collect()
    }

    #[test]
    fn trade_possible_respects_incoming_limit() {
        let ask = Order::limit(OrderId(1), Side::Sell, 100, 1);
        assert!(is_trade_possible(&ask, &Order::limit(OrderId(2), Side::Buy, 100, 1)));
        assert!(is_trade_possible(&ask, &Order::limit(OrderId(2), Side::Buy, 101, 1)));
        assert!(!is_trade_possible(&ask, &Order::limit(OrderId(2), Side::Buy, 99, 1)));

        let bid = Order::limit(OrderId(3), Side::Buy, 100, 1);
        assert!(is_trade_possible(&bid, &Order::limit(OrderId(4), Side::Sell, 100, 1)));
        assert!(is_trade_possible(&bid, &Order::limit(OrderId(4), Side::Sell, 99, 1)));
        assert!(!is_trade_possible(&bid, &Order::limit(OrderId(4), Side::Sell, 101, 1)));
    }

    #[test]
    fn resting_sell_then_partial_buy() {
        let mut book = OrderBook::new();
        let trades = submit(&mut book, Order::limit(OrderId(1), Side::Sell, 100, 10)).unwrap();
        assert!(trades.is_empty());
        assert_eq!(levels(book.asks()), vec![(1, 100, 10)]);

        let trades = submit(&mut book, Order::limit(OrderId(2), Side::Buy, 100, 4)).unwrap();
        assert_eq!(trades, vec![trade(1, 2, 100, 4)]);
        assert_eq!(levels(book.asks()), vec![(1, 100, 6)]);
        assert!(book.bids().is_empty());

        let trades = submit(&mut book, Order::limit(OrderId(3), Side::Buy, 101, 6)).unwrap();
        assert_eq!(trades, vec![trade(1, 3, 100, 6)]);
        assert!(book.is_empty());
    }

    #[test]
    fn iceberg_trades_full_quantity_not_peak() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::iceberg(OrderId(4), Side::Sell, 50, 100, 10)).unwrap();
        assert_eq!(book.asks()[0].displayed_volume(), 10);

        let trades = submit(&mut book, Order::limit(OrderId(5), Side::Buy, 50, 100)).unwrap();
        assert_eq!(trades, vec![trade(4, 5, 50, 100)]);
        assert!(book.is_empty());
        assert!(!book.contains(OrderId(5)));
    }

    #[test]
    fn sweeps_levels_at_resting_prices() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Buy, 99, 5)).unwrap();
        submit(&mut book, Order::limit(OrderId(2), Side::Buy, 101, 5)).unwrap();
        submit(&mut book, Order::limit(OrderId(3), Side::Buy, 100, 5)).unwrap();

        let trades = submit(&mut book, Order::limit(OrderId(4), Side::Sell, 100, 12)).unwrap();
        assert_eq!(trades, vec![trade(2, 4, 101, 5), trade(3, 4, 100, 5)]);
        // 2 left over at 100 rests as the best ask; the 99 bid does not cross.
        assert_eq!(levels(book.asks()), vec![(4, 100, 2)]);
        assert_eq!(levels(book.bids()), vec![(1, 99, 5)]);
    }

    #[test]
    fn equal_price_matches_earliest_first() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Sell, 100, 5)).unwrap();
        submit(&mut book, Order::limit(OrderId(2), Side::Sell, 100, 5)).unwrap();
        let trades = submit(&mut book, Order::limit(OrderId(3), Side::Buy, 100, 7)).unwrap();
        assert_eq!(trades, vec![trade(1, 3, 100, 5), trade(2, 3, 100, 2)]);
        assert_eq!(levels(book.asks()), vec![(2, 100, 3)]);
    }

    #[test]
    fn no_cross_means_no_trade() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Sell, 101, 5)).unwrap();
        let mut incoming = Order::limit(OrderId(2), Side::Buy, 100, 5);
        let trades = match_order(&mut book, &mut incoming);
        assert!(trades.is_empty());
        assert_eq!(incoming.quantity, 5);
        // match_order alone never rests the incoming order.
        assert!(book.bids().is_empty());
    }

    #[test]
    fn match_order_leaves_remainder_on_incoming() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Buy, 100, 3)).unwrap();
        let mut incoming = Order::iceberg(OrderId(2), Side::Sell, 95, 10, 1);
        let trades = match_order(&mut book, &mut incoming);
        assert_eq!(trades, vec![trade(1, 2, 100, 3)]);
        assert_eq!(incoming.quantity, 7);
        assert!(book.is_empty());
    }

    #[test]
    fn zero_quantity_incoming_neither_trades_nor_rests() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Sell, 100, 5)).unwrap();
        let trades = submit(&mut book, Order::limit(OrderId(2), Side::Buy, 100, 0)).unwrap();
        assert!(trades.is_empty());
        assert_eq!(levels(book.asks()), vec![(1, 100, 5)]);
        assert!(book.bids().is_empty());
    }

    #[test]
    fn resting_id_is_rejected_before_matching() {
        let mut book = OrderBook::new();
        submit(&mut book, Order::limit(OrderId(1), Side::Buy, 90, 5)).unwrap();
        submit(&mut book, Order::limit(OrderId(2), Side::Buy, 100, 3)).unwrap();

        // Would cross bid 2 at 100 if it were allowed to match.
        let err = submit(&mut book, Order::limit(OrderId(1), Side::Sell, 95, 10)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvariantViolation {
                order_id: OrderId(1),
                reason: "order is already resting".into(),
            }
        );
        assert_eq!(levels(book.bids()), vec![(2, 100, 3), (1, 90, 5)]);
        assert!(book.asks().is_empty());
    }

    #[test]
    fn book_is_never_crossed_after_submit() {
        let mut book = OrderBook::new();
        let flow = [
            Order::limit(OrderId(1), Side::Sell, 101, 10),
            Order::limit(OrderId(2), Side::Buy, 99, 10),
            Order::iceberg(OrderId(3), Side::Sell, 100, 10, 2),
            Order::limit(OrderId(4), Side::Buy, 100, 4),
            Order::limit(OrderId(5), Side::Buy, 102, 30),
        ];
        for order in flow {
            submit(&mut book, order).unwrap();
            if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                assert!(bid < ask, "crossed book: bid {} ask {}", bid, ask);
            }
        }
        assert_eq!(levels(book.bids()), vec![(5, 102, 14), (2, 99, 10)]);
        assert!(book.asks().is_empty());
    }
}
