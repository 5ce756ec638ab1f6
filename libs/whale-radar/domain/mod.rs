//! Domain Layer
//!
//! Pure data types and computations with no runtime dependencies.

pub mod filter;
pub mod stats;
pub mod transaction;

pub use filter::FeedFilter;
pub use stats::{buy_pressure, ExchangeFlow, Stats, NEUTRAL_BUY_PRESSURE};
pub use transaction::{
    price_for_symbol, Activity, Direction, Exchange, ExchangeRoute, Token, Transaction, TxId,
    TxKind,
};
