//! Transaction model
//!
//! A synthetic whale transaction and the closed value domains it draws from.
//! Transactions are immutable once built: fields are private and only exposed
//! through accessors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Unique transaction identifier (monotonic within a process)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TxId(u64);

impl TxId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx-{:06}", self.0)
    }
}

/// Transaction classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Buy,
    Sell,
    Unusual,
    Exchange,
}

impl TxKind {
    pub const ALL: [TxKind; 4] = [TxKind::Buy, TxKind::Sell, TxKind::Unusual, TxKind::Exchange];

    /// Upper-case label used by the feed
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Buy => "BUY",
            TxKind::Sell => "SELL",
            TxKind::Unusual => "UNUSUAL",
            TxKind::Exchange => "EXCHANGE",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Buy => write!(f, "buy"),
            TxKind::Sell => write!(f, "sell"),
            TxKind::Unusual => write!(f, "unusual"),
            TxKind::Exchange => write!(f, "exchange"),
        }
    }
}

/// Tracked token symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Eth,
    Btc,
    Sol,
    Pepe,
    Arb,
    Op,
    Link,
    Uni,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::Eth,
        Token::Btc,
        Token::Sol,
        Token::Pepe,
        Token::Arb,
        Token::Op,
        Token::Link,
        Token::Uni,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Eth => "ETH",
            Token::Btc => "BTC",
            Token::Sol => "SOL",
            Token::Pepe => "PEPE",
            Token::Arb => "ARB",
            Token::Op => "OP",
            Token::Link => "LINK",
            Token::Uni => "UNI",
        }
    }

    /// Fixed USD unit price (not live)
    pub fn unit_price(&self) -> f64 {
        match self {
            Token::Eth => 3200.0,
            Token::Btc => 67000.0,
            Token::Sol => 145.0,
            Token::Pepe => 0.00001,
            Token::Arb => 1.2,
            Token::Op => 2.5,
            Token::Link => 14.0,
            Token::Uni => 9.0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.symbol().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown token symbol: {}", s))
    }
}

/// Unit price lookup by symbol; unknown symbols price at 1
pub fn price_for_symbol(symbol: &str) -> f64 {
    symbol.parse::<Token>().map(|t| t.unit_price()).unwrap_or(1.0)
}

/// Exchanges with tracked hot wallets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Exchange {
    Binance,
    Coinbase,
    Kraken,
    #[serde(rename = "OKX")]
    Okx,
    Bybit,
}

impl Exchange {
    pub const ALL: [Exchange; 5] = [
        Exchange::Binance,
        Exchange::Coinbase,
        Exchange::Kraken,
        Exchange::Okx,
        Exchange::Bybit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Exchange::Binance => "Binance",
            Exchange::Coinbase => "Coinbase",
            Exchange::Kraken => "Kraken",
            Exchange::Okx => "OKX",
            Exchange::Bybit => "Bybit",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Flow direction relative to the exchange wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

/// Exchange leg of an exchange transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeRoute {
    pub exchange: Exchange,
    pub direction: Direction,
}

impl ExchangeRoute {
    pub fn new(exchange: Exchange, direction: Direction) -> Self {
        Self { exchange, direction }
    }
}

/// What a transaction did. Only exchange activity carries a route, so
/// `exchange`/`direction` are present exactly when the kind is `Exchange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Buy,
    Sell,
    Unusual,
    Exchange(ExchangeRoute),
}

impl Activity {
    pub fn kind(&self) -> TxKind {
        match self {
            Activity::Buy => TxKind::Buy,
            Activity::Sell => TxKind::Sell,
            Activity::Unusual => TxKind::Unusual,
            Activity::Exchange(_) => TxKind::Exchange,
        }
    }

    pub fn route(&self) -> Option<ExchangeRoute> {
        match self {
            Activity::Exchange(route) => Some(*route),
            _ => None,
        }
    }
}

/// A synthetic whale transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "TransactionRecord")]
pub struct Transaction {
    id: TxId,
    activity: Activity,
    wallet: String,
    amount: u32,
    token: Token,
    timestamp: DateTime<Utc>,
    usd_value: f64,
}

impl Transaction {
    /// Build a transaction; `usd_value` is fixed here from the price table
    pub fn new(
        id: TxId,
        activity: Activity,
        wallet: impl Into<String>,
        amount: u32,
        token: Token,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            activity,
            wallet: wallet.into(),
            amount,
            token,
            timestamp,
            usd_value: f64::from(amount) * token.unit_price(),
        }
    }

    pub fn id(&self) -> TxId {
        self.id
    }

    pub fn kind(&self) -> TxKind {
        self.activity.kind()
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn usd_value(&self) -> f64 {
        self.usd_value
    }

    pub fn exchange(&self) -> Option<Exchange> {
        self.activity.route().map(|r| r.exchange)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.activity.route().map(|r| r.direction)
    }
}

/// Flat wire shape of a transaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    id: TxId,
    #[serde(rename = "type")]
    kind: TxKind,
    wallet: String,
    amount: u32,
    token: Token,
    timestamp: DateTime<Utc>,
    usd_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exchange: Option<Exchange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
}

impl From<Transaction> for TransactionRecord {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind(),
            exchange: tx.exchange(),
            direction: tx.direction(),
            wallet: tx.wallet,
            amount: tx.amount,
            token: tx.token,
            timestamp: tx.timestamp,
            usd_value: tx.usd_value,
        }
    }
}
