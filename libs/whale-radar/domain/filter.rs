//! Feed filter
//!
//! Read-side selection of transactions by kind. Filtering never reorders or
//! mutates the underlying buffer.

use std::fmt;
use std::str::FromStr;

use super::transaction::{Transaction, TxKind};

/// Filter tab requested by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedFilter {
    #[default]
    All,
    Buy,
    Sell,
    Unusual,
    Exchange,
}

impl FeedFilter {
    pub const ALL: [FeedFilter; 5] = [
        FeedFilter::All,
        FeedFilter::Buy,
        FeedFilter::Sell,
        FeedFilter::Unusual,
        FeedFilter::Exchange,
    ];

    /// Kind this filter selects, `None` for `All`
    pub fn kind(&self) -> Option<TxKind> {
        match self {
            FeedFilter::All => None,
            FeedFilter::Buy => Some(TxKind::Buy),
            FeedFilter::Sell => Some(TxKind::Sell),
            FeedFilter::Unusual => Some(TxKind::Unusual),
            FeedFilter::Exchange => Some(TxKind::Exchange),
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.kind().map_or(true, |kind| tx.kind() == kind)
    }

    /// Matching subsequence in original order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedFilter::All => "ALL",
            FeedFilter::Buy => "BUY",
            FeedFilter::Sell => "SELL",
            FeedFilter::Unusual => "UNUSUAL",
            FeedFilter::Exchange => "EXCHANGE",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or_default()
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl From<TxKind> for FeedFilter {
    fn from(kind: TxKind) -> Self {
        match kind {
            TxKind::Buy => FeedFilter::Buy,
            TxKind::Sell => FeedFilter::Sell,
            TxKind::Unusual => FeedFilter::Unusual,
            TxKind::Exchange => FeedFilter::Exchange,
        }
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label().to_lowercase())
    }
}

impl FromStr for FeedFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FeedFilter::All),
            "buy" => Ok(FeedFilter::Buy),
            "sell" => Ok(FeedFilter::Sell),
            "unusual" => Ok(FeedFilter::Unusual),
            "exchange" => Ok(FeedFilter::Exchange),
            other => Err(format!("unknown feed filter: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{Activity, Direction, Exchange, ExchangeRoute, Token, TxId};
    use chrono::Utc;

    fn buffer() -> Vec<Transaction> {
        let route = ExchangeRoute::new(Exchange::Binance, Direction::In);
        [
            Activity::Sell,
            Activity::Buy,
            Activity::Exchange(route),
            Activity::Buy,
            Activity::Unusual,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, a)| Transaction::new(TxId::new(i as u64), a, "0x", 100, Token::Arb, Utc::now()))
        .collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let txs = buffer();
        let buys: Vec<u64> = FeedFilter::Buy
            .apply(&txs)
            .iter()
            .map(|t| t.id().value())
            .collect();
        assert_eq!(buys, vec![1, 3]);

        let exchange = FeedFilter::Exchange.apply(&txs);
        assert_eq!(exchange.len(), 1);
        assert_eq!(exchange[0].id().value(), 2);
    }

    #[test]
    fn test_all_returns_everything() {
        let txs = buffer();
        let all = FeedFilter::All.apply(&txs);
        assert_eq!(all.len(), txs.len());
        assert!(all.iter().zip(txs.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(FeedFilter::All.next(), FeedFilter::Buy);
        assert_eq!(FeedFilter::Exchange.next(), FeedFilter::All);
        assert_eq!(FeedFilter::All.prev(), FeedFilter::Exchange);
    }

    #[test]
    fn test_parse() {
        assert_eq!("UNUSUAL".parse::<FeedFilter>().unwrap(), FeedFilter::Unusual);
        assert!("whale".parse::<FeedFilter>().is_err());
        assert_eq!(FeedFilter::from(TxKind::Sell), FeedFilter::Sell);
    }
}
