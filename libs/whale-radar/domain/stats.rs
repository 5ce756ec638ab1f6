//! Derived statistics
//!
//! Pure aggregates over a buffer snapshot: volume, per-kind counts, buy
//! pressure and per-exchange flows. Recomputed on every change, never stored
//! alongside the buffer.

use serde::Serialize;

use super::transaction::{Direction, Exchange, Transaction, TxKind};

/// Buy pressure reported when there are no buys or sells
pub const NEUTRAL_BUY_PRESSURE: f64 = 50.0;

/// Inflow/outflow totals for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeFlow {
    pub exchange: Exchange,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
}

impl ExchangeFlow {
    /// Sum flows for a single exchange
    pub fn compute(exchange: Exchange, transactions: &[Transaction]) -> Self {
        let mut inflow = 0.0;
        let mut outflow = 0.0;

        for tx in transactions.iter().filter(|tx| tx.exchange() == Some(exchange)) {
            match tx.direction() {
                Some(Direction::In) => inflow += tx.usd_value(),
                Some(Direction::Out) => outflow += tx.usd_value(),
                None => {}
            }
        }

        Self {
            exchange,
            inflow,
            outflow,
            net: inflow - outflow,
        }
    }

    /// Largest single inflow or outflow, floored at 1 for bar scaling
    pub fn max_flow(flows: &[ExchangeFlow]) -> f64 {
        flows
            .iter()
            .map(|f| f.inflow.max(f.outflow))
            .fold(1.0, f64::max)
    }
}

/// Summary statistics for a buffer snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_volume: f64,
    pub buy_count: usize,
    pub sell_count: usize,
    pub unusual_count: usize,
    pub buy_pressure: f64,
    pub flows: [ExchangeFlow; 5],
}

impl Stats {
    /// Compute stats for a buffer; total over every input including empty
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_volume = 0.0;
        let mut buy_count = 0;
        let mut sell_count = 0;
        let mut unusual_count = 0;

        for tx in transactions {
            total_volume += tx.usd_value();
            match tx.kind() {
                TxKind::Buy => buy_count += 1,
                TxKind::Sell => sell_count += 1,
                TxKind::Unusual => unusual_count += 1,
                TxKind::Exchange => {}
            }
        }

        Self {
            total_volume,
            buy_count,
            sell_count,
            unusual_count,
            buy_pressure: buy_pressure(buy_count, sell_count),
            flows: Exchange::ALL.map(|exchange| ExchangeFlow::compute(exchange, transactions)),
        }
    }

    /// Flow totals for one exchange
    pub fn flow(&self, exchange: Exchange) -> &ExchangeFlow {
        // flows is built from Exchange::ALL, so every exchange is present
        let idx = Exchange::ALL
            .iter()
            .position(|e| *e == exchange)
            .unwrap_or_default();
        &self.flows[idx]
    }

    pub fn max_flow(&self) -> f64 {
        ExchangeFlow::max_flow(&self.flows)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::compute(&[])
    }
}

/// Percentage of buys among buys and sells, neutral when both are zero
pub fn buy_pressure(buy_count: usize, sell_count: usize) -> f64 {
    let total = buy_count + sell_count;
    if total == 0 {
        NEUTRAL_BUY_PRESSURE
    } else {
        buy_count as f64 / total as f64 * 100.0
    }
}
