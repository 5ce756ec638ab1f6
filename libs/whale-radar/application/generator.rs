//! Random transaction generator
//!
//! Produces one synthetic whale transaction per call from the fixed value
//! domains. Ids come from a monotonic counter so they never collide within a
//! generator's lifetime.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{Activity, Direction, Exchange, ExchangeRoute, Token, Transaction, TxId, TxKind};

/// Smallest generated amount (inclusive)
pub const MIN_AMOUNT: u32 = 100;
/// Upper bound on generated amounts (exclusive)
pub const MAX_AMOUNT: u32 = 10_100;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Anything that can hand the stream controller its next transaction
pub trait TransactionSource {
    fn next_transaction(&mut self) -> Transaction;
}

/// Uniform random generator over the closed transaction domains
pub struct RandomGenerator<R = StdRng> {
    rng: R,
    next_id: u64,
}

impl RandomGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Generate one transaction
    pub fn generate(&mut self) -> Transaction {
        let kind = pick(&mut self.rng, &TxKind::ALL);
        let token = pick(&mut self.rng, &Token::ALL);
        let amount = self.rng.gen_range(MIN_AMOUNT..MAX_AMOUNT);
        let wallet = self.wallet();

        let activity = match kind {
            TxKind::Buy => Activity::Buy,
            TxKind::Sell => Activity::Sell,
            TxKind::Unusual => Activity::Unusual,
            TxKind::Exchange => {
                let exchange = pick(&mut self.rng, &Exchange::ALL);
                let direction = if self.rng.gen_bool(0.5) {
                    Direction::In
                } else {
                    Direction::Out
                };
                Activity::Exchange(ExchangeRoute::new(exchange, direction))
            }
        };

        let id = TxId::new(self.next_id);
        self.next_id += 1;

        Transaction::new(id, activity, wallet, amount, token, Utc::now())
    }

    /// Display-only pseudo address: `0x` + 8 hex + `...` + 4 hex
    fn wallet(&mut self) -> String {
        let mut wallet = String::with_capacity(17);
        wallet.push_str("0x");
        self.push_hex(&mut wallet, 8);
        wallet.push_str("...");
        self.push_hex(&mut wallet, 4);
        wallet
    }

    fn push_hex(&mut self, out: &mut String, count: usize) {
        for _ in 0..count {
            let idx = self.rng.gen_range(0..HEX_CHARS.len());
            out.push(HEX_CHARS[idx] as char);
        }
    }
}

impl<R: Rng> TransactionSource for RandomGenerator<R> {
    fn next_transaction(&mut self) -> Transaction {
        self.generate()
    }
}

fn pick<R: Rng, T: Copy>(rng: &mut R, values: &[T]) -> T {
    // values are non-empty constant tables
    *values.choose(rng).unwrap_or(&values[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_wallet_shaped(wallet: &str) -> bool {
        let bytes = wallet.as_bytes();
        wallet.len() == 17
            && wallet.starts_with("0x")
            && &wallet[10..13] == "..."
            && bytes[2..10].iter().chain(&bytes[13..17]).all(|b| HEX_CHARS.contains(b))
    }

    #[test]
    fn test_generated_fields_in_domain() {
        let mut generator = RandomGenerator::seeded(7);

        for _ in 0..2_000 {
            let tx = generator.generate();
            assert!((MIN_AMOUNT..MAX_AMOUNT).contains(&tx.amount()));
            assert_eq!(tx.usd_value(), f64::from(tx.amount()) * tx.token().unit_price());
            assert_eq!(tx.kind() == TxKind::Exchange, tx.exchange().is_some());
            assert_eq!(tx.kind() == TxKind::Exchange, tx.direction().is_some());
            assert!(is_wallet_shaped(tx.wallet()), "bad wallet {}", tx.wallet());
        }
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut generator = RandomGenerator::seeded(1);
        let ids: Vec<u64> = (0..100).map(|_| generator.generate().id().value()).collect();
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_covers_every_kind_and_token() {
        let mut generator = RandomGenerator::seeded(99);
        let txs: Vec<Transaction> = (0..1_000).map(|_| generator.generate()).collect();

        for kind in TxKind::ALL {
            assert!(txs.iter().any(|t| t.kind() == kind), "missing kind {}", kind);
        }
        for token in Token::ALL {
            assert!(txs.iter().any(|t| t.token() == token), "missing token {}", token);
        }
        for exchange in Exchange::ALL {
            assert!(txs.iter().any(|t| t.exchange() == Some(exchange)));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomGenerator::seeded(5);
        let mut b = RandomGenerator::seeded(5);
        for _ in 0..20 {
            let (x, y) = (a.generate(), b.generate());
            assert_eq!(x.kind(), y.kind());
            assert_eq!(x.wallet(), y.wallet());
            assert_eq!(x.amount(), y.amount());
        }
    }
}
