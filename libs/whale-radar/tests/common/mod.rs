//! Common test utilities for whale radar integration tests

#![allow(dead_code)]

use chrono::Utc;
use whale_radar::domain::{Activity, Token, Transaction, TxId};
use whale_radar::infrastructure::FeedConfig;
use whale_radar::TransactionSource;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

/// Source that replays a fixed activity pattern with increasing ids
pub struct ScriptedSource {
    pattern: Vec<Activity>,
    next: u64,
}

impl ScriptedSource {
    pub fn new(pattern: Vec<Activity>) -> Self {
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self { pattern, next: 0 }
    }

    /// Every transaction is a buy
    pub fn buys() -> Self {
        Self::new(vec![Activity::Buy])
    }
}

impl TransactionSource for ScriptedSource {
    fn next_transaction(&mut self) -> Transaction {
        let activity = self.pattern[self.next as usize % self.pattern.len()];
        let tx = fixtures::tx(self.next, activity, 100, Token::Eth);
        self.next += 1;
        tx
    }
}

pub mod fixtures {
    //! Test fixtures for common data types

    use super::*;

    pub fn tx(id: u64, activity: Activity, amount: u32, token: Token) -> Transaction {
        Transaction::new(TxId::new(id), activity, "0x0123abcd...ef01", amount, token, Utc::now())
    }

    /// Reference timings with a deterministic RNG
    pub fn feed_config() -> FeedConfig {
        FeedConfig {
            rng_seed: Some(42),
            ..FeedConfig::default()
        }
    }
}
