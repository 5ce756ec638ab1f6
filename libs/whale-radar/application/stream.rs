//! Stream buffer controller
//!
//! Single owner of the newest-first transaction buffer. The only mutations
//! are the one-time seed and `tick` (prepend + truncate); everyone else gets
//! immutable snapshots.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, warn};

use super::generator::TransactionSource;
use crate::domain::{FeedFilter, Transaction};

/// Reference buffer capacity
pub const DEFAULT_CAPACITY: usize = 50;
/// Reference number of transactions seeded at startup
pub const DEFAULT_SEED_COUNT: usize = 15;

/// Owns the bounded transaction buffer and its source
pub struct StreamController<S> {
    source: S,
    buffer: VecDeque<Transaction>,
    capacity: usize,
    initialized: bool,
}

impl<S: TransactionSource> StreamController<S> {
    /// Create an empty controller; `capacity` is clamped to at least 1
    pub fn new(source: S, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            source,
            buffer: VecDeque::with_capacity(capacity + 1),
            capacity,
            initialized: false,
        }
    }

    /// Seed the buffer with `seed_count` fresh transactions in generation
    /// order. Only the first call has any effect.
    pub fn initialize(&mut self, seed_count: usize) {
        if self.initialized {
            warn!("Stream already initialized, ignoring seed of {}", seed_count);
            return;
        }
        self.initialized = true;

        for _ in 0..seed_count {
            let tx = self.source.next_transaction();
            self.buffer.push_back(tx);
        }
        self.buffer.truncate(self.capacity);

        debug!("Stream seeded with {} transactions", self.buffer.len());
    }

    /// Generate one transaction, put it at the head and drop anything past
    /// capacity from the tail. Returns the new head.
    pub fn tick(&mut self) -> &Transaction {
        let tx = self.source.next_transaction();
        debug!(id = %tx.id(), kind = %tx.kind(), usd = tx.usd_value(), "New transaction");

        self.buffer.push_front(tx);
        self.buffer.truncate(self.capacity);

        &self.buffer[0]
    }

    /// Immutable copy of the buffer, newest first
    pub fn snapshot(&self) -> Arc<[Transaction]> {
        self.buffer.iter().cloned().collect()
    }

    /// Transactions matching `filter`, in buffer order
    pub fn filter_by(&self, filter: FeedFilter) -> Vec<&Transaction> {
        self.buffer.iter().filter(|tx| filter.matches(tx)).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn head(&self) -> Option<&Transaction> {
        self.buffer.front()
    }
}
