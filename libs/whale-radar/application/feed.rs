//! Feed service
//!
//! Drives the stream controller from a single tokio task:
//!
//! ```text
//! ┌──────────────────────────┐
//! │  Feed Task (owner)       │
//! │                          │
//! │  tick interval ──> tick  ├──> publish ──> SharedDashboard (RwLock)
//! │  pulse deadline ─> clear │              └─> watch<u64> version
//! └──────────────────────────┘
//! ```
//!
//! The task is the only writer. Each publish swaps in a complete
//! `DashboardSnapshot` under a short write lock, so readers never observe a
//! buffer without its matching stats.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::generator::{RandomGenerator, TransactionSource};
use super::pulse::ActivityPulse;
use super::stream::StreamController;
use crate::domain::{FeedFilter, Stats, Transaction};
use crate::infrastructure::FeedConfig;

/// Shared dashboard state read by consumers
pub type SharedDashboard = Arc<RwLock<DashboardSnapshot>>;

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Incremented on every published change
    pub version: u64,
    /// Buffer contents, newest first
    pub transactions: Arc<[Transaction]>,
    pub stats: Stats,
    pub pulse_active: bool,
}

impl DashboardSnapshot {
    pub fn empty() -> Self {
        Self {
            version: 0,
            transactions: Arc::from(Vec::new()),
            stats: Stats::default(),
            pulse_active: false,
        }
    }

    pub fn filter_by(&self, filter: FeedFilter) -> Vec<&Transaction> {
        filter.apply(&self.transactions)
    }

    pub fn head(&self) -> Option<&Transaction> {
        self.transactions.first()
    }
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Owns the stream, the pulse and their timers
pub struct FeedService<S> {
    stream: StreamController<S>,
    pulse: ActivityPulse,
    tick_interval: Duration,
    shared: SharedDashboard,
    version_tx: watch::Sender<u64>,
    version: u64,
}

impl FeedService<RandomGenerator> {
    /// Random feed per config (seeded when `rng_seed` is set)
    pub fn from_config(config: &FeedConfig) -> Self {
        let generator = match config.rng_seed {
            Some(seed) => RandomGenerator::seeded(seed),
            None => RandomGenerator::new(),
        };
        Self::new(generator, config)
    }
}

impl<S: TransactionSource + Send + 'static> FeedService<S> {
    /// Build the service, seed the buffer and publish the first snapshot
    pub fn new(source: S, config: &FeedConfig) -> Self {
        let mut stream = StreamController::new(source, config.capacity);
        stream.initialize(config.seed_count);

        let (version_tx, _) = watch::channel(0);

        let mut service = Self {
            stream,
            pulse: ActivityPulse::new(config.pulse_duration()),
            tick_interval: config.tick_interval(),
            shared: Arc::new(RwLock::new(DashboardSnapshot::empty())),
            version_tx,
            version: 0,
        };
        service.publish(Instant::now());
        service
    }

    pub fn shared(&self) -> SharedDashboard {
        Arc::clone(&self.shared)
    }

    /// Spawn on the current runtime
    pub fn spawn(self) -> FeedHandle {
        self.spawn_on(&Handle::current())
    }

    /// Spawn on an explicit runtime (for sync callers such as the TUI)
    pub fn spawn_on(self, runtime: &Handle) -> FeedHandle {
        let shared = self.shared();
        let updates = self.version_tx.subscribe();
        let shutdown = Arc::new(Notify::new());
        let task = runtime.spawn(self.run(Arc::clone(&shutdown)));

        FeedHandle {
            shared,
            updates,
            shutdown,
            task: Some(task),
        }
    }

    async fn run(mut self, shutdown: Arc<Notify>) {
        let start = Instant::now() + self.tick_interval;
        let mut ticker = tokio::time::interval_at(start, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Feed started: {} transactions, tick every {:?}",
            self.stream.len(),
            self.tick_interval
        );

        loop {
            let deadline = self.pulse.deadline();

            tokio::select! {
                _ = shutdown.notified() => break,
                _ = ticker.tick() => self.on_tick(Instant::now()),
                _ = wait_until(deadline) => self.on_pulse_deadline(Instant::now()),
            }
        }

        info!("Feed stopped after version {}", self.version);
    }

    fn on_tick(&mut self, now: Instant) {
        self.stream.tick();
        self.pulse.trigger(now);
        self.publish(now);
    }

    fn on_pulse_deadline(&mut self, now: Instant) {
        if self.pulse.expire(now) {
            debug!("Activity pulse cleared");
            self.publish(now);
        }
    }

    fn publish(&mut self, now: Instant) {
        let transactions = self.stream.snapshot();
        let stats = Stats::compute(&transactions);
        self.version += 1;

        let snapshot = DashboardSnapshot {
            version: self.version,
            transactions,
            stats,
            pulse_active: self.pulse.is_active(now),
        };

        *self.shared.write() = snapshot;
        // No receivers is fine; the shared state is still updated
        let _ = self.version_tx.send(self.version);
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Handle to a running feed task. Dropping it aborts the task, which
/// disarms every timer the feed owns.
pub struct FeedHandle {
    shared: SharedDashboard,
    updates: watch::Receiver<u64>,
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    pub fn shared(&self) -> SharedDashboard {
        Arc::clone(&self.shared)
    }

    /// Clone of the latest published snapshot
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.shared.read().clone()
    }

    /// Receiver that changes whenever a new snapshot is published
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.updates.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Stop the feed and wait for the task to exit
    pub async fn shutdown(mut self) {
        self.shutdown.notify_one();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
