//! Whale Radar
//!
//! Simulated whale transaction feed: a synthetic transaction generator, a
//! bounded newest-first stream buffer, derived statistics and a terminal
//! dashboard.
//!
//! ## Layers
//!
//! - **domain**: Transaction model, price table, stats aggregator, feed filter
//! - **application**: Generator, stream controller, activity pulse, feed service, visualizer
//! - **infrastructure**: Configuration and logging
//! - **utils**: Shutdown and heartbeat helpers for binaries

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export commonly used items
pub use application::{
    ActivityPulse, DashboardSnapshot, FeedHandle, FeedService, RandomGenerator, SharedDashboard,
    StreamController, TransactionSource,
};
pub use domain::{
    Direction, Exchange, ExchangeFlow, ExchangeRoute, FeedFilter, Stats, Token, Transaction, TxId,
    TxKind,
};
pub use infrastructure::{init_tracing, init_tracing_with_level, ConfigError, RadarConfig};
pub use utils::{Heartbeat, ShutdownManager};
