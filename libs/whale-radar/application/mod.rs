//! Application Layer
//!
//! Generator, stream controller, activity pulse and the feed service that
//! ties them to timers. Also hosts the terminal visualizer.
//! This layer depends on domain and infrastructure layers.

pub mod feed;
pub mod format;
pub mod generator;
pub mod pulse;
pub mod radar;
pub mod stream;
pub mod visualizer;

pub use feed::{DashboardSnapshot, FeedHandle, FeedService, SharedDashboard};
pub use generator::{RandomGenerator, TransactionSource, MAX_AMOUNT, MIN_AMOUNT};
pub use pulse::{ActivityPulse, PulseState, DEFAULT_PULSE_DURATION};
pub use stream::{StreamController, DEFAULT_CAPACITY, DEFAULT_SEED_COUNT};
