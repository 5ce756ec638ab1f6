//! Main application state for the radar visualizer

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tracing::info;

use crate::application::feed::{DashboardSnapshot, FeedHandle, FeedService};
use crate::application::radar::{layout_blips, Blip, Sweep};
use crate::domain::{FeedFilter, Transaction};
use crate::infrastructure::RadarConfig;

/// Main application state
pub struct App {
    /// Running feed (dropping it stops the feed)
    feed: FeedHandle,
    /// Latest snapshot pulled from the feed
    pub snapshot: DashboardSnapshot,
    /// Selected feed tab
    pub filter: FeedFilter,
    /// Cosmetic sweep rotation
    pub sweep: Sweep,
    /// Blip layout for the current buffer
    pub blips: Vec<Blip>,
    /// Jitter for blip placement
    rng: StdRng,
    /// Buffer capacity, for the footer
    pub capacity: usize,
    /// Whether to quit
    pub should_quit: bool,
}

impl App {
    /// Start the feed on `runtime` and take the first snapshot
    pub fn initialize(runtime: &Handle, config: &RadarConfig) -> Self {
        let feed = FeedService::from_config(&config.feed).spawn_on(runtime);
        info!("[Visualizer] Feed started");

        let mut app = Self {
            feed,
            snapshot: DashboardSnapshot::empty(),
            filter: FeedFilter::All,
            sweep: Sweep::new(),
            blips: Vec::new(),
            rng: StdRng::from_entropy(),
            capacity: config.feed.capacity,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Pull the latest snapshot; blips are re-laid out only when the buffer
    /// itself changed (a pulse clear keeps the layout).
    pub fn refresh(&mut self) {
        let latest = self.feed.snapshot();
        if latest.version == self.snapshot.version {
            return;
        }

        let buffer_changed = latest.transactions.len() != self.snapshot.transactions.len()
            || latest.head().map(|t| t.id()) != self.snapshot.head().map(|t| t.id());

        if buffer_changed {
            self.blips = layout_blips(&latest.transactions, &mut self.rng);
        }
        self.snapshot = latest;
    }

    /// Transactions for the selected tab
    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        self.snapshot.filter_by(self.filter)
    }

    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
    }

    /// Select a tab by its 0-based position; out of range is ignored
    pub fn select_filter(&mut self, index: usize) {
        if let Some(filter) = FeedFilter::ALL.get(index) {
            self.filter = *filter;
        }
    }

    pub fn pulse_active(&self) -> bool {
        self.snapshot.pulse_active
    }

    /// Stop the feed task
    pub async fn shutdown(self) {
        self.feed.shutdown().await;
    }
}
