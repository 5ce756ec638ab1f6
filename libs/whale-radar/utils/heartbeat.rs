//! Heartbeat for periodic status logging

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Decides when the runner should log another stats summary
pub struct Heartbeat {
    interval: Duration,
    last_beat: DateTime<Utc>,
    beats: u64,
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_beat: Utc::now(),
            beats: 0,
        }
    }

    pub fn from_secs(interval_secs: u64) -> Self {
        Self::new(Duration::from_secs(interval_secs))
    }

    /// Check if enough time has passed since the last beat
    pub fn should_beat(&self) -> bool {
        self.should_beat_at(Utc::now())
    }

    fn should_beat_at(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.last_beat);
        elapsed.to_std().unwrap_or_default() >= self.interval
    }

    /// Record a heartbeat at the current time
    pub fn beat(&mut self) {
        self.last_beat = Utc::now();
        self.beats += 1;
    }

    /// Beat if due; returns whether it did
    pub fn poll(&mut self) -> bool {
        if self.should_beat() {
            self.beat();
            true
        } else {
            false
        }
    }

    pub fn beats(&self) -> u64 {
        self.beats
    }

    pub fn last_beat(&self) -> DateTime<Utc> {
        self.last_beat
    }
}
