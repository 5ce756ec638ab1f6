//! Activity pulse
//!
//! Two-state machine signalling "a transaction just arrived". A trigger moves
//! it to `Active` until a deadline; a newer trigger simply pushes the deadline
//! out. Nothing is queued.

use std::time::Duration;

use tokio::time::Instant;

/// Reference pulse duration
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseState {
    Idle,
    Active { until: Instant },
}

#[derive(Debug, Clone)]
pub struct ActivityPulse {
    state: PulseState,
    duration: Duration,
}

impl ActivityPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: PulseState::Idle,
            duration,
        }
    }

    /// Enter (or stay in) `Active`, restarting the clear timer from `now`
    pub fn trigger(&mut self, now: Instant) {
        self.state = PulseState::Active {
            until: now + self.duration,
        };
    }

    /// Fall back to `Idle` once the deadline has passed. Returns true when a
    /// transition happened.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.state {
            PulseState::Active { until } if now >= until => {
                self.state = PulseState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.state, PulseState::Active { until } if now < until)
    }

    /// When the active pulse clears, if any
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            PulseState::Active { until } => Some(until),
            PulseState::Idle => None,
        }
    }

    pub fn state(&self) -> PulseState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for ActivityPulse {
    fn default() -> Self {
        Self::new(DEFAULT_PULSE_DURATION)
    }
}
