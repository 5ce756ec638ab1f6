//! Radar geometry
//!
//! Blip placement and sweep rotation on a 100x100 plane centred at (50, 50).
//! Purely cosmetic; nothing here feeds back into the stream.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::domain::{Transaction, TxId, TxKind};

/// Newest transactions shown as blips
pub const MAX_BLIPS: usize = 12;
pub const CENTER: f64 = 50.0;
/// Rings drawn at these radii (already scaled to the plane)
pub const RING_RADII: [f64; 5] = [9.0, 15.75, 22.5, 29.25, 36.0];
/// Sweep advances one degree per step
pub const SWEEP_STEP: Duration = Duration::from_millis(30);

const DISTANCE_SCALE: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct Blip {
    pub id: TxId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub kind: TxKind,
    /// 0 for the newest transaction
    pub age: usize,
}

impl Blip {
    /// Older blips fade out
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age as f64 * 0.06).max(0.0)
    }
}

/// Place up to `MAX_BLIPS` of the newest transactions around the centre
pub fn layout_blips<R: Rng>(transactions: &[Transaction], rng: &mut R) -> Vec<Blip> {
    transactions
        .iter()
        .take(MAX_BLIPS)
        .enumerate()
        .map(|(i, tx)| {
            let angle = (i as f64 * 30.0 + rng.gen_range(0.0..20.0)).to_radians();
            let distance = 20.0 + rng.gen_range(0.0..70.0);

            Blip {
                id: tx.id(),
                x: CENTER + angle.cos() * distance * DISTANCE_SCALE,
                y: CENTER + angle.sin() * distance * DISTANCE_SCALE,
                size: (tx.usd_value() / 100_000.0).clamp(4.0, 16.0),
                kind: tx.kind(),
                age: i,
            }
        })
        .collect()
}

/// Sweep angle in degrees after `elapsed`
pub fn sweep_angle(elapsed: Duration) -> u16 {
    ((elapsed.as_millis() / SWEEP_STEP.as_millis()) % 360) as u16
}

/// Rotating sweep line driven by wall-clock time
#[derive(Debug, Clone)]
pub struct Sweep {
    started: Instant,
}

impl Sweep {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn angle(&self) -> u16 {
        sweep_angle(self.started.elapsed())
    }

    /// End point of the sweep line at `radius` from the centre
    pub fn endpoint(&self, radius: f64) -> (f64, f64) {
        let rad = f64::from(self.angle()).to_radians();
        (CENTER + rad.cos() * radius, CENTER + rad.sin() * radius)
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new()
    }
}
