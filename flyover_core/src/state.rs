//! Mutable per-run animation state.

use crate::slope::SlopeColor;
use flyover_env::LngLat;
use std::time::Duration;

/// Accumulator owned by exactly one running animation loop.
///
/// Created fresh for each invocation and discarded once the run resolves;
/// nothing here survives across runs. Frames are strictly sequential, so no
/// locking is needed.
///
/// Invariant: `traveled_coordinates` and `traveled_colors` grow by exactly
/// one entry per completed frame and stay index-aligned.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// First frame timestamp, latched lazily on the first step.
    pub start_time: Option<Duration>,

    /// Append-only ground positions, one per frame.
    pub traveled_coordinates: Vec<LngLat>,

    /// Append-only color tags, index-aligned with the coordinates.
    pub traveled_colors: Vec<SlopeColor>,

    /// Last sampled terrain elevation in floored meters; `None` until the
    /// first successful terrain query.
    pub previous_elevation: Option<i32>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches the start time on the first call and returns it.
    pub fn latch_start(&mut self, now: Duration) -> Duration {
        *self.start_time.get_or_insert(now)
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.traveled_coordinates.len()
    }

    /// The two most recent ground positions, oldest first. `None` until at
    /// least two frames have completed.
    pub fn last_step(&self) -> Option<(LngLat, LngLat)> {
        let n = self.traveled_coordinates.len();
        if n < 2 {
            return None;
        }
        Some((
            self.traveled_coordinates[n - 2],
            self.traveled_coordinates[n - 1],
        ))
    }
}
