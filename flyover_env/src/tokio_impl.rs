//! Production implementation of FrameClock using Tokio.

use crate::FrameClock;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default frame interval, approximating a 60 Hz display refresh.
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Production frame clock backed by Tokio timers.
///
/// This is the "real" implementation used when driving an actual renderer.
/// Pacing is best-effort: `next_frame()` sleeps for the configured interval
/// and reports the wall time that actually elapsed, so a late wakeup simply
/// advances the animation further.
pub struct TokioFrameClock {
    /// Start time for monotonic duration calculations
    start: Instant,

    /// Target interval between frames
    frame_interval: Duration,
}

impl TokioFrameClock {
    /// Creates a clock paced at roughly 60 frames per second.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// Creates a clock with an explicit frame interval.
    pub fn with_interval(frame_interval: Duration) -> Self {
        Self {
            start: Instant::now(),
            frame_interval,
        }
    }

    /// Creates an Arc-wrapped clock for sharing across tasks.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Default for TokioFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameClock for TokioFrameClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    async fn next_frame(&self) -> Duration {
        tokio::time::sleep(self.frame_interval).await;
        self.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_clock_advances() {
        let clock = TokioFrameClock::with_interval(Duration::from_millis(5));
        let t1 = clock.now();
        let t2 = clock.next_frame().await;

        assert!(t2 > t1);
        assert!(t2 - t1 >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_tokio_clock_frames_are_monotonic() {
        let clock = TokioFrameClock::with_interval(Duration::from_millis(1));
        let mut last = clock.now();
        for _ in 0..5 {
            let t = clock.next_frame().await;
            assert!(t > last);
            last = t;
        }
    }
}
