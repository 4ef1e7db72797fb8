//! Frame scheduling trait for the animation loop.

use async_trait::async_trait;
use std::time::Duration;

/// The central interface for frame-synchronized scheduling.
///
/// The animation loop is a cooperative task: it runs one synchronous step
/// per frame, then suspends on `next_frame()` until the scheduler wakes it
/// again. Frames are strictly sequential; a step never begins before the
/// previous one has returned.
///
/// # Implementations
///
/// - **Production**: `TokioFrameClock` - wraps `tokio::time`, best-effort
///   display-refresh pacing.
/// - **Simulation**: `SimFrameClock` - a seeded virtual clock that advances
///   by one (optionally jittered) frame interval per call.
///
/// # Determinism
///
/// The timestamps returned by `next_frame()` are the only source of time
/// the animation engine sees, so a deterministic implementation makes the
/// whole run reproducible from a seed.
#[async_trait]
pub trait FrameClock: Send + Sync {
    /// Returns the current monotonic time since clock creation.
    fn now(&self) -> Duration;

    /// Suspends until the next scheduled frame and returns its timestamp.
    ///
    /// The interval between frames is best-effort and implementation
    /// dependent; callers must derive animation progress from the returned
    /// timestamps, never from a frame count.
    async fn next_frame(&self) -> Duration;
}
