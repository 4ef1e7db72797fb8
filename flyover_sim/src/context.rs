//! Simulated frame clock for deterministic animation runs.

use async_trait::async_trait;
use flyover_env::FrameClock;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default simulated frame interval (60 Hz).
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Frame clock backed by a virtual clock and a seeded RNG.
///
/// `next_frame()` never sleeps: it advances the virtual clock by the frame
/// interval plus an optional jitter drawn from a ChaCha8 RNG seeded with
/// the master seed, then returns the new timestamp. Identical seeds and
/// settings produce identical frame timelines.
pub struct SimFrameClock {
    /// Master seed for this simulation
    seed: u64,

    /// Current virtual time (nanoseconds since simulation start)
    virtual_time_ns: Arc<Mutex<u64>>,

    /// Nominal interval between frames
    frame_interval: Duration,

    /// Maximum extra delay added per frame (models late wakeups)
    max_jitter: Duration,

    /// Deterministic RNG driving the jitter
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SimFrameClock {
    /// Creates a jitter-free 60 Hz clock with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            virtual_time_ns: Arc::new(Mutex::new(0)),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            max_jitter: Duration::ZERO,
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    /// Sets the nominal frame interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Sets the maximum per-frame jitter. Each frame is delayed by a
    /// deterministic amount in `[0, max_jitter]`.
    pub fn with_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Advances virtual time by the given duration.
    pub fn advance_time(&self, duration: Duration) {
        let mut time = self.virtual_time_ns.lock().unwrap();
        *time += duration.as_nanos() as u64;
    }

    /// Returns the current virtual time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        *self.virtual_time_ns.lock().unwrap()
    }

    /// Returns the clock's seed (for logging).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[async_trait]
impl FrameClock for SimFrameClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(*self.virtual_time_ns.lock().unwrap())
    }

    async fn next_frame(&self) -> Duration {
        let jitter_ns = if self.max_jitter.is_zero() {
            0
        } else {
            let mut rng = self.rng.lock().unwrap();
            rng.gen_range(0..=self.max_jitter.as_nanos() as u64)
        };
        let step = self.frame_interval.as_nanos() as u64 + jitter_ns;
        let mut time = self.virtual_time_ns.lock().unwrap();
        *time += step;
        Duration::from_nanos(*time)
    }
}
