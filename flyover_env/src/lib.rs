//! Flyover Environment Abstraction Layer
//!
//! This crate provides the "Sans-IO" abstraction allowing the Flyover
//! animation engine to run against both a **real** rendering host and a
//! **simulated** one.
//!
//! Two seams are intercepted:
//! - Time and frame scheduling (`FrameClock`): the engine never calls a
//!   wall clock or timer directly, it awaits the next frame callback.
//! - The rendering collaborator (`MapSurface`): sources, layers, paint
//!   properties, terrain elevation queries, and the free camera pose.
//!
//! By implementing both traits over a seeded virtual clock and a recording
//! map, an entire animation run becomes deterministic and replayable.
//!
//! # Example
//!
//! ```ignore
//! use flyover_env::{FrameClock, MapSurface};
//!
//! async fn run<C: FrameClock, M: MapSurface>(clock: &C, map: &mut M) {
//!     loop {
//!         let now = clock.next_frame().await;
//!         step(map, now);
//!     }
//! }
//! ```

mod context;
mod error;
mod map;
mod tokio_impl;
mod types;

pub use context::FrameClock;
pub use error::MapError;
pub use map::MapSurface;
pub use tokio_impl::TokioFrameClock;
pub use types::{CameraPose, LayerSpec, LayerType, LngLat, MercatorCoord, SourceOptions};
