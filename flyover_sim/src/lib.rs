//! Flyover Deterministic Simulation Harness
//!
//! This crate provides a controlled environment where a whole camera
//! flight runs deterministically, with every source of non-determinism
//! intercepted:
//! - **Time**: a virtual frame clock that advances by one (optionally
//!   jittered) interval per frame, derived from a 64-bit seed
//! - **Terrain**: synthetic elevation models instead of loaded tiles
//! - **The map**: a recording `MapSurface` that captures every source,
//!   layer, paint, and camera call for assertions
//!
//! Any animation bug becomes reproducible via its seed number.
//!
//! # Usage
//!
//! ```ignore
//! use flyover_sim::{FakeMap, SimFrameClock, TerrainModel};
//!
//! let clock = SimFrameClock::new(42);
//! let mut map = FakeMap::new(TerrainModel::Ridge {
//!     base_m: 1500.0,
//!     amplitude_m: 400.0,
//!     wavelength_deg: 0.01,
//! });
//! ```

mod context;
mod map;
mod route;
mod terrain;

pub use context::SimFrameClock;
pub use map::FakeMap;
pub use route::{loop_route, straight_route};
pub use terrain::TerrainModel;
