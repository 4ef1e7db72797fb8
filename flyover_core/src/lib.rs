//! Flyover Core - Path Animation and Camera Control Engine
//!
//! Converts a static geographic path plus timing and camera parameters into
//! a deterministic sequence of per-frame camera poses, traveled-path
//! geometry, and slope color classifications:
//! 1. **Path sampling**: distance-to-position queries over a geodesic polyline
//! 2. **Slope classification**: elevation change per meter, bucketed to colors
//! 3. **Camera control**: trailing elevated pose derived from the ground position
//! 4. **Frame loop**: one synchronous step per scheduled frame, no missed or
//!    out-of-order frames

pub mod animation;
pub mod camera;
pub mod path;
pub mod slope;
pub mod state;
pub mod track;

// Re-export key types for convenience
pub use animation::{
    animate_path, animate_track, AnimationError, AnimationParams, AnimationReport, CancelToken,
    NoProgress, ProgressSink,
};
pub use path::{geodesic_distance, FlightPath, PathError};
pub use slope::SlopeColor;
pub use state::AnimationState;
pub use track::{TrackData, TrackPoint};
