//! Rendering collaborator abstraction.

use crate::error::MapError;
use crate::types::{CameraPose, LayerSpec, LngLat, SourceOptions};
use geojson::FeatureCollection;

/// Abstraction over the rendering engine the animation drives.
///
/// The engine maintains a 3D scene with terrain and a free camera; the
/// animation core only issues commands against it. All calls are
/// synchronous from the core's perspective - there is no suspension point
/// inside a single frame step.
///
/// # Implementations
///
/// - **Production**: a thin adapter over a real map renderer.
/// - **Simulation**: `FakeMap` in `flyover_sim` - records every call for
///   assertions and answers terrain queries from a synthetic model.
///
/// # Failure semantics
///
/// `Err` results from update methods mean a source or layer was removed
/// externally. Callers treat these as skippable: log, drop the update, and
/// re-check next frame.
pub trait MapSurface: Send {
    /// Returns true if a geometry source with this id exists.
    fn has_source(&self, id: &str) -> bool;

    /// Registers a new geometry source.
    ///
    /// # Returns
    /// * `Err(MapError::DuplicateSource)` if the id is already taken.
    fn add_source(
        &mut self,
        id: &str,
        data: FeatureCollection,
        options: SourceOptions,
    ) -> Result<(), MapError>;

    /// Returns true if a paint layer with this id exists.
    fn has_layer(&self, id: &str) -> bool;

    /// Registers a new paint layer.
    ///
    /// # Returns
    /// * `Err(MapError::DuplicateLayer)` if the id is already taken.
    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), MapError>;

    /// Replaces the geometry held by an existing source.
    fn update_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError>;

    /// Sets a single paint property on an existing layer.
    fn set_layer_paint_property(
        &mut self,
        layer: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), MapError>;

    /// Samples the terrain elevation at a coordinate, in meters.
    ///
    /// # Returns
    /// * `None` if terrain data is not available at this coordinate (tile
    ///   not loaded, outside coverage). Callers must guard against this.
    fn query_terrain_elevation(&self, at: LngLat, exaggerated: bool) -> Option<f64>;

    /// Returns the current free camera pose.
    fn camera(&self) -> CameraPose;

    /// Applies a free camera pose - position, pitch and bearing together,
    /// within one frame.
    fn set_camera(&mut self, pose: CameraPose);
}
