//! Frame-by-frame animation loop driving the map surface.
//!
//! One invocation of [`animate_path`] owns one [`AnimationState`], steps it
//! once per scheduled frame, and resolves exactly once when the animation
//! phase (elapsed / duration) first exceeds 1. Each step is synchronous;
//! the only suspension point is between frames on `FrameClock::next_frame`.

use crate::camera;
use crate::path::{geodesic_distance, FlightPath, PathError};
use crate::slope::SlopeColor;
use crate::state::AnimationState;
use crate::track::TrackData;

use flyover_env::{FrameClock, LayerSpec, LayerType, LngLat, MapSurface, SourceOptions};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Source id for the growing traveled polyline.
pub const PATH_SOURCE: &str = "path-source";
/// Layer id for the gradient-painted traveled line.
pub const PATH_LAYER: &str = "path-layer";
/// Source id for the current-position marker.
pub const POINT_SOURCE: &str = "point-source";
/// Layer id for the marker circle.
pub const POINT_LAYER: &str = "point-layer";

/// Timing and camera parameters for one animation run.
#[derive(Debug, Clone)]
pub struct AnimationParams {
    /// Total animation duration; must be positive.
    pub duration: Duration,

    /// Camera bearing in degrees: 0 north, 90 east, 180 south, 270 west.
    pub start_bearing: f64,

    /// Camera altitude above ground in meters.
    pub start_altitude: f64,

    /// Camera pitch in degrees.
    pub pitch: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(20),
            start_bearing: 0.0,
            start_altitude: 500.0,
            pitch: 60.0,
        }
    }
}

/// Errors that fail an invocation synchronously, before any frame runs.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The input path is malformed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The animation phase would be undefined.
    #[error("animation duration must be positive")]
    ZeroDuration,
}

/// Cooperative cancellation for a running animation.
///
/// Cancelling never interrupts a frame mid-step; the loop checks the token
/// once per frame and resolves early with `cancelled` set on the report.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the animation to stop at the next frame boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-frame readouts for the caller's UI.
pub trait ProgressSink {
    /// Distance traveled from the path start, in meters.
    fn on_distance(&mut self, _meters: f64) {}

    /// Last sampled terrain elevation, floored meters.
    fn on_elevation(&mut self, _meters: i32) {}
}

/// Sink that ignores all readouts.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Summary of a finished (or cancelled) run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationReport {
    /// Completed frames, each of which appended one traveled sample.
    pub frames: u64,

    /// Distance traveled when the run resolved, in meters. Equals the path
    /// total unless cancelled early.
    pub distance_m: f64,

    pub cancelled: bool,
}

enum StepOutcome {
    Advanced { distance_m: f64 },
    Finished { distance_m: f64 },
}

/// Animates a camera flight along `path` against the given map surface.
///
/// Registers the path and point source/layer pairs idempotently, then steps
/// once per frame until the animation phase exceeds 1 or the token is
/// cancelled. The returned future resolves exactly once; per-frame
/// collaborator failures are logged and skipped, never propagated.
pub async fn animate_path<C, M>(
    clock: &C,
    map: &mut M,
    path: &FlightPath,
    params: &AnimationParams,
    progress: &mut dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<AnimationReport, AnimationError>
where
    C: FrameClock + ?Sized,
    M: MapSurface + ?Sized,
{
    if params.duration.is_zero() {
        return Err(AnimationError::ZeroDuration);
    }

    ensure_scene(map);

    let mut state = AnimationState::new();
    let mut last_distance = 0.0;
    loop {
        let now = clock.next_frame().await;
        if cancel.is_cancelled() {
            debug!(frames = state.frames(), "animation cancelled");
            return Ok(AnimationReport {
                frames: state.frames() as u64,
                distance_m: last_distance,
                cancelled: true,
            });
        }
        match frame_step(path, params, &mut state, map, progress, now) {
            StepOutcome::Advanced { distance_m } => last_distance = distance_m,
            StepOutcome::Finished { distance_m } => {
                last_distance = distance_m;
                break;
            }
        }
    }
    Ok(AnimationReport {
        frames: state.frames() as u64,
        distance_m: last_distance,
        cancelled: false,
    })
}

/// Convenience wrapper taking the upstream track contract directly.
///
/// Fails before any frame is scheduled (and before any source or layer is
/// touched) if the track has fewer than two points.
pub async fn animate_track<C, M>(
    clock: &C,
    map: &mut M,
    track: &TrackData,
    params: &AnimationParams,
    progress: &mut dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<AnimationReport, AnimationError>
where
    C: FrameClock + ?Sized,
    M: MapSurface + ?Sized,
{
    let path = track.flight_path()?;
    animate_path(clock, map, &path, params, progress, cancel).await
}

/// One synchronous frame step.
///
/// Implements the Running-state transition: latch start time, derive the
/// animation phase, sample the ground position, classify the slope color,
/// push traveled geometry and the marker, and apply the camera pose. When
/// the phase first exceeds 1 the step runs once more with the distance
/// clamped to the path total, then reports completion.
fn frame_step<M>(
    path: &FlightPath,
    params: &AnimationParams,
    state: &mut AnimationState,
    map: &mut M,
    progress: &mut dyn ProgressSink,
    now: Duration,
) -> StepOutcome
where
    M: MapSurface + ?Sized,
{
    let start = state.latch_start(now);
    let phase = (now - start).as_secs_f64() / params.duration.as_secs_f64();
    let finishing = phase > 1.0;

    let distance_m = path.total_length() * phase.min(1.0);
    let position = path.position_at(distance_m);
    state.traveled_coordinates.push(position);

    let sampled = map
        .query_terrain_elevation(position, false)
        .map(|e| e.floor() as i32);
    let color = match (sampled, state.previous_elevation) {
        (Some(elevation), Some(previous)) => {
            let step_m = state
                .last_step()
                .map(|(a, b)| geodesic_distance(a, b))
                .unwrap_or(0.0);
            SlopeColor::classify((elevation - previous) as f64, step_m)
        }
        (None, Some(_)) => {
            // Elevation query failed mid-run: reuse the previous sample,
            // which makes this a zero-delta (flat) step.
            debug!(%position, "terrain elevation unavailable, reusing previous sample");
            SlopeColor::Flat
        }
        // No elevation comparison exists yet.
        (Some(_), None) => SlopeColor::Marker,
        (None, None) => {
            debug!(%position, "terrain elevation unavailable before first sample");
            SlopeColor::Marker
        }
    };
    if let Some(elevation) = sampled {
        state.previous_elevation = Some(elevation);
    }
    state.traveled_colors.push(color);

    progress.on_distance(distance_m);
    if let Some(elevation) = state.previous_elevation {
        progress.on_elevation(elevation);
    }

    push_marker(map, position);
    push_traveled_path(map, state);

    let pose = camera::camera_pose(
        params.pitch,
        params.start_bearing,
        position,
        params.start_altitude,
    );
    map.set_camera(pose);

    if finishing {
        StepOutcome::Finished { distance_m }
    } else {
        StepOutcome::Advanced { distance_m }
    }
}

/// Registers the path and point source/layer pairs if absent.
///
/// Idempotent: re-invocation on a map that already carries them must not
/// duplicate sources or layers.
fn ensure_scene<M>(map: &mut M)
where
    M: MapSurface + ?Sized,
{
    if !map.has_source(PATH_SOURCE) {
        let empty = line_feature(&[], &[]);
        if let Err(err) = map.add_source(PATH_SOURCE, empty, SourceOptions { line_metrics: true }) {
            warn!(%err, "failed to add path source");
        }
    }
    if !map.has_layer(PATH_LAYER) {
        let spec = LayerSpec {
            id: PATH_LAYER.to_string(),
            layer_type: LayerType::Line,
            source: PATH_SOURCE.to_string(),
            paint: json!({
                "line-width": 4,
                "line-gradient": [
                    "interpolate", ["linear"], ["line-progress"],
                    0, "#FFFFFF", 1, "#FFFFFF"
                ],
            }),
        };
        if let Err(err) = map.add_layer(spec) {
            warn!(%err, "failed to add path layer");
        }
    }
    if !map.has_source(POINT_SOURCE) {
        let empty = FeatureCollection {
            bbox: None,
            features: Vec::new(),
            foreign_members: None,
        };
        if let Err(err) = map.add_source(POINT_SOURCE, empty, SourceOptions::default()) {
            warn!(%err, "failed to add point source");
        }
    }
    if !map.has_layer(POINT_LAYER) {
        let spec = LayerSpec {
            id: POINT_LAYER.to_string(),
            layer_type: LayerType::Circle,
            source: POINT_SOURCE.to_string(),
            paint: json!({
                "circle-radius": 10,
                "circle-color": SlopeColor::Marker.hex(),
            }),
        };
        if let Err(err) = map.add_layer(spec) {
            warn!(%err, "failed to add point layer");
        }
    }
}

/// Pushes the current-position marker. A missing source or layer means it
/// was removed externally; the update is skipped and retried next frame.
fn push_marker<M>(map: &mut M, position: LngLat)
where
    M: MapSurface + ?Sized,
{
    if let Err(err) = map.update_source_data(POINT_SOURCE, point_feature(position)) {
        debug!(%err, "skipping marker update");
        return;
    }
    if let Err(err) =
        map.set_layer_paint_property(POINT_LAYER, "circle-color", json!(SlopeColor::Marker.hex()))
    {
        debug!(%err, "skipping marker paint update");
    }
}

/// Pushes the full traveled polyline and its per-segment color gradient.
fn push_traveled_path<M>(map: &mut M, state: &AnimationState)
where
    M: MapSurface + ?Sized,
{
    let data = line_feature(&state.traveled_coordinates, &state.traveled_colors);
    if let Err(err) = map.update_source_data(PATH_SOURCE, data) {
        debug!(%err, "skipping traveled path update");
        return;
    }
    let gradient = gradient_expression(&state.traveled_colors);
    if let Err(err) = map.set_layer_paint_property(PATH_LAYER, "line-gradient", gradient) {
        debug!(%err, "skipping gradient paint update");
    }
}

/// Builds the gradient paint expression, one stop per traveled sample at
/// the normalized position `i / len`.
pub fn gradient_expression(colors: &[SlopeColor]) -> serde_json::Value {
    let mut expr = vec![json!("interpolate"), json!(["linear"]), json!(["line-progress"])];
    let len = colors.len() as f64;
    for (i, color) in colors.iter().enumerate() {
        expr.push(json!(i as f64 / len));
        expr.push(json!(color.hex()));
    }
    serde_json::Value::Array(expr)
}

fn point_feature(position: LngLat) -> FeatureCollection {
    let mut feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::Point(vec![
            position.lng,
            position.lat,
        ]))),
        id: None,
        properties: None,
        foreign_members: None,
    };
    feature.set_property("color", SlopeColor::Marker.hex());
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

fn line_feature(coordinates: &[LngLat], colors: &[SlopeColor]) -> FeatureCollection {
    let coordinates = coordinates.iter().map(|c| vec![c.lng, c.lat]).collect();
    let mut feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::LineString(coordinates))),
        id: None,
        properties: None,
        foreign_members: None,
    };
    feature.set_property(
        "colors",
        colors.iter().map(|c| c.hex()).collect::<Vec<_>>(),
    );
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}
