//! Common types crossing the environment abstraction boundary.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, matching the haversine convention used by
/// the geodesy layer.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A geographic coordinate: longitude, then latitude, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}

/// A position in the rendering engine's projected space.
///
/// Web-mercator convention: `x` and `y` are in [0, 1] across the world,
/// `z` is altitude scaled by the mercator meter at the given latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MercatorCoord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MercatorCoord {
    /// Projects a geographic coordinate plus altitude into mercator space.
    pub fn from_lng_lat(at: LngLat, altitude_m: f64) -> Self {
        let lat_rad = at.lat.to_radians();
        let x = (at.lng + 180.0) / 360.0;
        let y = (180.0
            - (180.0 / std::f64::consts::PI)
                * ((std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan()).ln())
            / 360.0;
        // One meter expressed in mercator units shrinks with the cosine of
        // the latitude (the projection stretches toward the poles).
        let circumference = 2.0 * std::f64::consts::PI * EARTH_RADIUS_M;
        let z = altitude_m / (circumference * lat_rad.cos());
        Self { x, y, z }
    }
}

/// A free camera pose: absolute projected position plus pitch and bearing.
///
/// Recomputed every frame; never persisted. Applied atomically through a
/// single `MapSurface::set_camera` call so pitch, bearing and position
/// always land within the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: MercatorCoord,
    /// Degrees; 0 looks straight down.
    pub pitch: f64,
    /// Degrees clockwise from north.
    pub bearing: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: MercatorCoord {
                x: 0.5,
                y: 0.5,
                z: 0.0,
            },
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

/// Options passed when registering a geometry source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptions {
    /// Enables per-vertex line-progress metrics, required for gradient
    /// paint expressions along a line source.
    pub line_metrics: bool,
}

/// The kind of paint layer attached to a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Line,
    Circle,
}

/// Declarative description of a paint layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: String,
    pub layer_type: LayerType,
    /// Id of the geometry source this layer draws.
    pub source: String,
    /// Initial paint properties, keyed the way the rendering engine
    /// expects them (e.g. `line-width`, `circle-color`).
    pub paint: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mercator_world_center() {
        let m = MercatorCoord::from_lng_lat(LngLat::new(0.0, 0.0), 0.0);
        assert!((m.x - 0.5).abs() < 1e-12);
        assert!((m.y - 0.5).abs() < 1e-12);
        assert_eq!(m.z, 0.0);
    }

    #[test]
    fn test_mercator_altitude_scales_with_latitude() {
        let equator = MercatorCoord::from_lng_lat(LngLat::new(0.0, 0.0), 1000.0);
        let north = MercatorCoord::from_lng_lat(LngLat::new(0.0, 60.0), 1000.0);

        // The same altitude occupies more mercator units at high latitude.
        assert!(north.z > equator.z);
        assert!((north.z / equator.z - 2.0).abs() < 1e-9); // 1/cos(60) = 2
    }

    #[test]
    fn test_mercator_x_wraps_longitude() {
        let west = MercatorCoord::from_lng_lat(LngLat::new(-180.0, 0.0), 0.0);
        let east = MercatorCoord::from_lng_lat(LngLat::new(180.0, 0.0), 0.0);
        assert_eq!(west.x, 0.0);
        assert_eq!(east.x, 1.0);
    }
}
