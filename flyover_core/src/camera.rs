//! Trailing camera pose derived from a ground position.

use flyover_env::{CameraPose, LngLat, MercatorCoord};
use geo::{HaversineDestination, Point};

/// Computes the geographic position the camera sits at so that it trails
/// the moving ground point and looks down at it at the given pitch.
///
/// Trigonometric decomposition: the camera is offset backward along the
/// reverse of `bearing` by `altitude / tan(pitch)` meters, and raised by
/// `altitude` (the raise happens in the mercator projection, see
/// [`camera_pose`]). Pure and bit-for-bit reproducible for identical
/// inputs.
pub fn corrected_camera_position(
    pitch_deg: f64,
    bearing_deg: f64,
    ground: LngLat,
    altitude_m: f64,
) -> LngLat {
    // A non-positive pitch looks straight down; no horizontal offset.
    let horizontal_m = if pitch_deg > 0.0 {
        altitude_m / pitch_deg.to_radians().tan()
    } else {
        0.0
    };
    let reverse_bearing = (bearing_deg + 180.0).rem_euclid(360.0);
    let p = Point::new(ground.lng, ground.lat).haversine_destination(reverse_bearing, horizontal_m);
    LngLat::new(p.x(), p.y())
}

/// Builds the full free camera pose for a frame: corrected position
/// projected into mercator space at `altitude`, plus pitch and bearing.
pub fn camera_pose(pitch_deg: f64, bearing_deg: f64, ground: LngLat, altitude_m: f64) -> CameraPose {
    let corrected = corrected_camera_position(pitch_deg, bearing_deg, ground, altitude_m);
    CameraPose {
        position: MercatorCoord::from_lng_lat(corrected, altitude_m),
        pitch: pitch_deg,
        bearing: bearing_deg,
    }
}
