//! Synthetic terrain models answering elevation queries.

use flyover_env::LngLat;

/// Meters per degree of latitude on the mean sphere.
const METERS_PER_DEG_LAT: f64 = 111_195.0;

/// A deterministic elevation function standing in for loaded terrain
/// tiles.
///
/// All models are pure functions of the coordinate, so a run over the same
/// route always sees the same elevations.
#[derive(Debug, Clone)]
pub enum TerrainModel {
    /// Uniform elevation everywhere.
    Flat { elevation_m: f64 },

    /// Constant grade northward: elevation grows by `grade` meters per
    /// meter of latitude north of `origin_lat`.
    Ramp {
        base_m: f64,
        origin_lat: f64,
        grade: f64,
    },

    /// Sinusoidal ridges by latitude: climbs and descents alternate with
    /// the given wavelength.
    Ridge {
        base_m: f64,
        amplitude_m: f64,
        wavelength_deg: f64,
    },

    /// Tiles never load; every query returns `None`.
    Unavailable,

    /// Elevation is missing inside a latitude band (a coverage hole),
    /// otherwise flat.
    Patchy {
        elevation_m: f64,
        hole_lat_min: f64,
        hole_lat_max: f64,
    },
}

impl TerrainModel {
    /// Samples the model at a coordinate. Mirrors the rendering engine's
    /// terrain query: `None` means no data here.
    pub fn elevation(&self, at: LngLat) -> Option<f64> {
        match self {
            TerrainModel::Flat { elevation_m } => Some(*elevation_m),
            TerrainModel::Ramp {
                base_m,
                origin_lat,
                grade,
            } => Some(base_m + (at.lat - origin_lat) * METERS_PER_DEG_LAT * grade),
            TerrainModel::Ridge {
                base_m,
                amplitude_m,
                wavelength_deg,
            } => {
                let cycles = at.lat / wavelength_deg * std::f64::consts::TAU;
                Some(base_m + amplitude_m * cycles.sin())
            }
            TerrainModel::Unavailable => None,
            TerrainModel::Patchy {
                elevation_m,
                hole_lat_min,
                hole_lat_max,
            } => {
                if at.lat >= *hole_lat_min && at.lat <= *hole_lat_max {
                    None
                } else {
                    Some(*elevation_m)
                }
            }
        }
    }
}
