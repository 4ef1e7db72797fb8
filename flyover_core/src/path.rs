//! Pure path geometry: geodesic lengths and distance-to-position queries.

use flyover_env::LngLat;
use geo::{HaversineDistance, HaversineIntermediate, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from path construction.
#[derive(Debug, Error)]
pub enum PathError {
    /// A polyline needs at least two vertices to have a direction and a
    /// length.
    #[error("path needs at least 2 vertices, got {0}")]
    TooFewPoints(usize),
}

/// An ordered, immutable polyline of geographic coordinates.
///
/// Segment lengths are great-circle distances; the cumulative lengths are
/// precomputed at construction so distance-to-position queries are a binary
/// search plus one intermediate-point interpolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPath {
    points: Vec<LngLat>,
    /// cumulative[i] = meters from the start vertex to points[i]
    cumulative: Vec<f64>,
}

impl FlightPath {
    pub fn new(coords: Vec<LngLat>) -> Result<Self, PathError> {
        if coords.len() < 2 {
            return Err(PathError::TooFewPoints(coords.len()));
        }
        let mut cumulative = Vec::with_capacity(coords.len());
        cumulative.push(0.0);
        for pair in coords.windows(2) {
            let total = cumulative.last().unwrap() + geodesic_distance(pair[0], pair[1]);
            cumulative.push(total);
        }
        Ok(Self {
            points: coords,
            cumulative,
        })
    }

    /// Total great-circle length of the path in meters.
    pub fn total_length(&self) -> f64 {
        *self.cumulative.last().unwrap()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction guarantees >= 2 vertices
    }

    pub fn first(&self) -> LngLat {
        self.points[0]
    }

    pub fn last(&self) -> LngLat {
        *self.points.last().unwrap()
    }

    /// Returns the point reached by walking `meters` along the path from
    /// its start.
    ///
    /// Clamps: distances <= 0 return the first vertex, distances >= the
    /// total length return the last vertex. Never extrapolates.
    pub fn position_at(&self, meters: f64) -> LngLat {
        if meters <= 0.0 {
            return self.first();
        }
        if meters >= self.total_length() {
            return self.last();
        }

        // First vertex strictly past the requested distance; >= 1 because
        // meters > 0, <= len-1 because meters < total.
        let idx = self.cumulative.partition_point(|&d| d <= meters);
        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len == 0.0 {
            // Duplicate consecutive vertices
            return self.points[idx - 1];
        }
        let fraction = (meters - seg_start) / seg_len;
        let a = to_point(self.points[idx - 1]);
        let b = to_point(self.points[idx]);
        from_point(a.haversine_intermediate(&b, fraction))
    }
}

/// Great-circle distance between two geographic points, in meters.
pub fn geodesic_distance(a: LngLat, b: LngLat) -> f64 {
    to_point(a).haversine_distance(&to_point(b))
}

fn to_point(at: LngLat) -> Point<f64> {
    Point::new(at.lng, at.lat)
}

fn from_point(p: Point<f64>) -> LngLat {
    LngLat::new(p.x(), p.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn alpine_path() -> FlightPath {
        // Short climb near Zermatt, roughly 1 km per segment
        FlightPath::new(vec![
            LngLat::new(7.74, 45.98),
            LngLat::new(7.75, 45.98),
            LngLat::new(7.75, 45.99),
            LngLat::new(7.76, 45.99),
        ])
        .unwrap()
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert!(matches!(
            FlightPath::new(vec![]),
            Err(PathError::TooFewPoints(0))
        ));
        assert!(matches!(
            FlightPath::new(vec![LngLat::new(0.0, 0.0)]),
            Err(PathError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_total_length_sums_segments() {
        let path = alpine_path();
        let segs = [
            geodesic_distance(LngLat::new(7.74, 45.98), LngLat::new(7.75, 45.98)),
            geodesic_distance(LngLat::new(7.75, 45.98), LngLat::new(7.75, 45.99)),
            geodesic_distance(LngLat::new(7.75, 45.99), LngLat::new(7.76, 45.99)),
        ];
        assert_relative_eq!(
            path.total_length(),
            segs.iter().sum::<f64>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_geodesic_distance_one_degree_latitude() {
        // One degree of latitude is about 111.2 km on the mean sphere.
        let d = geodesic_distance(LngLat::new(0.0, 0.0), LngLat::new(0.0, 1.0));
        assert_relative_eq!(d, 111_195.0, max_relative = 0.001);
    }

    #[test]
    fn test_position_at_clamps_both_ends() {
        let path = alpine_path();
        assert_eq!(path.position_at(-5.0), path.first());
        assert_eq!(path.position_at(0.0), path.first());
        assert_eq!(path.position_at(path.total_length()), path.last());
        assert_eq!(path.position_at(path.total_length() * 10.0), path.last());
    }

    #[test]
    fn test_position_at_midpoint_of_single_segment() {
        let path = FlightPath::new(vec![LngLat::new(0.0, 0.0), LngLat::new(0.0, 1.0)]).unwrap();
        let mid = path.position_at(path.total_length() / 2.0);
        assert_relative_eq!(mid.lng, 0.0, epsilon = 1e-9);
        assert_relative_eq!(mid.lat, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_position_at_walks_across_vertices() {
        let path = alpine_path();
        // Walking the exact cumulative distance of an interior vertex lands
        // on that vertex.
        let first_seg =
            geodesic_distance(LngLat::new(7.74, 45.98), LngLat::new(7.75, 45.98));
        let at = path.position_at(first_seg);
        assert_relative_eq!(at.lng, 7.75, epsilon = 1e-6);
        assert_relative_eq!(at.lat, 45.98, epsilon = 1e-6);
    }

    #[test]
    fn test_position_at_handles_duplicate_vertices() {
        let path = FlightPath::new(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(0.0, 0.5),
            LngLat::new(0.0, 0.5),
            LngLat::new(0.0, 1.0),
        ])
        .unwrap();
        let half = path.total_length() / 2.0;
        let at = path.position_at(half);
        assert_relative_eq!(at.lat, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_distance_to_position_is_monotone() {
        let path = alpine_path();
        let total = path.total_length();
        let mut walked = 0.0;
        let mut prev = path.first();
        for i in 1..=100 {
            let d = total * (i as f64) / 100.0;
            let at = path.position_at(d);
            walked += geodesic_distance(prev, at);
            prev = at;
        }
        // Sampled sub-path length matches the path length on a path with no
        // doubling back.
        assert_relative_eq!(walked, total, max_relative = 1e-3);
    }
}
