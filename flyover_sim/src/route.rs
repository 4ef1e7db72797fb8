//! Synthetic route builders for simulation runs.

use flyover_env::LngLat;
use geo::{HaversineDestination, Point};

/// A straight chain of `points` vertices heading along `bearing_deg`,
/// spaced `spacing_m` apart.
pub fn straight_route(start: LngLat, bearing_deg: f64, points: usize, spacing_m: f64) -> Vec<LngLat> {
    let mut route = Vec::with_capacity(points);
    let mut current = Point::new(start.lng, start.lat);
    route.push(start);
    for _ in 1..points {
        current = current.haversine_destination(bearing_deg, spacing_m);
        route.push(LngLat::new(current.x(), current.y()));
    }
    route
}

/// A closed loop of `points` vertices on a circle of `radius_m` around
/// `center`, starting due north and running clockwise. The last vertex
/// repeats the first so the path closes.
pub fn loop_route(center: LngLat, radius_m: f64, points: usize) -> Vec<LngLat> {
    let c = Point::new(center.lng, center.lat);
    let mut route = Vec::with_capacity(points + 1);
    for i in 0..points {
        let bearing = 360.0 * (i as f64) / (points as f64);
        let p = c.haversine_destination(bearing, radius_m);
        route.push(LngLat::new(p.x(), p.y()));
    }
    route.push(route[0]);
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyover_core::geodesic_distance;

    #[test]
    fn test_straight_route_spacing() {
        let route = straight_route(LngLat::new(7.75, 45.98), 0.0, 10, 100.0);
        assert_eq!(route.len(), 10);
        for pair in route.windows(2) {
            let d = geodesic_distance(pair[0], pair[1]);
            assert!((d - 100.0).abs() < 0.01, "spacing was {}", d);
        }
    }

    #[test]
    fn test_straight_route_heads_north() {
        let route = straight_route(LngLat::new(7.75, 45.98), 0.0, 3, 1000.0);
        assert!(route[1].lat > route[0].lat);
        assert!((route[1].lng - route[0].lng).abs() < 1e-6);
    }

    #[test]
    fn test_loop_route_closes() {
        let route = loop_route(LngLat::new(7.75, 45.98), 2000.0, 36);
        assert_eq!(route.len(), 37);
        assert_eq!(route.first(), route.last());

        // Every vertex sits on the circle.
        for at in &route {
            let d = geodesic_distance(LngLat::new(7.75, 45.98), *at);
            assert!((d - 2000.0).abs() < 1.0);
        }
    }
}
