//! Track data contract consumed from the upstream GPX pipeline.

use crate::path::{FlightPath, PathError};
use chrono::{DateTime, Utc};
use geojson::{Feature, FeatureCollection, Geometry};
use serde::{Deserialize, Serialize};

/// One recorded sample of a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    /// Recorded elevation in meters. Informational only; the animation
    /// queries terrain elevation from the rendering engine instead.
    pub elevation: f64,
    pub time: Option<DateTime<Utc>>,
}

/// An ordered sequence of track samples plus the track header, as produced
/// by the upstream GPX parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
    pub name: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub points: Vec<TrackPoint>,
}

impl TrackData {
    pub fn new(points: Vec<TrackPoint>) -> Self {
        Self {
            name: None,
            time: None,
            points,
        }
    }

    /// The animation's path input: the track projected to (lng, lat).
    pub fn flight_path(&self) -> Result<FlightPath, PathError> {
        FlightPath::new(
            self.points
                .iter()
                .map(|p| flyover_env::LngLat::new(p.lon, p.lat))
                .collect(),
        )
    }

    /// Renders the whole track as a single LineString feature, with the
    /// recorded elevation as the third coordinate.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let coordinates = self
            .points
            .iter()
            .map(|p| vec![p.lon, p.lat, p.elevation])
            .collect();
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::LineString(coordinates))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> TrackData {
        let mut track = TrackData::new(vec![
            TrackPoint {
                lat: 45.98,
                lon: 7.74,
                elevation: 1600.0,
                time: None,
            },
            TrackPoint {
                lat: 45.99,
                lon: 7.75,
                elevation: 1750.0,
                time: None,
            },
        ]);
        track.name = Some("Matterhorn approach".to_string());
        track
    }

    #[test]
    fn test_flight_path_uses_lng_lat_order() {
        let path = sample_track().flight_path().unwrap();
        assert_eq!(path.first().lng, 7.74);
        assert_eq!(path.first().lat, 45.98);
    }

    #[test]
    fn test_flight_path_rejects_short_tracks() {
        let track = TrackData::new(vec![]);
        assert!(track.flight_path().is_err());
    }

    #[test]
    fn test_feature_collection_carries_elevation() {
        let fc = sample_track().to_feature_collection();
        assert_eq!(fc.features.len(), 1);
        let geometry = fc.features[0].geometry.as_ref().unwrap();
        match &geometry.value {
            geojson::Value::LineString(coords) => {
                assert_eq!(coords.len(), 2);
                assert_eq!(coords[0], vec![7.74, 45.98, 1600.0]);
                assert_eq!(coords[1], vec![7.75, 45.99, 1750.0]);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }
}
