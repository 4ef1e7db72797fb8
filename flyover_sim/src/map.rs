//! Recording map surface for simulation runs.

use crate::terrain::TerrainModel;
use flyover_env::{CameraPose, LayerSpec, LngLat, MapError, MapSurface, SourceOptions};
use geojson::FeatureCollection;
use std::collections::HashMap;

struct SourceRecord {
    data: FeatureCollection,
    options: SourceOptions,
}

/// In-memory `MapSurface` that records every call.
///
/// Terrain queries are answered by a [`TerrainModel`]; sources, layers,
/// paint properties, and camera poses are stored so tests can assert on
/// the exact geometry and pose timeline a run produced.
pub struct FakeMap {
    terrain: TerrainModel,
    sources: HashMap<String, SourceRecord>,
    layers: HashMap<String, LayerSpec>,
    /// Every paint call, in order: (layer, key, value).
    pub paint_log: Vec<(String, String, serde_json::Value)>,
    /// Every camera pose ever applied, in order. One entry per rendered
    /// frame.
    pub camera_log: Vec<CameraPose>,
    camera: CameraPose,
    /// Total `add_source` calls, including rejected duplicates.
    pub add_source_calls: usize,
    /// Total `add_layer` calls, including rejected duplicates.
    pub add_layer_calls: usize,
    /// Total `update_source_data` calls.
    pub update_calls: usize,
}

impl FakeMap {
    pub fn new(terrain: TerrainModel) -> Self {
        Self {
            terrain,
            sources: HashMap::new(),
            layers: HashMap::new(),
            paint_log: Vec::new(),
            camera_log: Vec::new(),
            camera: CameraPose::default(),
            add_source_calls: 0,
            add_layer_calls: 0,
            update_calls: 0,
        }
    }

    /// Number of frames rendered so far (camera poses applied).
    pub fn frames_rendered(&self) -> usize {
        self.camera_log.len()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The current geometry held by a source.
    pub fn source_data(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id).map(|r| &r.data)
    }

    /// The options a source was registered with.
    pub fn source_options(&self, id: &str) -> Option<SourceOptions> {
        self.sources.get(id).map(|r| r.options)
    }

    /// Simulates external removal of a source mid-run.
    pub fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
    }

    /// Vertex count of the LineString held by a source.
    pub fn line_len(&self, id: &str) -> Option<usize> {
        let fc = self.source_data(id)?;
        let geometry = fc.features.first()?.geometry.as_ref()?;
        match &geometry.value {
            geojson::Value::LineString(coords) => Some(coords.len()),
            _ => None,
        }
    }

    /// The `colors` property of the LineString feature held by a source.
    pub fn line_colors(&self, id: &str) -> Option<Vec<String>> {
        let fc = self.source_data(id)?;
        let colors = fc.features.first()?.property("colors")?;
        Some(
            colors
                .as_array()?
                .iter()
                .filter_map(|c| c.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// The Point geometry held by a source.
    pub fn point_position(&self, id: &str) -> Option<LngLat> {
        let fc = self.source_data(id)?;
        let geometry = fc.features.first()?.geometry.as_ref()?;
        match &geometry.value {
            geojson::Value::Point(coords) => Some(LngLat::new(coords[0], coords[1])),
            _ => None,
        }
    }

    /// The most recent value set for a paint property.
    pub fn last_paint(&self, layer: &str, key: &str) -> Option<&serde_json::Value> {
        self.paint_log
            .iter()
            .rev()
            .find(|(l, k, _)| l == layer && k == key)
            .map(|(_, _, v)| v)
    }
}

impl MapSurface for FakeMap {
    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_source(
        &mut self,
        id: &str,
        data: FeatureCollection,
        options: SourceOptions,
    ) -> Result<(), MapError> {
        self.add_source_calls += 1;
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_string()));
        }
        self.sources
            .insert(id.to_string(), SourceRecord { data, options });
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), MapError> {
        self.add_layer_calls += 1;
        if self.layers.contains_key(&spec.id) {
            return Err(MapError::DuplicateLayer(spec.id));
        }
        self.layers.insert(spec.id.clone(), spec);
        Ok(())
    }

    fn update_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), MapError> {
        self.update_calls += 1;
        match self.sources.get_mut(id) {
            Some(record) => {
                record.data = data;
                Ok(())
            }
            None => Err(MapError::missing_source(id)),
        }
    }

    fn set_layer_paint_property(
        &mut self,
        layer: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), MapError> {
        if !self.layers.contains_key(layer) {
            return Err(MapError::missing_layer(layer));
        }
        self.paint_log
            .push((layer.to_string(), key.to_string(), value));
        Ok(())
    }

    fn query_terrain_elevation(&self, at: LngLat, _exaggerated: bool) -> Option<f64> {
        self.terrain.elevation(at)
    }

    fn camera(&self) -> CameraPose {
        self.camera
    }

    fn set_camera(&mut self, pose: CameraPose) {
        self.camera = pose;
        self.camera_log.push(pose);
    }
}
