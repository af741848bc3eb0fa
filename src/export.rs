// src/export.rs
//! GeoJSON export of a track and its fitted circle for map display

use crate::{
    analysis::TrackAnalysis,
    error::{Result, TrackError},
    geo::Point,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Map layers produced for an analysed track
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    Track,
    Fitted,
    Inner,
    Outer,
    Center,
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Track => "track",
            Layer::Fitted => "fitted",
            Layer::Inner => "inner",
            Layer::Outer => "outer",
            Layer::Center => "center",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Layer::Track => "Recorded track",
            Layer::Fitted => "Fitted circle",
            Layer::Inner => "Inner tolerance",
            Layer::Outer => "Outer tolerance",
            Layer::Center => "Center point",
        }
    }
}

fn line_feature(layer: Layer, points: &[Point]) -> serde_json::Value {
    let coordinates: Vec<[f64; 2]> = points.iter().map(Point::to_lon_lat).collect();

    serde_json::json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "layer": layer.name(),
            "name": layer.display_name()
        }
    })
}

/// Build a `FeatureCollection` with the track, the three rings and the center
pub fn to_geojson(track: &[Point], analysis: &TrackAnalysis) -> Result<String> {
    let rings = &analysis.boundary_circles;

    let center = serde_json::json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": analysis.center.to_lon_lat()
        },
        "properties": {
            "layer": Layer::Center.name(),
            "name": Layer::Center.display_name(),
            "is_circular": analysis.is_circular,
            "average_radius_km": analysis.average_radius_km,
            "radius_variance_ratio": analysis.radius_variance_ratio,
            "start_end_distance_km": analysis.start_end_distance_km
        }
    });

    let features = vec![
        line_feature(Layer::Track, track),
        line_feature(Layer::Fitted, &rings.fitted),
        line_feature(Layer::Inner, &rings.inner),
        line_feature(Layer::Outer, &rings.outer),
        center,
    ];

    let feature_collection = serde_json::json!({
        "type": "FeatureCollection",
        "features": features
    });

    serde_json::to_string_pretty(&feature_collection).map_err(TrackError::Json)
}

/// Write the GeoJSON layers to `path`
pub fn write_geojson(path: &Path, track: &[Point], analysis: &TrackAnalysis) -> Result<()> {
    let content = to_geojson(track, analysis)?;

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    tracing::info!("GeoJSON written to {}", path.display());
    Ok(())
}
