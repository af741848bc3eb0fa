// src/track.rs
//! Validated point lists handed over by the track source

use crate::{
    analysis::{analyze_track, TrackAnalysis},
    config::AnalysisConfig,
    error::{AnalysisError, Result, TrackError},
    geo::Point,
};
use serde::Deserialize;
use std::path::Path;

/// Ordered, non-empty sequence of valid points in recording order
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    points: Vec<Point>,
}

/// Accepted JSON layouts: a bare array or an object with a `points` array
#[derive(Deserialize)]
#[serde(untagged)]
enum TrackDocument {
    Points(Vec<Point>),
    Wrapped { points: Vec<Point> },
}

impl Track {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(TrackError::EmptyTrack);
        }

        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_valid()) {
            return Err(TrackError::InvalidPoint {
                index,
                latitude: p.latitude,
                longitude: p.longitude,
            });
        }

        Ok(Self { points })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let points = match serde_json::from_str::<TrackDocument>(json)? {
            TrackDocument::Points(points) => points,
            TrackDocument::Wrapped { points } => points,
        };
        Self::new(points)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let track = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} points from {}", track.len(), path.display());
        Ok(track)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    pub fn end(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gap between the first and last recorded points in kilometers
    pub fn closure_distance_km(&self) -> f64 {
        self.start().distance_to(self.end())
    }

    pub fn analyze(&self, config: &AnalysisConfig) -> std::result::Result<TrackAnalysis, AnalysisError> {
        analyze_track(&self.points, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_track_rejected() {
        assert!(matches!(Track::new(Vec::new()), Err(TrackError::EmptyTrack)));
    }

    #[test]
    fn test_invalid_point_reports_index() {
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(95.0, 1.0)];
        match Track::new(points) {
            Err(TrackError::InvalidPoint { index, latitude, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(latitude, 95.0);
            }
            other => panic!("Expected InvalidPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_array() {
        let track = Track::from_json_str(
            r#"[{"lat": 51.5, "lon": -0.09}, {"lat": 51.51, "lon": -0.08}, {"lat": 51.5, "lon": -0.09}]"#,
        )
        .unwrap();

        assert_eq!(track.len(), 3);
        assert!(!track.is_empty());
        assert_eq!(*track.start(), Point::new(51.5, -0.09));
        assert_eq!(track.closure_distance_km(), 0.0);
    }

    #[test]
    fn test_from_json_wrapped() {
        let track = Track::from_json_str(
            r#"{"points": [{"latitude": 1.0, "longitude": 2.0}]}"#,
        )
        .unwrap();
        assert_eq!(track.points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(Track::from_json_str("{not json"), Err(TrackError::Json(_))));
    }

    #[test]
    fn test_short_track_analysis_fails() {
        let track = Track::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]).unwrap();
        let result = track.analyze(&AnalysisConfig::default());
        assert_eq!(result, Err(AnalysisError::InsufficientPoints { point_count: 2 }));
    }
}
