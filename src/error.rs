// src/error.rs
//! Error types for track loading and circle analysis

use serde::Serialize;
use std::fmt;

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Debug)]
pub enum TrackError {
    Io(std::io::Error),
    Json(serde_json::Error),
    EmptyTrack,
    InvalidPoint { index: usize, latitude: f64, longitude: f64 },
    Config(String),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::Io(e) => write!(f, "IO error: {}", e),
            TrackError::Json(e) => write!(f, "JSON error: {}", e),
            TrackError::EmptyTrack => write!(f, "Track contains no points"),
            TrackError::InvalidPoint { index, latitude, longitude } => write!(
                f,
                "Invalid point #{}: latitude {} / longitude {} out of range",
                index, latitude, longitude
            ),
            TrackError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackError::Io(e) => Some(e),
            TrackError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackError {
    fn from(error: std::io::Error) -> Self {
        TrackError::Io(error)
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(error: serde_json::Error) -> Self {
        TrackError::Json(error)
    }
}

/// Reasons a track is rejected before a circle is fitted.
///
/// These are ordinary outcomes of [`crate::analysis::analyze_track`], not
/// faults: callers are expected to display them next to the track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum AnalysisError {
    /// Fewer than three points were supplied.
    InsufficientPoints { point_count: usize },
    /// First and last points are farther apart than the tolerance allows.
    TrackNotClosed {
        start_end_distance_km: f64,
        tolerance_km: f64,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientPoints { point_count } => write!(
                f,
                "Not enough points: need at least 3, got {}",
                point_count
            ),
            AnalysisError::TrackNotClosed { start_end_distance_km, tolerance_km } => write!(
                f,
                "Start and end points too far apart: {:.3} km (tolerance {} km)",
                start_end_distance_km, tolerance_km
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_serializes_with_tag() {
        let err = AnalysisError::TrackNotClosed {
            start_end_distance_km: 5.0,
            tolerance_km: 0.1,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "track_not_closed");
        assert_eq!(json["start_end_distance_km"], 5.0);
    }

    #[test]
    fn test_insufficient_points_message() {
        let err = AnalysisError::InsufficientPoints { point_count: 2 };
        assert!(err.to_string().contains("got 2"));
    }
}
