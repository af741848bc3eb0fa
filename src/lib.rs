// src/lib.rs
//! Track Circle Library
//!
//! Decides whether a recorded GPS track closes into a circle, fits its
//! center and radius, and produces tolerance rings for display.

pub mod geo;
pub mod analysis;
pub mod config;
pub mod track;
pub mod export;
pub mod report;
pub mod error;

// Re-export main types for convenience
pub use geo::{haversine_distance, generate_circle_points, Point};
pub use analysis::{analyze_track, BoundaryCircles, TrackAnalysis};
pub use config::AnalysisConfig;
pub use track::Track;
pub use error::{AnalysisError, Result, TrackError};
