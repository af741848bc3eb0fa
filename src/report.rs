// src/report.rs
//! Human-readable and JSON summaries of an analysis outcome

use crate::{analysis::TrackAnalysis, error::{AnalysisError, Result}};
use serde::Serialize;

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Analyzed(&'a TrackAnalysis),
    Rejected(&'a AnalysisError),
}

/// Format a coordinate in degrees for display
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}°", value)
}

/// Plain-text summary of an analysis outcome
pub fn summary(outcome: &std::result::Result<TrackAnalysis, AnalysisError>) -> String {
    match outcome {
        Ok(analysis) => format!(
            "Analysis Results:\n\
             Is circular: {}\n\
             Average radius: {:.2} km\n\
             Radius variance: {:.2}%\n\
             Start-End distance: {:.2} km\n\
             Center: {}, {}\n",
            analysis.is_circular,
            analysis.average_radius_km,
            analysis.radius_variance_ratio * 100.0,
            analysis.start_end_distance_km,
            format_coordinate(analysis.center.latitude),
            format_coordinate(analysis.center.longitude),
        ),
        Err(error) => format!("Analysis Results:\nIs circular: false\n{}\n", error),
    }
}

/// Pretty JSON of either the analysis or the tagged error payload
pub fn to_json(outcome: &std::result::Result<TrackAnalysis, AnalysisError>) -> Result<String> {
    let value = match outcome {
        Ok(analysis) => Outcome::Analyzed(analysis),
        Err(error) => Outcome::Rejected(error),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
