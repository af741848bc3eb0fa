// src/analysis.rs
//! Circle fitting and circularity classification for closed tracks

use crate::{
    config::AnalysisConfig,
    error::AnalysisError,
    geo::{circle_points, haversine_distance, Point},
};
use serde::Serialize;

/// Minimum number of points needed to fit a circle
pub const MIN_POINTS: usize = 3;

/// Average radius at or below this (km) is a degenerate, single-spot track
pub const DEGENERATE_RADIUS_KM: f64 = 1e-9;

/// Sampled rings drawn around the fitted center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryCircles {
    pub fitted: Vec<Point>,
    pub inner: Vec<Point>,
    pub outer: Vec<Point>,
}

/// Full result of fitting a circle to a closed track.
///
/// Produced for both circular and non-circular tracks; check `is_circular`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackAnalysis {
    pub is_circular: bool,
    pub average_radius_km: f64,
    pub radius_variance_ratio: f64,
    pub start_end_distance_km: f64,
    pub center: Point,
    pub boundary_circles: BoundaryCircles,
}

/// Unweighted mean of latitudes and longitudes.
///
/// This is a planar approximation, not a spherical centroid, and it does
/// not handle tracks that straddle the antimeridian.
pub fn naive_centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let lon = points.iter().map(|p| p.longitude).sum::<f64>() / n;

    Some(Point::new(lat, lon))
}

/// Decide whether `points` trace a closed circle and fit it.
///
/// Fails early with [`AnalysisError::InsufficientPoints`] for fewer than
/// three points, and with [`AnalysisError::TrackNotClosed`] when the first
/// and last points are more than `config.tolerance` km apart.
pub fn analyze_track(points: &[Point], config: &AnalysisConfig) -> Result<TrackAnalysis, AnalysisError> {
    if points.len() < MIN_POINTS {
        tracing::debug!(point_count = points.len(), "Track rejected: not enough points");
        return Err(AnalysisError::InsufficientPoints { point_count: points.len() });
    }

    let start = &points[0];
    let end = &points[points.len() - 1];
    let start_end_distance_km = haversine_distance(start, end);

    // NaN comes from non-finite endpoints and never counts as closed.
    if start_end_distance_km.is_nan() || start_end_distance_km > config.tolerance {
        tracing::debug!(
            start_end_distance_km,
            tolerance = config.tolerance,
            "Track rejected: not closed"
        );
        return Err(AnalysisError::TrackNotClosed {
            start_end_distance_km,
            tolerance_km: config.tolerance,
        });
    }

    let center = match naive_centroid(points) {
        Some(center) => center,
        None => return Err(AnalysisError::InsufficientPoints { point_count: points.len() }),
    };

    let radii: Vec<f64> = points.iter().map(|p| haversine_distance(&center, p)).collect();
    let average_radius_km = radii.iter().sum::<f64>() / radii.len() as f64;

    // All points on one spot: call it a circle of radius zero.
    let radius_variance_ratio = if average_radius_km <= DEGENERATE_RADIUS_KM {
        0.0
    } else {
        let max_diff = radii
            .iter()
            .map(|r| (r - average_radius_km).abs())
            .fold(0.0_f64, f64::max);
        max_diff / average_radius_km
    };

    let is_circular = radius_variance_ratio <= config.radius_variance_threshold;

    tracing::debug!(
        is_circular,
        average_radius_km,
        radius_variance_ratio,
        center_lat = center.latitude,
        center_lon = center.longitude,
        "Fitted circle"
    );

    let inner_radius = (average_radius_km * (1.0 - config.tolerance)).max(0.0);
    let outer_radius = average_radius_km * (1.0 + config.tolerance);

    let boundary_circles = BoundaryCircles {
        fitted: circle_points(&center, average_radius_km),
        inner: circle_points(&center, inner_radius),
        outer: circle_points(&center, outer_radius),
    };

    Ok(TrackAnalysis {
        is_circular,
        average_radius_km,
        radius_variance_ratio,
        start_end_distance_km,
        center,
        boundary_circles,
    })
}
