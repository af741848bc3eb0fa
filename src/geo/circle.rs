// src/geo/circle.rs
//! Sampled circle rings around a center point
//!
//! Rings use a local planar approximation (degrees of latitude are treated
//! as a fixed length, degrees of longitude shrink with the cosine of the
//! center latitude). This holds for radii that are small compared to the
//! Earth; no correction is made for large radii.

use super::point::Point;
use std::f64::consts::PI;

/// Approximate length of one degree of latitude in kilometers
pub const KM_PER_DEGREE: f64 = 111.32;

/// Number of angular steps used for display rings
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

// cos(latitude) below this is treated as a pole
const POLE_COS_EPSILON: f64 = 1e-12;

/// Ring of `DEFAULT_SAMPLE_COUNT + 1` points around `center`
pub fn circle_points(center: &Point, radius_km: f64) -> Vec<Point> {
    generate_circle_points(center, radius_km, DEFAULT_SAMPLE_COUNT)
}

/// Generate a closed ring of `sample_count + 1` points around `center`.
///
/// The first and last points sit at the same angle, so the ring closes on
/// itself. A `sample_count` of zero is treated as one.
///
/// When the center is on a pole the longitude scale is undefined; the ring
/// is then the parallel `radius_km` away from the pole, swept through a
/// full turn of longitude starting at the center's longitude. Longitudes
/// are never wrapped into [-180, 180].
pub fn generate_circle_points(center: &Point, radius_km: f64, sample_count: usize) -> Vec<Point> {
    let steps = sample_count.max(1);
    let lat_offset = radius_km / KM_PER_DEGREE;
    let cos_lat = center.latitude.to_radians().cos();

    (0..=steps)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / steps as f64;

            if cos_lat.abs() < POLE_COS_EPSILON {
                let toward_equator = -center.latitude.signum();
                Point::new(
                    center.latitude + toward_equator * lat_offset,
                    center.longitude + angle.to_degrees(),
                )
            } else {
                let lon_offset = radius_km / (KM_PER_DEGREE * cos_lat);
                Point::new(
                    center.latitude + lat_offset * angle.cos(),
                    center.longitude + lon_offset * angle.sin(),
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed() {
        let center = Point::new(51.5, -0.09);
        let ring = generate_circle_points(&center, 1.0, 100);

        assert_eq!(ring.len(), 101);
        let first = ring[0];
        let last = ring[100];
        assert!(first.distance_to(&last) < 1e-9);
    }

    #[test]
    fn test_ring_points_at_radius() {
        let center = Point::new(51.5, -0.09);
        for point in circle_points(&center, 1.0) {
            let d = center.distance_to(&point);
            assert!((d - 1.0).abs() < 0.01, "Expected ~1 km, got {d}");
        }
    }

    #[test]
    fn test_first_point_is_due_north() {
        let center = Point::new(10.0, 20.0);
        let ring = generate_circle_points(&center, KM_PER_DEGREE, 4);

        assert_eq!(ring.len(), 5);
        assert!((ring[0].latitude - 11.0).abs() < 1e-12);
        assert!((ring[0].longitude - 20.0).abs() < 1e-12);
        assert!((ring[2].latitude - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let center = Point::new(-33.9, 151.2);
        let ring = generate_circle_points(&center, 0.0, 8);
        assert!(ring.iter().all(|p| *p == center));
    }

    #[test]
    fn test_zero_sample_count() {
        let ring = generate_circle_points(&Point::new(0.0, 0.0), 1.0, 0);
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_polar_center_yields_parallel() {
        let pole = Point::new(90.0, 0.0);
        let ring = generate_circle_points(&pole, 10.0, 36);

        assert_eq!(ring.len(), 37);
        let expected_lat = 90.0 - 10.0 / KM_PER_DEGREE;
        for point in &ring {
            assert!(point.latitude.is_finite() && point.longitude.is_finite());
            assert!((point.latitude - expected_lat).abs() < 1e-12);
        }

        let south = Point::new(-90.0, 0.0);
        let ring = generate_circle_points(&south, 10.0, 36);
        assert!(ring.iter().all(|p| p.latitude > -90.0));
    }
}
