// src/geo/distance.rs
//! Great-circle distance on a spherical Earth

use super::point::Point;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Uses the `atan2` form so that nearly antipodal points do not push
/// `asin` outside its domain through rounding.
pub fn haversine_distance(a: &Point, b: &Point) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_at_equator() {
        let d = haversine_distance(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.01, "Expected ~111.19 km, got {d}");
    }

    #[test]
    fn test_short_distance_in_london() {
        let d = haversine_distance(&Point::new(51.5, -0.09), &Point::new(51.5, -0.08));
        assert!(d > 0.6 && d < 0.8, "Expected ~0.7 km, got {d}");
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (Point::new(51.5, -0.09), Point::new(48.85, 2.35)),
            (Point::new(-33.9, 151.2), Point::new(40.7, -74.0)),
            (Point::new(0.0, 179.9), Point::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            let ab = haversine_distance(&a, &b);
            let ba = haversine_distance(&b, &a);
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn test_identity_is_zero() {
        let p = Point::new(42.438878, -71.119277);
        assert_eq!(haversine_distance(&p, &p), 0.0);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_distance(&Point::new(0.0, 0.0), &Point::new(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(d.is_finite());
        assert!((d - half_circumference).abs() < 1e-6);
    }
}
