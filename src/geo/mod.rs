// src/geo/mod.rs
//! Spherical geometry primitives

pub mod point;
pub mod distance;
pub mod circle;

pub use point::Point;
pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use circle::{circle_points, generate_circle_points, DEFAULT_SAMPLE_COUNT, KM_PER_DEGREE};
