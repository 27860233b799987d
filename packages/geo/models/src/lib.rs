#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives shared across the Alerta Vecinal packages.
//!
//! [`Coordinate`] compares with a fixed tolerance and hashes on values
//! quantized to six decimal places, so incidents keyed by location
//! deduplicate consistently. Distances are geodesic on the WGS84
//! ellipsoid.

pub mod region;

use std::hash::{Hash, Hasher};

use geo::{Distance as _, Geodesic, Point};
use serde::{Deserialize, Serialize};

pub use region::{CoordinateSpan, MapRegion};

/// Two coordinates closer than this (in degrees, per axis) are equal.
pub const COORDINATE_TOLERANCE: f64 = 0.000_001;

/// Decimal places kept when hashing a coordinate.
pub const COORDINATE_PRECISION: i32 = 6;

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude and longitude rounded to [`COORDINATE_PRECISION`] places.
    #[must_use]
    pub fn quantized(self) -> (f64, f64) {
        (
            round_to_places(self.latitude, COORDINATE_PRECISION),
            round_to_places(self.longitude, COORDINATE_PRECISION),
        )
    }

    /// Geodesic distance to `other` in meters.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        Geodesic.distance(Point::from(self), Point::from(other))
    }

    /// Whether both axes are finite and within their valid ranges.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < COORDINATE_TOLERANCE
            && (self.longitude - other.longitude).abs() < COORDINATE_TOLERANCE
    }
}

// Not reflexive for NaN axes; callers never store non-finite coordinates.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lat, lng) = self.quantized();
        // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
        (lat + 0.0).to_bits().hash(state);
        (lng + 0.0).to_bits().hash(state);
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Rounds half away from zero to `places` decimal places.
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let divisor = 10f64.powi(places);
    (value * divisor).round() / divisor
}
