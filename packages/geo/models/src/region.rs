//! Visible map region and zoom arithmetic.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Smallest span (in degrees) reachable by zooming in.
pub const MIN_SPAN_DELTA: f64 = 0.001;

/// Largest span (in degrees) reachable by zooming out.
pub const MAX_SPAN_DELTA: f64 = 180.0;

/// Span used when the map opens.
pub const DEFAULT_SPAN_DELTA: f64 = 0.2;

/// Span used when jumping to the most recent incident.
pub const INCIDENT_SPAN_DELTA: f64 = 0.05;

/// Span used when centering on the user.
pub const USER_SPAN_DELTA: f64 = 0.01;

/// Where the map opens: Río Hato, Coclé.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(8.38, -80.15);

/// Height and width of a map region in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    #[must_use]
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    /// A square span of `delta` degrees on both axes.
    #[must_use]
    pub const fn square(delta: f64) -> Self {
        Self::new(delta, delta)
    }
}

/// The portion of the map currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

impl Default for MapRegion {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, CoordinateSpan::square(DEFAULT_SPAN_DELTA))
    }
}

impl MapRegion {
    #[must_use]
    pub const fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Halves the span, never going below [`MIN_SPAN_DELTA`].
    pub fn zoom_in(&mut self) {
        self.span = CoordinateSpan::new(
            (self.span.latitude_delta * 0.5).max(MIN_SPAN_DELTA),
            (self.span.longitude_delta * 0.5).max(MIN_SPAN_DELTA),
        );
    }

    /// Doubles the span, never going above [`MAX_SPAN_DELTA`].
    pub fn zoom_out(&mut self) {
        self.span = CoordinateSpan::new(
            (self.span.latitude_delta * 2.0).min(MAX_SPAN_DELTA),
            (self.span.longitude_delta * 2.0).min(MAX_SPAN_DELTA),
        );
    }

    /// Recenters on `center` with a square span of `delta` degrees.
    pub fn focus(&mut self, center: Coordinate, delta: f64) {
        self.center = center;
        self.span = CoordinateSpan::square(delta);
    }

    /// Whether `coordinate` falls inside this region.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lng = self.span.longitude_delta / 2.0;
        (coordinate.latitude - self.center.latitude).abs() <= half_lat
            && (coordinate.longitude - self.center.longitude).abs() <= half_lng
    }
}
