//! How the visible region is presented.

use alerta_vecinal_geo_models::{Coordinate, MapRegion};

/// Eye distance above the center in perspective mode, in meters.
pub const PERSPECTIVE_DISTANCE: f64 = 1000.0;

/// Compass heading of the perspective camera, in degrees.
pub const PERSPECTIVE_HEADING: f64 = 0.0;

/// Tilt of the perspective camera from straight down, in degrees.
pub const PERSPECTIVE_PITCH: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Camera {
    /// Flat, top-down view of a region.
    Region(MapRegion),
    /// Tilted 3-D view looking at `center`.
    Perspective {
        center: Coordinate,
        distance: f64,
        heading: f64,
        pitch: f64,
    },
}

impl Camera {
    #[must_use]
    pub const fn for_region(region: MapRegion, perspective: bool) -> Self {
        if perspective {
            Self::Perspective {
                center: region.center,
                distance: PERSPECTIVE_DISTANCE,
                heading: PERSPECTIVE_HEADING,
                pitch: PERSPECTIVE_PITCH,
            }
        } else {
            Self::Region(region)
        }
    }

    #[must_use]
    pub const fn center(&self) -> Coordinate {
        match self {
            Self::Region(region) => region.center,
            Self::Perspective { center, .. } => *center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_camera_keeps_region() {
        let region = MapRegion::default();
        assert_eq!(Camera::for_region(region, false), Camera::Region(region));
    }

    #[test]
    fn perspective_camera_looks_at_center() {
        let region = MapRegion::default();
        let camera = Camera::for_region(region, true);
        assert_eq!(
            camera,
            Camera::Perspective {
                center: region.center,
                distance: 1000.0,
                heading: 0.0,
                pitch: 60.0,
            }
        );
        assert_eq!(camera.center(), region.center);
    }
}
