//! Distance and travel-time text for the resource list.
//!
//! The travel estimate is a display heuristic: walking speed below
//! [`WALKING_THRESHOLD_METERS`], city driving speed above it.

/// Distances below this are estimated on foot.
pub const WALKING_THRESHOLD_METERS: f64 = 500.0;

/// Walking pace in meters per minute.
pub const WALKING_METERS_PER_MINUTE: f64 = 80.0;

/// City driving pace in meters per minute.
pub const DRIVING_METERS_PER_MINUTE: f64 = 250.0;

/// How the user would reach a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Driving,
}

/// Rough minutes needed to reach a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelEstimate {
    pub mode: TravelMode,
    /// Whole minutes, truncated.
    pub minutes: u64,
}

impl std::fmt::Display for TravelEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            TravelMode::Walking => write!(f, "{} min caminando", self.minutes),
            TravelMode::Driving => write!(f, "{} min en auto", self.minutes),
        }
    }
}

/// Estimates travel time for `distance` meters.
#[must_use]
pub fn estimate_travel_time(distance: f64) -> TravelEstimate {
    let (mode, pace) = if distance < WALKING_THRESHOLD_METERS {
        (TravelMode::Walking, WALKING_METERS_PER_MINUTE)
    } else {
        (TravelMode::Driving, DRIVING_METERS_PER_MINUTE)
    };

    TravelEstimate {
        mode,
        minutes: whole_units(distance / pace),
    }
}

/// Renders `distance` meters as whole meters below 1 km, otherwise as
/// kilometers with one decimal.
#[must_use]
pub fn format_distance(distance: f64) -> String {
    if distance < 1000.0 {
        format!("{} metros", whole_units(distance))
    } else {
        format!("{:.1} km", distance / 1000.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units(value: f64) -> u64 {
    // Saturating float-to-int cast: NaN and negatives become 0.
    value.trunc() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_meters_below_one_km() {
        assert_eq!(format_distance(999.0), "999 metros");
        assert_eq!(format_distance(999.9), "999 metros");
        assert_eq!(format_distance(0.4), "0 metros");
    }

    #[test]
    fn formats_kilometers_with_one_decimal() {
        assert_eq!(format_distance(1500.0), "1.5 km");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(12_345.0), "12.3 km");
    }

    #[test]
    fn short_distances_are_walked() {
        let estimate = estimate_travel_time(400.0);
        assert_eq!(estimate.mode, TravelMode::Walking);
        assert_eq!(estimate.minutes, 5);
        assert_eq!(estimate.to_string(), "5 min caminando");
    }

    #[test]
    fn long_distances_are_driven() {
        let estimate = estimate_travel_time(1000.0);
        assert_eq!(estimate.mode, TravelMode::Driving);
        assert_eq!(estimate.minutes, 4);
        assert_eq!(estimate.to_string(), "4 min en auto");
    }

    #[test]
    fn threshold_is_exclusive_for_walking() {
        assert_eq!(estimate_travel_time(499.9).mode, TravelMode::Walking);
        assert_eq!(estimate_travel_time(500.0).mode, TravelMode::Driving);
        assert_eq!(estimate_travel_time(500.0).minutes, 2);
    }

    #[test]
    fn minutes_truncate() {
        assert_eq!(estimate_travel_time(159.0).minutes, 1);
        assert_eq!(estimate_travel_time(749.0).minutes, 2);
    }
}
