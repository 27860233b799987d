#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident type taxonomy and the incident record.
//!
//! Neighbors report one of five predefined incident types, or an open
//! "other" type carrying their own label. Every type resolves to a title,
//! a marker color and an icon for the map.

use std::hash::{Hash, Hasher};

use alerta_vecinal_display_models::Color;
use alerta_vecinal_geo_models::Coordinate;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Label used when a neighbor reports an "other" incident without naming it.
pub const OTHER_INCIDENT_PLACEHOLDER: &str = "Otro incidente";

/// Kind of incident being reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum IncidentType {
    /// Robo
    Robbery,
    /// Accidente
    Accident,
    /// Incendio
    Fire,
    /// Emergencia médica
    Medical,
    /// Actividad sospechosa
    Suspicious,
    /// Anything else, labelled by the reporter.
    Other(String),
}

impl IncidentType {
    /// Builds an [`IncidentType::Other`], substituting
    /// [`OTHER_INCIDENT_PLACEHOLDER`] for a blank label.
    #[must_use]
    pub fn other(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.trim().is_empty() {
            Self::Other(OTHER_INCIDENT_PLACEHOLDER.to_string())
        } else {
            Self::Other(label)
        }
    }

    /// Stable identifier, e.g. `"robbery"` or `"other-Ruido excesivo"`.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Robbery => "robbery".to_string(),
            Self::Accident => "accident".to_string(),
            Self::Fire => "fire".to_string(),
            Self::Medical => "medical".to_string(),
            Self::Suspicious => "suspicious".to_string(),
            Self::Other(label) => format!("other-{label}"),
        }
    }

    /// Human-readable title shown on markers and lists.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Robbery => "Robo",
            Self::Accident => "Accidente",
            Self::Fire => "Incendio",
            Self::Medical => "Emergencia Médica",
            Self::Suspicious => "Actividad Sospechosa",
            Self::Other(label) if label.trim().is_empty() => OTHER_INCIDENT_PLACEHOLDER,
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Robbery => Color::Red,
            Self::Accident => Color::Orange,
            Self::Fire => Color::Yellow,
            Self::Medical => Color::Green,
            Self::Suspicious => Color::Purple,
            Self::Other(_) => Color::Gray,
        }
    }

    /// Symbol name of the marker icon.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Robbery => "person.fill.xmark",
            Self::Accident => "car.fill",
            Self::Fire => "flame.fill",
            Self::Medical => "cross.fill",
            Self::Suspicious => "eye.fill",
            Self::Other(_) => "exclamationmark.triangle",
        }
    }

    #[must_use]
    pub const fn is_predefined(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The five fixed incident types, in menu order.
    #[must_use]
    pub fn predefined() -> Vec<Self> {
        vec![
            Self::Robbery,
            Self::Accident,
            Self::Fire,
            Self::Medical,
            Self::Suspicious,
        ]
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// An image attached to a report, held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Encoded image bytes (JPEG/PNG as picked by the user).
    pub bytes: Vec<u8>,
}

impl Photo {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// A neighbor-submitted incident report.
///
/// Two incidents are equal when id, type, address and description match,
/// their coordinates agree within the coordinate tolerance and their
/// timestamps are less than one second apart. Attachments are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub incident_type: IncidentType,
    pub coordinate: Coordinate,
    pub address: String,
    pub description: Option<String>,
    timestamp: DateTime<Utc>,
    pub photos: Option<Vec<Photo>>,
    /// Reference to an attached video (a local file or remote URL).
    pub video_url: Option<String>,
}

impl Incident {
    /// Creates an incident stamped with the current time.
    #[must_use]
    pub fn new(
        id: i64,
        incident_type: IncidentType,
        coordinate: Coordinate,
        address: impl Into<String>,
    ) -> Self {
        Self::recorded_at(id, incident_type, coordinate, address, Utc::now())
    }

    /// Creates an incident with an explicit creation time.
    #[must_use]
    pub fn recorded_at(
        id: i64,
        incident_type: IncidentType,
        coordinate: Coordinate,
        address: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            incident_type,
            coordinate,
            address: address.into(),
            description: None,
            timestamp,
            photos: None,
            video_url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = Some(photos);
        self
    }

    #[must_use]
    pub fn with_video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    /// When the report was created. Never changes after construction.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Title of the incident's type.
    #[must_use]
    pub fn title(&self) -> &str {
        self.incident_type.title()
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.photos.as_ref().is_some_and(|p| !p.is_empty()) || self.video_url.is_some()
    }
}

impl PartialEq for Incident {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.incident_type == other.incident_type
            && self.coordinate == other.coordinate
            && self.address == other.address
            && self.description == other.description
            && (self.timestamp - other.timestamp).abs() < TimeDelta::seconds(1)
    }
}

impl Eq for Incident {}

impl Hash for Incident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.incident_type.hash(state);
        self.coordinate.hash(state);
        self.address.hash(state);
        self.description.hash(state);
        rounded_seconds(self.timestamp).hash(state);
    }
}

/// Whole seconds since the epoch, rounded half away from zero.
fn rounded_seconds(timestamp: DateTime<Utc>) -> i64 {
    let millis = timestamp.timestamp_millis();
    if millis >= 0 {
        (millis + 500) / 1000
    } else {
        (millis - 500) / 1000
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample(timestamp: DateTime<Utc>) -> Incident {
        Incident::recorded_at(
            42,
            IncidentType::Robbery,
            Coordinate::new(8.3754, -80.1589),
            "Calle Principal",
            timestamp,
        )
    }

    #[test]
    fn other_title_round_trips_label() {
        let incident = Incident::new(
            1,
            IncidentType::other("Ruido excesivo"),
            Coordinate::new(8.38, -80.15),
            "Río Hato",
        );
        assert_eq!(incident.title(), "Ruido excesivo");
        assert_eq!(incident.incident_type.to_string(), "Ruido excesivo");
    }

    #[test]
    fn blank_other_label_uses_placeholder() {
        assert_eq!(
            IncidentType::other("   "),
            IncidentType::Other(OTHER_INCIDENT_PLACEHOLDER.to_string())
        );
        assert_eq!(
            IncidentType::Other(String::new()).title(),
            OTHER_INCIDENT_PLACEHOLDER
        );
    }

    #[test]
    fn other_equality_includes_label() {
        assert_eq!(IncidentType::other("Ruido"), IncidentType::other("Ruido"));
        assert_ne!(IncidentType::other("Ruido"), IncidentType::other("Basura"));
        assert_ne!(IncidentType::other("Robo"), IncidentType::Robbery);
    }

    #[test]
    fn ids_are_stable() {
        assert_eq!(IncidentType::Medical.id(), "medical");
        assert_eq!(IncidentType::other("Ruido").id(), "other-Ruido");
    }

    #[test]
    fn predefined_excludes_other() {
        let predefined = IncidentType::predefined();
        assert_eq!(predefined.len(), 5);
        assert!(predefined.iter().all(IncidentType::is_predefined));
    }

    #[test]
    fn timestamps_within_a_second_are_equal() {
        let now = Utc::now();
        let a = sample(now);
        let b = sample(now + TimeDelta::milliseconds(400));
        let c = sample(now + TimeDelta::milliseconds(1500));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn attachments_do_not_affect_equality() {
        let now = Utc::now();
        let plain = sample(now);
        let with_media = sample(now)
            .with_photos(vec![Photo::new(vec![0xFF, 0xD8])])
            .with_video_url("file:///tmp/clip.mov");
        assert_eq!(plain, with_media);
        assert!(with_media.has_media());
        assert!(!plain.has_media());
    }

    #[test]
    fn description_affects_equality() {
        let now = Utc::now();
        assert_ne!(sample(now), sample(now).with_description("Dos sujetos en moto"));
    }

    #[test]
    fn hash_set_dedups_same_report() {
        let at = DateTime::from_timestamp(1_750_000_000, 0).unwrap();
        let mut set = HashSet::new();
        set.insert(sample(at));
        set.insert(sample(at + TimeDelta::milliseconds(100)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn hash_seconds_round_half_away_from_zero() {
        let at = |millis| DateTime::from_timestamp_millis(millis).unwrap();
        assert_eq!(rounded_seconds(at(1_500)), 2);
        assert_eq!(rounded_seconds(at(1_499)), 1);
        assert_eq!(rounded_seconds(at(-1_500)), -2);
        assert_eq!(rounded_seconds(at(-1_499)), -1);
        assert_eq!(rounded_seconds(at(-400)), 0);
    }

    #[test]
    fn serializes_other_with_label() {
        let json = serde_json::to_value(IncidentType::other("Ruido")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "other", "label": "Ruido"}));
        let json = serde_json::to_value(IncidentType::Fire).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "fire"}));
    }
}
