#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Emergency resources (police, fire, hospitals) near the user.
//!
//! The resource list is static: it is defined in TOML files under
//! `resources/` and embedded at compile time by [`registry`]. The
//! [`catalog`] ranks resources by distance from the user's live position,
//! and [`format`] renders distances and rough travel times for display.

pub mod catalog;
pub mod format;
pub mod registry;

use alerta_vecinal_display_models::Color;
use alerta_vecinal_geo_models::Coordinate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use catalog::ResourceCatalog;
pub use format::{TravelEstimate, TravelMode, estimate_travel_time, format_distance};

/// Category of an emergency resource.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceType {
    Police,
    Fire,
    Hospital,
}

impl ResourceType {
    /// Symbol name of the marker icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Police => "shield.fill",
            Self::Fire => "flame.fill",
            Self::Hospital => "cross.fill",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Police => Color::Blue,
            Self::Fire => Color::Red,
            Self::Hospital => Color::Green,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Police, Self::Fire, Self::Hospital]
    }
}

/// A static emergency-service contact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub phone: String,
}

impl Resource {
    /// `tel://` URI for dialing this resource.
    #[must_use]
    pub fn dial_uri(&self) -> String {
        format!("tel://{}", self.phone)
    }
}
