#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Display palette shared by every taxonomy in the app.
//!
//! Incident types, emergency resources, chat channels, message types and
//! priorities all carry a tint. They resolve to one of these named colors
//! so front ends can map them onto their own theme.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A named display color.
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
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

impl Color {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Orange,
            Self::Yellow,
            Self::Green,
            Self::Blue,
            Self::Purple,
            Self::Gray,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn color_names_parse_back() {
        for color in Color::all() {
            let parsed = Color::from_str(color.as_ref()).unwrap();
            assert_eq!(parsed, *color);
        }
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(Color::Purple.to_string(), "purple");
        assert_eq!(Color::from_str("gray").unwrap(), Color::Gray);
    }
}
