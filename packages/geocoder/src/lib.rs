#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding for the neighborhood map.
//!
//! Reverse geocoding turns a tapped map point into the address prefilled
//! on an incident report; forward geocoding places a typed address on the
//! map. [`NominatimGeocoder`] talks to `OpenStreetMap`; [`StaticGeocoder`]
//! answers from a fixed table.

pub mod nominatim;
pub mod table;

use alerta_vecinal_geo_models::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use nominatim::NominatimGeocoder;
pub use table::StaticGeocoder;

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The geocoder could not be reached.
    #[error("Geocoder unavailable")]
    Unavailable,
}

/// The named parts of a resolved address. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    /// Street name.
    pub thoroughfare: Option<String>,
    /// House or building number.
    pub sub_thoroughfare: Option<String>,
    /// City, town or village.
    pub locality: Option<String>,
    /// Province.
    pub administrative_area: Option<String>,
    pub country: Option<String>,
}

impl Placemark {
    /// Joins the present parts, street first, with `", "`. Returns an empty
    /// string when every part is missing.
    #[must_use]
    pub fn format_address(&self) -> String {
        [
            &self.thoroughfare,
            &self.sub_thoroughfare,
            &self.locality,
            &self.administrative_area,
            &self.country,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Address lookup in both directions.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Finds the coordinate of a free-form address.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the lookup itself fails. An address with
    /// no match is `Ok(None)`.
    async fn forward(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError>;

    /// Describes the place at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the lookup itself fails. A point with no
    /// known address is `Ok(None)`.
    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<Placemark>, GeocodeError>;
}
