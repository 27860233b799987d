//! Nominatim / `OpenStreetMap` geocoder client.
//!
//! The public instance allows **1 request per second** and requires an
//! identifying `User-Agent`. Map taps are user-paced, so no client-side
//! throttle is applied.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/> and
//! <https://nominatim.org/release-docs/develop/api/Reverse/>

use alerta_vecinal_geo_models::Coordinate;

use crate::{GeocodeError, Geocoder, Placemark};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Results are restricted to Panama.
pub const DEFAULT_COUNTRY_CODES: &str = "pa";

const USER_AGENT: &str = concat!("alerta-vecinal/", env!("CARGO_PKG_VERSION"));

/// Geocodes against a Nominatim instance.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    country_codes: String,
}

impl NominatimGeocoder {
    /// Creates a client for the public instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for a self-hosted instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            country_codes: DEFAULT_COUNTRY_CODES.to_string(),
        })
    }

    async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, GeocodeError> {
        let resp = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(query)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        Ok(resp.error_for_status()?.json().await?)
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimGeocoder {
    async fn forward(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        if address.trim().is_empty() {
            return Ok(None);
        }
        log::debug!("Forward geocoding '{address}'");
        let body = self
            .get(
                "search",
                &[
                    ("q", address),
                    ("countrycodes", self.country_codes.as_str()),
                    ("format", "jsonv2"),
                    ("limit", "1"),
                ],
            )
            .await?;
        parse_search_response(&body)
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<Placemark>, GeocodeError> {
        log::debug!("Reverse geocoding {coordinate}");
        let lat = coordinate.latitude.to_string();
        let lon = coordinate.longitude.to_string();
        let body = self
            .get(
                "reverse",
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("format", "jsonv2"),
                    ("addressdetails", "1"),
                ],
            )
            .await?;
        parse_reverse_response(&body)
    }
}

/// Parses a Nominatim search response.
fn parse_search_response(body: &serde_json::Value) -> Result<Option<Coordinate>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let lat = first["lat"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lat in Nominatim response".to_string(),
        })?;

    let lon = first["lon"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lon in Nominatim response".to_string(),
        })?;

    Ok(Some(Coordinate::new(lat, lon)))
}

/// Parses a Nominatim reverse response. Points with nothing nearby come
/// back as an `error` object rather than an HTTP error.
fn parse_reverse_response(body: &serde_json::Value) -> Result<Option<Placemark>, GeocodeError> {
    if body.get("error").is_some() {
        return Ok(None);
    }

    let address = body
        .get("address")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing address in Nominatim response".to_string(),
        })?;

    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| address.get(*key).and_then(serde_json::Value::as_str))
            .map(String::from)
    };

    Ok(Some(Placemark {
        thoroughfare: field(&["road", "pedestrian", "footway"]),
        sub_thoroughfare: field(&["house_number"]),
        locality: field(&["city", "town", "village", "hamlet", "suburb"]),
        administrative_area: field(&["state", "province"]),
        country: field(&["country"]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_result() {
        let body = serde_json::json!([{
            "lat": "8.3721",
            "lon": "-80.1602",
            "display_name": "Río Hato, Antón, Coclé, Panamá"
        }]);
        let result = parse_search_response(&body).unwrap().unwrap();
        assert!((result.latitude - 8.3721).abs() < 1e-4);
        assert!((result.longitude - -80.1602).abs() < 1e-4);
    }

    #[test]
    fn parses_search_empty() {
        let body = serde_json::json!([]);
        assert!(parse_search_response(&body).unwrap().is_none());
    }

    #[test]
    fn rejects_search_without_lat() {
        let body = serde_json::json!([{ "lon": "-80.1602" }]);
        assert!(matches!(
            parse_search_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn parses_reverse_result() {
        let body = serde_json::json!({
            "lat": "8.3721",
            "lon": "-80.1602",
            "address": {
                "road": "Carretera Panamericana",
                "village": "Río Hato",
                "state": "Coclé",
                "country": "Panamá",
                "country_code": "pa"
            }
        });
        let placemark = parse_reverse_response(&body).unwrap().unwrap();
        assert_eq!(placemark.thoroughfare.as_deref(), Some("Carretera Panamericana"));
        assert_eq!(placemark.sub_thoroughfare, None);
        assert_eq!(placemark.locality.as_deref(), Some("Río Hato"));
        assert_eq!(
            placemark.format_address(),
            "Carretera Panamericana, Río Hato, Coclé, Panamá"
        );
    }

    #[test]
    fn reverse_error_object_means_no_match() {
        let body = serde_json::json!({ "error": "Unable to geocode" });
        assert!(parse_reverse_response(&body).unwrap().is_none());
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let geocoder = NominatimGeocoder::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(geocoder.base_url, "http://localhost:8080");
    }
}
