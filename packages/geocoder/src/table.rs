//! A geocoder backed by a fixed lookup table.

use std::collections::{BTreeMap, HashMap};

use alerta_vecinal_geo_models::Coordinate;

use crate::{GeocodeError, Geocoder, Placemark};

/// Answers from in-memory tables. Reverse lookups match coordinates at the
/// model's six-decimal precision; forward lookups ignore case and
/// surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<Coordinate, Placemark>,
    addresses: BTreeMap<String, Coordinate>,
    offline: bool,
}

impl StaticGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A geocoder that fails every lookup with [`GeocodeError::Unavailable`].
    #[must_use]
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Registers `placemark` at `coordinate`, and its formatted address for
    /// forward lookups when it has one.
    #[must_use]
    pub fn with_place(mut self, coordinate: Coordinate, placemark: Placemark) -> Self {
        let address = placemark.format_address();
        if !address.is_empty() {
            self.addresses.insert(normalize(&address), coordinate);
        }
        self.places.insert(coordinate, placemark);
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: &str, coordinate: Coordinate) -> Self {
        self.addresses.insert(normalize(address), coordinate);
        self
    }
}

fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}

#[async_trait::async_trait]
impl Geocoder for StaticGeocoder {
    async fn forward(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        if self.offline {
            return Err(GeocodeError::Unavailable);
        }
        Ok(self.addresses.get(&normalize(address)).copied())
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<Placemark>, GeocodeError> {
        if self.offline {
            return Err(GeocodeError::Unavailable);
        }
        Ok(self.places.get(&coordinate).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rio_hato() -> Placemark {
        Placemark {
            locality: Some("Río Hato".to_string()),
            country: Some("Panamá".to_string()),
            ..Placemark::default()
        }
    }

    #[tokio::test]
    async fn reverse_matches_within_precision() {
        let point = Coordinate::new(8.375_000, -80.155_000);
        let geocoder = StaticGeocoder::new().with_place(point, rio_hato());

        let nearby = Coordinate::new(8.375_000_2, -80.155_000_1);
        assert_eq!(geocoder.reverse(nearby).await.unwrap(), Some(rio_hato()));
        assert_eq!(
            geocoder.reverse(Coordinate::new(8.4, -80.1)).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn forward_uses_formatted_address() {
        let point = Coordinate::new(8.375, -80.155);
        let geocoder = StaticGeocoder::new()
            .with_place(point, rio_hato())
            .with_address("Calle A, Urb. Mirador", Coordinate::new(8.37, -80.16));

        assert_eq!(
            geocoder.forward("  río hato, panamá ").await.unwrap(),
            Some(point)
        );
        assert!(
            geocoder
                .forward("calle a, urb. mirador")
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(geocoder.forward("Penonomé").await.unwrap(), None);
    }

    #[tokio::test]
    async fn offline_fails_every_lookup() {
        let geocoder = StaticGeocoder::offline();
        assert!(matches!(
            geocoder.forward("Río Hato").await,
            Err(GeocodeError::Unavailable)
        ));
        assert!(matches!(
            geocoder.reverse(Coordinate::new(8.0, -80.0)).await,
            Err(GeocodeError::Unavailable)
        ));
    }
}
