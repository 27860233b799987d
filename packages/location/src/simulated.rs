//! A scripted location source for tests and the command-line front end.

use std::time::Duration;

use alerta_vecinal_geo_models::Coordinate;

use crate::{LocationError, LocationProvider, LocationSubscription};

/// Time between simulated updates.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(1);

/// Replays a fixed route of positions.
///
/// One-shot requests report the first point of the route; subscriptions
/// walk the route in a loop, one point per interval.
#[derive(Debug, Clone)]
pub struct SimulatedLocationProvider {
    route: Vec<Coordinate>,
    interval: Duration,
    failure: Option<LocationError>,
}

impl SimulatedLocationProvider {
    /// A device that stays put at `coordinate`.
    #[must_use]
    pub fn fixed(coordinate: Coordinate) -> Self {
        Self::route(vec![coordinate])
    }

    #[must_use]
    pub const fn route(route: Vec<Coordinate>) -> Self {
        Self {
            route,
            interval: DEFAULT_UPDATE_INTERVAL,
            failure: None,
        }
    }

    /// A device whose requests always fail with `error`.
    #[must_use]
    pub const fn failing(error: LocationError) -> Self {
        Self {
            route: Vec::new(),
            interval: DEFAULT_UPDATE_INTERVAL,
            failure: Some(error),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_UPDATE_INTERVAL);
        self
    }
}

#[async_trait::async_trait]
impl LocationProvider for SimulatedLocationProvider {
    async fn request_location(&self) -> Result<Coordinate, LocationError> {
        if let Some(error) = &self.failure {
            log::debug!("Simulated location request failed: {error}");
            return Err(error.clone());
        }
        self.route
            .first()
            .copied()
            .ok_or_else(|| LocationError::Unavailable("no simulated position".to_string()))
    }

    fn subscribe(&self) -> LocationSubscription {
        let route = if self.failure.is_some() {
            Vec::new()
        } else {
            self.route.clone()
        };
        let interval = self.interval;

        LocationSubscription::new(async_stream::stream! {
            if !route.is_empty() {
                let mut ticker = tokio::time::interval(interval);
                for coordinate in route.into_iter().cycle() {
                    ticker.tick().await;
                    yield coordinate;
                }
            }
        })
    }
}
