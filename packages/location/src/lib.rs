#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Device location.
//!
//! A [`LocationProvider`] answers one-shot position requests and hands out
//! [`LocationSubscription`]s for continuous updates. Consumers hold the
//! provider behind a trait object so the platform source can be swapped for
//! [`SimulatedLocationProvider`] in tests and the CLI.

pub mod simulated;
pub mod subscription;

use alerta_vecinal_geo_models::Coordinate;
use thiserror::Error;

pub use simulated::{DEFAULT_UPDATE_INTERVAL, SimulatedLocationProvider};
pub use subscription::{LocationSubscription, StopHandle};

/// Errors from a location request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// A source of the device's position.
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolves the current position once.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] if permission is missing or no fix is
    /// available.
    async fn request_location(&self) -> Result<Coordinate, LocationError>;

    /// Starts continuous position updates.
    fn subscribe(&self) -> LocationSubscription;
}
