#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident reporting for the neighborhood map.
//!
//! - [`catalog`] holds the reported incidents in insertion order and
//!   answers type-filter queries for the map.
//! - [`report`] turns the "new report" form into an [`Incident`].
//! - [`suggest`] offers address completions while the reporter types.
//!
//! [`Incident`]: alerta_vecinal_incident_models::Incident

pub mod catalog;
pub mod report;
pub mod suggest;

use thiserror::Error;

pub use catalog::IncidentCatalog;
pub use report::IncidentReport;

/// Errors from incident reporting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncidentError {
    /// The report has no address to show on the marker.
    #[error("La dirección es obligatoria")]
    MissingAddress,

    /// The report has no location to pin.
    #[error("Selecciona una ubicación en el mapa")]
    MissingCoordinate,
}
