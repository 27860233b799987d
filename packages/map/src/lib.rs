#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The neighborhood map screen, minus the rendering.
//!
//! A [`MapSession`] owns the incident and resource catalogs together with
//! the visible region, and drives the location provider and geocoder it is
//! given when the user taps the map, asks for their position or files a
//! report.

pub mod camera;
pub mod session;

pub use camera::Camera;
pub use session::{FALLBACK_ADDRESS, MapSession};
