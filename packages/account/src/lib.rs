#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Accounts for the Alerta Vecinal client.
//!
//! There is no real identity backend yet. [`auth::SimulatedAuthService`]
//! stands in for one behind the [`auth::AuthService`] trait, so a real
//! client can be swapped in without touching [`auth::Session`].
//!
//! Form validation lives in [`validation`] and reports the first failing
//! rule as a user-facing message.

pub mod auth;
pub mod contacts;
pub mod profile;
pub mod validation;

use thiserror::Error;

pub use auth::{AuthService, Session, SimulatedAuthService};
pub use contacts::EmergencyContacts;
pub use profile::ProfileService;
pub use validation::ValidationError;

/// Errors from the authentication service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The service rejected the credentials.
    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,

    /// The service rejected the sign-up.
    #[error("Error al registrar. Intenta nuevamente.")]
    RegistrationFailed,
}

/// Errors surfaced by [`Session`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    /// A form field failed validation before reaching the service.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Errors from editing the emergency contact list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("El nombre del contacto es obligatorio")]
    MissingName,

    #[error("El teléfono del contacto es obligatorio")]
    MissingPhone,
}
