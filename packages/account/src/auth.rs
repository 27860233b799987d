//! Authentication seam and the signed-in session.

use std::sync::Arc;
use std::time::Duration;

use alerta_vecinal_account_models::{LoginForm, RegistrationForm};

use crate::validation::{validate_login, validate_registration};
use crate::{AccountError, AuthError};

/// Round-trip delay of the simulated service.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_secs(2);

/// Identity backend used by [`Session`].
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Signs in with a username/phone and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the service rejects the
    /// credentials.
    async fn login(&self, identifier: &str, secret: &str) -> Result<(), AuthError>;

    /// Creates an account, optionally uploading a profile picture.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] if the service rejects
    /// the sign-up.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        profile_image: Option<&[u8]>,
    ) -> Result<(), AuthError>;
}

/// Placeholder backend: any non-empty credentials succeed after a fixed
/// delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuthService {
    delay: Duration,
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_DELAY)
    }
}

impl SimulatedAuthService {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl AuthService for SimulatedAuthService {
    async fn login(&self, identifier: &str, secret: &str) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        if identifier.is_empty() || secret.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(())
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        profile_image: Option<&[u8]>,
    ) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::RegistrationFailed);
        }
        match profile_image {
            Some(bytes) => log::info!("Received profile picture ({} bytes)", bytes.len()),
            None => log::info!("Registered without profile picture"),
        }
        Ok(())
    }
}

/// Whether this device is signed in, and the operations that change it.
pub struct Session {
    service: Arc<dyn AuthService>,
    authenticated: bool,
}

impl Session {
    #[must_use]
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self {
            service,
            authenticated: false,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Validates the form, then signs in.
    ///
    /// # Errors
    ///
    /// * [`AccountError::Validation`] if a field is empty; the service is
    ///   not contacted
    /// * [`AccountError::Auth`] if the service rejects the credentials
    pub async fn login(&mut self, form: &LoginForm) -> Result<(), AccountError> {
        validate_login(form)?;

        let result = self.service.login(&form.identifier, &form.password).await;
        self.authenticated = result.is_ok();

        match &result {
            Ok(()) => log::info!("Signed in as {}", form.identifier),
            Err(e) => log::warn!("Sign-in failed for {}: {e}", form.identifier),
        }

        result.map_err(AccountError::from)
    }

    /// Validates the form, then creates the account and signs in.
    ///
    /// # Errors
    ///
    /// * [`AccountError::Validation`] for the first rule the form breaks;
    ///   the service is not contacted
    /// * [`AccountError::Auth`] if the service rejects the sign-up
    pub async fn register(&mut self, form: &RegistrationForm) -> Result<(), AccountError> {
        validate_registration(form)?;

        let result = self
            .service
            .register(
                &form.username,
                &form.email,
                &form.password,
                form.profile_image.as_deref(),
            )
            .await;
        self.authenticated = result.is_ok();

        if let Err(e) = &result {
            log::warn!("Sign-up failed for {}: {e}", form.username);
        }

        result.map_err(AccountError::from)
    }

    pub fn logout(&mut self) {
        log::info!("Signed out");
        self.authenticated = false;
    }
}
