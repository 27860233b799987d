//! The signed-in user's profile.

use std::time::Duration;

use alerta_vecinal_account_models::User;
use chrono::{TimeDelta, Utc};

/// Round-trip delay of the simulated profile fetch.
pub const DEFAULT_PROFILE_DELAY: Duration = Duration::from_secs(1);

/// Loads and holds the current user's profile.
///
/// The profile is fetched at most once per service; later calls to
/// [`load`](Self::load) return the cached user.
#[derive(Debug, Clone)]
pub struct ProfileService {
    delay: Duration,
    user: Option<User>,
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_DELAY)
    }
}

impl ProfileService {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, user: None }
    }

    /// Returns the profile, fetching it on first use.
    pub async fn load(&mut self) -> &User {
        if self.user.is_none() {
            tokio::time::sleep(self.delay).await;
            log::debug!("Loaded user profile");
        }
        self.user.get_or_insert_with(sample_user)
    }

    /// The profile, if already loaded.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replaces the whole profile with the edited copy.
    pub fn update(&mut self, user: User) {
        log::info!("Updated profile for {}", user.id);
        self.user = Some(user);
    }
}

/// Maps an edit-form text field onto an optional profile field: blank
/// means "not set".
#[must_use]
pub fn optional_field(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn sample_user() -> User {
    let mut user = User::new(
        "user123",
        "José Moreno",
        "josemoreno@gmail.com",
        Utc::now() - TimeDelta::days(90),
    );
    user.phone = Some("+507 6123-4567".to_string());
    user.address = Some("Calle A, Urb. Mirador".to_string());
    user.neighborhood = Some("Rio Hato".to_string());
    user
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn loads_once_and_caches() {
        let mut profiles = ProfileService::default();
        assert!(profiles.user().is_none());

        let join_date = profiles.load().await.join_date();
        assert_eq!(profiles.user().map(|u| u.full_name.as_str()), Some("José Moreno"));

        // A second load returns the same profile rather than refetching.
        assert_eq!(profiles.load().await.join_date(), join_date);
    }

    #[tokio::test]
    async fn update_replaces_wholesale() {
        let mut profiles = ProfileService::new(Duration::ZERO);
        let mut edited = profiles.load().await.clone();
        edited.full_name = "José J. Moreno".to_string();
        edited.phone = optional_field("");
        edited.neighborhood = optional_field("Antón");
        profiles.update(edited);

        let user = profiles.user().unwrap();
        assert_eq!(user.full_name, "José J. Moreno");
        assert_eq!(user.phone, None);
        assert_eq!(user.neighborhood.as_deref(), Some("Antón"));
    }

    #[test]
    fn optional_field_maps_blank_to_none() {
        assert_eq!(optional_field(""), None);
        assert_eq!(optional_field("Calle B"), Some("Calle B".to_string()));
    }
}
