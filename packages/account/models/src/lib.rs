#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Account types: the signed-in user's profile, the sign-up and sign-in
//! forms, and personal emergency contacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A neighbor's profile.
///
/// Edited wholesale: the edit form produces a complete replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub profile_image_url: Option<String>,
    join_date: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        join_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            neighborhood: None,
            profile_image_url: None,
            join_date,
        }
    }

    /// When the account was created. Fixed for the account's lifetime.
    #[must_use]
    pub const fn join_date(&self) -> DateTime<Utc> {
        self.join_date
    }
}

/// The sign-up form as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub neighborhood: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
    /// Consent under Panama's Law 81 on personal data protection.
    pub accept_data_law: bool,
    /// Encoded profile picture, if one was picked.
    pub profile_image: Option<Vec<u8>>,
}

/// The sign-in form as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username or phone number.
    pub identifier: String,
    pub password: String,
    pub remember_user: bool,
}

/// How an emergency contact relates to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactRelation {
    #[default]
    #[strum(serialize = "Familiar")]
    Family,
    #[strum(serialize = "Vecino")]
    Neighbor,
    #[strum(serialize = "Médico")]
    Doctor,
    #[strum(serialize = "Emergencias")]
    Emergency,
    #[strum(serialize = "Otro")]
    Other,
}

impl ContactRelation {
    /// Returns all variants of this enum, in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Family,
            Self::Neighbor,
            Self::Doctor,
            Self::Emergency,
            Self::Other,
        ]
    }
}

/// A personal emergency contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: ContactRelation,
}

impl EmergencyContact {
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, relation: ContactRelation) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            relation,
        }
    }

    /// `tel://` URI with every non-digit stripped from the number.
    #[must_use]
    pub fn dial_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("tel://{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_uri_strips_formatting() {
        let contact = EmergencyContact::new("Familiares", "+507 6123-4567", ContactRelation::Family);
        assert_eq!(contact.dial_uri(), "tel://50761234567");
    }

    #[test]
    fn relation_labels() {
        assert_eq!(ContactRelation::Doctor.to_string(), "Médico");
        assert_eq!(ContactRelation::all().len(), 5);
    }
}
