#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]
#![allow(clippy::struct_excessive_bools)]

//! User preferences: notifications, privacy and appearance.
//!
//! Defaults match a freshly installed app. [`SettingsStore`] persists the
//! whole [`AppSettings`] tree as a single TOML document.

pub mod store;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use store::{DEFAULT_SETTINGS_PATH, SETTINGS_PATH_ENV, SettingsStore};

/// Errors from loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Every persisted preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
}

/// How much of a message a notification banner reveals.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPreview {
    #[strum(serialize = "Mostrar todo el contenido")]
    Full,
    #[default]
    #[strum(serialize = "Mostrar solo remitente")]
    Partial,
    #[strum(serialize = "No mostrar contenido")]
    None,
}

impl NotificationPreview {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Full, Self::Partial, Self::None]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuietHours {
    pub enabled: bool,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl Default for QuietHours {
    fn default() -> Self {
        Self {
            enabled: false,
            from: NaiveTime::MIN,
            to: NaiveTime::MIN,
        }
    }
}

impl QuietHours {
    /// Whether `time` falls inside the quiet window. Windows may wrap past
    /// midnight; an empty window (`from == to`) never matches.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        if !self.enabled || self.from == self.to {
            return false;
        }
        if self.from < self.to {
            self.from <= time && time < self.to
        } else {
            time >= self.from || time < self.to
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyAlerts {
    pub critical: bool,
    pub police: bool,
    pub medical: bool,
    pub fire: bool,
    pub natural_disaster: bool,
}

impl Default for EmergencyAlerts {
    fn default() -> Self {
        Self {
            critical: true,
            police: true,
            medical: true,
            fire: true,
            natural_disaster: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityAlerts {
    pub events: bool,
    pub meetings: bool,
    pub general: bool,
    pub neighborhood_news: bool,
    pub safety_tips: bool,
}

impl Default for CommunityAlerts {
    fn default() -> Self {
        Self {
            events: true,
            meetings: true,
            general: true,
            neighborhood_news: true,
            safety_tips: true,
        }
    }
}

/// Notifications about the user's own activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityAlerts {
    pub report_updates: bool,
    pub new_neighbors: bool,
    pub responses: bool,
    pub app_updates: bool,
}

impl Default for ActivityAlerts {
    fn default() -> Self {
        Self {
            report_updates: true,
            new_neighbors: true,
            responses: true,
            app_updates: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub sound: bool,
    pub vibration: bool,
    pub preview: NotificationPreview,
    pub quiet_hours: QuietHours,
    pub emergency: EmergencyAlerts,
    pub community: CommunityAlerts,
    pub activity: ActivityAlerts,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: true,
            vibration: true,
            preview: NotificationPreview::default(),
            quiet_hours: QuietHours::default(),
            emergency: EmergencyAlerts::default(),
            community: CommunityAlerts::default(),
            activity: ActivityAlerts::default(),
        }
    }
}

impl NotificationSettings {
    /// Restores the general switches. Quiet-hour times and the per-category
    /// toggles are left as they are.
    pub const fn reset(&mut self) {
        self.enabled = true;
        self.sound = true;
        self.vibration = true;
        self.preview = NotificationPreview::Partial;
        self.quiet_hours.enabled = false;
    }
}

/// How long reports and personal data are kept.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum DataRetention {
    #[default]
    #[strum(serialize = "1 mes")]
    OneMonth,
    #[strum(serialize = "3 meses")]
    ThreeMonths,
    #[strum(serialize = "6 meses")]
    SixMonths,
    #[strum(serialize = "1 año")]
    OneYear,
    #[strum(serialize = "Indefinidamente")]
    Indefinite,
}

impl DataRetention {
    /// Retention length in days, or `None` when data is kept forever.
    #[must_use]
    pub const fn days(self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(90),
            Self::SixMonths => Some(180),
            Self::OneYear => Some(365),
            Self::Indefinite => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::Indefinite,
        ]
    }
}

/// Which profile fields other neighbors can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibleData {
    pub name: bool,
    pub address: bool,
    pub phone: bool,
    pub neighborhood: bool,
}

impl Default for VisibleData {
    fn default() -> Self {
        Self {
            name: true,
            address: false,
            phone: false,
            neighborhood: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub share_location: bool,
    pub show_in_map: bool,
    pub contact_visibility: bool,
    pub analytics: bool,
    pub data_sharing: bool,
    pub retention: DataRetention,
    pub visible_data: VisibleData,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            share_location: false,
            show_in_map: false,
            contact_visibility: false,
            analytics: true,
            data_sharing: false,
            retention: DataRetention::default(),
            visible_data: VisibleData::default(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    #[strum(serialize = "Automático")]
    System,
    #[strum(serialize = "Claro")]
    Light,
    #[strum(serialize = "Oscuro")]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::System, Self::Light, Self::Dark]
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    #[strum(serialize = "Estándar")]
    Standard,
    #[strum(serialize = "Satélite")]
    Satellite,
    #[strum(serialize = "Híbrido")]
    Hybrid,
}

impl MapStyle {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::Satellite, Self::Hybrid]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub map_style: MapStyle,
}

impl AppSettings {
    /// Restores the general notification switches.
    pub const fn reset_notifications(&mut self) {
        self.notifications.reset();
    }

    /// Restores theme and map style, and re-enables notifications.
    pub const fn reset_appearance(&mut self) {
        self.appearance = AppearanceSettings {
            theme: Theme::System,
            map_style: MapStyle::Standard,
        };
        self.notifications.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_install() {
        let settings = AppSettings::default();
        assert!(settings.notifications.enabled);
        assert_eq!(settings.notifications.preview, NotificationPreview::Partial);
        assert!(!settings.notifications.quiet_hours.enabled);
        assert!(settings.notifications.emergency.natural_disaster);
        assert!(settings.notifications.community.safety_tips);
        assert!(!settings.privacy.share_location);
        assert!(settings.privacy.analytics);
        assert!(settings.privacy.visible_data.name);
        assert!(!settings.privacy.visible_data.phone);
        assert_eq!(settings.privacy.retention.days(), Some(30));
        assert_eq!(settings.appearance.theme, Theme::System);
        assert_eq!(settings.appearance.map_style, MapStyle::Standard);
    }

    #[test]
    fn reset_notifications_keeps_category_toggles() {
        let mut settings = AppSettings::default();
        settings.notifications.enabled = false;
        settings.notifications.sound = false;
        settings.notifications.preview = NotificationPreview::None;
        settings.notifications.quiet_hours.enabled = true;
        settings.notifications.quiet_hours.from = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        settings.notifications.emergency.police = false;

        settings.reset_notifications();

        assert!(settings.notifications.enabled);
        assert!(settings.notifications.sound);
        assert_eq!(settings.notifications.preview, NotificationPreview::Partial);
        assert!(!settings.notifications.quiet_hours.enabled);
        assert_eq!(
            settings.notifications.quiet_hours.from,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap()
        );
        assert!(!settings.notifications.emergency.police);
    }

    #[test]
    fn preview_parses_from_label() {
        use std::str::FromStr as _;

        assert_eq!(
            NotificationPreview::from_str("No mostrar contenido"),
            Ok(NotificationPreview::None)
        );
        assert_eq!(
            NotificationPreview::from_str("none"),
            Err(strum::ParseError::VariantNotFound)
        );
    }

    #[test]
    fn reset_appearance() {
        let mut settings = AppSettings::default();
        settings.appearance.theme = Theme::Dark;
        settings.appearance.map_style = MapStyle::Hybrid;
        settings.notifications.enabled = false;

        settings.reset_appearance();

        assert_eq!(settings.appearance, AppearanceSettings::default());
        assert!(settings.notifications.enabled);
    }

    #[test]
    fn quiet_hours_wrap_midnight() {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let quiet = QuietHours {
            enabled: true,
            from: at(22),
            to: at(7),
        };
        assert!(quiet.contains(at(23)));
        assert!(quiet.contains(at(3)));
        assert!(!quiet.contains(at(7)));
        assert!(!quiet.contains(at(12)));

        let disabled = QuietHours {
            enabled: false,
            ..quiet
        };
        assert!(!disabled.contains(at(23)));
        assert!(!QuietHours {
            enabled: true,
            ..QuietHours::default()
        }
        .contains(at(0)));
    }

    #[test]
    fn retention_labels() {
        assert_eq!(DataRetention::OneYear.to_string(), "1 año");
        assert_eq!(DataRetention::Indefinite.days(), None);
        assert_eq!(DataRetention::all().len(), 5);
    }
}
