#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community chat types.
//!
//! Messages are partitioned into fixed [`ChatChannel`]s, tagged with a
//! [`ChatMessageType`] and ranked by [`MessagePriority`]. Display names are
//! the Spanish labels shown in the app and double as the string form.

use alerta_vecinal_display_models::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Sender name used for messages written on this device.
pub const CURRENT_USER: &str = "Usuario Actual";

/// A named partition of the community chat.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum ChatChannel {
    #[strum(serialize = "General")]
    General,
    #[strum(serialize = "Emergencias")]
    Emergencies,
    #[strum(serialize = "Anuncios")]
    Announcements,
    #[strum(serialize = "Seguridad")]
    Security,
    #[strum(serialize = "Animales")]
    Animals,
    #[strum(serialize = "Eventos")]
    Events,
}

impl ChatChannel {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::General => "bubble.left.and.bubble.right",
            Self::Emergencies => "exclamationmark.triangle",
            Self::Announcements => "megaphone",
            Self::Security => "shield",
            Self::Animals => "pawprint",
            Self::Events => "calendar",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::General => Color::Gray,
            Self::Emergencies => Color::Red,
            Self::Announcements => Color::Blue,
            Self::Security => Color::Purple,
            Self::Animals => Color::Orange,
            Self::Events => Color::Green,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Emergencies,
            Self::Announcements,
            Self::Security,
            Self::Animals,
            Self::Events,
        ]
    }
}

/// What kind of message a neighbor posted.
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
pub enum ChatMessageType {
    #[default]
    #[strum(serialize = "General")]
    General,
    #[strum(serialize = "Pregunta")]
    Question,
    #[strum(serialize = "Alerta")]
    Alert,
    #[strum(serialize = "Anuncio")]
    Announcement,
    #[strum(serialize = "Ayuda")]
    Help,
}

impl ChatMessageType {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::General => "text.bubble",
            Self::Question => "questionmark.bubble",
            Self::Alert => "exclamationmark.bubble",
            Self::Announcement => "megaphone",
            Self::Help => "hand.raised",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::General => Color::Gray,
            Self::Question => Color::Blue,
            Self::Alert => Color::Red,
            Self::Announcement => Color::Green,
            Self::Help => Color::Orange,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Question,
            Self::Alert,
            Self::Announcement,
            Self::Help,
        ]
    }
}

/// Urgency of a message: `Low < Normal < High < Urgent`.
///
/// Ordering follows [`rank`](Self::rank), not the display names.
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
pub enum MessagePriority {
    #[strum(serialize = "Baja")]
    Low = 0,
    #[default]
    #[strum(serialize = "Normal")]
    Normal = 1,
    #[strum(serialize = "Alta")]
    High = 2,
    #[strum(serialize = "Urgente")]
    Urgent = 3,
}

impl MessagePriority {
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Low => "arrow.down",
            Self::Normal => "minus",
            Self::High => "arrow.up",
            Self::Urgent => "exclamationmark",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Normal => Color::Gray,
            Self::High => Color::Orange,
            Self::Urgent => Color::Red,
        }
    }

    /// Returns all variants of this enum, lowest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Normal, Self::High, Self::Urgent]
    }
}

/// A single chat message. Never edited once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    pub channel: ChatChannel,
    pub message_type: ChatMessageType,
    pub priority: MessagePriority,
}

impl ChatMessage {
    /// Whether this device's user wrote the message.
    #[must_use]
    pub fn is_outgoing(&self) -> bool {
        self.sender == CURRENT_USER
    }

    /// Whether the message should carry a type/priority badge.
    #[must_use]
    pub fn has_badge(&self) -> bool {
        self.priority != MessagePriority::Normal || self.message_type != ChatMessageType::General
    }
}

/// Read-time filters for the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatFilters {
    /// When `false`, only [`selected_type`](Self::selected_type) is shown.
    pub show_all_types: bool,
    pub selected_type: ChatMessageType,
    /// Hide messages older than twelve hours.
    pub hide_old_messages: bool,
    /// Hide messages below [`MessagePriority::Normal`].
    pub hide_non_urgent: bool,
}

impl Default for ChatFilters {
    fn default() -> Self {
        Self {
            show_all_types: true,
            selected_type: ChatMessageType::General,
            hide_old_messages: false,
            hide_non_urgent: false,
        }
    }
}

impl ChatFilters {
    /// Whether any filter narrows the list.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.show_all_types || self.hide_old_messages || self.hide_non_urgent
    }
}
