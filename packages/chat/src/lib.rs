#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community chat message store.
//!
//! A flat, append-only log. Nothing is delivered or acknowledged: sending
//! appends locally and [`ChatStore::filter`] narrows the log at read time.

use std::collections::BTreeSet;

use alerta_vecinal_chat_models::{
    CURRENT_USER, ChatChannel, ChatFilters, ChatMessage, ChatMessageType, MessagePriority,
};
use chrono::{DateTime, TimeDelta, Utc};

/// Messages older than this are hidden by [`ChatFilters::hide_old_messages`].
pub const OLD_MESSAGE_AGE_HOURS: i64 = 12;

/// The chat log for this device.
#[derive(Debug, Clone)]
pub struct ChatStore {
    messages: Vec<ChatMessage>,
    sender: String,
    muted_senders: BTreeSet<String>,
    reported: BTreeSet<String>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// An empty log sending as [`CURRENT_USER`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(Vec::new())
    }

    #[must_use]
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            sender: CURRENT_USER.to_string(),
            muted_senders: BTreeSet::new(),
            reported: BTreeSet::new(),
        }
    }

    /// A log seeded with a couple of neighbor messages from the last hour.
    #[must_use]
    pub fn with_sample_messages() -> Self {
        let now = Utc::now();
        Self::with_messages(vec![
            ChatMessage {
                id: "1".to_string(),
                content: "¡Hola vecinos! ¿Alguien vio el camión de basura hoy?".to_string(),
                sender: "María González".to_string(),
                timestamp: now - TimeDelta::hours(1),
                channel: ChatChannel::General,
                message_type: ChatMessageType::Question,
                priority: MessagePriority::Normal,
            },
            ChatMessage {
                id: "2".to_string(),
                content: "Hay un perro perdido en la calle principal, parece asustado"
                    .to_string(),
                sender: "Carlos Pérez".to_string(),
                timestamp: now - TimeDelta::minutes(30),
                channel: ChatChannel::Animals,
                message_type: ChatMessageType::Alert,
                priority: MessagePriority::High,
            },
        ])
    }

    /// Messages in `channel` that pass every enabled filter, oldest first.
    #[must_use]
    pub fn filter(&self, channel: ChatChannel, filters: &ChatFilters) -> Vec<&ChatMessage> {
        self.filter_at(channel, filters, Utc::now())
    }

    /// Same as [`filter`](Self::filter), evaluating message age against
    /// `now`.
    #[must_use]
    pub fn filter_at(
        &self,
        channel: ChatChannel,
        filters: &ChatFilters,
        now: DateTime<Utc>,
    ) -> Vec<&ChatMessage> {
        let cutoff = now - TimeDelta::hours(OLD_MESSAGE_AGE_HOURS);

        self.messages
            .iter()
            .filter(|m| m.channel == channel)
            .filter(|m| !filters.hide_old_messages || m.timestamp > cutoff)
            .filter(|m| !filters.hide_non_urgent || m.priority >= MessagePriority::Normal)
            .filter(|m| filters.show_all_types || m.message_type == filters.selected_type)
            .filter(|m| !self.muted_senders.contains(&m.sender))
            .collect()
    }

    /// Appends a message from this device to `channel`.
    ///
    /// Blank content (empty or whitespace only) is ignored and returns
    /// `None`. The content itself is stored exactly as typed.
    pub fn send(&mut self, content: &str, channel: ChatChannel) -> Option<&ChatMessage> {
        self.send_at(content, channel, Utc::now())
    }

    /// Same as [`send`](Self::send), stamping the message with `timestamp`.
    pub fn send_at(
        &mut self,
        content: &str,
        channel: ChatChannel,
        timestamp: DateTime<Utc>,
    ) -> Option<&ChatMessage> {
        if content.trim().is_empty() {
            log::debug!("Ignoring blank chat message for {channel}");
            return None;
        }

        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.to_string(),
            sender: self.sender.clone(),
            timestamp,
            channel,
            message_type: ChatMessageType::General,
            priority: MessagePriority::Normal,
        };
        log::debug!("Sending message {} to {channel}", message.id);

        self.messages.push(message);
        self.messages.last()
    }

    /// Flags a message for moderation. Returns `false` for unknown ids.
    pub fn report(&mut self, message_id: &str) -> bool {
        if !self.messages.iter().any(|m| m.id == message_id) {
            log::warn!("Cannot report unknown chat message {message_id}");
            return false;
        }
        log::info!("Reported chat message {message_id}");
        self.reported.insert(message_id.to_string());
        true
    }

    #[must_use]
    pub fn is_reported(&self, message_id: &str) -> bool {
        self.reported.contains(message_id)
    }

    /// Hides every message from `sender` in filtered views.
    pub fn mute(&mut self, sender: &str) {
        log::info!("Muted chat sender {sender}");
        self.muted_senders.insert(sender.to_string());
    }

    pub fn unmute(&mut self, sender: &str) {
        self.muted_senders.remove(sender);
    }

    #[must_use]
    pub fn is_muted(&self, sender: &str) -> bool {
        self.muted_senders.contains(sender)
    }

    /// The whole log in send order, unfiltered.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(
        id: &str,
        channel: ChatChannel,
        age: TimeDelta,
        message_type: ChatMessageType,
        priority: MessagePriority,
        now: DateTime<Utc>,
    ) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            content: format!("mensaje {id}"),
            sender: format!("vecino {id}"),
            timestamp: now - age,
            channel,
            message_type,
            priority,
        }
    }

    fn fixture(now: DateTime<Utc>) -> ChatStore {
        ChatStore::with_messages(vec![
            message(
                "a1",
                ChatChannel::General,
                TimeDelta::hours(1),
                ChatMessageType::Question,
                MessagePriority::Normal,
                now,
            ),
            message(
                "a2",
                ChatChannel::General,
                TimeDelta::hours(13),
                ChatMessageType::General,
                MessagePriority::Urgent,
                now,
            ),
            message(
                "a3",
                ChatChannel::General,
                TimeDelta::minutes(5),
                ChatMessageType::Alert,
                MessagePriority::Low,
                now,
            ),
            message(
                "b1",
                ChatChannel::Security,
                TimeDelta::minutes(1),
                ChatMessageType::Alert,
                MessagePriority::High,
                now,
            ),
        ])
    }

    fn ids(messages: &[&ChatMessage]) -> Vec<String> {
        messages.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn channel_restriction_excludes_other_channels() {
        let now = Utc::now();
        let store = fixture(now);
        let general = store.filter_at(ChatChannel::General, &ChatFilters::default(), now);
        assert_eq!(ids(&general), vec!["a1", "a2", "a3"]);
        assert!(general.iter().all(|m| m.channel == ChatChannel::General));
        let security = store.filter_at(ChatChannel::Security, &ChatFilters::default(), now);
        assert_eq!(ids(&security), vec!["b1"]);
    }

    #[test]
    fn hide_old_drops_messages_past_twelve_hours() {
        let now = Utc::now();
        let filters = ChatFilters {
            hide_old_messages: true,
            ..ChatFilters::default()
        };
        let store = fixture(now);
        let result = store.filter_at(ChatChannel::General, &filters, now);
        assert_eq!(ids(&result), vec!["a1", "a3"]);
    }

    #[test]
    fn hide_non_urgent_keeps_normal_and_above() {
        let now = Utc::now();
        let filters = ChatFilters {
            hide_non_urgent: true,
            ..ChatFilters::default()
        };
        let store = fixture(now);
        let result = store.filter_at(ChatChannel::General, &filters, now);
        assert_eq!(ids(&result), vec!["a1", "a2"]);
        assert!(result.iter().all(|m| m.priority >= MessagePriority::Normal));
    }

    #[test]
    fn single_type_when_show_all_off() {
        let now = Utc::now();
        let filters = ChatFilters {
            show_all_types: false,
            selected_type: ChatMessageType::Alert,
            ..ChatFilters::default()
        };
        let store = fixture(now);
        let result = store.filter_at(ChatChannel::General, &filters, now);
        assert_eq!(ids(&result), vec!["a3"]);
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let now = Utc::now();
        let filters = ChatFilters {
            show_all_types: true,
            selected_type: ChatMessageType::General,
            hide_old_messages: true,
            hide_non_urgent: true,
        };
        let store = fixture(now);
        let result = store.filter_at(ChatChannel::General, &filters, now);
        assert_eq!(ids(&result), vec!["a1"]);
    }

    #[test]
    fn send_appends_to_tail_as_current_user() {
        let now = Utc::now();
        let mut store = fixture(now);
        let sent = store.send_at("Reunión a las 7", ChatChannel::Events, now).unwrap();
        assert!(sent.is_outgoing());
        assert_eq!(sent.message_type, ChatMessageType::General);
        assert_eq!(sent.priority, MessagePriority::Normal);
        assert_eq!(store.messages().last().unwrap().content, "Reunión a las 7");
        assert_eq!(store.messages().len(), 5);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut store = ChatStore::new();
        assert!(store.send("", ChatChannel::General).is_none());
        assert!(store.send("   \n", ChatChannel::General).is_none());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn content_is_stored_untrimmed() {
        let mut store = ChatStore::new();
        let sent = store.send("  hola  ", ChatChannel::General).unwrap();
        assert_eq!(sent.content, "  hola  ");
    }

    #[test]
    fn sent_ids_are_unique() {
        let mut store = ChatStore::new();
        let first = store.send("uno", ChatChannel::General).unwrap().id.clone();
        let second = store.send("dos", ChatChannel::General).unwrap().id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn muted_senders_are_hidden() {
        let now = Utc::now();
        let mut store = fixture(now);
        store.mute("vecino a1");
        let result = store.filter_at(ChatChannel::General, &ChatFilters::default(), now);
        assert_eq!(ids(&result), vec!["a2", "a3"]);
        store.unmute("vecino a1");
        assert!(!store.is_muted("vecino a1"));
    }

    #[test]
    fn report_only_known_messages() {
        let mut store = fixture(Utc::now());
        assert!(store.report("a1"));
        assert!(store.is_reported("a1"));
        assert!(!store.report("zz"));
    }

    #[test]
    fn sample_messages_span_two_channels() {
        let store = ChatStore::with_sample_messages();
        let general = store.filter(ChatChannel::General, &ChatFilters::default());
        let animals = store.filter(ChatChannel::Animals, &ChatFilters::default());
        assert_eq!(general.len(), 1);
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].priority, MessagePriority::High);
    }
}
