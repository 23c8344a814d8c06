//! Core types: user, chat, inbound event and its kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name used when greeting the user: first name, then username, then a fallback.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("friend")
    }
}

/// Chat (channel or private) identity. Replies are delivered to the chat the event came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What the user did. Each kind maps to one router channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A `/name` directive; `name` is stored without the slash or `@botname` suffix.
    Command(String),
    /// Plain text, usually a reply keyboard entry.
    Text(String),
    /// Inline button press. `query_id` is what the transport needs for the acknowledgement.
    Callback { query_id: String, tag: String },
    /// Contact shared through a request button. `display_fields` holds every profile field the
    /// transport supplied for the sender.
    ContactShared {
        display_fields: Map<String, Value>,
        phone_number: String,
    },
}

/// A single inbound event with its sender, chat, and payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Returns the callback query id when the event came from an inline button.
    pub fn callback_query_id(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Callback { query_id, .. } => Some(query_id),
            _ => None,
        }
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update to a core [`Event`]. Returns `None` for updates the bot
/// does not react to (stickers, edits, ...).
pub trait ToCoreEvent: Send + Sync {
    fn to_core(&self) -> Option<Event>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: Option<&str>, username: Option<&str>) -> User {
        User {
            id: 1,
            username: username.map(str::to_string),
            first_name: first_name.map(str::to_string),
            last_name: None,
        }
    }

    #[test]
    fn test_display_name_prefers_first_name() {
        assert_eq!(user(Some("Ana"), Some("ana42")).display_name(), "Ana");
        assert_eq!(user(None, Some("ana42")).display_name(), "ana42");
        assert_eq!(user(None, None).display_name(), "friend");
    }

    #[test]
    fn test_callback_query_id_only_for_callbacks() {
        let mut event = Event {
            id: "1".to_string(),
            user: user(Some("Ana"), None),
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            kind: EventKind::Callback {
                query_id: "q-1".to_string(),
                tag: "clicked".to_string(),
            },
            created_at: Utc::now(),
        };
        assert_eq!(event.callback_query_id(), Some("q-1"));

        event.kind = EventKind::Command("start".to_string());
        assert_eq!(event.callback_query_id(), None);
    }
}
