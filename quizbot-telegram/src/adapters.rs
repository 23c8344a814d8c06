//! Adapters from Telegram (teloxide) types to quizbot_core types.
//! Depends only on teloxide and quizbot_core type definitions.

use quizbot_core::{Chat, Event, EventKind, ToCoreEvent, ToCoreUser, User};
use serde_json::{Map, Value};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Profile fields of the sender as Telegram reports them; these go into the contact log.
pub fn display_fields(user: &teloxide::types::User) -> Map<String, Value> {
    match serde_json::to_value(user) {
        Ok(Value::Object(fields)) => fields,
        _ => {
            let mut fields = Map::new();
            fields.insert("id".to_string(), Value::from(user.id.0));
            fields.insert("first_name".to_string(), Value::from(user.first_name.clone()));
            fields
        }
    }
}

/// `/start@my_bot arg` → `start`. Returns `None` for anything that is not a command.
pub fn parse_command(text: &str) -> Option<String> {
    let token = text.strip_prefix('/')?.split_whitespace().next()?;
    let name = token.split('@').next().unwrap_or(token);
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Commands go to the command channel, everything else is matched as exact text.
pub fn text_event_kind(text: &str) -> EventKind {
    match parse_command(text) {
        Some(name) => EventKind::Command(name),
        None => EventKind::Text(text.to_string()),
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

/// Wraps a teloxide Message. Text, commands and shared contacts convert; other messages don't.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Event> {
        let from = self.0.from.as_ref()?;
        let kind = if let Some(contact) = self.0.contact() {
            EventKind::ContactShared {
                display_fields: display_fields(from),
                phone_number: contact.phone_number.clone(),
            }
        } else {
            text_event_kind(self.0.text()?)
        };

        Some(Event {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(from).to_core(),
            chat: core_chat(&self.0.chat),
            kind,
            created_at: self.0.date,
        })
    }
}

/// Wraps a teloxide CallbackQuery. Queries without data (game buttons) don't convert.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<Event> {
        let tag = self.0.data.clone()?;
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let chat = match &self.0.message {
            Some(message) => core_chat(message.chat()),
            None => Chat {
                id: user.id,
                chat_type: "private".to_string(),
            },
        };
        let query_id = self.0.id.0.clone();

        Some(Event {
            id: query_id.clone(),
            user,
            chat,
            kind: EventKind::Callback { query_id, tag },
            created_at: chrono::Utc::now(),
        })
    }
}
