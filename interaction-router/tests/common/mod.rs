pub mod mock_bot;

use chrono::Utc;
use quizbot_core::{Chat, Event, EventKind, User};

#[allow(dead_code)]
pub fn event(user_id: i64, kind: EventKind) -> Event {
    Event {
        id: "test_event_id".to_string(),
        user: User {
            id: user_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        kind,
        created_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn callback(user_id: i64, tag: &str) -> Event {
    event(
        user_id,
        EventKind::Callback {
            query_id: format!("q-{}", tag),
            tag: tag.to_string(),
        },
    )
}
