//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.

mod contact_test;

use chrono::Utc;
use quizbot_core::{Chat, Event, EventKind, User};

/// Builds a test Event with user_id = chat_id = 123.
pub(crate) fn create_test_event(kind: EventKind) -> Event {
    Event {
        id: "test_event_id".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        kind,
        created_at: Utc::now(),
    }
}

pub(crate) fn create_callback(tag: &str) -> Event {
    create_test_event(EventKind::Callback {
        query_id: "test_query_id".to_string(),
        tag: tag.to_string(),
    })
}
