pub mod mock_bot;

use std::sync::Arc;

use chrono::Utc;
use handlers::{register_handlers, ContentCatalog, HandlerDeps, RandomSelection};
use interaction_router::{Router, ScorePolicy};
use quizbot_core::{Chat, Event, EventKind, User};
use storage::{ContactLog, UserStateStore};

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

/// Fully wired router over the built-in catalog with a seeded generator.
#[allow(dead_code)]
pub fn build_router(score: Option<ScorePolicy>, contact_log: Arc<dyn ContactLog>) -> Router {
    let router = Router::new(UserStateStore::new(), score);
    let deps = HandlerDeps::for_router(
        &router,
        Arc::new(ContentCatalog::builtin()),
        Arc::new(RandomSelection::seeded(17)),
        contact_log,
    );
    register_handlers(router, &deps)
}
