//! Menus and simple one-shot replies: `/start`, the inline menu, current time, emotes, and the
//! rate question with its two answers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use interaction_router::Handler;
use quizbot_core::{ChoiceOption, Event, MenuEntry, Reply, ReplyComposer, Result};
use storage::{StateField, UserState};
use tracing::info;

use crate::catalog::ContentCatalog;
use crate::texts::{self, tags};

/// `/start`: greeting with a reply keyboard holding the contact request and the inline menu entry.
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        info!(user_id = event.user.id, "step: start menu");
        Ok(vec![ReplyComposer::menu_keyboard(
            texts::GREETING,
            vec![
                vec![MenuEntry::RequestContact(texts::SEND_PHONE_LABEL.to_string())],
                vec![MenuEntry::Text(texts::INLINE_MENU_LABEL.to_string())],
            ],
        )])
    }
}

/// Inline menu: website link followed by one button per feature, each on its own row.
pub struct InlineMenuHandler {
    catalog: Arc<ContentCatalog>,
}

impl InlineMenuHandler {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Handler for InlineMenuHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        let mut options = vec![ChoiceOption::url(
            texts::VISIT_WEBSITE_LABEL,
            self.catalog.website_url.as_str(),
        )];
        options.extend(
            texts::INLINE_MENU
                .iter()
                .map(|(label, tag)| ChoiceOption::callback(*label, *tag)),
        );
        Ok(vec![ReplyComposer::column(texts::INLINE_MENU_TEXT, options)])
    }
}

/// Current UTC time in RFC 1123 form, e.g. `Sun, 18 Oct 2026 12:00:00 GMT`.
pub struct DateTimeHandler;

pub fn format_http_date(now: chrono::DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[async_trait]
impl Handler for DateTimeHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        Ok(vec![ReplyComposer::text(format_http_date(Utc::now()))])
    }
}

pub struct EmotesHandler;

#[async_trait]
impl Handler for EmotesHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        let options = texts::EMOTIONS
            .iter()
            .map(|emotion| ChoiceOption::callback(*emotion, tags::EMOTE))
            .collect();
        Ok(vec![ReplyComposer::row(texts::SELECT_EMOTION, options)])
    }
}

pub struct RateHandler;

#[async_trait]
impl Handler for RateHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        Ok(vec![ReplyComposer::row(
            texts::RATE_QUESTION,
            vec![
                ChoiceOption::callback(texts::RATE_YES, tags::THANKS),
                ChoiceOption::callback(texts::RATE_NO, tags::NOT_THANKS),
            ],
        )])
    }
}

/// Positive rating: thanks the user and awards `bonus` points on top of the score post-condition.
pub struct ThanksHandler {
    bonus: u64,
}

impl ThanksHandler {
    pub fn new(bonus: u64) -> Self {
        Self { bonus }
    }
}

#[async_trait]
impl Handler for ThanksHandler {
    async fn handle(&self, _event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        state.increment(StateField::Score, self.bonus);
        Ok(vec![ReplyComposer::text(texts::THANKS_REPLY)])
    }
}

pub struct NotThanksHandler;

#[async_trait]
impl Handler for NotThanksHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        Ok(vec![ReplyComposer::text(texts::NOT_THANKS_REPLY)])
    }
}
