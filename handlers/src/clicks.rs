//! The "click me" counter and its reset.

use std::sync::Arc;

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::{ChoiceOption, Event, HandlerError, Reply, ReplyComposer, Result};
use storage::{StateField, UserState};
use tracing::info;

use crate::catalog::ContentCatalog;
use crate::random::RandomSelection;
use crate::texts::{self, tags};

/// Counts clicks. The first click of a user (count reaching 1) also gets a greeting.
pub struct ClickHandler {
    catalog: Arc<ContentCatalog>,
    random: Arc<RandomSelection>,
}

impl ClickHandler {
    pub fn new(catalog: Arc<ContentCatalog>, random: Arc<RandomSelection>) -> Self {
        Self { catalog, random }
    }
}

#[async_trait]
impl Handler for ClickHandler {
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        let clicks = state.increment(StateField::Clicks, 1);
        info!(user_id = event.user.id, clicks = clicks, "step: click counted");

        let mut replies = Vec::with_capacity(3);
        if clicks == 1 {
            replies.push(ReplyComposer::text(texts::first_click_greeting(
                event.user.display_name(),
            )));
        }

        let message = self
            .random
            .pick(&self.catalog.click_messages)
            .ok_or_else(|| HandlerError::EmptyCollection("click_messages".to_string()))?;
        replies.push(ReplyComposer::text(message.as_str()));

        replies.push(ReplyComposer::column(
            texts::clicks_reply(clicks),
            vec![
                ChoiceOption::callback(texts::CLICK_ME_LABEL, tags::CLICKED),
                ChoiceOption::callback(texts::RESTART_LABEL, tags::RESET),
            ],
        ));
        Ok(replies)
    }
}

/// Sets the click count back to zero. Score is untouched.
pub struct ResetHandler;

#[async_trait]
impl Handler for ResetHandler {
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        state.reset(StateField::Clicks);
        info!(user_id = event.user.id, "step: clicks reset");
        Ok(vec![ReplyComposer::text(texts::CLICKS_RESET)])
    }
}
