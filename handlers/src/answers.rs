//! Shared answer handlers: every `correct` option of every quiz, riddle or guess lands in
//! [`CorrectHandler`], every `wrong` one in [`WrongHandler`].

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::{Event, Reply, ReplyComposer, Result};
use storage::{StateField, UserState};
use tracing::info;

use crate::texts;

/// Awards `points` for a correct answer, independent of the score post-condition.
pub struct CorrectHandler {
    points: u64,
}

impl CorrectHandler {
    pub fn new(points: u64) -> Self {
        Self { points }
    }
}

#[async_trait]
impl Handler for CorrectHandler {
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        let score = state.increment(StateField::Score, self.points);
        info!(user_id = event.user.id, score = score, "step: correct answer");
        Ok(vec![ReplyComposer::text(texts::CORRECT_REPLY)])
    }
}

/// Never awards points itself.
pub struct WrongHandler;

#[async_trait]
impl Handler for WrongHandler {
    async fn handle(&self, event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        info!(user_id = event.user.id, "step: wrong answer");
        Ok(vec![ReplyComposer::text(texts::WRONG_REPLY)])
    }
}
