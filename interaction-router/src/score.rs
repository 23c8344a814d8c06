//! Score post-condition: award points after a handler's replies and report the new score.

use std::sync::Arc;

use async_trait::async_trait;
use quizbot_core::{Event, Reply, ReplyComposer, Result};
use storage::{StateField, UserState};
use tracing::debug;

use crate::handler::Handler;

/// Points awarded per handled event and the label of the "current score" reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePolicy {
    pub points: u64,
    pub label: String,
}

impl ScorePolicy {
    pub const DEFAULT_POINTS: u64 = 25;

    pub fn new(points: u64, label: impl Into<String>) -> Self {
        Self {
            points,
            label: label.into(),
        }
    }

    /// The "current score" reply.
    pub fn score_reply(&self, score: u64) -> Reply {
        ReplyComposer::text(format!("{}: {}", self.label, score))
    }
}

/// Decorator that runs the inner handler, then adds [`ScorePolicy::points`] to the user's score
/// and appends a score reply. Nothing is awarded when the inner handler fails.
pub struct ScoreAward {
    inner: Arc<dyn Handler>,
    policy: ScorePolicy,
}

impl ScoreAward {
    pub fn new(inner: Arc<dyn Handler>, policy: ScorePolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl Handler for ScoreAward {
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        let mut replies = self.inner.handle(event, state).await?;
        let score = state.increment(StateField::Score, self.policy.points);
        debug!(
            user_id = event.user.id,
            points = self.policy.points,
            score = score,
            "Score awarded"
        );
        replies.push(self.policy.score_reply(score));
        Ok(replies)
    }
}
