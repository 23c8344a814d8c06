//! Rotate-on-request: one random item from a collection plus a "show another" button that calls
//! the same handler again.

use std::sync::Arc;

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::{ChoiceOption, Event, HandlerError, Reply, ReplyComposer, Result};
use storage::UserState;
use tracing::debug;

use crate::catalog::ContentCatalog;
use crate::random::RandomSelection;
use crate::texts::{self, tags};

/// Catalog collections that rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Facts,
    Quotes,
    Lifehacks,
    Images,
}

impl Rotation {
    /// Tag of the handler serving this collection; the "another" button carries it.
    pub fn tag(self) -> &'static str {
        match self {
            Rotation::Facts => tags::FACT,
            Rotation::Quotes => tags::QUOTE,
            Rotation::Lifehacks => tags::LIFEHACK,
            Rotation::Images => tags::IMAGE,
        }
    }

    fn another_label(self) -> &'static str {
        match self {
            Rotation::Lifehacks => texts::ANOTHER_LIFEHACK_LABEL,
            _ => texts::ANOTHER_LABEL,
        }
    }

    fn items(self, catalog: &ContentCatalog) -> &[String] {
        match self {
            Rotation::Facts => &catalog.facts,
            Rotation::Quotes => &catalog.quotes,
            Rotation::Lifehacks => &catalog.lifehacks,
            Rotation::Images => &catalog.images,
        }
    }

    fn is_media(self) -> bool {
        matches!(self, Rotation::Images)
    }
}

pub struct RotateOnRequest {
    catalog: Arc<ContentCatalog>,
    random: Arc<RandomSelection>,
    rotation: Rotation,
}

impl RotateOnRequest {
    pub fn new(
        catalog: Arc<ContentCatalog>,
        random: Arc<RandomSelection>,
        rotation: Rotation,
    ) -> Self {
        Self {
            catalog,
            random,
            rotation,
        }
    }
}

#[async_trait]
impl Handler for RotateOnRequest {
    async fn handle(&self, event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        let item = self
            .random
            .pick(self.rotation.items(&self.catalog))
            .ok_or_else(|| HandlerError::EmptyCollection(self.rotation.tag().to_string()))?;
        debug!(user_id = event.user.id, rotation = ?self.rotation, "Rotating content");

        let rows = vec![vec![ChoiceOption::callback(
            self.rotation.another_label(),
            self.rotation.tag(),
        )]];
        let reply = if self.rotation.is_media() {
            ReplyComposer::media(item.as_str(), rows)
        } else {
            ReplyComposer::choice_menu(item.as_str(), rows)
        };
        Ok(vec![reply])
    }
}
