//! Quiz selection and number guessing.
//!
//! Quizzes and riddles render every answer as an option tagged `correct` or `wrong`, shuffled so
//! the position gives nothing away. The guess game generates four numbers and marks one of them
//! correct at random without reordering.

use std::sync::Arc;

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::{ChoiceOption, Event, HandlerError, Reply, ReplyComposer, Result};
use storage::UserState;
use tracing::debug;

use crate::catalog::{CatalogEntry, ContentCatalog};
use crate::random::RandomSelection;
use crate::texts::{self, tags};

pub const GUESS_OPTIONS: usize = 4;
/// Labels are hundredths in `0..GUESS_LABEL_STEPS`, i.e. `0.00` to `9.99`.
pub const GUESS_LABEL_STEPS: usize = 1000;

/// Correct answers tagged `correct` followed by wrong answers tagged `wrong`, unshuffled.
pub fn answer_options(entry: &CatalogEntry) -> Vec<ChoiceOption> {
    entry
        .correct_answers
        .iter()
        .map(|answer| ChoiceOption::callback(answer.as_str(), tags::CORRECT))
        .chain(
            entry
                .wrong_answers
                .iter()
                .map(|answer| ChoiceOption::callback(answer.as_str(), tags::WRONG)),
        )
        .collect()
}

/// [`answer_options`] in uniformly random order.
pub fn shuffled_answer_options(entry: &CatalogEntry, random: &RandomSelection) -> Vec<ChoiceOption> {
    let mut options = answer_options(entry);
    random.shuffle(&mut options);
    options
}

fn guess_label(hundredths: usize) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Four distinct numeric labels below 10 in generation order; exactly one, chosen uniformly, is
/// tagged `correct`.
pub fn guess_options(random: &RandomSelection) -> Vec<ChoiceOption> {
    let correct = random.index(GUESS_OPTIONS).unwrap_or(0);
    random
        .distinct_below(GUESS_LABEL_STEPS, GUESS_OPTIONS)
        .into_iter()
        .enumerate()
        .map(|(i, hundredths)| {
            let tag = if i == correct { tags::CORRECT } else { tags::WRONG };
            ChoiceOption::callback(guess_label(hundredths), tag)
        })
        .collect()
}

/// Which entry collection a [`QuizHandler`] draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Quiz,
    Riddle,
}

impl QuizKind {
    fn entries(self, catalog: &ContentCatalog) -> &[CatalogEntry] {
        match self {
            QuizKind::Quiz => &catalog.quizzes,
            QuizKind::Riddle => &catalog.riddles,
        }
    }
}

pub struct QuizHandler {
    catalog: Arc<ContentCatalog>,
    random: Arc<RandomSelection>,
    kind: QuizKind,
}

impl QuizHandler {
    pub fn new(catalog: Arc<ContentCatalog>, random: Arc<RandomSelection>, kind: QuizKind) -> Self {
        Self {
            catalog,
            random,
            kind,
        }
    }
}

#[async_trait]
impl Handler for QuizHandler {
    async fn handle(&self, event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        let entry = self
            .random
            .pick(self.kind.entries(&self.catalog))
            .ok_or_else(|| HandlerError::EmptyCollection(format!("{:?}", self.kind)))?;
        let options = shuffled_answer_options(entry, &self.random);
        debug!(
            user_id = event.user.id,
            kind = ?self.kind,
            options = options.len(),
            "Quiz built"
        );
        Ok(vec![ReplyComposer::row(entry.prompt.as_str(), options)])
    }
}

pub struct GuessHandler {
    random: Arc<RandomSelection>,
}

impl GuessHandler {
    pub fn new(random: Arc<RandomSelection>) -> Self {
        Self { random }
    }
}

#[async_trait]
impl Handler for GuessHandler {
    async fn handle(&self, _event: &Event, _state: &mut UserState) -> Result<Vec<Reply>> {
        Ok(vec![ReplyComposer::row(
            texts::GUESS_PROMPT,
            guess_options(&self.random),
        )])
    }
}
