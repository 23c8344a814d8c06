//! Wires every handler into a [`Router`].

use std::sync::Arc;

use interaction_router::{Channel, Router};
use storage::ContactLog;

use crate::answers::{CorrectHandler, WrongHandler};
use crate::catalog::ContentCatalog;
use crate::clicks::{ClickHandler, ResetHandler};
use crate::contact::ContactHandler;
use crate::content::{RotateOnRequest, Rotation};
use crate::menu::{
    DateTimeHandler, EmotesHandler, InlineMenuHandler, NotThanksHandler, RateHandler,
    StartHandler, ThanksHandler,
};
use crate::quiz::{GuessHandler, QuizHandler, QuizKind};
use crate::random::RandomSelection;
use crate::texts::{self, tags};

/// Shared collaborators of the handlers.
#[derive(Clone)]
pub struct HandlerDeps {
    pub catalog: Arc<ContentCatalog>,
    pub random: Arc<RandomSelection>,
    pub contact_log: Arc<dyn ContactLog>,
    /// Explicit bonus for correct answers, positive ratings and saved contacts.
    pub bonus_points: u64,
}

impl HandlerDeps {
    /// Bonus follows the router's score policy: none when score tracking is off.
    pub fn for_router(
        router: &Router,
        catalog: Arc<ContentCatalog>,
        random: Arc<RandomSelection>,
        contact_log: Arc<dyn ContactLog>,
    ) -> Self {
        let bonus_points = router.score_policy().map(|p| p.points).unwrap_or(0);
        Self {
            catalog,
            random,
            contact_log,
            bonus_points,
        }
    }
}

/// Registers the full handler table. `/start` is exempt from the score post-condition.
///
/// Emote buttons carry the `emote` tag, which is intentionally left unregistered.
pub fn register_handlers(router: Router, deps: &HandlerDeps) -> Router {
    let rotate = |rotation| {
        Arc::new(RotateOnRequest::new(
            deps.catalog.clone(),
            deps.random.clone(),
            rotation,
        ))
    };
    let quiz = |kind| Arc::new(QuizHandler::new(deps.catalog.clone(), deps.random.clone(), kind));

    router
        .register_exempt(Channel::Command, texts::START_COMMAND, Arc::new(StartHandler))
        .on_text(
            texts::INLINE_MENU_LABEL,
            Arc::new(InlineMenuHandler::new(deps.catalog.clone())),
        )
        .on_contact(Arc::new(ContactHandler::new(
            deps.contact_log.clone(),
            deps.bonus_points,
        )))
        .on_callback(
            tags::CLICKED,
            Arc::new(ClickHandler::new(deps.catalog.clone(), deps.random.clone())),
        )
        .on_callback(tags::RESET, Arc::new(ResetHandler))
        .on_callback(tags::GUESS, Arc::new(GuessHandler::new(deps.random.clone())))
        .on_callback(tags::QUIZ, quiz(QuizKind::Quiz))
        .on_callback(tags::RIDDLE, quiz(QuizKind::Riddle))
        .on_callback(tags::LIFEHACK, rotate(Rotation::Lifehacks))
        .on_callback(tags::FACT, rotate(Rotation::Facts))
        .on_callback(tags::QUOTE, rotate(Rotation::Quotes))
        .on_callback(tags::IMAGE, rotate(Rotation::Images))
        .on_callback(tags::DATETIME, Arc::new(DateTimeHandler))
        .on_callback(tags::EMOTES, Arc::new(EmotesHandler))
        .on_callback(tags::RATE, Arc::new(RateHandler))
        .on_callback(tags::THANKS, Arc::new(ThanksHandler::new(deps.bonus_points)))
        .on_callback(tags::NOT_THANKS, Arc::new(NotThanksHandler))
        .on_callback(tags::CORRECT, Arc::new(CorrectHandler::new(deps.bonus_points)))
        .on_callback(tags::WRONG, Arc::new(WrongHandler))
}
