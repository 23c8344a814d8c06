//! # Quiz bot handlers
//!
//! Handler implementations for every interaction of the bot: menus, click counting, content
//! rotation, quizzes and guessing, answer scoring and contact sharing. [`register_handlers`] wires
//! them into an [`interaction_router::Router`].

mod answers;
mod catalog;
mod clicks;
mod contact;
mod content;
mod menu;
mod quiz;
mod random;
mod registry;
pub mod texts;

#[cfg(test)]
mod test;

pub use answers::{CorrectHandler, WrongHandler};
pub use catalog::{CatalogEntry, CatalogError, ContentCatalog};
pub use clicks::{ClickHandler, ResetHandler};
pub use contact::ContactHandler;
pub use content::{RotateOnRequest, Rotation};
pub use menu::{
    format_http_date, DateTimeHandler, EmotesHandler, InlineMenuHandler, NotThanksHandler,
    RateHandler, StartHandler, ThanksHandler,
};
pub use quiz::{
    answer_options, guess_options, shuffled_answer_options, GuessHandler, QuizHandler, QuizKind,
    GUESS_OPTIONS,
};
pub use random::RandomSelection;
pub use registry::{register_handlers, HandlerDeps};
