//! # quizbot-core
//!
//! Core types and traits for the bot: inbound [`Event`]s, outbound [`Reply`]s built by
//! [`ReplyComposer`], the transport-facing [`Bot`] trait, errors, and tracing initialization.
//! Transport-agnostic; used by storage, interaction-router, handlers and quizbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use reply::{ChoiceAction, ChoiceOption, MenuEntry, Reply, ReplyComposer};
pub use types::{Chat, Event, EventKind, ToCoreEvent, ToCoreUser, User};
