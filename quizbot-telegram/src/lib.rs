//! # quizbot-telegram
//!
//! Telegram transport: adapters from teloxide updates to core events, the [`quizbot_core::Bot`]
//! implementation, environment config, and the dispatcher runner.
//! Handles only Telegram connectivity; interaction logic lives in `handlers`.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    display_fields, parse_command, text_event_kind, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{inline_keyboard, menu_keyboard, TelegramBotAdapter};
pub use config::{BotConfig, DEFAULT_CONTACT_LOG_PATH, DEFAULT_LOG_FILE};
pub use runner::{build_components, run_bot, BotComponents};
