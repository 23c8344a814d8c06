//! Bot abstraction for delivering replies and acknowledging callbacks.
//!
//! [`Bot`] is transport-agnostic; quizbot-telegram implements it via teloxide and tests use
//! recording mocks.

use crate::error::Result;
use crate::reply::{ChoiceOption, MenuEntry, Reply};
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound side of the transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message.
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends text with an inline option grid.
    async fn send_choice_menu(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<ChoiceOption>],
    ) -> Result<()>;
    /// Sends an animation by URL; `rows` may be empty.
    async fn send_media(&self, chat: &Chat, url: &str, rows: &[Vec<ChoiceOption>]) -> Result<()>;
    /// Sends text with a reply keyboard.
    async fn send_menu_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<MenuEntry>],
    ) -> Result<()>;
    /// Tells the transport that a callback query was received. Idempotent on the transport side.
    async fn acknowledge_callback(&self, query_id: &str) -> Result<()>;

    /// Delivers one [`Reply`] using the matching send method.
    async fn deliver(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => self.send_text(chat, text).await,
            Reply::ChoiceMenu { text, rows } => self.send_choice_menu(chat, text, rows).await,
            Reply::Media { url, rows } => self.send_media(chat, url, rows).await,
            Reply::MenuKeyboard { text, rows } => self.send_menu_keyboard(chat, text, rows).await,
        }
    }
}
