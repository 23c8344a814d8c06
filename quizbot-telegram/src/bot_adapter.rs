//! Wraps teloxide::Bot and implements [`quizbot_core::Bot`]. Production code sends messages via
//! Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use quizbot_core::{Bot as CoreBot, BotError, Chat, ChoiceAction, ChoiceOption, MenuEntry, Result};
use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
    KeyboardButton, KeyboardMarkup,
};

/// Thin wrapper around teloxide::Bot that implements quizbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn bot_error(e: impl std::fmt::Display) -> BotError {
    BotError::Bot(e.to_string())
}

fn parse_url(raw: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(raw).map_err(|e| BotError::Bot(format!("Invalid URL {}: {}", raw, e)))
}

/// Builds an inline keyboard, keeping the row grouping of `rows`.
pub fn inline_keyboard(rows: &[Vec<ChoiceOption>]) -> Result<InlineKeyboardMarkup> {
    let mut keyboard = Vec::with_capacity(rows.len());
    for row in rows {
        let mut buttons = Vec::with_capacity(row.len());
        for option in row {
            let button = match &option.action {
                ChoiceAction::Callback(tag) => {
                    InlineKeyboardButton::callback(option.label.clone(), tag.clone())
                }
                ChoiceAction::Url(url) => {
                    InlineKeyboardButton::url(option.label.clone(), parse_url(url)?)
                }
            };
            buttons.push(button);
        }
        keyboard.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(keyboard))
}

/// Builds a resized one-time reply keyboard.
pub fn menu_keyboard(rows: &[Vec<MenuEntry>]) -> KeyboardMarkup {
    let keyboard = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|entry| match entry {
                    MenuEntry::Text(label) => KeyboardButton::new(label.clone()),
                    MenuEntry::RequestContact(label) => {
                        KeyboardButton::new(label.clone()).request(ButtonRequest::Contact)
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    KeyboardMarkup::new(keyboard)
        .resize_keyboard()
        .one_time_keyboard()
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_choice_menu(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<ChoiceOption>],
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(inline_keyboard(rows)?)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_media(&self, chat: &Chat, url: &str, rows: &[Vec<ChoiceOption>]) -> Result<()> {
        let animation = InputFile::url(parse_url(url)?);
        let request = self.bot.send_animation(ChatId(chat.id), animation);
        if rows.is_empty() {
            request.await.map_err(bot_error)?;
        } else {
            request
                .reply_markup(inline_keyboard(rows)?)
                .await
                .map_err(bot_error)?;
        }
        Ok(())
    }

    async fn send_menu_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<MenuEntry>],
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(menu_keyboard(rows))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn acknowledge_callback(&self, query_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_inline_keyboard_keeps_rows() {
        let rows = vec![
            vec![ChoiceOption::url("Site", "https://duikt.edu.ua/en/")],
            vec![
                ChoiceOption::callback("Yes", "thanks"),
                ChoiceOption::callback("No", "not-thanks"),
            ],
        ];
        let markup = inline_keyboard(&rows).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 2);
        assert!(matches!(
            &markup.inline_keyboard[1][0].kind,
            InlineKeyboardButtonKind::CallbackData(data) if data == "thanks"
        ));
        assert!(matches!(
            markup.inline_keyboard[0][0].kind,
            InlineKeyboardButtonKind::Url(_)
        ));
    }

    #[test]
    fn test_inline_keyboard_rejects_bad_url() {
        let rows = vec![vec![ChoiceOption::url("Broken", "not a url")]];
        assert!(inline_keyboard(&rows).is_err());
    }

    #[test]
    fn test_menu_keyboard_requests_contact() {
        let markup = menu_keyboard(&[
            vec![MenuEntry::RequestContact("Send phone".to_string())],
            vec![MenuEntry::Text("Menu".to_string())],
        ]);
        assert_eq!(markup.keyboard.len(), 2);
        assert!(matches!(
            markup.keyboard[0][0].request,
            Some(ButtonRequest::Contact)
        ));
        assert!(markup.keyboard[1][0].request.is_none());
    }
}
