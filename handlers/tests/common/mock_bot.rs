//! Recording implementation of [`quizbot_core::Bot`] for end-to-end handler tests.
//!
//! Every call is appended to a shared log so tests can assert on order, acknowledgements, and
//! reply content without a transport. Acknowledgements and sends can be made to fail.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quizbot_core::{Bot, BotError, Chat, ChoiceOption, MenuEntry, Result};

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Ack(String),
    Text(String),
    ChoiceMenu(String, Vec<Vec<ChoiceOption>>),
    Media(String, Vec<Vec<ChoiceOption>>),
    MenuKeyboard(String, Vec<Vec<MenuEntry>>),
}

#[derive(Default)]
pub struct MockBot {
    log: Mutex<Vec<Sent>>,
    fail_acks: AtomicBool,
    fail_sends: AtomicBool,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_acks() -> Arc<Self> {
        let bot = Self::default();
        bot.fail_acks.store(true, Ordering::SeqCst);
        Arc::new(bot)
    }

    pub fn failing_sends() -> Arc<Self> {
        let bot = Self::default();
        bot.fail_sends.store(true, Ordering::SeqCst);
        Arc::new(bot)
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.log.lock().unwrap().clone()
    }

    pub fn acks(&self) -> usize {
        self.sent()
            .iter()
            .filter(|s| matches!(s, Sent::Ack(_)))
            .count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(t) | Sent::ChoiceMenu(t, _) | Sent::MenuKeyboard(t, _) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        let fail = match sent {
            Sent::Ack(_) => self.fail_acks.load(Ordering::SeqCst),
            _ => self.fail_sends.load(Ordering::SeqCst),
        };
        self.log.lock().unwrap().push(sent);
        if fail {
            return Err(BotError::Bot("transport rejected the request".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text(text.to_string()))
    }

    async fn send_choice_menu(
        &self,
        _chat: &Chat,
        text: &str,
        rows: &[Vec<ChoiceOption>],
    ) -> Result<()> {
        self.record(Sent::ChoiceMenu(text.to_string(), rows.to_vec()))
    }

    async fn send_media(&self, _chat: &Chat, url: &str, rows: &[Vec<ChoiceOption>]) -> Result<()> {
        self.record(Sent::Media(url.to_string(), rows.to_vec()))
    }

    async fn send_menu_keyboard(
        &self,
        _chat: &Chat,
        text: &str,
        rows: &[Vec<MenuEntry>],
    ) -> Result<()> {
        self.record(Sent::MenuKeyboard(text.to_string(), rows.to_vec()))
    }

    async fn acknowledge_callback(&self, query_id: &str) -> Result<()> {
        self.record(Sent::Ack(query_id.to_string()))
    }
}
