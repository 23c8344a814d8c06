//! Static response content: facts, quotes, lifehacks, animation URLs, click messages, quizzes and
//! riddles. Text is opaque data; handlers never inspect it.
//!
//! A catalog is validated once at startup ([`ContentCatalog::validate`]) so malformed content
//! fails before any traffic is served instead of at request time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors found while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog collection is empty: {0}")]
    EmptyCollection(&'static str),
    #[error("Catalog entry {index} in {collection} has no correct answer")]
    NoCorrectAnswer {
        collection: &'static str,
        index: usize,
    },
    #[error("Catalog entry {index} in {collection} has an empty prompt")]
    EmptyPrompt {
        collection: &'static str,
        index: usize,
    },
    #[error("Catalog entry {index} in {collection} is not a valid URL: {reason}")]
    InvalidUrl {
        collection: &'static str,
        index: usize,
        reason: url::ParseError,
    },
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A quiz or riddle: one prompt, at least one correct answer, any number of wrong ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub prompt: String,
    pub correct_answers: Vec<String>,
    #[serde(default)]
    pub wrong_answers: Vec<String>,
}

impl CatalogEntry {
    pub fn new(prompt: &str, correct: &[&str], wrong: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            correct_answers: correct.iter().map(|s| s.to_string()).collect(),
            wrong_answers: wrong.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub facts: Vec<String>,
    pub quotes: Vec<String>,
    pub lifehacks: Vec<String>,
    /// Animation URLs.
    pub images: Vec<String>,
    /// One of these is sent on every click.
    pub click_messages: Vec<String>,
    pub quizzes: Vec<CatalogEntry>,
    pub riddles: Vec<CatalogEntry>,
    pub website_url: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ContentCatalog {
    /// Content shipped with the bot.
    pub fn builtin() -> Self {
        Self {
            facts: strings(&["fact1", "fact2"]),
            quotes: strings(&[
                "Твоє майбутнє починається сьогодні, а не завтра.",
                "Сила не в тому, щоб ніколи не падати, а в тому, щоб підніматися щоразу, коли впав.",
                "Не чекай ідеального моменту — створи його.",
                "Кожен великий шлях починається з маленького кроку.",
                "Мрії — це плани, які ще не мають дати.",
                "Успіх — це не випадковість, а результат наполегливої праці, віри в себе і рішучості.",
            ]),
            lifehacks: strings(&[
                "Починай день не з телефону, а з плану — і день буде твоїм.",
                "Записуй ідеї — найкращі думки приходять раптово і швидко зникають.",
                "Хочеш більше енергії — лягай раніше, а не пий п’яту каву.",
                "Думки плутаються? Пиши їх на папері — розум очиститься.",
                "Таймер на 25 хвилин — і жодних відволікань. Продуктивність злетить.",
            ]),
            images: strings(&[
                "https://tenor.com/view/ben-shapiro-walking-gif-21499133.gif",
                "https://i.redd.it/1xyl6wkixo0e1.gif",
                "https://tenor.com/view/alan-wake-alan-wake-2-vibe-gif-3068849078309707514.gif",
                "https://tenor.com/view/senator-armstrong-senator-metal-gear-rising-gif-25474022.gif",
            ]),
            click_messages: strings(&["message1", "message2"]),
            quizzes: vec![CatalogEntry::new(
                "What's 2 + 2?",
                &["2²"],
                &["√2", "2", "-2"],
            )],
            riddles: vec![CatalogEntry::new(
                "What's 2 + 2?",
                &["2²"],
                &["√2", "2", "-2"],
            )],
            website_url: "https://duikt.edu.ua/en/".to_string(),
        }
    }

    /// Reads a JSON catalog from `path`. Not validated; call [`ContentCatalog::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = serde_json::from_str(&raw)?;
        info!(path = %path.as_ref().display(), "Catalog loaded from file");
        Ok(catalog)
    }

    /// Loads `path` if given, otherwise the built-in catalog, and validates it.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::builtin(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every collection a handler draws from is non-empty, that the website and every
    /// image are absolute URLs, and that every quiz and riddle has a prompt and at least one
    /// correct answer.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let collections: [(&'static str, usize); 7] = [
            ("facts", self.facts.len()),
            ("quotes", self.quotes.len()),
            ("lifehacks", self.lifehacks.len()),
            ("images", self.images.len()),
            ("click_messages", self.click_messages.len()),
            ("quizzes", self.quizzes.len()),
            ("riddles", self.riddles.len()),
        ];
        if let Some((name, _)) = collections.iter().find(|(_, len)| *len == 0) {
            return Err(CatalogError::EmptyCollection(*name));
        }

        let urls = std::iter::once(("website_url", 0, &self.website_url))
            .chain(self.images.iter().enumerate().map(|(i, url)| ("images", i, url)));
        for (collection, index, raw) in urls {
            if let Err(reason) = url::Url::parse(raw) {
                return Err(CatalogError::InvalidUrl {
                    collection,
                    index,
                    reason,
                });
            }
        }

        for (collection, entries) in [("quizzes", &self.quizzes), ("riddles", &self.riddles)] {
            for (index, entry) in entries.iter().enumerate() {
                if entry.prompt.trim().is_empty() {
                    return Err(CatalogError::EmptyPrompt { collection, index });
                }
                if entry.correct_answers.is_empty() {
                    return Err(CatalogError::NoCorrectAnswer { collection, index });
                }
            }
        }
        Ok(())
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
