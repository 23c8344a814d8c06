//! Outbound reply shapes and [`ReplyComposer`], which builds them from handler decisions.
//!
//! No business logic lives here; handlers decide what to say, the composer only shapes it and
//! the router hands the result to a [`crate::Bot`].

use serde::{Deserialize, Serialize};

/// What pressing an inline option does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceAction {
    /// Dispatches the tag back into the router as a callback event.
    Callback(String),
    /// Opens a URL; never reaches the router.
    Url(String),
}

/// A selectable inline button. Several options may share a tag (e.g. every wrong answer of a quiz).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub action: ChoiceAction,
}

impl ChoiceOption {
    pub fn callback(label: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ChoiceAction::Callback(tag.into()),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ChoiceAction::Url(url.into()),
        }
    }

    /// The callback tag, or `None` for link options.
    pub fn tag(&self) -> Option<&str> {
        match &self.action {
            ChoiceAction::Callback(tag) => Some(tag),
            ChoiceAction::Url(_) => None,
        }
    }
}

/// Entry of a reply keyboard (shown instead of the regular keyboard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEntry {
    /// Sends its label back as a text event.
    Text(String),
    /// Asks the user to share their phone number; comes back as a contact event.
    RequestContact(String),
}

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    /// Text plus a grid of inline options; rows keep the author's grouping.
    ChoiceMenu {
        text: String,
        rows: Vec<Vec<ChoiceOption>>,
    },
    /// Animation by URL, optionally with inline options (empty `rows` means none).
    Media {
        url: String,
        rows: Vec<Vec<ChoiceOption>>,
    },
    /// Text plus a resized one-time reply keyboard.
    MenuKeyboard {
        text: String,
        rows: Vec<Vec<MenuEntry>>,
    },
}

impl Reply {
    /// Text part of the reply, if any. Media replies have none.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::ChoiceMenu { text, .. } | Reply::MenuKeyboard { text, .. } => Some(text),
            Reply::Media { .. } => None,
        }
    }

    /// All inline options of the reply, flattened row by row.
    pub fn options(&self) -> Vec<&ChoiceOption> {
        match self {
            Reply::ChoiceMenu { rows, .. } | Reply::Media { rows, .. } => {
                rows.iter().flatten().collect()
            }
            Reply::Text(_) | Reply::MenuKeyboard { .. } => Vec::new(),
        }
    }
}

/// Builds [`Reply`] values.
pub struct ReplyComposer;

impl ReplyComposer {
    pub fn text(text: impl Into<String>) -> Reply {
        Reply::Text(text.into())
    }

    pub fn choice_menu(text: impl Into<String>, rows: Vec<Vec<ChoiceOption>>) -> Reply {
        Reply::ChoiceMenu {
            text: text.into(),
            rows,
        }
    }

    /// Text with a single option, e.g. a "show another" button.
    pub fn single_choice(
        text: impl Into<String>,
        label: impl Into<String>,
        tag: impl Into<String>,
    ) -> Reply {
        Self::choice_menu(text, vec![vec![ChoiceOption::callback(label, tag)]])
    }

    /// Text with every option on its own row.
    pub fn column(text: impl Into<String>, options: Vec<ChoiceOption>) -> Reply {
        Self::choice_menu(text, options.into_iter().map(|o| vec![o]).collect())
    }

    /// Text with all options on one row.
    pub fn row(text: impl Into<String>, options: Vec<ChoiceOption>) -> Reply {
        Self::choice_menu(text, vec![options])
    }

    pub fn media(url: impl Into<String>, rows: Vec<Vec<ChoiceOption>>) -> Reply {
        Reply::Media {
            url: url.into(),
            rows,
        }
    }

    pub fn menu_keyboard(text: impl Into<String>, rows: Vec<Vec<MenuEntry>>) -> Reply {
        Reply::MenuKeyboard {
            text: text.into(),
            rows,
        }
    }
}
