//! The [`Handler`] trait and [`Channel`], the three-plus-one ways an event can be selected.

use async_trait::async_trait;
use quizbot_core::{Event, EventKind, Reply, Result};
use storage::UserState;

/// Which part of an event the router matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `/name` commands; selector is the name without the slash.
    Command,
    /// Exact text (reply keyboard entries).
    Text,
    /// Inline button tags.
    Callback,
    /// Shared contacts. There is no selector; register with an empty string.
    Contact,
}

impl Channel {
    /// Channel and selector of an event.
    pub fn of(kind: &EventKind) -> (Channel, &str) {
        match kind {
            EventKind::Command(name) => (Channel::Command, name),
            EventKind::Text(text) => (Channel::Text, text),
            EventKind::Callback { tag, .. } => (Channel::Callback, tag),
            EventKind::ContactShared { .. } => (Channel::Contact, ""),
        }
    }
}

/// Reacts to one event. Gets exclusive access to the sender's state for the duration of the call
/// and returns the replies to deliver, in order.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>>;
}
