use std::collections::HashMap;
use std::sync::Arc;

use quizbot_core::{Bot, Event};
use storage::UserStateStore;
use tracing::{debug, error, info, instrument, warn};

use crate::handler::{Channel, Handler};
use crate::score::{ScoreAward, ScorePolicy};

/// What happened to one event. Returned for logging and tests; dispatch itself never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// A handler was registered for the event's selector.
    pub matched: bool,
    /// The callback acknowledgement was sent successfully.
    pub acknowledged: bool,
    /// Replies the transport accepted.
    pub delivered: usize,
    /// Replies the transport rejected.
    pub failed: usize,
}

/// Selector → handler table plus the state store handlers work on.
///
/// Registering the same `(channel, selector)` twice keeps the later handler; this is
/// deterministic and only logged. Cloning shares handlers and state.
#[derive(Clone)]
pub struct Router {
    store: UserStateStore,
    score_policy: Option<ScorePolicy>,
    routes: HashMap<Channel, HashMap<String, Arc<dyn Handler>>>,
}

impl Router {
    /// Creates an empty router. With `score_policy = None` no handler awards the post-condition
    /// points, which turns the score feature off as a whole.
    pub fn new(store: UserStateStore, score_policy: Option<ScorePolicy>) -> Self {
        Self {
            store,
            score_policy,
            routes: HashMap::new(),
        }
    }

    pub fn store(&self) -> &UserStateStore {
        &self.store
    }

    pub fn score_policy(&self) -> Option<&ScorePolicy> {
        self.score_policy.as_ref()
    }

    /// Registers `handler` for `selector` on `channel`, wrapped in [`ScoreAward`] when a score
    /// policy is configured.
    pub fn register(
        self,
        channel: Channel,
        selector: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> Self {
        let handler: Arc<dyn Handler> = match &self.score_policy {
            Some(policy) => Arc::new(ScoreAward::new(handler, policy.clone())),
            None => handler,
        };
        self.insert(channel, selector.into(), handler)
    }

    /// Registers `handler` without the score post-condition.
    pub fn register_exempt(
        self,
        channel: Channel,
        selector: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> Self {
        self.insert(channel, selector.into(), handler)
    }

    pub fn on_command(self, name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.register(Channel::Command, name, handler)
    }

    pub fn on_text(self, text: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.register(Channel::Text, text, handler)
    }

    pub fn on_callback(self, tag: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.register(Channel::Callback, tag, handler)
    }

    pub fn on_contact(self, handler: Arc<dyn Handler>) -> Self {
        self.register(Channel::Contact, "", handler)
    }

    /// Returns true if an event with this channel and selector would reach a handler.
    pub fn is_registered(&self, channel: Channel, selector: &str) -> bool {
        self.resolve(channel, selector).is_some()
    }

    fn insert(mut self, channel: Channel, selector: String, handler: Arc<dyn Handler>) -> Self {
        let table = self.routes.entry(channel).or_default();
        if table.insert(selector.clone(), handler).is_some() {
            debug!(
                channel = ?channel,
                selector = %selector,
                "Handler replaced by later registration"
            );
        }
        self
    }

    fn resolve(&self, channel: Channel, selector: &str) -> Option<&Arc<dyn Handler>> {
        self.routes.get(&channel)?.get(selector)
    }

    /// Runs the single handler matching `event` and delivers its replies through `bot`.
    ///
    /// Unmatched events are ignored: no acknowledgement, no replies, no state record created.
    /// Acknowledgement and delivery failures are logged and never stop the remaining work;
    /// handler errors are logged and produce no replies.
    #[instrument(skip(self, bot, event), fields(user_id = event.user.id, event_id = %event.id))]
    pub async fn dispatch(&self, bot: &dyn Bot, event: &Event) -> DispatchReport {
        let mut report = DispatchReport::default();
        let (channel, selector) = Channel::of(&event.kind);

        let Some(handler) = self.resolve(channel, selector) else {
            debug!(
                channel = ?channel,
                selector = %selector,
                "No handler registered, event ignored"
            );
            return report;
        };
        report.matched = true;

        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            channel = ?channel,
            selector = %selector,
            "step: dispatch started"
        );

        if let Some(query_id) = event.callback_query_id() {
            match bot.acknowledge_callback(query_id).await {
                Ok(()) => report.acknowledged = true,
                Err(e) => warn!(
                    error = %e,
                    user_id = event.user.id,
                    query_id = %query_id,
                    "Failed to acknowledge callback"
                ),
            }
        }

        let entry = self.store.entry(event.user.id).await;
        let outcome = {
            let mut state = entry.lock().await;
            handler.handle(event, &mut *state).await
        };

        let replies = match outcome {
            Ok(replies) => replies,
            Err(e) => {
                error!(
                    error = %e,
                    user_id = event.user.id,
                    selector = %selector,
                    "Handler failed"
                );
                return report;
            }
        };

        for reply in &replies {
            match bot.deliver(&event.chat, reply).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        error = %e,
                        user_id = event.user.id,
                        chat_id = event.chat.id,
                        "Failed to deliver reply"
                    );
                }
            }
        }

        info!(
            user_id = event.user.id,
            selector = %selector,
            delivered = report.delivered,
            failed = report.failed,
            "step: dispatch finished"
        );

        report
    }
}
