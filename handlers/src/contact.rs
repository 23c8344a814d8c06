//! Shared contacts: append to the contact log, award the bonus, thank the user.
//!
//! If the log write fails the user is still thanked, with a message saying the number could not
//! be saved, and no bonus is awarded. The error is logged, never propagated to the router.

use std::sync::Arc;

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::{Event, EventKind, HandlerError, Reply, ReplyComposer, Result};
use storage::{ContactLog, ContactRecord, StateField, UserState};
use tracing::{error, info, instrument};

use crate::texts;

pub struct ContactHandler {
    log: Arc<dyn ContactLog>,
    bonus: u64,
}

impl ContactHandler {
    pub fn new(log: Arc<dyn ContactLog>, bonus: u64) -> Self {
        Self { log, bonus }
    }
}

#[async_trait]
impl Handler for ContactHandler {
    #[instrument(skip(self, event, state), fields(user_id = event.user.id))]
    async fn handle(&self, event: &Event, state: &mut UserState) -> Result<Vec<Reply>> {
        let EventKind::ContactShared {
            display_fields,
            phone_number,
        } = &event.kind
        else {
            return Err(HandlerError::UnexpectedEvent(format!("{:?}", event.kind)).into());
        };

        let record = ContactRecord::new(event.user.id, display_fields.clone(), phone_number.as_str());
        match self.log.append(&record).await {
            Ok(()) => {
                state.increment(StateField::Score, self.bonus);
                info!(user_id = event.user.id, "step: contact saved");
                Ok(vec![ReplyComposer::text(texts::contact_thanks(phone_number))])
            }
            Err(e) => {
                error!(error = %e, user_id = event.user.id, "Failed to save contact");
                Ok(vec![ReplyComposer::text(texts::contact_not_saved(
                    phone_number,
                ))])
            }
        }
    }
}
