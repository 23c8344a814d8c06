//! Unit tests for ContactHandler: record contents, bonus, and the degraded reply when the log
//! rejects the write.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use interaction_router::Handler;
use quizbot_core::EventKind;
use serde_json::{json, Map, Value};
use storage::{ContactLog, ContactRecord, StateField, StorageError, UserState};

use super::{create_callback, create_test_event};
use crate::contact::ContactHandler;
use crate::texts;

#[derive(Default)]
struct RecordingLog {
    records: Mutex<Vec<ContactRecord>>,
}

#[async_trait]
impl ContactLog for RecordingLog {
    async fn append(&self, record: &ContactRecord) -> Result<(), StorageError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

struct ClosedLog;

#[async_trait]
impl ContactLog for ClosedLog {
    async fn append(&self, _record: &ContactRecord) -> Result<(), StorageError> {
        Err(StorageError::Closed)
    }
}

fn contact_event() -> quizbot_core::Event {
    let mut fields = Map::new();
    fields.insert("id".to_string(), json!(123));
    fields.insert("first_name".to_string(), json!("Test"));
    create_test_event(EventKind::ContactShared {
        display_fields: fields,
        phone_number: "+380501234567".to_string(),
    })
}

/// **Test: a shared contact is appended with the phone number, thanked, and awarded the bonus.**
#[tokio::test]
async fn test_contact_saved() {
    let log = Arc::new(RecordingLog::default());
    let handler = ContactHandler::new(log.clone(), 25);
    let mut state = UserState::default();

    let replies = handler.handle(&contact_event(), &mut state).await.unwrap();

    let records = log.records.lock().unwrap().clone();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, 123);
    assert_eq!(records[0].phone_number, "+380501234567");

    let line: Value = serde_json::from_str(records[0].to_line().unwrap().trim_end()).unwrap();
    assert_eq!(line["number"], "+380501234567");
    assert_eq!(line["first_name"], "Test");

    assert_eq!(state.get(StateField::Score), 25);
    assert_eq!(
        replies[0].text(),
        Some(texts::contact_thanks("+380501234567").as_str())
    );
}

/// **Test: a failing log still thanks the user, says the number was not saved, awards nothing.**
#[tokio::test]
async fn test_contact_log_failure_degrades() {
    let handler = ContactHandler::new(Arc::new(ClosedLog), 25);
    let mut state = UserState::default();

    let replies = handler.handle(&contact_event(), &mut state).await.unwrap();

    assert_eq!(state.get(StateField::Score), 0);
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0].text(),
        Some(texts::contact_not_saved("+380501234567").as_str())
    );
}

/// **Test: a non-contact event is rejected without touching the log.**
#[tokio::test]
async fn test_non_contact_event_rejected() {
    let log = Arc::new(RecordingLog::default());
    let handler = ContactHandler::new(log.clone(), 25);

    let result = handler
        .handle(&create_callback("clicked"), &mut UserState::default())
        .await;

    assert!(result.is_err());
    assert!(log.records.lock().unwrap().is_empty());
}
