//! Append-only contact log: one JSON object per line, in the order contacts were shared.
//!
//! The file is opened once in append mode and held until [`ContactLogger::close`]. Appends go
//! through a single lock so concurrent writers never interleave partial lines.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::error::StorageError;

/// Snapshot of one shared contact. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    pub user_id: i64,
    /// Profile fields supplied by the transport for the sender.
    pub display_fields: Map<String, Value>,
    pub phone_number: String,
}

impl ContactRecord {
    pub fn new(
        user_id: i64,
        display_fields: Map<String, Value>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            display_fields,
            phone_number: phone_number.into(),
        }
    }

    /// Serializes the record as a single newline-terminated JSON line: the display fields plus
    /// `number`. `id` is filled from `user_id` when the transport did not supply it.
    pub fn to_line(&self) -> Result<String, StorageError> {
        let mut object = self.display_fields.clone();
        object
            .entry("id")
            .or_insert_with(|| Value::from(self.user_id));
        object.insert(
            "number".to_string(),
            Value::String(self.phone_number.clone()),
        );
        let mut line = serde_json::to_string(&Value::Object(object))?;
        line.push('\n');
        Ok(line)
    }
}

/// Durable destination for contact records.
#[async_trait]
pub trait ContactLog: Send + Sync {
    /// Appends one record. Errors must reach the caller; contact data is never dropped silently.
    async fn append(&self, record: &ContactRecord) -> Result<(), StorageError>;
}

/// [`ContactLog`] backed by a file opened in append mode.
pub struct ContactLogger {
    path: PathBuf,
    /// Unbuffered: a failed append leaves nothing behind to be written later.
    file: Mutex<Option<File>>,
}

impl ContactLogger {
    /// Opens (or creates) `path` in append mode. Missing parent directories are created.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        info!(path = %path.display(), "Contact log opened");
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and syncs the file, then releases it. Later appends fail with
    /// [`StorageError::Closed`]. Closing twice is a no-op.
    pub async fn close(&self) -> Result<(), StorageError> {
        let mut guard = self.file.lock().await;
        if let Some(mut file) = guard.take() {
            file.flush().await?;
            file.sync_all().await?;
            info!(path = %self.path.display(), "Contact log closed");
        }
        Ok(())
    }
}

#[async_trait]
impl ContactLog for ContactLogger {
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    async fn append(&self, record: &ContactRecord) -> Result<(), StorageError> {
        let line = record.to_line()?;
        let mut guard = self.file.lock().await;
        let file = guard.as_mut().ok_or(StorageError::Closed)?;
        let written = async {
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            error!(error = %e, path = %self.path.display(), "Failed to append contact record");
            return Err(e.into());
        }
        info!(user_id = record.user_id, "step: contact record appended");
        Ok(())
    }
}
