//! Storage crate: per-user interaction state and the append-only contact log.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`user_state`] – UserState, StateField, UserStateStore (in-memory, per-user locks)
//! - [`contact_log`] – ContactRecord, ContactLog trait, ContactLogger (JSON lines file)

mod contact_log;
mod error;
mod user_state;

pub use contact_log::{ContactLog, ContactLogger, ContactRecord};
pub use error::StorageError;
pub use user_state::{StateField, UserState, UserStateStore};
