//! Per-user interaction state (click count and score), kept in memory for the process lifetime.
//!
//! Records are created lazily on first lookup and never evicted, so the store grows with the
//! number of distinct users seen. That is fine at the scale this bot runs at; a restart clears it.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Counter of a [`UserState`] that handlers may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Clicks,
    Score,
}

/// Mutable state of one user. Both counters only grow, except `clicks` which can be reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub clicks: u64,
    pub score: u64,
}

impl UserState {
    /// Adds `delta` to `field` and returns the new value. Saturates instead of wrapping.
    pub fn increment(&mut self, field: StateField, delta: u64) -> u64 {
        let value = self.field_mut(field);
        *value = value.saturating_add(delta);
        *value
    }

    /// Resets `field` to zero. Score is never reset by any handler, but the operation is total.
    pub fn reset(&mut self, field: StateField) {
        *self.field_mut(field) = 0;
    }

    pub fn get(&self, field: StateField) -> u64 {
        match field {
            StateField::Clicks => self.clicks,
            StateField::Score => self.score,
        }
    }

    fn field_mut(&mut self, field: StateField) -> &mut u64 {
        match field {
            StateField::Clicks => &mut self.clicks,
            StateField::Score => &mut self.score,
        }
    }
}

/// Get-or-create store of [`UserState`] keyed by user id.
///
/// Each record sits behind its own lock so concurrent events for different users never contend,
/// and read-modify-write sequences for one user are not lost. Cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct UserStateStore {
    users: Arc<RwLock<HashMap<i64, Arc<Mutex<UserState>>>>>,
}

impl UserStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding `user_id`'s record, creating a zeroed record on first access.
    pub async fn entry(&self, user_id: i64) -> Arc<Mutex<UserState>> {
        if let Some(entry) = self.users.read().await.get(&user_id) {
            return entry.clone();
        }
        let mut users = self.users.write().await;
        users
            .entry(user_id)
            .or_insert_with(|| {
                debug!(user_id = user_id, "Creating user state");
                Arc::new(Mutex::new(UserState::default()))
            })
            .clone()
    }

    /// Snapshot of `user_id`'s state; unseen users get `{clicks: 0, score: 0}` (and are stored).
    pub async fn get(&self, user_id: i64) -> UserState {
        let entry = self.entry(user_id).await;
        let state = *entry.lock().await;
        state
    }

    /// Adds `delta` to `field` of `user_id` and returns the new value.
    pub async fn increment(&self, user_id: i64, field: StateField, delta: u64) -> u64 {
        let entry = self.entry(user_id).await;
        let mut state = entry.lock().await;
        state.increment(field, delta)
    }

    /// Resets `field` of `user_id` to zero.
    pub async fn reset(&self, user_id: i64, field: StateField) {
        let entry = self.entry(user_id).await;
        let mut state = entry.lock().await;
        state.reset(field);
    }

    /// Returns true if `user_id` already has a record. Does not create one.
    pub async fn contains(&self, user_id: i64) -> bool {
        self.users.read().await.contains_key(&user_id)
    }

    /// Number of users with a record.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_user_starts_at_zero() {
        let store = UserStateStore::new();
        for user_id in [1, 42, -7, i64::MAX] {
            assert_eq!(store.get(user_id).await, UserState { clicks: 0, score: 0 });
        }
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_score_increments_are_additive_per_user() {
        let store = UserStateStore::new();
        for _ in 0..3 {
            store.increment(1, StateField::Score, 25).await;
        }
        store.increment(2, StateField::Score, 25).await;
        store.increment(1, StateField::Score, 25).await;

        assert_eq!(store.get(1).await.score, 100);
        assert_eq!(store.get(2).await.score, 25);
    }

    #[tokio::test]
    async fn test_reset_clicks_keeps_score() {
        let store = UserStateStore::new();
        store.increment(5, StateField::Clicks, 3).await;
        store.increment(5, StateField::Score, 75).await;

        store.reset(5, StateField::Clicks).await;

        assert_eq!(store.get(5).await, UserState { clicks: 0, score: 75 });
    }

    #[tokio::test]
    async fn test_contains_does_not_create() {
        let store = UserStateStore::new();
        assert!(!store.contains(9).await);
        assert!(store.is_empty().await);
        store.get(9).await;
        assert!(store.contains(9).await);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = UserStateStore::new();
        let mut tasks = Vec::new();
        for _ in 0..50 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.increment(1, StateField::Score, 25).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.get(1).await.score, 50 * 25);
    }

    #[test]
    fn test_increment_saturates() {
        let mut state = UserState {
            clicks: u64::MAX - 1,
            score: 0,
        };
        assert_eq!(state.increment(StateField::Clicks, 5), u64::MAX);
    }
}
