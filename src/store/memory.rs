//! In-memory credential store for tests and demos.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{CredentialStore, InsertOutcome, StoreError, UpdateOutcome, UserRecord};

/// A `BTreeMap`-backed store honoring the same conflict semantics as the
/// Postgres accessor: inserting an existing username reports `Conflict`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    ///
    /// # Panics
    /// Panics if the inner lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.lock().expect("store lock poisoned").len()
    }

    /// # Panics
    /// Panics if the inner lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryStore {
    async fn fetch(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(rows.get(username).map(|password| UserRecord {
            username: username.to_string(),
            password: password.clone(),
        }))
    }

    async fn insert(&self, username: &str, credential: &str) -> Result<InsertOutcome, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        if rows.contains_key(username) {
            return Ok(InsertOutcome::Conflict);
        }
        rows.insert(username.to_string(), credential.to_string());
        Ok(InsertOutcome::Inserted)
    }

    async fn update_password(
        &self,
        username: &str,
        new_credential: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        match rows.get_mut(username) {
            Some(password) => {
                *password = new_credential.to_string();
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(rows
            .iter()
            .map(|(username, password)| UserRecord {
                username: username.clone(),
                password: password.clone(),
            })
            .collect())
    }
}
