//! Credential storage: the store seam and its implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgCredentialStore;

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    /// Stored credential: an Argon2id PHC string or, pending upgrade, plaintext.
    pub password: String,
}

/// Outcome when attempting to create a new user row.
///
/// `Conflict` is sourced from the store's uniqueness constraint; the accessor
/// never pre-checks existence, since a check-then-insert sequence is racy.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Conflict,
}

/// Outcome of an in-place password overwrite.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// Point lookups and point writes against the user table.
///
/// Implementations surface transport failures as [`StoreError`] and never
/// retry internally; retries and timeouts belong to the underlying client.
pub trait CredentialStore {
    /// Single-row lookup by exact primary-key match.
    fn fetch(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, StoreError>> + Send;

    /// Insert a new row, delegating uniqueness to the store's constraint.
    fn insert(
        &self,
        username: &str,
        credential: &str,
    ) -> impl std::future::Future<Output = Result<InsertOutcome, StoreError>> + Send;

    /// Overwrite the password column for an existing row.
    fn update_password(
        &self,
        username: &str,
        new_credential: &str,
    ) -> impl std::future::Future<Output = Result<UpdateOutcome, StoreError>> + Send;

    /// Full scan, used only by the bulk upgrade.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, StoreError>> + Send;
}

/// Names of the user table and its two required columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    table: String,
    username_col: String,
    password_col: String,
}

impl TableConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: "users".to_string(),
            username_col: "username".to_string(),
            password_col: "password".to_string(),
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub fn with_username_col(mut self, username_col: impl Into<String>) -> Self {
        self.username_col = username_col.into();
        self
    }

    #[must_use]
    pub fn with_password_col(mut self, password_col: impl Into<String>) -> Self {
        self.password_col = password_col.into();
        self
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn username_col(&self) -> &str {
        &self.username_col
    }

    #[must_use]
    pub fn password_col(&self) -> &str {
        &self.password_col
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_config_defaults_are_expected() {
        let table = TableConfig::new();
        assert_eq!(table.table(), "users");
        assert_eq!(table.username_col(), "username");
        assert_eq!(table.password_col(), "password");
    }

    #[test]
    fn table_config_overrides_fields() {
        let table = TableConfig::new()
            .with_table("accounts")
            .with_username_col("login")
            .with_password_col("secret");
        assert_eq!(table.table(), "accounts");
        assert_eq!(table.username_col(), "login");
        assert_eq!(table.password_col(), "secret");
    }
}
