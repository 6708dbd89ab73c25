//! # Ingresso (Login & Signup Form Core)
//!
//! `ingresso` is the non-visual core of a login/signup widget: it owns
//! credential verification, account creation, guest entry, session-flag
//! mutation, and the plaintext-to-hash migration path against a single
//! `users` table in Postgres. Rendering stays with the host application;
//! every user-visible string is supplied through [`LoginFormConfig`].
//!
//! ## Credential storage
//!
//! Users live in one table with two text columns, a primary-key username and
//! a password. The password column holds either an Argon2id PHC string or,
//! transiently, a plaintext value pending upgrade. Uniqueness is enforced by
//! the store's primary-key constraint alone; the accessor never pre-checks
//! existence before an insert, so two sessions racing to create the same
//! username are serialized by the database, not by this crate.
//!
//! ## Migration on read
//!
//! A stored value that does not parse as an Argon2id hash is treated as
//! plaintext: a login attempt compares it by string equality and, on a
//! successful match only, rewrites the row with its hashed form. The
//! [`hash_current_passwords`] entry point (also available through the
//! `ingresso` binary) performs the same upgrade over the whole table and is
//! idempotent.
//!
//! ## Sessions
//!
//! Session state is an explicit [`Session`] value the caller owns and passes
//! into the form controller. The crate writes exactly two flags:
//! `authenticated` and an optional `username` (absent for guest sessions).

pub mod auth;
pub mod cli;
pub mod error;
pub mod form;
pub mod store;

pub use auth::password::PasswordPolicy;
pub use auth::verifier::{bulk_upgrade, verify_and_upgrade, VerifyOutcome};
pub use error::FormError;
pub use form::config::{CreateAccountText, FieldText, GuestText, LoginFormConfig, LoginText};
pub use form::session::Session;
pub use form::{login_form, logout, FormEvent, FormOutcome, LoginForm};
pub use store::{
    CredentialStore, InsertOutcome, MemoryStore, PgCredentialStore, StoreError, TableConfig,
    UpdateOutcome, UserRecord,
};

use sqlx::PgPool;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Hash every stored plaintext password in place.
///
/// Convenience wrapper over [`bulk_upgrade`] for callers holding a plain
/// [`PgPool`]. Returns the number of rows rewritten.
///
/// # Errors
///
/// Returns an error if the table scan or one of the row updates fails.
pub async fn hash_current_passwords(pool: &PgPool, table: &TableConfig) -> Result<u64, FormError> {
    let store = PgCredentialStore::new(pool.clone(), table.clone());
    bulk_upgrade(&store).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
