//! Credential verification with opportunistic plaintext upgrade.
//!
//! One code path serves three populations at once: rows already hashed, rows
//! still holding plaintext, and rows mid-migration. The discriminator is the
//! stored value itself — anything [`needs_rehash`] flags is treated as
//! plaintext — so no schema-version flag is required and no maintenance
//! window is needed while a table migrates.

use tracing::{debug, instrument};

use super::password::{hash_password, needs_rehash, verify_password};
use crate::error::FormError;
use crate::store::{CredentialStore, UpdateOutcome};

/// Result of a credential check.
///
/// Unknown usernames and wrong passwords collapse into `Invalid` with no
/// distinguishing information, so callers cannot probe which usernames exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The submitted credentials match; carries the stored username.
    Verified { username: String },
    Invalid,
}

/// Check a submitted username/password pair against the store, rewriting a
/// matching plaintext row with its hashed form.
///
/// The rewrite happens only after a successful comparison; a failed attempt
/// never mutates the store.
///
/// # Errors
///
/// Returns an error when the store is unreachable or the replacement hash
/// cannot be produced. Mismatches are reported as `Ok(Invalid)`, not errors.
#[instrument(skip(store, submitted_password))]
pub async fn verify_and_upgrade<S: CredentialStore>(
    store: &S,
    username: &str,
    submitted_password: &str,
) -> Result<VerifyOutcome, FormError> {
    let Some(record) = store.fetch(username).await? else {
        debug!("unknown username");
        return Ok(VerifyOutcome::Invalid);
    };

    if needs_rehash(&record.password) {
        // Stored value is plaintext (or an unrecognized format, treated the
        // same): exact string comparison, then upgrade on match.
        if submitted_password == record.password {
            let credential = hash_password(submitted_password)?;
            store
                .update_password(&record.username, &credential)
                .await?;
            debug!("upgraded plaintext credential on login");
            return Ok(VerifyOutcome::Verified {
                username: record.username,
            });
        }
        return Ok(VerifyOutcome::Invalid);
    }

    if verify_password(submitted_password, &record.password) {
        Ok(VerifyOutcome::Verified {
            username: record.username,
        })
    } else {
        Ok(VerifyOutcome::Invalid)
    }
}

/// Rewrite every stored plaintext password with its hashed form.
///
/// Each row's rehash is an independent write; a crash mid-scan leaves earlier
/// rows upgraded and later rows untouched, and re-invoking resumes safely.
/// Once every row is hashed the call upgrades nothing.
///
/// # Errors
///
/// Returns an error when the scan or one of the row updates fails.
#[instrument(skip(store))]
pub async fn bulk_upgrade<S: CredentialStore>(store: &S) -> Result<u64, FormError> {
    let mut upgraded = 0;
    for record in store.list_all().await? {
        if !needs_rehash(&record.password) {
            continue;
        }
        let credential = hash_password(&record.password)?;
        if store
            .update_password(&record.username, &credential)
            .await?
            == UpdateOutcome::Updated
        {
            upgraded += 1;
        }
    }
    debug!(upgraded, "bulk upgrade finished");
    Ok(upgraded)
}
