//! Credential hashing and verification.

pub mod password;
pub mod verifier;

pub use password::{hash_password, needs_rehash, verify_password, PasswordPolicy};
pub use verifier::{bulk_upgrade, verify_and_upgrade, VerifyOutcome};
