//! Error taxonomy for the form controller boundary.

use thiserror::Error;

use crate::store::StoreError;

/// Everything the form controller can reject a submission with.
///
/// Unknown usernames and wrong passwords both collapse into
/// [`FormError::InvalidCredentials`] so callers cannot enumerate accounts
/// from error content.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("wrong username or password")]
    InvalidCredentials,
    #[error("username already taken")]
    UsernameTaken,
    #[error("password does not meet the strength requirements")]
    PasswordPolicy,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("username cannot be empty")]
    InvalidUsername,
    #[error("this sign-in path is disabled")]
    PathDisabled,
    #[error("failed to hash password")]
    Hash(#[from] argon2::password_hash::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        // One message for both unknown-user and wrong-password.
        assert_eq!(
            FormError::InvalidCredentials.to_string(),
            "wrong username or password"
        );
    }

    #[test]
    fn store_errors_pass_through() {
        let err = FormError::from(StoreError::Unavailable("connection refused".to_string()));
        assert!(err.to_string().contains("connection refused"));
    }
}
