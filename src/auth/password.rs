//! Argon2id password hashing, verification, and upgrade detection.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, Params, PasswordHasher, PasswordVerifier, Version, ARGON2ID_IDENT,
};
use serde::{Deserialize, Serialize};

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_SPECIAL_CHARS: &str = "@$!%*?&_^#- ";

/// Hash a plaintext password with Argon2id and a per-call random salt.
///
/// # Errors
///
/// Returns an error only if the hashing primitive itself fails; this does not
/// happen for any plain string input under the default parameters.
pub fn hash_password(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext password against a stored Argon2id credential.
///
/// Returns `false` (never an error) on mismatch or when the credential is not
/// a well-formed hash.
#[must_use]
pub fn verify_password(plaintext: &str, credential: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(credential) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Whether a stored credential should be rewritten with a fresh hash.
///
/// True when the value does not parse as an Argon2id PHC string (which covers
/// plaintext rows pending upgrade) or when it was produced with an older
/// version or weaker cost parameters than the current defaults.
#[must_use]
pub fn needs_rehash(credential: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(credential) else {
        return true;
    };
    if parsed.algorithm != ARGON2ID_IDENT {
        return true;
    }
    let Ok(params) = Params::try_from(&parsed) else {
        return true;
    };
    let current = Params::default();
    parsed.version != Some(Version::V0x13 as u32)
        || params.m_cost() < current.m_cost()
        || params.t_cost() < current.t_cost()
        || params.p_cost() < current.p_cost()
}

/// Password strength requirements applied during account creation.
///
/// The default matches the historical form contract: at least 8 characters
/// with one uppercase letter, one lowercase letter, one digit, and one
/// character from the special set `@$!%*?&_^#- `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    min_length: usize,
    special_chars: String,
}

impl PasswordPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_special_chars(mut self, special_chars: impl Into<String>) -> Self {
        self.special_chars = special_chars.into();
        self
    }

    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn special_chars(&self) -> &str {
        &self.special_chars
    }

    /// True if the password meets every requirement.
    #[must_use]
    pub fn validate(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
            && password.chars().any(char::is_uppercase)
            && password.chars().any(char::is_lowercase)
            && password.chars().any(|ch| ch.is_ascii_digit())
            && password.chars().any(|ch| self.special_chars.contains(ch))
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("hunter2 but longer").unwrap();
        assert!(verify_password("hunter2 but longer", &hash));
        assert!(!verify_password("hunter2", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same", &first));
        assert!(verify_password("same", &second));
    }

    #[test]
    fn verify_rejects_malformed_credential() {
        assert!(!verify_password("anything", "not-a-valid-hash"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn fresh_hash_does_not_need_rehash() {
        let hash = hash_password("fresh").unwrap();
        assert!(!needs_rehash(&hash));
    }

    #[test]
    fn plaintext_needs_rehash() {
        assert!(needs_rehash("plaintext-literal"));
        assert!(needs_rehash(""));
    }

    #[test]
    fn foreign_hash_format_needs_rehash() {
        // A scrypt-style PHC string is not an Argon2id credential.
        assert!(needs_rehash(
            "$scrypt$ln=16,r=8,p=1$aM15713r3Xsvxbi31lqr1Q$nFNh2CVHVjNldFVKDHDlm4CmdRSCdEBsjjJxD+iCs5E"
        ));
    }

    #[test]
    fn weaker_parameters_need_rehash() {
        // m=1024 is far below the current default memory cost.
        let salt = SaltString::generate(&mut OsRng);
        let weak = Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            Params::new(1024, 2, 1, None).unwrap(),
        )
        .hash_password(b"weakly hashed", &salt)
        .unwrap()
        .to_string();
        assert!(needs_rehash(&weak));
        // Still verifiable with the embedded parameters.
        assert!(verify_password("weakly hashed", &weak));
    }

    #[test]
    fn policy_default_accepts_strong_password() {
        let policy = PasswordPolicy::default();
        assert!(policy.validate("Abc123!@"));
    }

    #[test]
    fn policy_default_rejects_weak_passwords() {
        let policy = PasswordPolicy::default();
        // Length 7 with every character class still fails the length bound.
        assert!(!policy.validate("Ab1!cde"));
        assert!(!policy.validate("alllower1!"));
        assert!(!policy.validate("ALLUPPER1!"));
        assert!(!policy.validate("NoDigits!!"));
        assert!(!policy.validate("NoSpecial11"));
    }

    #[test]
    fn policy_overrides_apply() {
        let policy = PasswordPolicy::new()
            .with_min_length(4)
            .with_special_chars(".");
        assert!(policy.validate("Ab1."));
        assert!(!policy.validate("Ab1!"));
    }
}
