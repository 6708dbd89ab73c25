//! Caller-owned session flags.

use serde::{Deserialize, Serialize};

/// The two session flags this crate writes: `authenticated` and the optional
/// username (absent for guest sessions).
///
/// The caller owns the value's lifecycle — created at session start, kept
/// across reruns, torn down at session end. Nothing here persists on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    authenticated: bool,
    username: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The authenticated username, or `None` when unauthenticated or guest.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Mark the session authenticated, with `None` meaning a guest session.
    pub fn set_authenticated(&mut self, username: Option<String>) {
        self.authenticated = true;
        self.username = username;
    }

    /// Reset both flags to their initial values.
    pub fn reset(&mut self) {
        self.authenticated = false;
        self.username = None;
    }
}
