//! Auth-session state for the current client process.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard on every navigation; mutated only by the
//! login and logout actions. Nothing is persisted across restarts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::net::types::User;

/// Authentication token plus the user record it belongs to.
///
/// `user` is expected to be present only while `token` is, but the holder
/// does not enforce that.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token. No format or expiry validation.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        tracing::debug!("session token set");
    }

    /// Replace the current user record.
    pub fn set_user(&mut self, user: User) {
        tracing::debug!(user_id = user.id, "session user set");
        self.user = Some(user);
    }

    /// Clear token and user. Calling it on an empty session is a no-op.
    pub fn logout(&mut self) {
        if self.token.is_some() || self.user.is_some() {
            tracing::debug!("session cleared");
        }
        self.token = None;
        self.user = None;
    }

    /// True when a non-empty token is held; an empty string counts as logged out.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

// The token never shows up in logs or panic messages.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}
