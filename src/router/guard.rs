//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation commits. The decision depends only on the
//! target's access policy, whether the session holds a token, and the
//! target's full path, so it is tested without any router in place.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use serde::Serialize;

use super::location::encode_component;
use super::policy::AccessPolicy;
use super::table::{RouteMatch, RouteName};
use crate::state::session::Session;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    /// Send the user to Login, remembering where they were headed.
    RedirectToLogin { redirect: String },
    /// Send an already-authenticated user away from a guest page.
    RedirectToHome,
}

impl GuardDecision {
    /// Location to navigate to instead, if this is a redirect.
    #[must_use]
    pub fn redirect_location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { redirect } => Some(login_location(redirect)),
            Self::RedirectToHome => Some(RouteName::Home.descriptor().path.to_owned()),
        }
    }
}

/// The guard's decision table.
#[must_use]
pub fn decide(policy: AccessPolicy, is_authenticated: bool, full_path: &str) -> GuardDecision {
    match (policy, is_authenticated) {
        (AccessPolicy::RequiresAuth, false) => GuardDecision::RedirectToLogin { redirect: full_path.to_owned() },
        (AccessPolicy::GuestOnly, true) => GuardDecision::RedirectToHome,
        (AccessPolicy::RequiresAuth, true) | (AccessPolicy::GuestOnly, false) | (AccessPolicy::Public, _) => {
            GuardDecision::Allow
        }
    }
}

/// Evaluate the guard for `target` against the current session.
#[must_use]
pub fn check(session: &Session, target: &RouteMatch) -> GuardDecision {
    decide(target.route.policy, session.is_authenticated(), target.location.full_path())
}

/// `/login?redirect=<full path>` with the full path percent-encoded.
#[must_use]
pub fn login_location(redirect: &str) -> String {
    format!("{}?redirect={}", RouteName::Login.descriptor().path, encode_component(redirect))
}
