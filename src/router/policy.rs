//! Per-route access policy.

use serde::Serialize;

/// Whether the current auth state permits a route to be rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicy {
    /// Only authenticated sessions may enter.
    RequiresAuth,
    /// Only anonymous sessions may enter (login, register).
    GuestOnly,
    #[default]
    Public,
}
