//! Navigation failures.
//!
//! Auth outcomes are never errors; the guard expresses them as redirects.

/// Error returned by [`super::Navigator::navigate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The URL is not an absolute in-app path.
    #[error("invalid navigation url {0:?}: expected a path starting with '/'")]
    InvalidUrl(String),
    /// No route matches the requested path.
    #[error("no route matches {path}")]
    NotFound { path: String },
    /// Redirects kept bouncing without committing a route.
    #[error("redirect limit of {limit} exceeded while navigating to {path}")]
    RedirectLoop { path: String, limit: usize },
}
