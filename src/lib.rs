//! # psych-eval
//!
//! Client core for the psychological-evaluation frontend: the in-memory
//! auth session, the route table with per-route access policies, the
//! navigation guard, and the HTTP boundary to the evaluation backend.
//!
//! View rendering is not part of this crate. Views consume the typed
//! [`router::props::ViewProps`] produced for each committed navigation.

pub mod config;
pub mod net;
pub mod router;
pub mod state;
