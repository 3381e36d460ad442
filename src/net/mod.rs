//! Networking modules for the evaluation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the auth calls that populate the session, and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
