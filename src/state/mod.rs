//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is passed explicitly to the guard and the navigator instead of
//! living in a process-wide singleton, so each test can build a fresh value.

pub mod session;
