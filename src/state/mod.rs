//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in Leptos signals owned by explicit handles that `App`
//! installs into context, so pages never reach for a process-wide singleton
//! and tests can build their own.

pub mod auth;
