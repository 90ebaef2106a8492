//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate reactive side effects from page and component
//! logic so the decisions behind them stay pure and testable.

pub mod auth;
