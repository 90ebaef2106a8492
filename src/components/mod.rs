//! Reusable view components.

pub mod guarded_outlet;
pub mod loading;
