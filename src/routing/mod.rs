//! Path-to-page routing with an access gate on protected entries.
//!
//! ARCHITECTURE
//! ============
//! `table` resolves a path to its first matching entry; `gate` decides what a
//! protected entry may show for the current session. Both are pure; the
//! navigation they ask for is performed by `components::guarded_outlet`.

pub mod gate;
pub mod table;

pub use gate::{AccessDecision, decide};
pub use table::{Access, Dispatch, RouteEntry, RoutePattern, RouteTable, RouteTableBuilder, RouteTableError};
