//! Persisted session: the current-user record and where it is stored.
//!
//! DESIGN
//! ======
//! `SessionStore` owns serialization and the fail-open read policy; the
//! storage medium sits behind `SessionBackend` so browser storage and the
//! in-memory map used by tests are interchangeable.

pub mod backend;
pub mod store;
pub mod user;

pub use backend::{BrowserStorage, MemoryStorage, SessionBackend};
pub use store::{SessionStore, StoreError};
pub use user::User;
