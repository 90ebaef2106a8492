//! Identity record for the signed-in user.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The current user as held in memory and mirrored into storage.
///
/// Only `id` and `name` are required. `id` is opaque: a locally minted UUID
/// string, or whatever a previous run stored (numbers included). Any other
/// fields present in a stored record are carried in `extra` so a
/// read-modify-write keeps them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier, never interpreted by this client.
    pub id: Value,
    /// Display name entered at login.
    pub name: String,
    /// Fields this client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Mint a user with a fresh id. No credential check happens anywhere.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Value::String(uuid::Uuid::new_v4().to_string()),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// User with a caller-chosen id.
    pub fn with_id(id: impl Into<Value>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), extra: Map::new() }
    }
}
