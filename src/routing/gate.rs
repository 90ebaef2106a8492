//! Access decision for protected routes.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::auth::AuthState;

/// What a protected route may do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still hydrating; show a placeholder, decide nothing yet.
    ShowPlaceholder,
    /// No user; the caller should navigate to the contained path.
    RedirectTo(String),
    RenderProtected,
}

/// Decide access to `requested_path` for `session`.
///
/// Pure: never navigates. Until hydration resolves the answer is always
/// [`AccessDecision::ShowPlaceholder`], so a stored session is never
/// bounced to login before it has been read.
pub fn decide(session: &AuthState, requested_path: &str, login_path: &str) -> AccessDecision {
    if session.loading {
        return AccessDecision::ShowPlaceholder;
    }
    if session.user.is_none() {
        log::debug!("gate: '{requested_path}' requires login, redirecting to '{login_path}'");
        return AccessDecision::RedirectTo(login_path.to_owned());
    }
    AccessDecision::RenderProtected
}
