//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route outlet and user-aware pages to coordinate login
//! redirects and identity-dependent rendering.
//!
//! The session starts `Hydrating` and resolves exactly once from the session
//! store. After that only `login` and `logout` move it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::session::{SessionStore, User};

/// Coarse phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Hydrating,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` is `true` only until hydration resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::hydrating()
    }
}

impl AuthState {
    pub fn hydrating() -> Self {
        Self { user: None, loading: true }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn unauthenticated() -> Self {
        Self { user: None, loading: false }
    }

    pub fn phase(&self) -> AuthPhase {
        match (self.loading, &self.user) {
            (true, _) => AuthPhase::Hydrating,
            (false, Some(_)) => AuthPhase::Authenticated,
            (false, None) => AuthPhase::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == AuthPhase::Authenticated
    }
}

/// Handle owning the reactive session and its persisted mirror.
///
/// `Copy` so it can move into any number of view closures; every copy reads
/// and writes the same signal.
#[derive(Clone, Copy)]
pub struct AuthController {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore>,
}

impl AuthController {
    /// Create a controller in the `Hydrating` phase.
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(AuthState::hydrating()), store: StoredValue::new(store) }
    }

    /// Resolve hydration from the store.
    ///
    /// Only the first call reads storage; later calls return the current phase.
    pub fn hydrate(&self) -> AuthPhase {
        if !self.state.with_untracked(|s| s.loading) {
            log::debug!("auth: hydrate skipped, session already resolved");
            return self.phase_untracked();
        }
        let resolved = match self.store.with_value(SessionStore::get) {
            Some(user) => AuthState::authenticated(user),
            None => AuthState::unauthenticated(),
        };
        let phase = resolved.phase();
        self.state.set(resolved);
        log::debug!("auth: hydrated as {phase:?}");
        phase
    }

    /// Simulated login: adopt `user` and persist it. Never fails.
    pub fn login(&self, user: User) {
        if let Err(e) = self.store.with_value(|store| store.set(&user)) {
            log::warn!("auth: could not persist login for '{}': {e}", user.name);
        }
        log::debug!("auth: logged in as '{}'", user.name);
        self.state.set(AuthState::authenticated(user));
    }

    /// Drop the session and clear storage, even if already signed out.
    pub fn logout(&self) {
        if let Err(e) = self.store.with_value(SessionStore::clear) {
            log::warn!("auth: could not clear stored session: {e}");
        }
        log::debug!("auth: logged out");
        self.state.set(AuthState::unauthenticated());
    }

    /// Current snapshot, tracked by the surrounding reactive scope.
    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.with(AuthState::phase)
    }

    fn phase_untracked(&self) -> AuthPhase {
        self.state.with_untracked(AuthState::phase)
    }
}

/// Install `auth` as the context every page reads through [`use_auth`].
pub fn provide_auth(auth: AuthController) {
    provide_context(auth);
}

/// The auth controller provided by an ancestor.
///
/// # Panics
///
/// Panics when no [`provide_auth`] ran above the caller; the component tree
/// is malformed and silently defaulting would hide it.
pub fn use_auth() -> AuthController {
    expect_context::<AuthController>()
}
