//! Ordered route table with first-match-wins lookup.
//!
//! DESIGN
//! ======
//! Entries are matched in declaration order, so a catch-all anywhere but the
//! end would silently shadow everything after it. The builder rejects that
//! (and duplicate paths) when the table is built, not when a page is hit.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::gate::{AccessDecision, decide};
use crate::state::auth::AuthState;

/// Error returned by [`RouteTableBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    /// Pattern is neither an absolute path nor `*`.
    #[error("route pattern '{0}' must start with '/' or be '*'")]
    InvalidPattern(String),
    /// A catch-all was declared before other routes.
    #[error("catch-all route at position {position} would shadow {shadowed} later route(s)")]
    CatchAllNotLast { position: usize, shadowed: usize },
    /// The same path was declared twice; the second could never match.
    #[error("route '{0}' is declared more than once")]
    DuplicateRoute(String),
}

/// Whether a route goes through the access gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// A path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// Exact match on a normalized absolute path.
    Static(String),
    /// `*`: matches every path.
    CatchAll,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        if raw == "*" {
            return Ok(Self::CatchAll);
        }
        if !raw.starts_with('/') {
            return Err(RouteTableError::InvalidPattern(raw.to_owned()));
        }
        Ok(Self::Static(normalize_path(raw)))
    }

    /// `path` must already be normalized.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Static(pattern) => pattern == path,
            Self::CatchAll => true,
        }
    }
}

/// Strip query and fragment, drop trailing slashes, and root the path.
pub fn normalize_path(path: &str) -> String {
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = bare.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry<R> {
    pub pattern: RoutePattern,
    pub access: Access,
    pub renderer: R,
}

/// Outcome of routing a path for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch<R> {
    /// Show this entry's page.
    Render(R),
    /// Protected entry while the session hydrates.
    Placeholder,
    /// Protected entry without a user; navigate here instead.
    Redirect(String),
    /// Nothing matched and no catch-all is declared.
    NotFound,
}

/// Validated, ordered list of routes.
#[derive(Clone, Debug)]
pub struct RouteTable<R> {
    entries: Vec<RouteEntry<R>>,
}

impl<R> RouteTable<R> {
    pub fn builder() -> RouteTableBuilder<R> {
        RouteTableBuilder::default()
    }

    pub fn entries(&self) -> &[RouteEntry<R>] {
        &self.entries
    }

    /// First entry matching `path` in declaration order.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<R>> {
        let path = normalize_path(path);
        self.entries.iter().find(|entry| entry.pattern.matches(&path))
    }

    /// Resolve `path` and, for protected entries, apply the access gate.
    pub fn dispatch(&self, session: &AuthState, path: &str, login_path: &str) -> Dispatch<R>
    where
        R: Clone,
    {
        let Some(entry) = self.resolve(path) else {
            log::debug!("router: no route for '{path}'");
            return Dispatch::NotFound;
        };
        match entry.access {
            Access::Public => Dispatch::Render(entry.renderer.clone()),
            Access::Protected => match decide(session, path, login_path) {
                AccessDecision::ShowPlaceholder => Dispatch::Placeholder,
                AccessDecision::RedirectTo(to) => Dispatch::Redirect(to),
                AccessDecision::RenderProtected => Dispatch::Render(entry.renderer.clone()),
            },
        }
    }
}

/// Collects routes in order; validation happens in [`build`](Self::build).
#[derive(Debug)]
pub struct RouteTableBuilder<R> {
    routes: Vec<(String, Access, R)>,
}

impl<R> Default for RouteTableBuilder<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> RouteTableBuilder<R> {
    #[must_use]
    pub fn route(mut self, pattern: &str, access: Access, renderer: R) -> Self {
        self.routes.push((pattern.to_owned(), access, renderer));
        self
    }

    #[must_use]
    pub fn public(self, path: &str, renderer: R) -> Self {
        self.route(path, Access::Public, renderer)
    }

    #[must_use]
    pub fn protected(self, path: &str, renderer: R) -> Self {
        self.route(path, Access::Protected, renderer)
    }

    /// Public `*` route. Must be the last one added.
    #[must_use]
    pub fn catch_all(self, renderer: R) -> Self {
        self.route("*", Access::Public, renderer)
    }

    pub fn build(self) -> Result<RouteTable<R>, RouteTableError> {
        let total = self.routes.len();
        let mut entries: Vec<RouteEntry<R>> = Vec::with_capacity(total);
        for (position, (raw, access, renderer)) in self.routes.into_iter().enumerate() {
            let pattern = RoutePattern::parse(&raw)?;
            if pattern == RoutePattern::CatchAll && position + 1 != total {
                return Err(RouteTableError::CatchAllNotLast { position, shadowed: total - position - 1 });
            }
            if entries.iter().any(|entry| entry.pattern == pattern) {
                return Err(RouteTableError::DuplicateRoute(raw));
            }
            entries.push(RouteEntry { pattern, access, renderer });
        }
        Ok(RouteTable { entries })
    }
}
