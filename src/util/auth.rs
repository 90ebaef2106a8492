//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The routing decision is pure; this is where it turns into navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::Dispatch;

/// Navigation target for a dispatch, if it asks for one.
pub fn redirect_target<R>(dispatch: &Dispatch<R>) -> Option<&str> {
    match dispatch {
        Dispatch::Redirect(to) => Some(to),
        Dispatch::Render(_) | Dispatch::Placeholder | Dispatch::NotFound => None,
    }
}

/// Perform the navigation `dispatch` asks for. Returns whether it navigated.
///
/// The history entry is replaced so "back" does not return to the guarded
/// path and bounce again.
pub fn follow_redirect<R, F>(dispatch: &Dispatch<R>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let Some(to) = redirect_target(dispatch) else {
        return false;
    };
    log::debug!("router: redirecting to '{to}'");
    navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    true
}

/// Navigate whenever `dispatch` settles on a redirect.
pub fn install_redirect<R, F>(dispatch: Memo<Dispatch<R>>, navigate: F)
where
    R: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        // Clone out of the memo first; navigation rewrites the location it reads.
        let current = dispatch.get();
        follow_redirect(&current, &navigate);
    });
}
