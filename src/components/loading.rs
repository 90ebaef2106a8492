//! Placeholder shown while the session is still hydrating.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <p>"Checking your session..."</p>
        </div>
    }
}
