//! Protected dashboard showing the current user.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::auth::use_auth;

/// Dashboard page. Only reached through the access gate, so a user is
/// present on entry.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let user_name = move || auth.user().map(|u| u.name).unwrap_or_default();

    // The outlet's gate sees the signed-out session and performs the single
    // navigation to `AppConfig::after_logout_path` (the login path).
    let on_logout = move |_| auth.logout();

    view! {
        <Title text="Dashboard"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <p class="dashboard-page__user">"Signed in as " <strong>{user_name}</strong></p>
        </div>
    }
}
