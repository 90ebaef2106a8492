//! Public landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::AppConfig;
use crate::session::User;
use crate::state::auth::use_auth;

/// Greeting line for the (possibly absent) current user.
pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}!", user.name),
        None => "Welcome! Log in to reach your dashboard.".to_owned(),
    }
}

/// Home page: greeting plus a link to the dashboard or to login.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<AppConfig>();
    let dashboard_path = config.dashboard_path.clone();
    let login_path = config.login_path;

    view! {
        <Title text="Home"/>
        <div class="home-page">
            <h1>"Home"</h1>
            <p class="home-page__greeting">{move || greeting(auth.user().as_ref())}</p>
            <Show
                when=move || auth.is_authenticated()
                fallback=move || view! { <a href=login_path.clone()>"Log in"</a> }
            >
                <a href=dashboard_path.clone()>"Go to dashboard"</a>
            </Show>
        </div>
    }
}
