//! Login page with a username-only form.
//!
//! Login is simulated: any non-blank username is accepted and becomes the
//! current user. No credential is checked anywhere.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::session::User;
use crate::state::auth::use_auth;

/// Trim the submitted username and reject a blank one.
pub fn validate_username(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter a username.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_username(&username.get()) {
            Ok(name) => {
                info.set(String::new());
                auth.login(User::new(name));
                navigate(config.after_login_path(), NavigateOptions::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <Title text="Log in"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
