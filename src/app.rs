//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::guarded_outlet::GuardedOutlet;
use crate::config::AppConfig;
use crate::pages::Page;
use crate::routing::{RouteTable, RouteTableError};
use crate::session::SessionStore;
use crate::state::auth::{AuthController, provide_auth};

/// The application's route table, catch-all last.
pub fn app_routes(config: &AppConfig) -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::builder()
        .public(&config.home_path, Page::Home)
        .public(&config.login_path, Page::Login)
        .protected(&config.dashboard_path, Page::Dashboard)
        .catch_all(Page::NotFound)
        .build()
}

/// Root application component.
///
/// Provides config and auth contexts, schedules session hydration, and
/// routes every path through the guarded outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let auth = AuthController::new(SessionStore::browser(config.storage_key.clone()));
    provide_auth(auth);
    provide_context(config.clone());

    // Hydrate after mount so the first render sees the loading state.
    Effect::new(move || {
        auth.hydrate();
    });

    let routes = match app_routes(&config) {
        Ok(routes) => Arc::new(routes),
        Err(e) => {
            log::error!("router: invalid route table: {e}");
            return view! { <p class="app-error">{format!("Route configuration error: {e}")}</p> }
                .into_any();
        }
    };

    view! {
        <Title formatter=|text: String| format!("{text} | authgate")/>
        <Router>
            <main>
                <GuardedOutlet routes/>
            </main>
        </Router>
    }
    .into_any()
}
