//! Route outlet that renders the current path through the route table.
//!
//! Protected entries pass through the access gate: a placeholder while the
//! session hydrates, a redirect when signed out, the page otherwise.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingPlaceholder;
use crate::config::AppConfig;
use crate::pages::Page;
use crate::routing::{Dispatch, RouteTable};
use crate::state::auth::use_auth;
use crate::util::auth::install_redirect;

/// Must be rendered inside a `<Router>` with auth and config in context.
#[component]
pub fn GuardedOutlet(routes: Arc<RouteTable<Page>>) -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let login_path = config.login_path;
    let dispatch = Memo::new(move |_| {
        let path = location.pathname.get();
        routes.dispatch(&auth.snapshot(), &path, &login_path)
    });

    install_redirect(dispatch, navigate);

    move || match dispatch.get() {
        Dispatch::Render(page) => page.render(),
        Dispatch::NotFound => Page::NotFound.render(),
        Dispatch::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        // The redirect effect navigates away; render nothing meanwhile.
        Dispatch::Redirect(_) => ().into_any(),
    }
}
