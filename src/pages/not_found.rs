//! Fallback page for unmatched paths.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::AppConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let home_path = expect_context::<AppConfig>().home_path;

    view! {
        <Title text="Not found"/>
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href=home_path>"Back home"</a>
        </div>
    }
}
