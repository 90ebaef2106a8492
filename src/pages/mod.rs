//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. `Page` is the renderer type
//! stored in the route table, keeping the table plain data.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

use leptos::prelude::*;

use dashboard::DashboardPage;
use home::HomePage;
use login::LoginPage;
use not_found::NotFoundPage;

/// Route-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Dashboard,
    NotFound,
}

impl Page {
    pub fn render(self) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::Login => view! { <LoginPage/> }.into_any(),
            Self::Dashboard => view! { <DashboardPage/> }.into_any(),
            Self::NotFound => view! { <NotFoundPage/> }.into_any(),
        }
    }
}
