use std::sync::{Arc, Mutex};

use any_spawner::Executor;

use super::*;
use crate::routing::RouteTable;
use crate::session::{MemoryStorage, SessionStore};
use crate::state::auth::AuthController;

type Navigations = Arc<Mutex<Vec<(String, bool)>>>;

/// Navigate stand-in that records `(path, replace)` per call.
fn recorder() -> (Navigations, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let log: Navigations = Arc::default();
    let sink = Arc::clone(&log);
    let navigate = move |to: &str, options: NavigateOptions| {
        sink.lock().expect("navigation log").push((to.to_owned(), options.replace));
    };
    (log, navigate)
}

/// Let spawned effects run to quiescence.
async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

fn recorded(log: &Navigations) -> Vec<(String, bool)> {
    log.lock().expect("navigation log").clone()
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn redirect_dispatch_yields_target() {
    let dispatch: Dispatch<&str> = Dispatch::Redirect("/login".to_owned());
    assert_eq!(redirect_target(&dispatch), Some("/login"));
}

#[test]
fn other_dispatches_do_not_navigate() {
    assert_eq!(redirect_target(&Dispatch::Render("home")), None);
    assert_eq!(redirect_target::<&str>(&Dispatch::Placeholder), None);
    assert_eq!(redirect_target::<&str>(&Dispatch::NotFound), None);
}

// =============================================================
// follow_redirect
// =============================================================

#[test]
fn follow_redirect_replaces_history_entry() {
    let (log, navigate) = recorder();
    assert!(follow_redirect(&Dispatch::<&str>::Redirect("/login".to_owned()), &navigate));
    assert_eq!(recorded(&log), vec![("/login".to_owned(), true)]);
}

#[test]
fn follow_redirect_ignores_non_redirects() {
    let (log, navigate) = recorder();
    assert!(!follow_redirect(&Dispatch::<&str>::Placeholder, &navigate));
    assert!(!follow_redirect(&Dispatch::Render("dashboard"), &navigate));
    assert!(!follow_redirect(&Dispatch::<&str>::NotFound, &navigate));
    assert!(recorded(&log).is_empty());
}

// =============================================================
// install_redirect
// =============================================================

#[tokio::test]
async fn install_redirect_navigates_once_after_hydration_signs_out() {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    tokio::task::LocalSet::new()
        .run_until(async {
            let auth = AuthController::new(SessionStore::new(MemoryStorage::new(), "user"));
            let table = RouteTable::builder()
                .public("/login", "login")
                .protected("/dashboard", "dashboard")
                .catch_all("not-found")
                .build()
                .expect("valid table");
            let dispatch = Memo::new(move |_| table.dispatch(&auth.snapshot(), "/dashboard", "/login"));
            let (log, navigate) = recorder();

            install_redirect(dispatch, navigate);
            settle().await;
            assert_eq!(dispatch.get_untracked(), Dispatch::Placeholder);
            assert!(recorded(&log).is_empty());

            auth.hydrate();
            settle().await;
            assert_eq!(recorded(&log), vec![("/login".to_owned(), true)]);

            settle().await;
            assert_eq!(recorded(&log).len(), 1);
        })
        .await;
}

#[tokio::test]
async fn install_redirect_stays_put_for_signed_in_session() {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    tokio::task::LocalSet::new()
        .run_until(async {
            let storage = MemoryStorage::with_entry("user", r#"{"id":1,"name":"John Doe"}"#);
            let auth = AuthController::new(SessionStore::new(storage, "user"));
            let table = RouteTable::builder()
                .protected("/dashboard", "dashboard")
                .build()
                .expect("valid table");
            let dispatch = Memo::new(move |_| table.dispatch(&auth.snapshot(), "/dashboard", "/login"));
            let (log, navigate) = recorder();

            install_redirect(dispatch, navigate);
            auth.hydrate();
            settle().await;
            assert_eq!(dispatch.get_untracked(), Dispatch::Render("dashboard"));
            assert!(recorded(&log).is_empty());

            auth.logout();
            settle().await;
            assert_eq!(recorded(&log), vec![("/login".to_owned(), true)]);
        })
        .await;
}
