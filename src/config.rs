//! Application configuration.
//!
//! The browser build has no environment to read from, so configuration is a
//! typed struct with compiled-in defaults, provided through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the serialized current user.
pub const STORAGE_KEY: &str = "user";
pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Console log level installed at startup.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Paths and storage settings shared by pages, the outlet, and the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub home_path: String,
    pub login_path: String,
    pub dashboard_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            home_path: HOME_PATH.to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            dashboard_path: DASHBOARD_PATH.to_owned(),
        }
    }
}

impl AppConfig {
    /// Where a successful login lands.
    pub fn after_login_path(&self) -> &str {
        &self.dashboard_path
    }

    /// Where logout lands.
    pub fn after_logout_path(&self) -> &str {
        &self.login_path
    }
}
