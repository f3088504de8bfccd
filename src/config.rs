//! Application configuration.
//!
//! Resolved once at startup from the environment and passed down to the
//! API client and storage.

use std::path::PathBuf;
use std::time::Duration;

/// Backend used when running against the deployed server.
pub const PRODUCTION_URL: &str = "https://mindnest.up.railway.app";

/// Every request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Storage file name inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Which backend the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local server on port 8000
    #[default]
    Development,
    /// Deployed server
    Production,
}

impl Environment {
    /// Parse the `MINDNEST_ENV` value. Anything other than `production`
    /// means development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

/// Base URL for the local development server.
///
/// The Android emulator reaches the host loopback through `10.0.2.2`.
pub fn development_url() -> &'static str {
    if cfg!(target_os = "android") {
        "http://10.0.2.2:8000"
    } else {
        "http://localhost:8000"
    }
}

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use mindnest::config::{AppConfig, Environment};
///
/// let config = AppConfig::default()
///     .with_environment(Environment::Production)
///     .with_base_url("http://127.0.0.1:9000");
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Selected environment
    pub environment: Environment,
    /// Override for the backend URL (`MINDNEST_API_URL`)
    pub base_url_override: Option<String>,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Override for the data directory (`MINDNEST_HOME`)
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            base_url_override: None,
            request_timeout: REQUEST_TIMEOUT,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the backend URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url_override = Some(url.into());
        self
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Read `MINDNEST_ENV`, `MINDNEST_API_URL` and `MINDNEST_HOME`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(env) = std::env::var("MINDNEST_ENV") {
            config = config.with_environment(Environment::parse(&env));
        }
        if let Ok(url) = std::env::var("MINDNEST_API_URL") {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        if let Ok(home) = std::env::var("MINDNEST_HOME") {
            if !home.trim().is_empty() {
                config = config.with_data_dir(home.trim());
            }
        }
        config
    }

    /// The backend base URL, without a trailing slash.
    pub fn base_url(&self) -> String {
        let url = match (&self.base_url_override, self.environment) {
            (Some(url), _) => url.as_str(),
            (None, Environment::Production) => PRODUCTION_URL,
            (None, Environment::Development) => development_url(),
        };
        url.trim_end_matches('/').to_string()
    }

    /// Path of the JSON storage file, `~/.mindnest/storage.json` by default.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn storage_path(&self) -> Option<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()?.join(".mindnest"),
        };
        Some(dir.join(STORAGE_FILE))
    }
}
