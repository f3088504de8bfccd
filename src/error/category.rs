//! How a failure should surface.

use std::fmt;

/// Coarse failure kinds the front end branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No answer from the server
    Network,
    /// 5xx
    Server,
    /// 401 or 403
    Auth,
    /// Input the user has to fix, including other 4xx answers
    User,
    /// Local storage
    System,
    /// An answer the app could not decode
    Client,
}

impl ErrorCategory {
    /// Screens replace these failures with a fallback value or message
    /// instead of alerting.
    pub fn degrades_silently(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::System
        )
    }

    /// What the user can do about it.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "check your connection and try again",
            ErrorCategory::Server => "try again in a few minutes",
            ErrorCategory::Auth => "log out and log in again",
            ErrorCategory::User => "check what you entered",
            ErrorCategory::System => "check that the data directory is writable",
            ErrorCategory::Client => "update the app if this keeps happening",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Auth => "auth",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Client => "client",
        };
        f.write_str(name)
    }
}
