//! Result type alias for MindNest operations.

use std::fmt::Display;

use super::mindnest_error::MindnestError;

/// Type alias for Results using MindnestError.
pub type MindnestResult<T> = Result<T, MindnestError>;

/// Extension trait for results whose failure degrades to a fallback.
pub trait ResultExt<T> {
    /// Log the error at warn level under `operation` and discard it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let cached = storage.get_item("chat_history").await.log_warn("read chat cache");
    /// ```
    fn log_warn(self, operation: &str) -> Option<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn log_warn(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(operation, error = %e, "operation failed");
                None
            }
        }
    }
}
