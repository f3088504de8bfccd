//! Input validation errors.
//!
//! Raised by the screen view-models before any request is made.

use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors from validating user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Please select how you are feeling")]
    MissingMood,

    #[error("Please select a reason")]
    MissingReason,

    #[error("You need to be logged in")]
    NotLoggedIn,

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid duration '{0}', expected a positive number of minutes")]
    InvalidDuration(String),
}

impl ValidationError {
    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "input.missing_fields",
            ValidationError::PasswordMismatch => "input.password_mismatch",
            ValidationError::PasswordTooShort { .. } => "input.password_short",
            ValidationError::MissingMood => "input.missing_mood",
            ValidationError::MissingReason => "input.missing_reason",
            ValidationError::NotLoggedIn => "input.not_logged_in",
            ValidationError::InvalidTime(_) => "input.time",
            ValidationError::InvalidDuration(_) => "input.duration",
        }
    }
}

/// Check a new password and its confirmation.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Fails with `MissingFields` when any value is blank.
pub fn require_filled(values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}
