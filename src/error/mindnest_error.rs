use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::validation::ValidationError;
use crate::traits::StorageError;

/// Any failure a client operation can report.
#[derive(Debug, Clone, Error)]
pub enum MindnestError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl MindnestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MindnestError::Network(NetworkError::Rejected { status, .. }) => match *status {
                401 | 403 => ErrorCategory::Auth,
                s if s >= 500 => ErrorCategory::Server,
                _ => ErrorCategory::User,
            },
            MindnestError::Network(NetworkError::Malformed(_)) => ErrorCategory::Client,
            MindnestError::Network(_) => ErrorCategory::Network,
            MindnestError::Storage(_) => ErrorCategory::System,
            MindnestError::Validation(_) => ErrorCategory::User,
        }
    }

    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            MindnestError::Network(e) => e.error_code(),
            MindnestError::Storage(_) => "storage",
            MindnestError::Validation(e) => e.error_code(),
        }
    }

    /// Text for an alert. Server `detail` text wins.
    pub fn user_message(&self) -> String {
        match self {
            MindnestError::Network(e) => e.user_message(),
            MindnestError::Storage(_) => "Could not access data saved on this device.".to_string(),
            MindnestError::Validation(e) => e.to_string(),
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            MindnestError::Network(e) => e.detail(),
            _ => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            MindnestError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MindnestError {
    fn from(err: serde_json::Error) -> Self {
        MindnestError::Network(NetworkError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16, body: &str) -> MindnestError {
        NetworkError::Rejected {
            status,
            body: body.to_string(),
        }
        .into()
    }

    #[test]
    fn test_category_by_status() {
        assert_eq!(rejected(401, "").category(), ErrorCategory::Auth);
        assert_eq!(rejected(403, "").category(), ErrorCategory::Auth);
        assert_eq!(rejected(400, "").category(), ErrorCategory::User);
        assert_eq!(rejected(502, "").category(), ErrorCategory::Server);

        let unreachable: MindnestError = NetworkError::Unreachable {
            url: "u".to_string(),
            reason: "refused".to_string(),
        }
        .into();
        assert_eq!(unreachable.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_storage_and_validation() {
        let err: MindnestError = StorageError::WriteFailed("disk full".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "storage");

        let err: MindnestError = ValidationError::MissingFields.into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.user_message(), "Please fill in all fields");
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingFields));
    }

    #[test]
    fn test_detail_passthrough() {
        let err = rejected(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(err.detail().as_deref(), Some("Email already registered"));
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_undecodable_json_is_client_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MindnestError = serde_err.into();
        assert_eq!(err.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_display_is_transparent() {
        let err: MindnestError = ValidationError::NotLoggedIn.into();
        assert_eq!(err.to_string(), "You need to be logged in");
    }
}
