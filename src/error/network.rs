//! Failures talking to the backend.

use thiserror::Error;

use crate::traits::HttpError;

/// A request that did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// No connection could be made.
    #[error("could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// The server did not answer in time.
    #[error("{url} did not answer within {secs}s")]
    Timeout { url: String, secs: u64 },

    /// The server answered with a non-2xx status. `body` is kept raw.
    #[error("server answered {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The answer could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Malformed(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl NetworkError {
    /// Classify a transport failure of a request to `url` sent with a
    /// `timeout_secs` budget.
    pub fn from_transport(err: HttpError, url: &str, timeout_secs: u64) -> Self {
        match err {
            HttpError::Connect(reason) => NetworkError::Unreachable {
                url: url.to_string(),
                reason,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
                secs: timeout_secs,
            },
            HttpError::Body(reason) => NetworkError::Malformed(reason),
            HttpError::Url(reason) | HttpError::Other(reason) => NetworkError::Other(reason),
        }
    }

    /// The `detail` string of a `{"detail": "..."}` error body.
    ///
    /// The backend words these for end users, so they are shown verbatim.
    pub fn detail(&self) -> Option<String> {
        let NetworkError::Rejected { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(str::to_string)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Alert text: the server's detail when it sent one.
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail() {
            return detail;
        }
        let text = match self {
            NetworkError::Unreachable { .. } => "Can't reach MindNest. Check your connection.",
            NetworkError::Timeout { .. } => "MindNest is taking too long to answer.",
            NetworkError::Rejected { status: 401, .. } => "Please log in again.",
            NetworkError::Rejected { status: 403, .. } => "You can't do that with this account.",
            NetworkError::Rejected { status: 404, .. } => "That could not be found.",
            NetworkError::Rejected { status, .. } if *status >= 500 => {
                "Something went wrong on our side. Please try again later."
            }
            NetworkError::Rejected { .. } => "The request was not accepted.",
            NetworkError::Malformed(_) => "Received an answer the app could not read.",
            NetworkError::Other(_) => "Something went wrong. Please try again.",
        };
        text.to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::Unreachable { .. } => "net.unreachable",
            NetworkError::Timeout { .. } => "net.timeout",
            NetworkError::Rejected { .. } => "net.rejected",
            NetworkError::Malformed(_) => "net.malformed",
            NetworkError::Other(_) => "net.other",
        }
    }
}
