//! Error taxonomy for API calls and session persistence.
//!
//! ERROR HANDLING
//! ==============
//! Backend validation payloads come in several Django REST shapes (a map of
//! field names to message lists, a bare message list, `{"error": ...}`,
//! `{"detail": ...}`). [`flatten_error_message`] collapses all of them into
//! a single user-facing string so callers can surface backend text verbatim
//! without caring about the shape. No transient/permanent distinction is
//! made and nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error returned by [`AuthGateway`](crate::AuthGateway) and
/// [`ContentService`](crate::ContentService) operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, TLS, timeout at the OS
    /// level). Indistinguishable from a backend rejection to end users.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status. `message` is the
    /// flattened error payload, suitable for direct display.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// A success response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// `refresh` was called with no refresh token in the session store.
    #[error("no refresh token stored; log in first")]
    MissingRefreshToken,
    /// Session persistence failed while committing an auth response.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Status code of the backend rejection, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error from the session store's durable storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session document could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Collapse a backend error payload into one displayable string.
///
/// Every string found in the payload (directly, in arrays, or in object
/// values) is collected and joined with spaces. Payloads carrying no
/// recognizable message produce `fallback`.
pub(crate) fn flatten_error_message(value: &Value, fallback: &str) -> String {
    let mut messages = Vec::new();
    collect_messages(value, &mut messages);
    if messages.is_empty() {
        fallback.to_owned()
    } else {
        messages.join(" ")
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            if !text.trim().is_empty() {
                out.push(text.clone());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_messages(item, out);
            }
        }
        Value::Object(map) => {
            for field in map.values() {
                collect_messages(field, out);
            }
        }
        _ => {}
    }
}
