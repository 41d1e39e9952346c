use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Boxed cause carried by [`GNewsError::Transport`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when using the GNews API client
#[derive(Debug, Error)]
pub enum GNewsError {
    /// Caller input rejected before any request was built
    #[error("{reason}")]
    Validation {
        /// Name of the offending parameter
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// A date parameter did not match `YYYY-MM-DD`
    #[error("Invalid date format: {0}. Use YYYY-MM-DD format (e.g., 2024-01-15)")]
    InvalidDate(String),

    /// No API key configured
    #[error("GNews API key not set. Please set GNEWS_KEY environment variable.")]
    MissingCredential,

    /// Non-success response from GNews
    #[error("GNews API error: {message}")]
    Upstream {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the body or status line
        message: String,
    },

    /// Network-level failure (connect, timeout, DNS, TLS, body read)
    #[error("Request error: {0}")]
    Transport(#[source] BoxError),
}

impl GNewsError {
    /// Builds a validation error for `field`
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter for validation errors
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GNewsError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}

/// Extracts the upstream error message from a non-200 response.
///
/// Order: first entry of `errors`, then the raw body text, then `HTTP {status}`.
#[must_use]
pub fn upstream_message(status: StatusCode, body: Option<&Value>, text: &str) -> String {
    if let Some(errors) = body.and_then(|b| b.get("errors")) {
        return match errors {
            Value::Array(items) => items
                .first()
                .map_or_else(|| "Unknown API error".to_string(), value_text),
            Value::Object(map) => map
                .values()
                .next()
                .map_or_else(|| "Unknown API error".to_string(), value_text),
            other => value_text(other),
        };
    }

    let text = text.trim();
    if text.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        text.to_string()
    }
}

/// Builds the [`GNewsError::Upstream`] for a non-200 response
#[must_use]
pub fn upstream_error(status: StatusCode, body: Option<&Value>, text: &str) -> GNewsError {
    GNewsError::Upstream {
        status: status.as_u16(),
        message: upstream_message(status, body, text),
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_error_entry_wins() {
        let body = json!({"errors": ["invalid api key", "second"]});
        assert_eq!(
            upstream_message(StatusCode::FORBIDDEN, Some(&body), "ignored"),
            "invalid api key"
        );
    }

    #[test]
    fn empty_errors_list_is_unknown() {
        let body = json!({"errors": []});
        assert_eq!(
            upstream_message(StatusCode::BAD_REQUEST, Some(&body), "{\"errors\":[]}"),
            "Unknown API error"
        );
    }

    #[test]
    fn errors_object_uses_first_value() {
        let body = json!({"errors": {"q": "The query is missing"}});
        assert_eq!(
            upstream_message(StatusCode::BAD_REQUEST, Some(&body), ""),
            "The query is missing"
        );
    }

    #[test]
    fn falls_back_to_text_then_status() {
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, None, "upstream down\n"),
            "upstream down"
        );
        assert_eq!(
            upstream_message(StatusCode::INTERNAL_SERVER_ERROR, None, ""),
            "HTTP 500"
        );
    }

    #[test]
    fn display_matches_adapter_wording() {
        let err = upstream_error(StatusCode::FORBIDDEN, None, "nope");
        assert_eq!(err.to_string(), "GNews API error: nope");

        let err = GNewsError::InvalidDate("2024/01/01".into());
        assert!(err.to_string().starts_with("Invalid date format: 2024/01/01."));

        let err = GNewsError::validation("language", "'language' must be a 2-letter language code");
        assert_eq!(err.field(), Some("language"));
        assert_eq!(
            err.to_string(),
            "'language' must be a 2-letter language code"
        );
    }
}
