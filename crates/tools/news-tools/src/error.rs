//! Error type returned by the news tools.

use gnews_async::GNewsError;
use thiserror::Error;

/// Error type returned by tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Invalid input provided to the tool.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The tool is not configured to run (e.g. no API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// Error from GNews or the network in between.
    #[error("external service error: {0}")]
    External(String),

    /// Internal error during tool execution.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create an invalid input error.
    pub fn invalid_input<S: ToString>(s: S) -> Self {
        Self::InvalidInput(s.to_string())
    }

    /// Create a configuration error.
    pub fn config<S: ToString>(s: S) -> Self {
        Self::Config(s.to_string())
    }

    /// Create an external service error.
    pub fn external<S: ToString>(s: S) -> Self {
        Self::External(s.to_string())
    }

    /// Create an internal error.
    pub fn internal<S: ToString>(s: S) -> Self {
        Self::Internal(s.to_string())
    }
}

impl From<GNewsError> for ToolError {
    fn from(e: GNewsError) -> Self {
        match e {
            GNewsError::Validation { .. } | GNewsError::InvalidDate(_) => Self::invalid_input(e),
            GNewsError::MissingCredential => Self::config(e),
            GNewsError::Upstream { .. } | GNewsError::Transport(_) => Self::external(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gnews_errors_map_to_tool_kinds() {
        let e: ToolError = GNewsError::validation("country", "'country' must be a 2-letter country code").into();
        assert!(matches!(e, ToolError::InvalidInput(ref m) if m == "'country' must be a 2-letter country code"));

        let e: ToolError = GNewsError::InvalidDate("01/02/2024".into()).into();
        assert!(matches!(e, ToolError::InvalidInput(ref m) if m.starts_with("Invalid date format: 01/02/2024")));

        let e: ToolError = GNewsError::MissingCredential.into();
        assert!(matches!(e, ToolError::Config(ref m) if m.contains("GNEWS_KEY")));

        let e: ToolError = GNewsError::Upstream {
            status: 403,
            message: "invalid api key".into(),
        }
        .into();
        assert_eq!(e.to_string(), "external service error: GNews API error: invalid api key");

        let e: ToolError = GNewsError::Transport("timed out".into()).into();
        assert!(matches!(e, ToolError::External(ref m) if m == "Request error: timed out"));
    }
}
