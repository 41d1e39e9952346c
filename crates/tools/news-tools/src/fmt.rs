//! Human-readable rendering of tool outputs.

use serde_json::Value;

/// Text formatting for tool outputs.
///
/// Implemented by every tool output so the CLI can print a compact listing
/// alongside (or instead of) JSON.
pub trait TextFormat {
    /// Format the value as human-readable text.
    fn fmt_text(&self) -> String;
}

/// Pretty JSON used when no structured rendering applies.
pub fn fallback_text_from_json(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}
