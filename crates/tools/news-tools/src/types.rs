//! Input/output types for the news tools.

use std::fmt::Write;

use gnews_async::types::{ArticlesEnvelope, HeadlinesRequest, SearchRequest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fmt::{TextFormat, fallback_text_from_json};

// ============================================================================
// search_news types
// ============================================================================

/// Input for the `search_news` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchNewsInput {
    /// Search keywords. Supports GNews query syntax (AND, OR, NOT, quoted phrases).
    pub query: String,
    /// 2-letter language code (default: en)
    #[serde(default)]
    pub language: Option<String>,
    /// 2-letter country code
    #[serde(default)]
    pub country: Option<String>,
    /// Fields to search in, comma-separated (default: title,description)
    #[serde(default, rename = "in")]
    pub search_in: Option<String>,
    /// Only articles published on or after this date (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Only articles published on or before this date (YYYY-MM-DD)
    #[serde(default)]
    pub end_date: Option<String>,
    /// Sort order: publishedAt or relevance (default: publishedAt)
    #[serde(default, alias = "sortby")]
    pub sort_by: Option<String>,
}

impl From<SearchNewsInput> for SearchRequest {
    fn from(input: SearchNewsInput) -> Self {
        Self {
            query: input.query,
            language: input.language,
            country: input.country,
            search_in: input.search_in,
            start_date: input.start_date,
            end_date: input.end_date,
            sort_by: input.sort_by,
        }
    }
}

// ============================================================================
// get_top_headlines types
// ============================================================================

/// Input for the `get_top_headlines` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTopHeadlinesInput {
    /// One of general, world, nation, business, technology, entertainment,
    /// sports, science, health (default: general)
    #[serde(default)]
    pub category: Option<String>,
    /// 2-letter language code (default: en)
    #[serde(default)]
    pub language: Option<String>,
    /// 2-letter country code
    #[serde(default)]
    pub country: Option<String>,
    /// Only articles published on or after this date (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Only articles published on or before this date (YYYY-MM-DD)
    #[serde(default)]
    pub end_date: Option<String>,
    /// Optional keywords to narrow the headlines
    #[serde(default)]
    pub query: Option<String>,
}

impl From<GetTopHeadlinesInput> for HeadlinesRequest {
    fn from(input: GetTopHeadlinesInput) -> Self {
        Self {
            category: input.category,
            language: input.language,
            country: input.country,
            start_date: input.start_date,
            end_date: input.end_date,
            query: input.query,
        }
    }
}

// ============================================================================
// Shared output
// ============================================================================

/// Output of both news tools.
///
/// Serializes transparently as either the normalized envelope or the upstream body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NewsOutput {
    /// `{ total_articles, articles }`
    Articles(ArticlesEnvelope),
    /// Upstream JSON body, untouched
    Raw(Value),
}

impl TextFormat for NewsOutput {
    fn fmt_text(&self) -> String {
        let env = match self {
            Self::Articles(env) => env,
            Self::Raw(v) => return fallback_text_from_json(v),
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Total articles: {} (showing {})",
            env.total_articles,
            env.articles.len()
        );
        for (i, a) in env.articles.iter().enumerate() {
            let _ = writeln!(
                out,
                "\n{}. {}",
                i + 1,
                a.title.as_deref().unwrap_or("(untitled)")
            );
            let source = a.source.name.as_deref().unwrap_or("unknown source");
            match &a.published_at {
                Some(ts) => {
                    let _ = writeln!(out, "   {source} | {ts}");
                }
                None => {
                    let _ = writeln!(out, "   {source}");
                }
            }
            if let Some(url) = &a.url {
                let _ = writeln!(out, "   {url}");
            }
            if let Some(desc) = a.description.as_deref().filter(|d| !d.is_empty()) {
                let _ = writeln!(out, "   {desc}");
            }
        }
        out
    }
}
