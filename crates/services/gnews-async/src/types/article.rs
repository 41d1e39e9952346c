//! Normalized article types built from the upstream payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Publisher of an article
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ArticleSource {
    /// Publisher name
    pub name: Option<String>,
    /// Publisher homepage
    pub url: Option<String>,
}

/// A single article with every field present (missing values are `null`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Article {
    /// Headline
    pub title: Option<String>,
    /// Short description
    pub description: Option<String>,
    /// Truncated article body
    pub content: Option<String>,
    /// Article URL
    pub url: Option<String>,
    /// Main image URL
    pub image: Option<String>,
    /// Publication timestamp as reported upstream
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Article language; only reported by `/top-headlines`.
    ///
    /// The outer `Option` controls whether the key is emitted at all, the inner one
    /// whether it is `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Option<String>>,
    /// Publisher
    pub source: ArticleSource,
}

impl Article {
    /// Pulls the known fields out of one upstream article record.
    ///
    /// Missing or non-string fields become `None`; `source` may be absent entirely.
    #[must_use]
    pub fn from_upstream(record: &Value, with_language: bool) -> Self {
        let source = record.get("source");
        Self {
            title: text(Some(record), "title"),
            description: text(Some(record), "description"),
            content: text(Some(record), "content"),
            url: text(Some(record), "url"),
            image: text(Some(record), "image"),
            published_at: text(Some(record), "publishedAt"),
            language: with_language.then(|| text(Some(record), "lang")),
            source: ArticleSource {
                name: text(source, "name"),
                url: text(source, "url"),
            },
        }
    }
}

/// `{ total_articles, articles }` envelope returned in normalized mode
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ArticlesEnvelope {
    /// Total matches reported upstream (falls back to the article count)
    pub total_articles: u64,
    /// Normalized articles
    pub articles: Vec<Article>,
}

impl ArticlesEnvelope {
    /// Normalizes an upstream `/search` or `/top-headlines` body.
    ///
    /// `with_language` adds each record's `lang` as `language`.
    #[must_use]
    pub fn from_upstream(body: &Value, with_language: bool) -> Self {
        let articles: Vec<Article> = body
            .get("articles")
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .map(|r| Article::from_upstream(r, with_language))
                    .collect()
            })
            .unwrap_or_default();

        let total_articles = body
            .get("totalArticles")
            .and_then(Value::as_u64)
            .unwrap_or(articles.len() as u64);

        Self {
            total_articles,
            articles,
        }
    }
}

fn text(obj: Option<&Value>, key: &str) -> Option<String> {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}
