//! Enumerated parameter values shared across GNews endpoints

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GNewsError;

/// Headline category accepted by `/top-headlines`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General news (default)
    #[default]
    General,
    /// World news
    World,
    /// National news
    Nation,
    /// Business
    Business,
    /// Technology
    Technology,
    /// Entertainment
    Entertainment,
    /// Sports
    Sports,
    /// Science
    Science,
    /// Health
    Health,
}

impl Category {
    /// Every category, in the order GNews documents them
    pub const ALL: [Self; 9] = [
        Self::General,
        Self::World,
        Self::Nation,
        Self::Business,
        Self::Technology,
        Self::Entertainment,
        Self::Sports,
        Self::Science,
        Self::Health,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::World => "world",
            Self::Nation => "nation",
            Self::Business => "business",
            Self::Technology => "technology",
            Self::Entertainment => "entertainment",
            Self::Sports => "sports",
            Self::Science => "science",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GNewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|c| c.as_str()).collect();
                GNewsError::validation(
                    "category",
                    format!("'category' must be one of: {}", names.join(", ")),
                )
            })
    }
}

/// Sort order accepted by `/search`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SortBy {
    /// Newest first (default)
    #[default]
    #[serde(rename = "publishedAt")]
    PublishedAt,
    /// Most relevant first
    #[serde(rename = "relevance")]
    Relevance,
}

impl SortBy {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublishedAt => "publishedAt",
            Self::Relevance => "relevance",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = GNewsError;

    // Case-sensitive: GNews rejects "publishedat"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publishedAt" => Ok(Self::PublishedAt),
            "relevance" => Ok(Self::Relevance),
            _ => Err(GNewsError::validation(
                "sortby",
                "'sortby' must be 'publishedAt' or 'relevance'",
            )),
        }
    }
}

/// Shape of the value returned by the search and headlines operations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// `{ total_articles, articles }` with every field present (default)
    #[default]
    Normalized,
    /// The upstream JSON body, untouched
    Raw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_every_variant() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
    }

    #[test]
    fn category_rejects_unknown_and_case_variants() {
        let err = "politics".parse::<Category>().unwrap_err();
        assert_eq!(err.field(), Some("category"));
        assert!(err.to_string().contains("general, world, nation"));
        assert!("Business".parse::<Category>().is_err());
    }

    #[test]
    fn sort_by_is_exact() {
        assert_eq!("publishedAt".parse::<SortBy>().unwrap(), SortBy::PublishedAt);
        assert!("publishedat".parse::<SortBy>().is_err());
        assert!("".parse::<SortBy>().is_err());
        assert_eq!(serde_json::to_value(SortBy::Relevance).unwrap(), "relevance");
    }
}
