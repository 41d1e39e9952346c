//! Types for the GNews `/search` endpoint

use crate::dates::optional_api_timestamp;
use crate::error::GNewsError;
use crate::validation::{country_code, language_code, one_of, required_query};

use super::common::SortBy;
use super::params::{
    KEY_COUNTRY, KEY_FROM, KEY_IN, KEY_LANG, KEY_MAX, KEY_QUERY, KEY_SORT_BY, KEY_TO,
    MAX_ARTICLES, QueryParams,
};

/// Default language for both endpoints
pub const DEFAULT_LANGUAGE: &str = "en";
/// Default `in` selector for `/search`
pub const DEFAULT_SEARCH_IN: &str = "title,description";

/// Caller parameters for `GET /search`
///
/// Values are kept as the caller supplied them; [`SearchRequest::to_query`] validates
/// and translates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search keywords (required, non-blank)
    pub query: String,
    /// 2-letter language code (default `en`)
    pub language: Option<String>,
    /// 2-letter country code
    pub country: Option<String>,
    /// Fields to search in (default `title,description`)
    pub search_in: Option<String>,
    /// Lower bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Upper bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// `publishedAt` or `relevance` (default `publishedAt`)
    pub sort_by: Option<String>,
}

impl SearchRequest {
    /// Create a new search request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the language code
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the country code
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the `in` field selector
    #[must_use]
    pub fn with_search_in(mut self, search_in: impl Into<String>) -> Self {
        self.search_in = Some(search_in.into());
        self
    }

    /// Set the start date (`YYYY-MM-DD`)
    #[must_use]
    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Set the end date (`YYYY-MM-DD`)
    #[must_use]
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Validates the request and builds its query parameters.
    ///
    /// Checks run in order: query, sort order, language, country, dates.
    ///
    /// # Errors
    ///
    /// [`GNewsError::Validation`] for bad fields, [`GNewsError::InvalidDate`] for
    /// malformed dates.
    pub fn to_query(&self) -> Result<QueryParams, GNewsError> {
        let query = required_query(&self.query)?;
        let sort_by = one_of(self.sort_by.as_deref(), SortBy::default())?;
        let lang = language_code(self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE))?;
        let country = country_code(self.country.as_deref())?;
        let from = optional_api_timestamp(self.start_date.as_deref())?;
        let to = optional_api_timestamp(self.end_date.as_deref())?;

        let mut params = QueryParams::new();
        params.push(KEY_QUERY, query);
        params.push(KEY_LANG, lang);
        params.push(KEY_MAX, MAX_ARTICLES);
        params.push(
            KEY_IN,
            self.search_in.as_deref().unwrap_or(DEFAULT_SEARCH_IN),
        );
        params.push(KEY_SORT_BY, sort_by);
        params.push_opt(KEY_COUNTRY, country);
        params.push_opt(KEY_FROM, from);
        params.push_opt(KEY_TO, to);
        Ok(params)
    }
}
