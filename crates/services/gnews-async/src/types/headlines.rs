//! Types for the GNews `/top-headlines` endpoint

use crate::dates::optional_api_timestamp;
use crate::error::GNewsError;
use crate::validation::{country_code, language_code, one_of, optional_query};

use super::common::Category;
use super::params::{
    KEY_CATEGORY, KEY_COUNTRY, KEY_FROM, KEY_LANG, KEY_MAX, KEY_QUERY, KEY_TO, MAX_ARTICLES,
    QueryParams,
};
use super::search::DEFAULT_LANGUAGE;

/// Caller parameters for `GET /top-headlines`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlinesRequest {
    /// One of the [`Category`] values (default `general`)
    pub category: Option<String>,
    /// 2-letter language code (default `en`)
    pub language: Option<String>,
    /// 2-letter country code
    pub country: Option<String>,
    /// Lower bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Upper bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Keywords to filter headlines by
    pub query: Option<String>,
}

impl HeadlinesRequest {
    /// Create a request with every field defaulted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
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

    /// Set the keyword filter
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Validates the request and builds its query parameters.
    ///
    /// Checks run in order: category, language, country, dates.
    ///
    /// # Errors
    ///
    /// [`GNewsError::Validation`] for bad fields, [`GNewsError::InvalidDate`] for
    /// malformed dates.
    pub fn to_query(&self) -> Result<QueryParams, GNewsError> {
        let category = one_of(self.category.as_deref(), Category::default())?;
        let lang = language_code(self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE))?;
        let country = country_code(self.country.as_deref())?;
        let from = optional_api_timestamp(self.start_date.as_deref())?;
        let to = optional_api_timestamp(self.end_date.as_deref())?;

        let mut params = QueryParams::new();
        params.push(KEY_CATEGORY, category);
        params.push(KEY_LANG, lang);
        params.push(KEY_MAX, MAX_ARTICLES);
        params.push_opt(KEY_COUNTRY, country);
        params.push_opt(KEY_FROM, from);
        params.push_opt(KEY_TO, to);
        params.push_opt(KEY_QUERY, optional_query(self.query.as_deref()));
        Ok(params)
    }
}
