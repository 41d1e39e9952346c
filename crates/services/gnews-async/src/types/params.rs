use std::fmt;

/// Search keywords
pub const KEY_QUERY: &str = "q";
/// Article language
pub const KEY_LANG: &str = "lang";
/// Article country
pub const KEY_COUNTRY: &str = "country";
/// Result count
pub const KEY_MAX: &str = "max";
/// Fields to search in
pub const KEY_IN: &str = "in";
/// Sort order
pub const KEY_SORT_BY: &str = "sortby";
/// Headline category
pub const KEY_CATEGORY: &str = "category";
/// Lower publication bound
pub const KEY_FROM: &str = "from";
/// Upper publication bound
pub const KEY_TO: &str = "to";

/// Number of articles requested per call; not caller-configurable
pub const MAX_ARTICLES: u32 = 10;

/// Ordered query parameters for a single GNews request.
///
/// Keys are unique: pushing an existing key replaces its value in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// Creates an empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key` to `value`
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Sets `key` only when `value` is present
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(v) = value {
            self.push(key, v);
        }
    }

    /// Value for `key`, if set
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is set
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned pairs in insertion order, ready for the transport
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}
