use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 50;
/// Upper bound for a single page.
pub const MAX_LIMIT: i64 = 500;

/// Limit/offset window of a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Clamps the limit to `1..=MAX_LIMIT` and the offset to non-negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Lowercased literal substring filter. Whitespace is kept; an empty filter
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter(String);

impl TextFilter {
    pub fn new(value: Option<&str>) -> Self {
        Self(value.map(str::to_lowercase).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match, the same rule the store applies.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase().contains(&self.0)
    }
}

/// Listing query for entities filtered on their name only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub pagination: Pagination,
    pub name: TextFilter,
}

/// One page of a listing together with the unfiltered total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    pub total: i64,
    pub items: Vec<T>,
}
