//! Query-string construction for Glassix endpoints.
//!
//! Glassix expects a few non-standard renderings: timestamps use the
//! `dd/MM/yyyy HH:mm:ss:ff` pattern (hundredths of a second), booleans are
//! lowercase and enumerations travel as their wire names. Null values and
//! values that render empty are dropped entirely. Keys and values are percent-encoded and parameters keep
//! their insertion order, so the output is deterministic.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use uuid::Uuid;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Omitted from the query string.
    Null,
    /// Free text.
    Text(String),
    /// Rendered as `true` / `false`.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Rendered as `dd/MM/yyyy HH:mm:ss:ff`.
    DateTime(NaiveDateTime),
    /// Enumeration wire name.
    Enum(&'static str),
    /// Hyphenated lowercase UUID.
    Uuid(Uuid),
}

impl QueryValue {
    /// Renders the value, or `None` if it must be omitted.
    pub fn render(&self) -> Option<String> {
        match self {
            QueryValue::Null => None,
            QueryValue::Text(s) => Some(s.clone()),
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Int(i) => Some(i.to_string()),
            QueryValue::DateTime(dt) => Some(format_datetime(dt)),
            QueryValue::Enum(name) => Some((*name).to_string()),
            QueryValue::Uuid(id) => Some(id.to_string()),
        }
    }
}

/// Formats a timestamp as `dd/MM/yyyy HH:mm:ss:ff`.
fn format_datetime(dt: &NaiveDateTime) -> String {
    // Leap seconds report nanos above 1e9; clamp to two digits.
    let hundredths = (dt.nanosecond() / 10_000_000).min(99);
    format!("{}:{:02}", dt.format("%d/%m/%Y %H:%M:%S"), hundredths)
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<Uuid> for QueryValue {
    fn from(value: Uuid) -> Self {
        QueryValue::Uuid(value)
    }
}

impl From<NaiveDateTime> for QueryValue {
    fn from(value: NaiveDateTime) -> Self {
        QueryValue::DateTime(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::DateTime(value.naive_utc())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}

/// Ordered builder for URL query strings.
///
/// # Example
///
/// ```
/// use glassix::query::QueryBuilder;
///
/// let query = QueryBuilder::new()
///     .param("tag", "needs review")
///     .param("page", None::<&str>)
///     .build();
/// assert_eq!(query, "tag=needs%20review");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Vec<(String, QueryValue)>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. Null and empty values are kept here and dropped
    /// on render.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Renders `k=v&k=v` without a leading `?`.
    pub fn build(&self) -> String {
        self.params
            .iter()
            .filter_map(|(key, value)| {
                value
                    .render()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", urlencoding::encode(key), urlencoding::encode(&v)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the rendered query to `path`, adding `?` only when the
    /// query is non-empty.
    pub fn apply(&self, path: &str) -> String {
        let query = self.build();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}
