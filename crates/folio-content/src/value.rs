//! Parsed data model.
//!
//! A parsed document is a [`Mapping`] from keys to [`Value`]s. A value is
//! either a single string or an ordered list of strings; nothing else exists
//! in the supported format.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

/// A parsed value: a plain string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Inline scalar, or the empty string for a bare `key:`.
    Text(String),
    /// Block of `- item` lines, in source order.
    List(Vec<String>),
}

impl Value {
    /// The string, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// The items, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Whether the value counts as present for rendering purposes.
    ///
    /// Empty text is absent. Lists are present when they have items.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Text(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(String::from).collect())
    }
}

/// Keys mapped to parsed values.
///
/// Key order carries no meaning; a sorted map keeps dumps deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, Value>,
}

/// One publication or internship record.
pub type Item = Mapping;

/// Items of one folder, in the order the folder's index lists them.
pub type ItemCollection = Vec<Item>;

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw access to a value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a text field. List values yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a list field. Text values yield `None`.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key)?.as_list()
    }

    /// Get a string list field.
    ///
    /// Returns an empty vec if the field is missing or not a list.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get_list(key).map(<[String]>::to_vec).unwrap_or_default()
    }

    /// Read a field the way templates do: `None` when it is missing or empty.
    ///
    /// A list standing where text is expected reads as its items joined by
    /// `,`.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::Text(s) if !s.is_empty() => Some(Cow::Borrowed(s)),
            Value::List(items) if !items.is_empty() => Some(Cow::Owned(items.join(","))),
            _ => None,
        }
    }

    /// Whether `key` is present at all (even with an empty value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
