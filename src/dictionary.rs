//! Translation dictionary for a single locale.

use std::collections::{
    BTreeSet,
    HashMap,
};

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a dictionary from authored JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    #[error("Translation file is empty")]
    Empty,

    #[error("Translation file must contain an object at the top level, found {0}")]
    NotAnObject(&'static str),

    /// A dotted key and a nested path flattened to the same key
    /// (`{"a.b": ..., "a": {"b": ...}}`).
    #[error("Translation key '{0}' is defined more than once")]
    DuplicateKey(String),
}

/// Immutable key → translated string mapping for one locale.
///
/// There is no mutation API. Updating translations means building a new
/// `Dictionary` and swapping it into a registry.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Flattened translation key map (e.g., "hero.title" -> "...").
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Builds a dictionary from a compiled-in table.
    ///
    /// Later duplicates win over earlier ones.
    #[must_use]
    pub fn from_static(table: &[(&str, &str)]) -> Self {
        table.iter().copied().collect()
    }

    /// Parses a JSON (or JSONC) translation file and flattens nested objects
    /// into keys joined by `separator`.
    ///
    /// # Examples
    /// ```
    /// use docs_site_i18n::Dictionary;
    ///
    /// let text = r#"{
    ///     // hero
    ///     "hero": { "title": "Hello" },
    ///     "pagination.next": "Next"
    /// }"#;
    ///
    /// let dictionary = Dictionary::from_json_str(text, ".").unwrap();
    /// assert_eq!(dictionary.get("hero.title"), Some("Hello"));
    /// assert_eq!(dictionary.get("pagination.next"), Some("Next"));
    /// ```
    pub fn from_json_str(text: &str, separator: &str) -> Result<Self, DictionaryError> {
        let value = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
            .map_err(|e| DictionaryError::Parse(e.to_string()))?
            .ok_or(DictionaryError::Empty)?;

        Self::from_json_value(&value, separator)
    }

    /// Flattens an already parsed JSON value.
    ///
    /// Fails with [`DictionaryError::DuplicateKey`] if two paths flatten to the
    /// same key.
    pub fn from_json_value(value: &Value, separator: &str) -> Result<Self, DictionaryError> {
        if !value.is_object() {
            return Err(DictionaryError::NotAnObject(json_kind(value)));
        }

        Ok(Self { entries: flatten_json(value, separator, None)? })
    }

    /// Returns the translated string for `key`, or `None` if this locale lacks it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// True if this locale has a string for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sorted key set, used to compare dictionaries for drift.
    #[must_use]
    pub fn key_set(&self) -> BTreeSet<&str> {
        self.keys().collect()
    }

    /// Key/value pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Article-prefixed JSON type name for error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flatten nested JSON object into a `separator`-joined key map.
fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> Result<HashMap<String, String>, DictionaryError> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result)?;
    Ok(result)
}

/// Recursive step of [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) -> Result<(), DictionaryError> {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result)?;
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result)?;
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                insert_unique(result, key, s.clone())?;
            }
        }
        _ => {
            if let Some(key) = prefix {
                insert_unique(result, key, json.to_string())?;
            }
        }
    }
    Ok(())
}

/// Inserts a flattened entry, rejecting a key that is already present.
fn insert_unique(
    result: &mut HashMap<String, String>,
    key: &str,
    value: String,
) -> Result<(), DictionaryError> {
    if result.contains_key(key) {
        tracing::warn!(key, "Translation key defined more than once");
        return Err(DictionaryError::DuplicateKey(key.to_string()));
    }
    result.insert(key.to_string(), value);
    Ok(())
}
