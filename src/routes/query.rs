//! The set of optional query parameters attached to a URL.

use serde::Serialize;
use serde_json::Value;

/// An ordered set of query parameters with unique names.
///
/// Absent values never make it into the set: [`QueryParams::set_opt`] skips
/// `None` and empty strings, and [`QueryParams::from_serializable`] skips
/// `null` fields. Setting a name twice keeps one entry with the last value.
///
/// # Example
///
/// ```rust
/// use rybbit_api::routes::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.set("page", "1");
/// params.set_opt("end_date", None::<String>);
/// params.set("page", "2");
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("page"), Some("2"));
/// assert_eq!(params.get("end_date"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Converts a serializable params struct into a parameter set.
    ///
    /// The value must serialize to a map. Per field:
    /// - `null` is skipped
    /// - strings are used verbatim (empty strings are skipped)
    /// - numbers and booleans are stringified
    /// - arrays and objects become compact JSON text
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `params` cannot be represented as JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rybbit_api::routes::QueryParams;
    /// use rybbit_api::types::{Filter, FilterParameter, FilterType, MetricParams, Parameter};
    ///
    /// let mut params = MetricParams::new(Parameter::Pathname);
    /// params.limit = Some(10);
    /// params.window.filters = Some(vec![Filter::new(
    ///     FilterParameter::Country,
    ///     FilterType::Equals,
    ///     ["US"],
    /// )]);
    ///
    /// let query = QueryParams::from_serializable(&params).unwrap();
    /// assert_eq!(query.get("parameter"), Some("pathname"));
    /// assert_eq!(query.get("limit"), Some("10"));
    /// assert_eq!(
    ///     query.get("filters"),
    ///     Some(r#"[{"parameter":"country","type":"equals","value":["US"]}]"#)
    /// );
    /// ```
    pub fn from_serializable<T: Serialize + ?Sized>(params: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(params)?;
        let mut query = Self::new();

        if let Value::Object(map) = value {
            for (key, val) in map {
                match val {
                    Value::Null => {}
                    Value::String(s) => query.set_opt(key, Some(s)),
                    Value::Number(n) => query.set(key, n.to_string()),
                    Value::Bool(b) => query.set(key, b.to_string()),
                    // Structured values travel as JSON text
                    Value::Array(_) | Value::Object(_) => query.set(key, val.to_string()),
                }
            }
        }

        Ok(query)
    }

    /// Sets `name` to `value`, replacing any earlier value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Sets `name` only if `value` is present and non-empty.
    pub fn set_opt<V: Into<String>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value.map(Into::into).filter(|v| !v.is_empty()) {
            self.set(name, value);
        }
    }

    /// Returns the value for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (name, value) in iter {
            query.set(name, value);
        }
        query
    }
}
