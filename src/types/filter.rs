//! Filters narrowing an analytics query.
//!
//! A list of filters travels in the `filters` query parameter as compact JSON
//! text, for example
//! `[{"parameter":"country","type":"equals","value":["US"]}]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dimension a [`Filter`] matches against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterParameter {
    Country,
    Region,
    City,
    Browser,
    OperatingSystem,
    DeviceType,
    Pathname,
    Referrer,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    Channel,
    EntryPage,
    ExitPage,
    Language,
}

impl FilterParameter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::City => "city",
            Self::Browser => "browser",
            Self::OperatingSystem => "operating_system",
            Self::DeviceType => "device_type",
            Self::Pathname => "pathname",
            Self::Referrer => "referrer",
            Self::UtmSource => "utm_source",
            Self::UtmMedium => "utm_medium",
            Self::UtmCampaign => "utm_campaign",
            Self::Channel => "channel",
            Self::EntryPage => "entry_page",
            Self::ExitPage => "exit_page",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for FilterParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a [`Filter`] compares its values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    Regex,
}

impl FilterType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter condition.
///
/// A row matches when its `parameter` compares true against any of `value`.
///
/// # Example
///
/// ```rust
/// use rybbit_api::types::{Filter, FilterParameter, FilterType};
///
/// let filter = Filter::new(FilterParameter::Country, FilterType::Equals, ["US", "CA"]);
/// assert_eq!(
///     serde_json::to_string(&filter).unwrap(),
///     r#"{"parameter":"country","type":"equals","value":["US","CA"]}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Dimension to match.
    pub parameter: FilterParameter,
    /// Comparison to apply.
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    /// Values compared against.
    pub value: Vec<String>,
}

impl Filter {
    /// Creates a filter from anything yielding string-like values.
    pub fn new<I, S>(parameter: FilterParameter, filter_type: FilterType, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameter,
            filter_type,
            value: value.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_serializes_with_type_key() {
        let filter = Filter::new(FilterParameter::UtmSource, FilterType::NotContains, ["ads"]);

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"parameter": "utm_source", "type": "not_contains", "value": ["ads"]})
        );
    }

    #[test]
    fn test_filter_deserializes() {
        let filter: Filter = serde_json::from_value(json!({
            "parameter": "entry_page",
            "type": "regex",
            "value": ["^/blog"]
        }))
        .unwrap();

        assert_eq!(filter.parameter, FilterParameter::EntryPage);
        assert_eq!(filter.filter_type, FilterType::Regex);
        assert_eq!(filter.value, vec!["^/blog".to_string()]);
    }

    #[test]
    fn test_filter_tokens_display_wire_strings() {
        assert_eq!(FilterParameter::OperatingSystem.to_string(), "operating_system");
        assert_eq!(FilterType::NotEquals.to_string(), "not_equals");
    }

    #[test]
    fn test_filter_with_no_values() {
        let filter = Filter::new(FilterParameter::City, FilterType::Equals, Vec::<String>::new());
        assert!(filter.value.is_empty());
    }
}
