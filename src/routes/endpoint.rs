//! Static descriptions of the API's operations.

use crate::clients::HttpMethod;

/// Semantic type of a query parameter.
///
/// Every value is sent as text; the type records how the text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// Free text.
    String,
    /// Decimal integer.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// One of an enumerated set of tokens.
    Token,
    /// JSON array of filter objects.
    FilterList,
}

/// Definition of one remote operation.
///
/// A descriptor names the HTTP method, the path template with `{name}`
/// placeholders, the path parameters in the order they are supplied, and
/// the query parameters the operation accepts.
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::HttpMethod;
/// use rybbit_api::routes::{EndpointDescriptor, QueryType};
///
/// const GET_THING: EndpointDescriptor = EndpointDescriptor::new(
///     "get_thing",
///     HttpMethod::Get,
///     "/api/things/{thing_id}",
///     &["thing_id"],
///     &[&[("limit", QueryType::Number)]],
/// );
///
/// assert_eq!(GET_THING.build_path(&["a b"]), "/api/things/a%20b");
/// assert!(GET_THING.accepts_query("limit"));
/// assert!(!GET_THING.accepts_query("page"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation name, used in logs.
    pub name: &'static str,
    /// The HTTP method for this operation.
    pub http_method: HttpMethod,
    /// The path template with `{name}` placeholders.
    pub template: &'static str,
    /// Required path parameters in order (e.g., `["site_id", "goal_id"]`).
    pub path_params: &'static [&'static str],
    /// Accepted query parameters, in groups so common sets can be shared.
    pub query: &'static [&'static [(&'static str, QueryType)]],
}

impl EndpointDescriptor {
    /// Creates a new descriptor.
    ///
    /// This is a `const fn` to allow descriptors to be defined as constants.
    #[must_use]
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        template: &'static str,
        path_params: &'static [&'static str],
        query: &'static [&'static [(&'static str, QueryType)]],
    ) -> Self {
        Self {
            name,
            http_method,
            template,
            path_params,
            query,
        }
    }

    /// Iterates over the accepted query parameters.
    pub fn query_params(&self) -> impl Iterator<Item = (&'static str, QueryType)> {
        self.query.iter().flat_map(|group| group.iter().copied())
    }

    /// Returns the semantic type of query parameter `name`, if accepted.
    #[must_use]
    pub fn query_type(&self, name: &str) -> Option<QueryType> {
        self.query_params()
            .find(|(declared, _)| *declared == name)
            .map(|(_, query_type)| query_type)
    }

    /// Returns `true` if the operation accepts query parameter `name`.
    #[must_use]
    pub fn accepts_query(&self, name: &str) -> bool {
        self.query_type(name).is_some()
    }

    /// Interpolates `values` into the template, in `path_params` order.
    ///
    /// Values are percent-encoded, so a value can never introduce an extra
    /// path segment.
    #[must_use]
    pub fn build_path(&self, values: &[&str]) -> String {
        debug_assert_eq!(
            values.len(),
            self.path_params.len(),
            "{} takes {} path parameter(s)",
            self.name,
            self.path_params.len()
        );

        let ids: Vec<(&str, &str)> = self.path_params.iter().copied().zip(values.iter().copied()).collect();
        build_path(self.template, &ids)
    }
}

/// Builds a path from a template by interpolating percent-encoded values.
///
/// Replaces `{name}` placeholders with the matching value. Placeholders
/// without a value are left untouched.
///
/// # Example
///
/// ```rust
/// use rybbit_api::routes::build_path;
///
/// let path = build_path("/api/sites/{site_id}/users/{user_id}", &[("site_id", "5"), ("user_id", "a/b")]);
/// assert_eq!(path, "/api/sites/5/users/a%2Fb");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryType>();
    assert_send_sync::<EndpointDescriptor>();
};
