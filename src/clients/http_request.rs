//! HTTP request types for the Rybbit API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing a single call to the API.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::clients::errors::RequestError;

/// HTTP methods supported by the Rybbit API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method token as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single request to be sent to the API.
///
/// The URL is fully built (see [`crate::routes::Routes`]); the body, when
/// present, is sent as JSON text.
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
/// use url::Url;
///
/// let url = Url::parse("https://app.rybbit.io/api/sites/5").unwrap();
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, url.clone()).build();
/// assert!(get_request.body.is_none());
///
/// // PUT request with JSON body
/// let put_request = HttpRequest::builder(HttpMethod::Put, url)
///     .body(json!({"public": true}))
///     .build();
/// assert!(put_request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: Url,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: Url) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: Url,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            http_method: method,
            url,
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes a typed value and sets it as the request body.
    ///
    /// # Errors
    ///
    /// A value that cannot be represented as JSON never reaches the network,
    /// so the failure is reported as [`RequestError::Transport`].
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body).map_err(RequestError::transport)?;
        Ok(self.body(value))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn url() -> Url {
        Url::parse("https://app.rybbit.io/api/sites/1").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }

    #[test]
    fn test_builder_creates_get_request_without_body() {
        let request = HttpRequest::builder(HttpMethod::Get, url()).build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), "https://app.rybbit.io/api/sites/1");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_allows_bodyless_post() {
        let request = HttpRequest::builder(HttpMethod::Post, url()).build();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_serializes_typed_body() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Config {
            block_bots: bool,
        }

        let request = HttpRequest::builder(HttpMethod::Put, url())
            .json(&Config { block_bots: true })
            .unwrap()
            .build();

        assert_eq!(request.body, Some(json!({"blockBots": true})));
    }

    #[test]
    fn test_unserializable_body_is_transport_failure() {
        // JSON object keys must be strings
        let mut body: HashMap<(u8, u8), u8> = HashMap::new();
        body.insert((1, 2), 3);

        let result = HttpRequest::builder(HttpMethod::Post, url()).json(&body);
        assert!(matches!(result, Err(RequestError::Transport { .. })));
    }
}
