//! HTTP client for Rybbit API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! HTTP call per request and classifies the outcome. It never retries, never
//! caches, and never panics on a failed call: every failure is returned as a
//! [`RequestError`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::RequestError;
use crate::clients::http_request::HttpRequest;
use crate::config::{AnalyticsConfig, ApiKey};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Rybbit API.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and Content-Type
/// - Attaching the API key as a bearer credential on every call
/// - Classifying each response into a payload or a [`RequestError`]
///
/// # Classification
///
/// 1. The request cannot be sent: [`RequestError::Transport`]
/// 2. The response has no usable status code: [`RequestError::Unknown`]
/// 3. The body is not JSON: [`RequestError::Parse`], whatever the status
/// 4. The status is in `200..300`: the decoded payload
/// 5. Any other status: [`RequestError::Server`] with the serialized body
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so concurrent
/// calls are fully independent.
///
/// # Example
///
/// ```rust,ignore
/// use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl};
/// use rybbit_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = AnalyticsConfig::builder()
///     .base_url(BaseUrl::new("https://app.rybbit.io").unwrap())
///     .api_key(ApiKey::new("rb_1234").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let url = url::Url::parse("https://app.rybbit.io/api/organizations")?;
/// let request = HttpRequest::builder(HttpMethod::Get, url).build();
///
/// let organizations: serde_json::Value = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Bearer credential attached to every request.
    api_key: ApiKey,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &AnalyticsConfig) -> Result<Self, ConfigError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Rybbit API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key().clone(),
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not part of
    /// this map.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and decodes a successful body into `T`.
    ///
    /// The payload type is trusted: no schema validation happens beyond
    /// what deserializing into `T` requires.
    ///
    /// # Errors
    ///
    /// Returns the [`RequestError`] classifying the failure. A 2xx body that
    /// does not decode into `T` is a [`RequestError::Parse`].
    pub async fn request<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, RequestError> {
        let value = self.send(request).await?;

        serde_json::from_value(value).map_err(|error| {
            tracing::warn!("Rybbit API response did not match the expected shape: {}", error);
            RequestError::parse(error)
        })
    }

    /// Sends a request and returns the successful body as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`RequestError`] classifying the failure.
    pub async fn send(&self, request: HttpRequest) -> Result<serde_json::Value, RequestError> {
        let HttpRequest {
            http_method,
            url,
            body,
        } = request;

        tracing::debug!("Sending {} request to {}", http_method, url);

        let mut req_builder = self.client.request(http_method.into(), url.clone());

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.bearer_auth(self.api_key.as_ref());

        if let Some(body) = &body {
            req_builder = req_builder.body(body.to_string());
        }

        let response = match req_builder.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!("{} request to {} could not be sent: {}", http_method, url, error);
                return Err(RequestError::transport(error));
            }
        };

        let status = response.status().as_u16();
        let outcome = match response.bytes().await {
            Ok(bytes) => classify_response(Some(status), &bytes),
            Err(error) => Err(RequestError::parse(error)),
        };

        match &outcome {
            Ok(_) => tracing::debug!("{} request to {} succeeded with {}", http_method, url, status),
            Err(error) => tracing::warn!(
                "{} request to {} failed with status {}: {}",
                http_method,
                url,
                error.status(),
                error.detail()
            ),
        }

        outcome
    }
}

/// Classifies a received response into a JSON payload or a failure.
///
/// `status` is `None` when the response carries no usable status code. The
/// body is parsed before the status is inspected, so an unparsable body is
/// always a [`RequestError::Parse`].
///
/// # Errors
///
/// Returns [`RequestError::Unknown`], [`RequestError::Parse`] or
/// [`RequestError::Server`] as described above.
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::{classify_response, RequestError};
///
/// let ok = classify_response(Some(200), br#"{"id": 42}"#).unwrap();
/// assert_eq!(ok["id"], 42);
///
/// let err = classify_response(Some(502), b"<html>Bad Gateway</html>").unwrap_err();
/// assert!(matches!(err, RequestError::Parse { .. }));
/// ```
pub fn classify_response(status: Option<u16>, body: &[u8]) -> Result<serde_json::Value, RequestError> {
    let Some(status) = status.filter(|code| (100..=999).contains(code)) else {
        return Err(RequestError::Unknown);
    };

    let value: serde_json::Value = serde_json::from_slice(body).map_err(RequestError::parse)?;

    if (200..300).contains(&status) {
        Ok(value)
    } else {
        Err(RequestError::server(status, value))
    }
}
