//! Configuration types for the Rybbit API client.
//!
//! This module provides the configuration types used to point the client at
//! a Rybbit instance and authenticate against it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AnalyticsConfig`]: The configuration struct holding all client settings
//! - [`AnalyticsConfigBuilder`]: A builder for constructing [`AnalyticsConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL, reduced to its origin
//! - [`SiteId`]: The numeric identifier of a tracked site
//!
//! # Example
//!
//! ```rust
//! use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl};
//!
//! let config = AnalyticsConfig::builder()
//!     .base_url(BaseUrl::new("https://app.rybbit.io").unwrap())
//!     .api_key(ApiKey::new("rb_1234").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, SiteId};

use crate::error::ConfigError;

/// Configuration for the Rybbit API client.
///
/// # Thread Safety
///
/// `AnalyticsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl};
///
/// let config = AnalyticsConfig::builder()
///     .base_url(BaseUrl::new("https://app.rybbit.io").unwrap())
///     .api_key(ApiKey::new("rb_1234").unwrap())
///     .user_agent_prefix("MyDashboard/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://app.rybbit.io");
/// ```
#[derive(Clone, Debug)]
pub struct AnalyticsConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
}

impl AnalyticsConfig {
    /// Creates a new builder for constructing an `AnalyticsConfig`.
    #[must_use]
    pub fn builder() -> AnalyticsConfigBuilder {
        AnalyticsConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AnalyticsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnalyticsConfig>();
};

/// Builder for constructing [`AnalyticsConfig`] instances.
///
/// Required fields are `base_url` and `api_key`.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AnalyticsConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl AnalyticsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AnalyticsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<AnalyticsConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(AnalyticsConfig {
            base_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://app.rybbit.io").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = AnalyticsConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = AnalyticsConfigBuilder::new().base_url(base_url()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AnalyticsConfig::builder()
            .base_url(base_url())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url());
        assert_eq!(config.api_key().as_ref(), "key");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_config_debug_does_not_leak_api_key() {
        let config = AnalyticsConfig::builder()
            .base_url(base_url())
            .api_key(ApiKey::new("very-secret").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("AnalyticsConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalyticsConfig>();
    }
}
