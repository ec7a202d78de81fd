//! # Rybbit API Rust Client
//!
//! A typed Rust client for the Rybbit web analytics REST API: sites,
//! organizations, events, errors, goals, funnels, performance, sessions,
//! users, retention and journeys.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AnalyticsConfig`] and [`AnalyticsConfigBuilder`]
//! - Validated newtypes for the API key, base URL and site id
//! - A URL builder that omits absent query parameters ([`routes`])
//! - A request executor that classifies every outcome into a payload or one
//!   of four failure kinds ([`clients`])
//! - Domain types for filters, tokens and request bodies ([`types`])
//! - A site-scoped convenience client, [`Rest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl};
//!
//! let config = AnalyticsConfig::builder()
//!     .base_url(BaseUrl::new("https://app.rybbit.io").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use rybbit_api::{Rest, SiteId};
//! use rybbit_api::types::{Bucket, TimeSeriesParams};
//!
//! let rest = Rest::new(&config, SiteId::new(5))?;
//!
//! let params = TimeSeriesParams {
//!     bucket: Some(Bucket::Day),
//!     ..Default::default()
//! };
//! let series = rest.get_overview_time_series(&params).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, RequestError>`. Each failure maps onto the
//! uniform `{status, error}` shape of [`ErrorResponse`]:
//!
//! | Kind | `status` |
//! |------|----------|
//! | [`RequestError::Transport`] | `-1` |
//! | [`RequestError::Parse`] | `-2` |
//! | [`RequestError::Unknown`] | `-3` |
//! | [`RequestError::Server`] | the HTTP status |
//!
//! ```rust
//! use rybbit_api::{ErrorResponse, RequestError};
//!
//! let error = RequestError::transport("connection refused");
//! let response = ErrorResponse::from(error);
//! assert_eq!(response.status, -1);
//! ```
//!
//! Configuration problems surface earlier, as [`ConfigError`]:
//!
//! ```rust
//! use rybbit_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("ftp://files.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```
//!
//! ## Design Principles
//!
//! - **One request per call**: no retries, no caching, no timeouts of its own
//! - **Closed failure taxonomy**: exhaustive matching on [`RequestError`]
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Fail-fast validation**: newtypes validate on construction

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod routes;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{AnalyticsConfig, AnalyticsConfigBuilder, ApiKey, BaseUrl, SiteId};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    handle_rejection, normalize_rejection, ErrorResponse, HttpClient, HttpMethod, HttpRequest,
    RequestError,
};

// Re-export routing and the convenience client
pub use rest::Rest;
pub use routes::{QueryParams, Routes};
