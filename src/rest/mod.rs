//! High-level, site-scoped access to the Rybbit API.
//!
//! [`Rest`] forwards each operation to the URL builder and the request
//! executor, filling in the stored site id for analytics calls. Typed params
//! structs from [`crate::types`] are converted to query strings here.
//!
//! # Example
//!
//! ```rust,ignore
//! use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl, Rest, SiteId};
//! use rybbit_api::clients::handle_rejection;
//! use rybbit_api::types::AnalyticsParams;
//!
//! let rest = Rest::new(&config, SiteId::new(5))?;
//!
//! match rest.get_overview(&AnalyticsParams::default()).await {
//!     Ok(overview) => println!("{overview}"),
//!     Err(error) => handle_rejection(&error, |e| eprintln!("{} ({})", e.error, e.status)),
//! }
//! ```

mod client;

pub use client::Rest;
