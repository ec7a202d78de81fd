//! HTTP client types for Rybbit API communication.
//!
//! This module is the request/response normalization layer: it sends one
//! authenticated call and guarantees the caller receives either a typed
//! payload or a classified [`RequestError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client that sends and classifies requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestError`]: The closed four-kind failure taxonomy
//! - [`ErrorResponse`]: The uniform `{status, error}` failure shape
//! - [`normalize_rejection`] / [`handle_rejection`]: Boundary adapters for
//!   failure values of unknown shape
//!
//! # Retry Behavior
//!
//! There is none. Each call performs exactly one network request; a
//! transient failure surfaces immediately for the caller to handle.

mod errors;
mod http_client;
mod http_request;
mod rejection;

pub use errors::{
    ErrorResponse, RequestError, STATUS_PARSE, STATUS_TRANSPORT, STATUS_UNKNOWN, UNKNOWN_RESPONSE,
};
pub use http_client::{classify_response, HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use rejection::{handle_rejection, normalize_rejection};
