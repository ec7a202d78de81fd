//! Request failure types for the Rybbit API client.
//!
//! Every request resolves to exactly one outcome: the decoded payload, or one
//! of the four failure kinds of [`RequestError`]. Each failure converts into
//! the uniform [`ErrorResponse`] shape so callers can use a single handling
//! path regardless of what went wrong.
//!
//! # Status Sentinels
//!
//! | Kind | `status` |
//! |------|----------|
//! | [`RequestError::Transport`] | `-1` |
//! | [`RequestError::Parse`] | `-2` |
//! | [`RequestError::Unknown`] | `-3` |
//! | [`RequestError::Server`] | the HTTP status code |
//!
//! # Example
//!
//! ```rust,ignore
//! use rybbit_api::clients::RequestError;
//!
//! match rest.get_site().await {
//!     Ok(site) => println!("Site: {}", site.name),
//!     Err(RequestError::Server { status, detail, .. }) => {
//!         println!("API error {status}: {detail}");
//!     }
//!     Err(RequestError::Transport { detail }) => println!("Network error: {detail}"),
//!     Err(RequestError::Parse { detail }) => println!("Bad response body: {detail}"),
//!     Err(RequestError::Unknown) => println!("Unknown response."),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `status` reported when the request could not be sent.
pub const STATUS_TRANSPORT: i32 = -1;

/// `status` reported when the response body was not valid JSON.
pub const STATUS_PARSE: i32 = -2;

/// `status` reported when the response carried no usable status code.
pub const STATUS_UNKNOWN: i32 = -3;

/// Detail text of [`RequestError::Unknown`].
pub const UNKNOWN_RESPONSE: &str = "Unknown response.";

/// The classified failure of a single request.
///
/// The taxonomy is closed: a request that does not succeed produces exactly
/// one of these variants, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request could not be sent, or the network failed before any
    /// response was received.
    #[error("{detail}")]
    Transport {
        /// Stringified underlying error.
        detail: String,
    },

    /// A response was received but its body could not be interpreted.
    ///
    /// This takes priority over the status code: a non-2xx response with an
    /// unparsable body is reported here, not as [`RequestError::Server`].
    #[error("{detail}")]
    Parse {
        /// Stringified parse error.
        detail: String,
    },

    /// The body parsed, but the status code is outside `200..300`.
    #[error("{detail}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The parsed body serialized as compact JSON.
        detail: String,
        /// The parsed body.
        body: serde_json::Value,
    },

    /// A response was received without a usable status code.
    #[error("Unknown response.")]
    Unknown,
}

impl RequestError {
    /// Creates a transport failure from any displayable error.
    pub fn transport(error: impl fmt::Display) -> Self {
        Self::Transport {
            detail: error.to_string(),
        }
    }

    /// Creates a parse failure from any displayable error.
    pub fn parse(error: impl fmt::Display) -> Self {
        Self::Parse {
            detail: error.to_string(),
        }
    }

    /// Creates a server failure, serializing the parsed body into the detail.
    #[must_use]
    pub fn server(status: u16, body: serde_json::Value) -> Self {
        Self::Server {
            status,
            detail: body.to_string(),
            body,
        }
    }

    /// Returns the status discriminant of this failure.
    ///
    /// Negative values are non-HTTP failures; anything else is the literal
    /// HTTP status code of a [`RequestError::Server`].
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::Transport { .. } => STATUS_TRANSPORT,
            Self::Parse { .. } => STATUS_PARSE,
            Self::Server { status, .. } => i32::from(*status),
            Self::Unknown => STATUS_UNKNOWN,
        }
    }

    /// Returns the human-readable description of this failure.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { detail } | Self::Parse { detail } | Self::Server { detail, .. } => {
                detail
            }
            Self::Unknown => UNKNOWN_RESPONSE,
        }
    }

    /// Returns the parsed error body of a server failure.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Converts this failure into the uniform two-field shape.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status(),
            error: self.detail().to_string(),
        }
    }
}

/// The uniform `{status, error}` shape every failure is delivered as.
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::{ErrorResponse, RequestError};
///
/// let response = ErrorResponse::from(RequestError::Unknown);
/// assert_eq!(response.status, -3);
/// assert_eq!(response.error, "Unknown response.");
///
/// let json = serde_json::to_string(&response).unwrap();
/// assert_eq!(json, r#"{"status":-3,"error":"Unknown response."}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// `-1` transport, `-2` parse, `-3` unknown, otherwise the HTTP status.
    pub status: i32,
    /// Human-readable description of the failure.
    pub error: String,
}

impl ErrorResponse {
    /// The normalized response for failures that cannot be classified.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            status: STATUS_UNKNOWN,
            error: UNKNOWN_RESPONSE.to_string(),
        }
    }

    /// Returns `true` if this failure carries a literal HTTP status code.
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        self.status >= 0
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.status)
    }
}

impl std::error::Error for ErrorResponse {}

impl From<RequestError> for ErrorResponse {
    fn from(error: RequestError) -> Self {
        error.to_response()
    }
}

impl From<&RequestError> for ErrorResponse {
    fn from(error: &RequestError) -> Self {
        error.to_response()
    }
}
