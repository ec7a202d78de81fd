//! Normalization of foreign failure values into [`ErrorResponse`].
//!
//! Inside the crate every failure is a [`RequestError`]. Values arriving from
//! outside that boundary (a JSON error object relayed by another service, a
//! panic payload from a joined task, an arbitrary error type) have no such
//! guarantee. [`normalize_rejection`] maps any of them into the two-field
//! shape, falling back to `{status: -3, error: "Unknown response."}` for
//! anything that is not already well formed.

use std::any::Any;

use serde_json::Value;

use crate::clients::errors::{ErrorResponse, RequestError};

/// Maps an arbitrary failure value into an [`ErrorResponse`].
///
/// Recognized values:
/// - [`RequestError`]: converted with its status discriminant
/// - [`ErrorResponse`]: passed through
/// - [`serde_json::Value`]: accepted only if it is an object with exactly
///   an integer `status` and a string `error`
///
/// Everything else becomes [`ErrorResponse::unknown`].
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::normalize_rejection;
/// use serde_json::json;
///
/// let relayed = json!({"status": 404, "error": "{\"message\":\"not found\"}"});
/// assert_eq!(normalize_rejection(&relayed).status, 404);
///
/// let malformed = json!({"code": 404});
/// assert_eq!(normalize_rejection(&malformed).status, -3);
///
/// assert_eq!(normalize_rejection(&"boom").error, "Unknown response.");
/// ```
#[must_use]
pub fn normalize_rejection(rejection: &dyn Any) -> ErrorResponse {
    if let Some(error) = rejection.downcast_ref::<RequestError>() {
        return error.to_response();
    }
    if let Some(response) = rejection.downcast_ref::<ErrorResponse>() {
        return response.clone();
    }
    if let Some(response) = rejection
        .downcast_ref::<Value>()
        .and_then(error_response_from_value)
    {
        return response;
    }

    tracing::warn!("Normalizing an unrecognized rejection to an unknown response");
    ErrorResponse::unknown()
}

/// Normalizes a failure value and dispatches it to `handler`.
///
/// The handler only ever sees a well-formed [`ErrorResponse`].
///
/// # Example
///
/// ```rust
/// use rybbit_api::clients::{handle_rejection, RequestError};
///
/// let message = handle_rejection(&RequestError::transport("connection refused"), |e| {
///     format!("{}: {}", e.status, e.error)
/// });
/// assert_eq!(message, "-1: connection refused");
/// ```
pub fn handle_rejection<R>(rejection: &dyn Any, handler: impl FnOnce(ErrorResponse) -> R) -> R {
    handler(normalize_rejection(rejection))
}

fn error_response_from_value(value: &Value) -> Option<ErrorResponse> {
    let object = value.as_object()?;
    if object.len() != 2 {
        return None;
    }

    let status = object.get("status")?.as_i64()?;
    let error = object.get("error")?.as_str()?;

    Some(ErrorResponse {
        status: i32::try_from(status).ok()?,
        error: error.to_string(),
    })
}
