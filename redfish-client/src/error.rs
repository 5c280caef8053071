//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::http::{HttpClientError, HttpConfigError};

/// Represents the failures a Redfish operation can surface to the caller.
///
/// Failures from dependencies (transport, JSON decoding) are returned
/// unchanged to the immediate caller; nothing is swallowed or retried.
#[derive(Error, Debug)]
pub enum RedfishError {
    /// Represents an HTTP transport error.
    #[error("`{0}`")]
    Transport(#[from] HttpClientError),
    /// Malformed JSON, either on fetch or when re-decoding the retained
    /// wire envelope during a commit.
    #[error("`{0}`")]
    Decode(#[from] serde_json::Error),
    /// Represents an invalid client configuration.
    #[error("`{0}`")]
    Config(#[from] HttpConfigError),
    /// The entity was constructed without a client handle and cannot issue
    /// requests.
    #[error("entity has no client handle attached")]
    NoClient,
    /// The requested parameter is not in the allowed set the service
    /// advertised for this action.
    #[error("value `{value}` is not in the allowed set for `{action}`")]
    ValueNotAllowed {
        /// Name of the rejected action or property.
        action: String,
        /// The parameter value that failed validation.
        value: String,
    },
    /// The service did not advertise a target for the requested action.
    #[error("action `{0}` is not supported by this resource")]
    ActionNotSupported(String),
    /// The resource does not expose the requested link.
    #[error("resource does not expose a `{0}` link")]
    MissingLink(&'static str),
    /// The session service accepted the login but returned no token.
    #[error("service did not return a session token")]
    MissingSessionToken,
}

/// A type alias for results from Redfish operations.
pub type RedfishResult<T> = Result<T, RedfishError>;
