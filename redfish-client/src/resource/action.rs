//! Dispatch of named, side-effecting resource actions.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{RedfishError, RedfishResult};
use crate::http::{ensure_success, SharedClient};

/// Validate a parameter against the allowed-value list the service declared
/// for an action.
///
/// A non-empty list that does not contain the value is a validation failure
/// raised before any network traffic. Services that omit the list accept
/// every value, so an empty list fails open.
pub fn ensure_allowed<T>(value: &T, allowed: &[T], action: &str) -> RedfishResult<()>
where
    T: PartialEq + fmt::Debug,
{
    if !allowed.is_empty() && !allowed.contains(value) {
        return Err(RedfishError::ValueNotAllowed {
            action: action.to_string(),
            value: format!("{value:?}"),
        });
    }
    Ok(())
}

/// POST the action parameters to the advertised target.
///
/// A resource that never advertised the action (empty target) is rejected
/// without a request.
pub fn post_action<B: Serialize>(
    client: &SharedClient,
    action: &str,
    target: &str,
    parameters: &B,
) -> RedfishResult<()> {
    if target.is_empty() {
        return Err(RedfishError::ActionNotSupported(action.to_string()));
    }

    let body = serde_json::to_vec(parameters)?;
    debug!(action, target, "invoking action");
    let response = client.post(target, body)?;
    ensure_success(&response)?;
    Ok(())
}
