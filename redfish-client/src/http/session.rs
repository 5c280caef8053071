//! Session lifecycle: login against the session service, an authenticated
//! client handle, and logout.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{RedfishError, RedfishResult};
use crate::http::http_client::{ensure_success, HttpClient, HttpClientUreq, SharedClient};
use crate::http::HttpConfig;
use crate::model::ServiceRoot;

/// The location logins are posted to.
const SESSIONS_LOCATION: &str = "/redfish/v1/SessionService/Sessions";

/// The header carrying the session token.
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

#[derive(Serialize)]
struct AuthPayload<'a> {
    #[serde(rename = "UserName")]
    user_name: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

/// A connected client: the transport handle entities issue requests
/// through, plus the session established at connect time, if any.
#[derive(Debug)]
pub struct ApiClient {
    http: SharedClient,
    session_location: Option<String>,
}

/// Connect to a Redfish service.
///
/// With credentials configured, a session is established first: the
/// credentials are posted to the session service, and the returned token is
/// sent on every subsequent request. Without credentials the client issues
/// unauthenticated requests, which suits anonymous endpoints and tests.
pub fn connect(config: HttpConfig) -> RedfishResult<ApiClient> {
    if config.username.is_empty() && config.password.is_empty() {
        debug!("no credentials configured, skipping session login");
        let http: SharedClient = Arc::new(HttpClientUreq::new(config)?);
        return Ok(ApiClient {
            http,
            session_location: None,
        });
    }

    let login_client = HttpClientUreq::new(config.clone())?;
    let body = serde_json::to_vec(&AuthPayload {
        user_name: &config.username,
        password: &config.password,
    })?;

    debug!(location = SESSIONS_LOCATION, "establishing session");
    let response = login_client.post(SESSIONS_LOCATION, body)?;
    ensure_success(&response)?;

    let token = response
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or(RedfishError::MissingSessionToken)?;
    let session_location = response
        .headers()
        .get(http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    if session_location.is_none() {
        warn!("service did not return a session location, logout will be skipped");
    }

    let authed_config = config.with_headers([(AUTH_TOKEN_HEADER, token.as_str())])?;
    let http: SharedClient = Arc::new(HttpClientUreq::new(authed_config)?);

    Ok(ApiClient {
        http,
        session_location,
    })
}

impl ApiClient {
    /// The transport handle, shared with every entity fetched through it.
    pub fn client(&self) -> &SharedClient {
        &self.http
    }

    /// Fetch the service root.
    pub fn service_root(&self) -> RedfishResult<ServiceRoot> {
        ServiceRoot::get(&self.http)
    }

    /// End the session established at connect time. A no-op for
    /// unauthenticated clients.
    pub fn logout(&self) -> RedfishResult<()> {
        if let Some(location) = &self.session_location {
            debug!(location = %location, "ending session");
            let response = self.http.delete(location)?;
            ensure_success(&response)?;
        }
        Ok(())
    }
}
