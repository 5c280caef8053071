//! # HTTP Client Module
use std::io;
use std::io::{Cursor, Read};
use std::sync::Arc;

use http::{HeaderMap, Response};
use url::Url;

use crate::http::HttpConfig;

/// An enumeration of potential errors related to the HTTP client.
#[derive(thiserror::Error, Debug)]
pub enum HttpClientError {
    /// Represents ureq crate error.
    #[error("`{0}`")]
    UreqError(String),
    /// Unsuccessful HTTP response.
    #[error("Status code: `{0}` Canonical reason: `{1}`")]
    UnsuccessfulResponse(u16, String),
    /// Represents an invalid request URL.
    #[error("`{0}`")]
    InvalidUrl(#[from] url::ParseError),
    /// Represents an io reader error.
    #[error("`{0}`")]
    IoError(#[from] io::Error),
    /// Represents an http crate consume body error.
    #[error("`{0}`")]
    HttpBodyError(#[from] http::Error),
}

/// The internal methods every Redfish transport must provide.
///
/// Locations are server-relative paths (for example `/redfish/v1/Chassis/1`)
/// resolved against the configured endpoint. The trait carries no locking of
/// its own; concurrent use of entities sharing one transport is safe exactly
/// when the implementation is.
pub trait HttpClient: Send + Sync + std::fmt::Debug {
    /// Retrieve the resource at `location`.
    fn get(&self, location: &str) -> Result<Response<Vec<u8>>, HttpClientError>;
    /// Send a JSON body to `location`, used for action invocation.
    fn post(&self, location: &str, body: Vec<u8>) -> Result<Response<Vec<u8>>, HttpClientError>;
    /// Send a partial update carrying only changed writable fields.
    fn patch(&self, location: &str, body: Vec<u8>) -> Result<Response<Vec<u8>>, HttpClientError>;
    /// Remove the resource at `location`, used to end sessions.
    fn delete(&self, location: &str) -> Result<Response<Vec<u8>>, HttpClientError>;
}

/// A shared, non-owning handle to the transport an entity was fetched
/// through.
///
/// Entities clone this handle to issue further requests; they never manage
/// the transport's lifetime beyond the reference count.
pub type SharedClient = Arc<dyn HttpClient>;

/// Returns an error if the response status code is not within 200-299.
pub(crate) fn ensure_success(response: &Response<Vec<u8>>) -> Result<(), HttpClientError> {
    if !response.status().is_success() {
        return Err(HttpClientError::UnsuccessfulResponse(
            response.status().as_u16(),
            response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        ));
    }
    Ok(())
}

/// An implementation of the `HttpClient` trait using the ureq library.
#[derive(Debug)]
pub struct HttpClientUreq {
    agent: ureq::Agent,
    endpoint: Url,
    headers: HeaderMap,
}

impl HttpClientUreq {
    /// Construct a new `HttpClientUreq` from the given `HttpConfig`.
    pub fn new(config: HttpConfig) -> Result<Self, HttpClientError> {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.timeout)
            .timeout(config.timeout)
            .build();
        Ok(Self {
            agent,
            endpoint: config.endpoint,
            headers: config.headers,
        })
    }

    fn request(
        &self,
        method: &str,
        location: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, HttpClientError> {
        let url = self.endpoint.join(location)?;
        let mut req = self.agent.request(method, url.as_str());

        for (name, value) in self.headers.iter() {
            if let Ok(value) = value.to_str() {
                req = req.set(name.as_str(), value);
            } else {
                tracing::error!("invalid header value string: {:?}", value);
            }
        }

        let result = match body {
            Some(bytes) => req.send(Cursor::new(bytes)),
            None => req.call(),
        };

        // Non-2xx responses are reported by ureq as errors carrying the
        // response; surface them as responses so status handling stays in
        // one place.
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(HttpClientError::UreqError(err.to_string())),
        };

        build_response(response)
    }
}

impl HttpClient for HttpClientUreq {
    fn get(&self, location: &str) -> Result<Response<Vec<u8>>, HttpClientError> {
        self.request("GET", location, None)
    }

    fn post(&self, location: &str, body: Vec<u8>) -> Result<Response<Vec<u8>>, HttpClientError> {
        self.request("POST", location, Some(body))
    }

    fn patch(&self, location: &str, body: Vec<u8>) -> Result<Response<Vec<u8>>, HttpClientError> {
        self.request("PATCH", location, Some(body))
    }

    fn delete(&self, location: &str) -> Result<Response<Vec<u8>>, HttpClientError> {
        self.request("DELETE", location, None)
    }
}

fn build_response(response: ureq::Response) -> Result<Response<Vec<u8>>, HttpClientError> {
    let http_version = match response.http_version() {
        "HTTP/0.9" => http::Version::HTTP_09,
        "HTTP/1.0" => http::Version::HTTP_10,
        "HTTP/1.1" => http::Version::HTTP_11,
        "HTTP/2.0" => http::Version::HTTP_2,
        "HTTP/3.0" => http::Version::HTTP_3,
        _ => unreachable!(),
    };

    let mut response_builder = http::Response::builder()
        .status(response.status())
        .version(http_version);

    for name in response.headers_names() {
        if let Some(value) = response.header(&name) {
            response_builder = response_builder.header(name.as_str(), value);
        }
    }

    let mut buf: Vec<u8> = vec![];
    response.into_reader().read_to_end(&mut buf)?;

    Ok(response_builder.body(buf)?)
}
