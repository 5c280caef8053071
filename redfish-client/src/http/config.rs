//! # Client configuration.

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use http::{HeaderMap, HeaderName, HeaderValue};
use std::str::FromStr;
use std::time::Duration;
use url::{ParseError, Url};

/// Default client timeout is 30 seconds
const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// A struct representing the configuration for the HTTP client.
///
/// # Examples
///
/// Creating a new `HttpConfig` with a service endpoint and credentials:
///
/// ```rust
/// use redfish_client::http::HttpConfig;
///
/// let config = HttpConfig::new("https://bmc.example.com")
///     .unwrap()
///     .with_credentials("admin", "secret");
/// ```
///
/// Adding custom headers to the configuration:
///
/// ```rust
/// use redfish_client::http::HttpConfig;
///
/// let config = HttpConfig::new("https://bmc.example.com").unwrap();
/// let config = config.with_headers(vec![("X-Custom", "value")]).unwrap();
/// ```
///
/// Setting a custom timeout in the configuration:
///
/// ```rust
/// use std::time::Duration;
/// use redfish_client::http::HttpConfig;
///
/// let config = HttpConfig::new("https://bmc.example.com").unwrap();
/// let config = config.with_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    pub(super) endpoint: Url,
    pub(super) headers: HeaderMap,
    pub(super) username: String,
    pub(super) password: String,
    pub(super) timeout: Duration,
}

/// An enumeration of potential errors related to the client configuration.
#[derive(thiserror::Error, Debug)]
pub enum HttpConfigError {
    /// Configuration with an invalid endpoint URL.
    #[error("`{0}`")]
    InvalidUrl(#[from] ParseError),
    /// Configuration with an invalid header value.
    #[error("`{0}`")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// Configuration with an invalid header name.
    #[error("`{0}`")]
    InvalidHeaderName(#[from] InvalidHeaderName),
}

impl HttpConfig {
    /// Construct a new `HttpConfig` with the service endpoint as a string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the provided URL is not valid.
    pub fn new(endpoint: &str) -> Result<Self, HttpConfigError> {
        Ok(Self {
            endpoint: Url::from_str(endpoint)?,
            headers: redfish_headers(),
            username: String::new(),
            password: String::new(),
            timeout: DEFAULT_CLIENT_TIMEOUT,
        })
    }

    /// Set the account credentials used to establish a session.
    ///
    /// When both values are empty no session is established and requests are
    /// sent unauthenticated.
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// Optionally include custom headers into the HTTP requests.
    ///
    /// Custom headers can be added using an input iterator that provides
    /// key-value pairs. If the key already exists in the current header map,
    /// the new value will overwrite the old one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the provided key or value is not valid.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Result<Self, HttpConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (ref key, ref val) in headers {
            let _ = self
                .headers
                .insert(HeaderName::from_str(key.as_ref())?, val.as_ref().parse()?);
        }
        Ok(self)
    }

    /// Define a custom timeout for the http client.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

/// Returns a HeaderMap pre-populated with the common headers of a Redfish
/// connection.
fn redfish_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    headers.insert("Accept", HeaderValue::from_static("application/json"));
    headers.insert("OData-Version", HeaderValue::from_static("4.0"));

    headers
}
