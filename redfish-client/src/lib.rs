//! Redfish client library.
//!
//! Resources are fetched as typed entities that retain the exact bytes the
//! service returned. Callers mutate fields directly and commit with
//! [`resource::Updatable::update`], which diffs the in-memory state against
//! the retained wire envelope and sends only the changed writable fields as
//! a partial update.
//!
//! ```no_run
//! use redfish_client::http::HttpConfig;
//! use redfish_client::resource::Updatable;
//!
//! # fn main() -> redfish_client::RedfishResult<()> {
//! let config = HttpConfig::new("https://bmc.example.com")?
//!     .with_credentials("admin", "secret");
//! let api = redfish_client::connect(config)?;
//!
//! let service = api.service_root()?;
//! for mut chassis in service.chassis()? {
//!     chassis.asset_tag = "rack-12-slot-3".to_string();
//!     chassis.update()?;
//! }
//!
//! api.logout()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub use error::{RedfishError, RedfishResult};

pub mod http;
pub use http::{connect, ApiClient};

pub mod model;
pub mod resource;
