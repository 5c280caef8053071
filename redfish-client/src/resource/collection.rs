//! Resolution of resource collections into typed members.

use serde::Deserialize;
use tracing::debug;

use crate::error::RedfishResult;
use crate::http::{ensure_success, SharedClient};
use crate::resource::entity::{get_resource, Link, Resource};

/// The wire shape of a resource collection: a list of member links plus the
/// service's member count.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// The collection name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The number of members the service reports.
    #[serde(rename = "Members@odata.count")]
    pub members_count: u64,
    /// Links to the member resources, in service order.
    #[serde(rename = "Members")]
    pub members: Vec<Link>,
}

/// Fetch the collection document at `location`.
pub fn get_collection(client: &SharedClient, location: &str) -> RedfishResult<Collection> {
    debug!(location, "fetching collection");
    let response = client.get(location)?;
    ensure_success(&response)?;
    Ok(serde_json::from_slice(&response.into_body())?)
}

/// Resolve every member of the collection at `location` into a typed
/// resource, in the order the collection lists them.
///
/// An empty location resolves to an empty list without a network call. The
/// first member fetch that fails aborts the resolution and returns the
/// error; no partial list is produced.
pub fn list_referenced<T: Resource>(
    client: &SharedClient,
    location: &str,
) -> RedfishResult<Vec<T>> {
    if location.is_empty() {
        return Ok(Vec::new());
    }

    let collection = get_collection(client, location)?;
    collection
        .members
        .iter()
        .map(|member| get_resource(client, member.as_str()))
        .collect()
}
