//! Resource entities and the fetch path that captures their wire envelope.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RedfishError, RedfishResult};
use crate::http::{ensure_success, SharedClient};

/// A reference to another node in the resource graph.
///
/// On the wire this is an object holding a single `@odata.id` member; it is
/// kept as a plain location string and resolved only on demand.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(rename = "@odata.id", default)]
    odata_id: String,
}

impl Link {
    /// The location this link points at.
    pub fn as_str(&self) -> &str {
        &self.odata_id
    }

    /// True when the service did not populate the link.
    pub fn is_empty(&self) -> bool {
        self.odata_id.is_empty()
    }
}

/// The identity block shared by every resource, plus the retained wire
/// envelope and the transport handle the resource was fetched through.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[serde(rename = "@odata.id")]
    odata_id: String,
    #[serde(rename = "@odata.context")]
    odata_context: String,
    #[serde(rename = "@odata.etag")]
    odata_etag: String,
    #[serde(rename = "@odata.type")]
    odata_type: String,
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(skip)]
    client: Option<SharedClient>,
    #[serde(skip)]
    raw: Vec<u8>,
}

impl Entity {
    /// The location this entity was fetched from; partial updates are sent
    /// back to it.
    pub fn odata_id(&self) -> &str {
        &self.odata_id
    }

    /// The odata context.
    pub fn odata_context(&self) -> &str {
        &self.odata_context
    }

    /// The odata etag of the last fetch. Carried for inspection only; commits
    /// do not send it back, so the last write wins.
    pub fn odata_etag(&self) -> &str {
        &self.odata_etag
    }

    /// The odata type.
    pub fn odata_type(&self) -> &str {
        &self.odata_type
    }

    /// The resource identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact bytes returned by the last successful fetch of this entity.
    ///
    /// Local mutations never touch these bytes; they are the baseline a
    /// commit diffs the in-memory state against.
    pub fn raw_data(&self) -> &[u8] {
        &self.raw
    }

    /// Attach the transport handle used to issue further requests.
    pub fn set_client(&mut self, client: SharedClient) {
        self.client = Some(client);
    }

    /// The transport handle, or an error for detached entities.
    pub fn client(&self) -> RedfishResult<&SharedClient> {
        self.client.as_ref().ok_or(RedfishError::NoClient)
    }

    pub(crate) fn set_raw(&mut self, raw: Vec<u8>) {
        self.raw = raw;
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("odata_id", &self.odata_id)
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A typed, independently fetchable node in the resource graph.
///
/// Implementations expose their embedded [`Entity`]; everything else (the
/// fetch path, the update diff, collection resolution) is generic over it.
pub trait Resource: DeserializeOwned {
    /// The embedded identity block.
    fn entity(&self) -> &Entity;
    /// Mutable access to the embedded identity block.
    fn entity_mut(&mut self) -> &mut Entity;
}

/// Fetch the resource at `location` and decode it into `T`.
///
/// The full response body is buffered and the untouched bytes are stored in
/// the returned entity before it is handed back; a later commit diffs the
/// in-memory state against them, so the body is never stream-decoded. A
/// decode or transport failure produces no entity.
pub fn get_resource<T: Resource>(client: &SharedClient, location: &str) -> RedfishResult<T> {
    debug!(location, "fetching resource");
    let response = client.get(location)?;
    ensure_success(&response)?;

    let raw = response.into_body();
    let mut resource: T = serde_json::from_slice(&raw)?;

    let entity = resource.entity_mut();
    entity.set_raw(raw);
    entity.set_client(Arc::clone(client));
    Ok(resource)
}

/// Resolve an optional singleton link, yielding `None` when the service did
/// not populate it.
pub fn get_linked<T: Resource>(
    client: &SharedClient,
    link: &Link,
) -> RedfishResult<Option<T>> {
    if link.is_empty() {
        return Ok(None);
    }
    get_resource(client, link.as_str()).map(Some)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::StatusCode;

    use super::*;
    use crate::http::test::{json_response, MockHttpClientMockall};
    use crate::model::Chassis;

    const CHASSIS_BODY: &str = r##"{
        "@odata.id": "/redfish/v1/Chassis/1",
        "@odata.etag": "W/\"12345\"",
        "@odata.type": "#Chassis.v1_10_0.Chassis",
        "Id": "1",
        "Name": "Computer System Chassis",
        "ChassisType": "RackMount",
        "Manufacturer": "Contoso",
        "AssetTag": "A1"
    }"##;

    #[test]
    fn fetch_retains_the_wire_envelope() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client.should_get("/redfish/v1/Chassis/1", CHASSIS_BODY);
        let client: SharedClient = Arc::new(mock_client);

        let chassis: Chassis = get_resource(&client, "/redfish/v1/Chassis/1").unwrap();

        assert_eq!(chassis.entity().odata_id(), "/redfish/v1/Chassis/1");
        assert_eq!(chassis.entity().id(), "1");
        assert_eq!(chassis.entity().odata_etag(), "W/\"12345\"");
        assert_eq!(chassis.entity().raw_data(), CHASSIS_BODY.as_bytes());
        assert!(chassis.entity().client().is_ok());
    }

    #[test]
    fn fetch_fails_on_unsuccessful_status() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client.should_not_get("/redfish/v1/Chassis/1", StatusCode::NOT_FOUND);
        let client: SharedClient = Arc::new(mock_client);

        let res: RedfishResult<Chassis> = get_resource(&client, "/redfish/v1/Chassis/1");

        match res.unwrap_err() {
            RedfishError::Transport(e) => {
                assert_eq!(
                    e.to_string(),
                    "Status code: `404` Canonical reason: `Not Found`"
                )
            }
            err => panic!("Wrong error variant was returned. Expected `RedfishError::Transport`, found {}", err),
        }
    }

    #[test]
    fn fetch_fails_on_malformed_body() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_get()
            .once()
            .returning(|_| Ok(json_response(StatusCode::OK, "not json")));
        let client: SharedClient = Arc::new(mock_client);

        let res: RedfishResult<Chassis> = get_resource(&client, "/redfish/v1/Chassis/1");
        assert!(matches!(res.unwrap_err(), RedfishError::Decode(_)));
    }

    #[test]
    fn detached_entity_has_no_client() {
        let chassis: Chassis = serde_json::from_str(CHASSIS_BODY).unwrap();
        assert!(matches!(
            chassis.entity().client().unwrap_err(),
            RedfishError::NoClient
        ));
    }

    #[test]
    fn empty_link_resolves_to_none() {
        // No expectations: resolving an absent link must not touch the wire.
        let client: SharedClient = Arc::new(MockHttpClientMockall::new());

        let resolved: Option<Chassis> = get_linked(&client, &Link::default()).unwrap();
        assert!(resolved.is_none());
    }
}
