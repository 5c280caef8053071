//! The update-diffing engine: computes and commits minimal partial updates.
//!
//! Every mutable resource type declares a static table of its writable
//! fields. A commit re-decodes the retained wire envelope into a fresh
//! original snapshot, compares it to the live (possibly mutated) value
//! restricted to that table, and PATCHes only the fields that changed.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RedfishResult;
use crate::http::ensure_success;
use crate::resource::entity::Resource;

/// One entry of a resource type's writable allow-list: the wire name of the
/// field paired with an accessor producing its current JSON value.
///
/// Tables are declared as `const` slices per resource type; the diff never
/// uses runtime introspection.
pub struct WritableField<T> {
    /// The field's wire name, exactly as the service expects it.
    pub key: &'static str,
    /// Reads the field's value out of a decoded resource.
    pub value: fn(&T) -> Value,
}

/// Compare two snapshots of the same resource restricted to the writable
/// allow-list, returning the changed fields keyed by wire name with their
/// current values.
pub fn diff_writable<T>(
    original: &T,
    current: &T,
    fields: &[WritableField<T>],
) -> Map<String, Value> {
    let mut changed = Map::new();
    for field in fields {
        let current_value = (field.value)(current);
        if (field.value)(original) != current_value {
            changed.insert(field.key.to_string(), current_value);
        }
    }
    changed
}

/// A resource whose writable fields can be committed back to the service as
/// a partial update.
pub trait Updatable: Resource + 'static {
    /// The schema-declared subset of this resource's fields permitted in an
    /// update. Fields outside this table never appear in a commit payload,
    /// changed or not.
    fn writable_fields() -> &'static [WritableField<Self>];

    /// Commit local mutations to the service.
    ///
    /// The original state is re-decoded from the retained wire envelope, so
    /// the diff is computed against what the service last returned rather
    /// than against any in-memory bookkeeping. With no changed writable
    /// fields this is a no-op that makes no network call. A successful
    /// commit does not refresh the envelope: re-fetch the resource to
    /// observe server-side effects.
    ///
    /// No etag precondition is sent; the last write wins.
    fn update(&self) -> RedfishResult<()> {
        let original: Self = serde_json::from_slice(self.entity().raw_data())?;

        let payload = diff_writable(&original, self, Self::writable_fields());
        if payload.is_empty() {
            debug!(
                location = self.entity().odata_id(),
                "no writable fields changed, skipping update"
            );
            return Ok(());
        }

        let client = self.entity().client()?;
        let body = serde_json::to_vec(&payload)?;
        debug!(
            location = self.entity().odata_id(),
            fields = payload.len(),
            "sending partial update"
        );
        let response = client.patch(self.entity().odata_id(), body)?;
        ensure_success(&response)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::error::RedfishError;
    use crate::http::test::{json_response, MockHttpClientMockall};
    use crate::http::SharedClient;
    use crate::model::{Chassis, IndicatorLed};
    use crate::resource::entity::get_resource;

    const CHASSIS_BODY: &str = r#"{
        "@odata.id": "/redfish/v1/Chassis/1",
        "Id": "1",
        "Name": "Computer System Chassis",
        "ChassisType": "RackMount",
        "Manufacturer": "Acme",
        "AssetTag": "A1",
        "IndicatorLED": "Off"
    }"#;

    fn fetched_chassis(mock_client: MockHttpClientMockall) -> Chassis {
        let mut mock_client = mock_client;
        mock_client.should_get("/redfish/v1/Chassis/1", CHASSIS_BODY);
        let client: SharedClient = Arc::new(mock_client);
        get_resource(&client, "/redfish/v1/Chassis/1").unwrap()
    }

    #[test]
    fn unmodified_commit_is_a_no_op() {
        // Only the initial fetch is expected; a PATCH would panic the mock.
        let chassis = fetched_chassis(MockHttpClientMockall::new());

        assert!(chassis.update().is_ok());
    }

    #[test]
    fn diff_with_self_is_empty() {
        let chassis: Chassis = serde_json::from_str(CHASSIS_BODY).unwrap();

        let changed = diff_writable(&chassis, &chassis, Chassis::writable_fields());
        assert!(changed.is_empty());
    }

    #[test]
    fn commit_sends_exactly_the_changed_writable_field() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .withf(|location, body| {
                location == "/redfish/v1/Chassis/1"
                    && serde_json::from_slice::<serde_json::Value>(body).unwrap()
                        == json!({"AssetTag": "A2"})
            })
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));

        let mut chassis = fetched_chassis(mock_client);
        chassis.asset_tag = "A2".to_string();

        assert!(chassis.update().is_ok());
    }

    #[test]
    fn read_only_fields_never_reach_the_payload() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .withf(|_, body| {
                serde_json::from_slice::<serde_json::Value>(body).unwrap()
                    == json!({"AssetTag": "A2"})
            })
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));

        let mut chassis = fetched_chassis(mock_client);
        chassis.asset_tag = "A2".to_string();
        // Manufacturer is read-only: mutating it must not leak into the
        // payload.
        chassis.manufacturer = "Other".to_string();

        assert!(chassis.update().is_ok());
    }

    #[test]
    fn multiple_changed_fields_are_sent_together() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .withf(|_, body| {
                serde_json::from_slice::<serde_json::Value>(body).unwrap()
                    == json!({"AssetTag": "A2", "IndicatorLED": "Lit"})
            })
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));

        let mut chassis = fetched_chassis(mock_client);
        chassis.asset_tag = "A2".to_string();
        chassis.indicator_led = IndicatorLed::Lit;

        assert!(chassis.update().is_ok());
    }

    #[test]
    fn second_commit_resends_the_same_payload() {
        // The envelope is not refreshed by a commit, so an identical diff is
        // computed and sent again.
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .withf(|_, body| {
                serde_json::from_slice::<serde_json::Value>(body).unwrap()
                    == json!({"AssetTag": "A2"})
            })
            .times(2)
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));

        let mut chassis = fetched_chassis(mock_client);
        chassis.asset_tag = "A2".to_string();

        assert!(chassis.update().is_ok());
        assert!(chassis.update().is_ok());
    }

    #[test]
    fn transport_failure_is_surfaced_unchanged() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::BAD_REQUEST, "{}")));

        let mut chassis = fetched_chassis(mock_client);
        chassis.asset_tag = "A2".to_string();

        match chassis.update().unwrap_err() {
            RedfishError::Transport(e) => {
                assert_eq!(e.to_string(), "Status code: `400` Canonical reason: `Bad Request`")
            }
            err => panic!("Wrong error variant was returned. Expected `RedfishError::Transport`, found {}", err),
        }
    }

    #[test]
    fn corrupt_envelope_fails_the_commit() {
        let mut chassis: Chassis = serde_json::from_str(CHASSIS_BODY).unwrap();
        chassis.entity_mut().set_raw(b"not json".to_vec());

        assert!(matches!(
            chassis.update().unwrap_err(),
            RedfishError::Decode(_)
        ));
    }
}
