//! The manager resource: the BMC, enclosure manager or similar controller
//! that manages systems and chassis.

use serde::Deserialize;

use crate::error::RedfishResult;
use crate::http::SharedClient;
use crate::model::common::{ResetAction, ResetRequest, ResetType, Status};
use crate::model::VirtualMedia;
use crate::resource::{
    ensure_allowed, get_resource, list_referenced, post_action, Entity, Link, Resource,
};

/// The kind of controller a manager is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ManagerType {
    /// A controller that primarily monitors or manages the operation of a
    /// whole system.
    ManagementController,
    /// A controller which provides management functions for a chassis or
    /// group of devices.
    EnclosureManager,
    /// A controller which provides management functions for a single
    /// computer system.
    #[serde(rename = "BMC")]
    Bmc,
    /// A controller which provides management functions for a whole rack.
    RackManager,
    /// A controller which provides management functions for a particular
    /// subsystem or group of devices.
    AuxiliaryController,
    /// A software-based service which provides management functions.
    Service,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManagerActions {
    #[serde(rename = "#Manager.Reset")]
    reset: ResetAction,
}

/// A management subsystem, such as a BMC, that manages systems and chassis
/// and exposes services like virtual media.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manager {
    #[serde(flatten)]
    entity: Entity,
    /// The kind of controller this manager is.
    #[serde(rename = "ManagerType")]
    pub manager_type: Option<ManagerType>,
    /// The manager firmware version. Read-only.
    #[serde(rename = "FirmwareVersion")]
    pub firmware_version: String,
    /// The manager model. Read-only.
    #[serde(rename = "Model")]
    pub model: String,
    /// The universally unique identifier of this manager. Read-only.
    #[serde(rename = "UUID")]
    pub uuid: String,
    /// The health of the manager.
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "VirtualMedia")]
    virtual_media: Link,
    #[serde(rename = "Actions")]
    actions: ManagerActions,
}

impl Resource for Manager {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Manager {
    /// Fetch a manager from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }

    /// The virtual media slots this manager exposes.
    pub fn virtual_media(&self) -> RedfishResult<Vec<VirtualMedia>> {
        list_referenced(self.entity.client()?, self.virtual_media.as_str())
    }

    /// The reset types this manager advertises, empty when the service
    /// declared none.
    pub fn supported_reset_types(&self) -> &[ResetType] {
        &self.actions.reset.allowed_reset_types
    }

    /// Reset the manager itself. Managed systems keep running, though
    /// management traffic is interrupted while the manager restarts.
    pub fn reset(&self, reset_type: ResetType) -> RedfishResult<()> {
        ensure_allowed(
            &reset_type,
            &self.actions.reset.allowed_reset_types,
            "Manager.Reset",
        )?;
        post_action(
            self.entity.client()?,
            "Manager.Reset",
            &self.actions.reset.target,
            &ResetRequest { reset_type },
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MANAGER_BODY: &str = r##"{
        "@odata.id": "/redfish/v1/Managers/1",
        "Id": "1",
        "Name": "Manager",
        "ManagerType": "BMC",
        "FirmwareVersion": "1.45.455b66-rev4",
        "Model": "Joo Janta 200",
        "UUID": "58893887-8974-2487-2389-841168418919",
        "Status": {"State": "Enabled", "Health": "OK"},
        "VirtualMedia": {"@odata.id": "/redfish/v1/Managers/1/VirtualMedia"},
        "Actions": {
            "#Manager.Reset": {
                "target": "/redfish/v1/Managers/1/Actions/Manager.Reset",
                "ResetType@Redfish.AllowableValues": ["ForceRestart", "GracefulRestart"]
            }
        }
    }"##;

    #[test]
    fn decodes_the_fixture() {
        let manager: Manager = serde_json::from_str(MANAGER_BODY).unwrap();

        assert_eq!(manager.entity.id(), "1");
        assert_eq!(manager.manager_type, Some(ManagerType::Bmc));
        assert_eq!(manager.firmware_version, "1.45.455b66-rev4");
        assert_eq!(
            manager.virtual_media.as_str(),
            "/redfish/v1/Managers/1/VirtualMedia"
        );
        assert_eq!(
            manager.supported_reset_types(),
            &[ResetType::ForceRestart, ResetType::GracefulRestart]
        );
    }
}
