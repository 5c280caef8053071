//! The computer system resource: a logical view of a server, its power
//! state and its boot configuration.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::RedfishResult;
use crate::http::{ensure_success, SharedClient};
use crate::model::common::{
    IndicatorLed, PowerState, ResetAction, ResetRequest, ResetType, Status,
};
use crate::model::{Chassis, Manager};
use crate::resource::{
    ensure_allowed, get_resource, post_action, Entity, Link, Resource, Updatable, WritableField,
};

/// The source a boot override redirects the next boot to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootSourceOverrideTarget {
    /// Boot from the normal boot device.
    #[default]
    None,
    /// Boot from the Pre-Boot EXecution (PXE) environment.
    Pxe,
    /// Boot from the floppy disk drive.
    Floppy,
    /// Boot from the CD/DVD disc.
    Cd,
    /// Boot from a USB device as specified by the system BIOS.
    Usb,
    /// Boot from a hard drive.
    Hdd,
    /// Boot to the BIOS Setup Utility.
    BiosSetup,
    /// Boot the manufacturer's Utilities program(s).
    Utilities,
    /// Boot the manufacturer's Diagnostics program.
    Diags,
    /// Boot to the UEFI Shell.
    UefiShell,
    /// Boot to the UEFI Device specified in the UefiTargetBootSourceOverride
    /// property.
    UefiTarget,
    /// Boot from an SD Card.
    SDCard,
    /// Boot from a UEFI HTTP network location.
    UefiHttp,
}

/// How long a boot override stays in effect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootSourceOverrideEnabled {
    /// The system boots normally.
    #[default]
    Disabled,
    /// The override is applied on the next boot only, then reset to
    /// disabled.
    Once,
    /// The override stays in effect until changed.
    Continuous,
}

/// The boot-override settings of a system.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boot {
    /// The device the override redirects the boot to.
    #[serde(rename = "BootSourceOverrideTarget")]
    pub target: BootSourceOverrideTarget,
    /// Whether, and for how long, the override applies.
    #[serde(rename = "BootSourceOverrideEnabled")]
    pub enabled: BootSourceOverrideEnabled,
    /// The override targets this system advertises, empty when the service
    /// declared none.
    #[serde(
        rename = "BootSourceOverrideTarget@Redfish.AllowableValues",
        skip_serializing
    )]
    pub allowed_targets: Vec<BootSourceOverrideTarget>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SystemLinks {
    #[serde(rename = "Chassis")]
    chassis: Vec<Link>,
    #[serde(rename = "ManagedBy")]
    managed_by: Vec<Link>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SystemActions {
    #[serde(rename = "#ComputerSystem.Reset")]
    reset: ResetAction,
}

#[derive(Serialize)]
struct BootUpdate {
    #[serde(rename = "Boot")]
    boot: Boot,
}

/// A computer system: the logical view of a server as reported by its
/// manager, aggregating the resources attached to it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComputerSystem {
    #[serde(flatten)]
    entity: Entity,
    /// The system manufacturer. Read-only.
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// The model designation. Read-only.
    #[serde(rename = "Model")]
    pub model: String,
    /// The manufacturer-assigned serial number. Read-only.
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    /// The user-assigned asset tag. Writable.
    #[serde(rename = "AssetTag")]
    pub asset_tag: String,
    /// The DNS host name, without any domain information. Writable.
    #[serde(rename = "HostName")]
    pub host_name: String,
    /// The state of the system indicator LED. Writable.
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: IndicatorLed,
    /// The current power state of the system.
    #[serde(rename = "PowerState")]
    pub power_state: Option<PowerState>,
    /// The boot-override settings last reported by the service. Committed
    /// through [`ComputerSystem::set_boot`], not through `update`.
    #[serde(rename = "Boot")]
    pub boot: Boot,
    /// The health of the system.
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Links")]
    links: SystemLinks,
    #[serde(rename = "Actions")]
    actions: SystemActions,
}

impl Resource for ComputerSystem {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Updatable for ComputerSystem {
    fn writable_fields() -> &'static [WritableField<Self>] {
        const FIELDS: &[WritableField<ComputerSystem>] = &[
            WritableField {
                key: "AssetTag",
                value: |system| json!(system.asset_tag),
            },
            WritableField {
                key: "HostName",
                value: |system| json!(system.host_name),
            },
            WritableField {
                key: "IndicatorLED",
                value: |system| json!(system.indicator_led),
            },
        ];
        FIELDS
    }
}

impl ComputerSystem {
    /// Fetch a computer system from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }

    /// The reset types this system advertises, empty when the service
    /// declared none.
    pub fn supported_reset_types(&self) -> &[ResetType] {
        &self.actions.reset.allowed_reset_types
    }

    /// Reset the system.
    pub fn reset(&self, reset_type: ResetType) -> RedfishResult<()> {
        ensure_allowed(
            &reset_type,
            &self.actions.reset.allowed_reset_types,
            "ComputerSystem.Reset",
        )?;
        post_action(
            self.entity.client()?,
            "ComputerSystem.Reset",
            &self.actions.reset.target,
            &ResetRequest { reset_type },
        )
    }

    /// Replace the boot-override settings of this system.
    ///
    /// The override target is validated against the allowable values the
    /// service advertised; a service that advertised none accepts any
    /// target. The settings are sent as one nested object, not through the
    /// field diff.
    pub fn set_boot(&self, boot: Boot) -> RedfishResult<()> {
        ensure_allowed(
            &boot.target,
            &self.boot.allowed_targets,
            "BootSourceOverrideTarget",
        )?;
        let client = self.entity.client()?;
        let body = serde_json::to_vec(&BootUpdate { boot })?;
        let response = client.patch(self.entity.odata_id(), body)?;
        ensure_success(&response)?;
        Ok(())
    }

    /// The chassis this system is contained by.
    pub fn chassis(&self) -> RedfishResult<Vec<Chassis>> {
        let client = self.entity.client()?;
        self.links
            .chassis
            .iter()
            .map(|link| get_resource(client, link.as_str()))
            .collect()
    }

    /// The managers responsible for this system.
    pub fn managed_by(&self) -> RedfishResult<Vec<Manager>> {
        let client = self.entity.client()?;
        self.links
            .managed_by
            .iter()
            .map(|link| get_resource(client, link.as_str()))
            .collect()
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

    const SYSTEM_BODY: &str = r##"{
        "@odata.id": "/redfish/v1/Systems/437XR1138R2",
        "@odata.type": "#ComputerSystem.v1_5_0.ComputerSystem",
        "Id": "437XR1138R2",
        "Name": "WebFrontEnd483",
        "Manufacturer": "Contoso",
        "Model": "3500RX",
        "SerialNumber": "437XR1138R2",
        "AssetTag": "Chicago-45Z-2381",
        "HostName": "web483",
        "IndicatorLED": "Off",
        "PowerState": "On",
        "Boot": {
            "BootSourceOverrideTarget": "None",
            "BootSourceOverrideEnabled": "Once",
            "BootSourceOverrideTarget@Redfish.AllowableValues": ["None", "Pxe", "Hdd", "Cd"]
        },
        "Status": {"State": "Enabled", "Health": "OK"},
        "Links": {
            "Chassis": [{"@odata.id": "/redfish/v1/Chassis/Chassis-1"}],
            "ManagedBy": [{"@odata.id": "/redfish/v1/Managers/1"}]
        },
        "Actions": {
            "#ComputerSystem.Reset": {
                "target": "/redfish/v1/Systems/437XR1138R2/Actions/ComputerSystem.Reset",
                "ResetType@Redfish.AllowableValues": ["On", "ForceOff", "ForceRestart", "GracefulShutdown"]
            }
        }
    }"##;

    #[test]
    fn decodes_the_fixture() {
        let system: ComputerSystem = serde_json::from_str(SYSTEM_BODY).unwrap();

        assert_eq!(system.entity.id(), "437XR1138R2");
        assert_eq!(system.host_name, "web483");
        assert_eq!(system.power_state, Some(PowerState::On));
        assert_eq!(system.boot.target, BootSourceOverrideTarget::None);
        assert_eq!(system.boot.enabled, BootSourceOverrideEnabled::Once);
        assert_eq!(system.boot.allowed_targets.len(), 4);
        assert_eq!(system.supported_reset_types().len(), 4);
        assert_eq!(system.links.chassis.len(), 1);
    }

    #[test]
    fn set_boot_patches_a_nested_boot_object() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client
            .expect_patch()
            .withf(|location, body| {
                location == "/redfish/v1/Systems/437XR1138R2"
                    && serde_json::from_slice::<serde_json::Value>(body).unwrap()
                        == json!({"Boot": {
                            "BootSourceOverrideTarget": "Pxe",
                            "BootSourceOverrideEnabled": "Once"
                        }})
            })
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));
        let client: SharedClient = Arc::new(mock_client);

        let mut system: ComputerSystem = serde_json::from_str(SYSTEM_BODY).unwrap();
        system.entity_mut().set_client(client);

        let boot = Boot {
            target: BootSourceOverrideTarget::Pxe,
            enabled: BootSourceOverrideEnabled::Once,
            ..Default::default()
        };
        assert!(system.set_boot(boot).is_ok());
    }

    #[test]
    fn set_boot_rejects_targets_outside_the_advertised_set() {
        let client: SharedClient = Arc::new(MockHttpClientMockall::new());
        let mut system: ComputerSystem = serde_json::from_str(SYSTEM_BODY).unwrap();
        system.entity_mut().set_client(client);

        let boot = Boot {
            target: BootSourceOverrideTarget::UefiShell,
            enabled: BootSourceOverrideEnabled::Once,
            ..Default::default()
        };
        assert!(matches!(
            system.set_boot(boot).unwrap_err(),
            RedfishError::ValueNotAllowed { .. }
        ));
    }

    #[test]
    fn reset_rejects_types_outside_the_advertised_set() {
        let client: SharedClient = Arc::new(MockHttpClientMockall::new());
        let mut system: ComputerSystem = serde_json::from_str(SYSTEM_BODY).unwrap();
        system.entity_mut().set_client(client);

        assert!(matches!(
            system.reset(ResetType::Nmi).unwrap_err(),
            RedfishError::ValueNotAllowed { .. }
        ));
    }
}
