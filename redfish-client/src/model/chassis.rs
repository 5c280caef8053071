//! The chassis resource: racks, enclosures, sleds and the other physical
//! containers of a system.

use serde::Deserialize;
use serde_json::json;

use crate::error::RedfishResult;
use crate::http::SharedClient;
use crate::model::common::{IndicatorLed, ResetAction, ResetRequest, ResetType, Status};
use crate::model::{ComputerSystem, Manager, Power, Thermal};
use crate::resource::{
    ensure_allowed, get_linked, get_resource, post_action, Entity, Link, Resource, Updatable,
    WritableField,
};

/// The physical form of a chassis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChassisType {
    /// An enclosed or semi-enclosed, typically vertically-oriented, system
    /// chassis which must be plugged into a multi-system chassis to function
    /// normally.
    Blade,
    /// A loose device or circuit board intended to be installed in a system
    /// or other enclosure.
    Card,
    /// A small self-contained system intended to be plugged into a
    /// multi-system chassis.
    Cartridge,
    /// A small chassis, card, or device which contains devices for a
    /// particular subsystem or function.
    Component,
    /// An enclosed or semi-enclosed, typically horizontally-oriented, system
    /// chassis which may be slid into a multi-system chassis.
    Drawer,
    /// A generic term for a chassis that does not fit any other description.
    Enclosure,
    /// A chassis which expands the capabilities or capacity of another
    /// chassis.
    Expansion,
    /// A chassis in a drive form factor with IP-based network connections.
    IPBasedDrive,
    /// A small, typically removable, chassis or card which contains devices
    /// for a particular subsystem or function.
    Module,
    /// A collection of equipment racks in a large, likely transportable,
    /// container.
    Pod,
    /// An equipment rack, typically a 19-inch wide freestanding unit.
    Rack,
    /// A group of racks which form a single entity or share infrastructure.
    RackGroup,
    /// A single system chassis designed specifically for mounting in an
    /// equipment rack.
    RackMount,
    /// A collection of equipment racks.
    Row,
    /// An enclosed or semi-enclosed, typically horizontally-oriented, system
    /// chassis which must be plugged into a multi-system chassis to function
    /// normally.
    Shelf,
    /// A chassis that mates mechanically with another chassis to expand its
    /// capabilities or capacity.
    Sidecar,
    /// An enclosed or semi-enclosed system chassis which must be plugged
    /// into a multi-system chassis to function normally, similar to a blade
    /// chassis.
    Sled,
    /// A single, free-standing system, commonly called a tower or desktop
    /// chassis.
    StandAlone,
    /// A chassis which encloses storage.
    StorageEnclosure,
    /// A logical division or portion of a physical chassis that contains
    /// multiple devices or systems that cannot be physically separated.
    Zone,
    /// A chassis that does not fit any of these definitions.
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChassisLinks {
    #[serde(rename = "ComputerSystems")]
    computer_systems: Vec<Link>,
    #[serde(rename = "ManagedBy")]
    managed_by: Vec<Link>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChassisActions {
    #[serde(rename = "#Chassis.Reset")]
    reset: ResetAction,
}

/// The physical components of a system: sheet-metal confined spaces and
/// logical zones such as racks, enclosures and chassis. Subsystems that
/// operate outside of a system's data plane are linked directly or
/// indirectly through this resource.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Chassis {
    #[serde(flatten)]
    entity: Entity,
    /// The physical form of this chassis.
    #[serde(rename = "ChassisType")]
    pub chassis_type: ChassisType,
    /// The chassis manufacturer. Read-only.
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// The model designation. Read-only.
    #[serde(rename = "Model")]
    pub model: String,
    /// The stock-keeping unit. Read-only.
    #[serde(rename = "SKU")]
    pub sku: String,
    /// The manufacturer-assigned serial number. Read-only.
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    /// The manufacturer part number. Read-only.
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    /// The user-assigned asset tag. Writable.
    #[serde(rename = "AssetTag")]
    pub asset_tag: String,
    /// The state of the chassis indicator LED. Writable.
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: IndicatorLed,
    /// The health of the chassis.
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Thermal")]
    thermal: Link,
    #[serde(rename = "Power")]
    power: Link,
    #[serde(rename = "Links")]
    links: ChassisLinks,
    #[serde(rename = "Actions")]
    actions: ChassisActions,
}

impl Resource for Chassis {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Updatable for Chassis {
    fn writable_fields() -> &'static [WritableField<Self>] {
        const FIELDS: &[WritableField<Chassis>] = &[
            WritableField {
                key: "AssetTag",
                value: |chassis| json!(chassis.asset_tag),
            },
            WritableField {
                key: "IndicatorLED",
                value: |chassis| json!(chassis.indicator_led),
            },
        ];
        FIELDS
    }
}

impl Chassis {
    /// Fetch a chassis from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }

    /// The reset types this chassis advertises, empty when the service
    /// declared none.
    pub fn supported_reset_types(&self) -> &[ResetType] {
        &self.actions.reset.allowed_reset_types
    }

    /// Reset the chassis. This shall not reset systems or other contained
    /// resources, although side effects may occur which affect them.
    pub fn reset(&self, reset_type: ResetType) -> RedfishResult<()> {
        ensure_allowed(
            &reset_type,
            &self.actions.reset.allowed_reset_types,
            "Chassis.Reset",
        )?;
        post_action(
            self.entity.client()?,
            "Chassis.Reset",
            &self.actions.reset.target,
            &ResetRequest { reset_type },
        )
    }

    /// The thermal readings for this chassis, when the service exposes them.
    pub fn thermal(&self) -> RedfishResult<Option<Thermal>> {
        get_linked(self.entity.client()?, &self.thermal)
    }

    /// The power readings for this chassis, when the service exposes them.
    pub fn power(&self) -> RedfishResult<Option<Power>> {
        get_linked(self.entity.client()?, &self.power)
    }

    /// The systems contained in this chassis.
    pub fn computer_systems(&self) -> RedfishResult<Vec<ComputerSystem>> {
        let client = self.entity.client()?;
        self.links
            .computer_systems
            .iter()
            .map(|link| get_resource(client, link.as_str()))
            .collect()
    }

    /// The managers of this chassis.
    pub fn managed_by(&self) -> RedfishResult<Vec<Manager>> {
        let client = self.entity.client()?;
        self.links
            .managed_by
            .iter()
            .map(|link| get_resource(client, link.as_str()))
            .collect()
    }
}
