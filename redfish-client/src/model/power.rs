//! Power readings of a chassis.

use serde::Deserialize;

use crate::model::common::Status;
use crate::resource::{Entity, Resource};

/// Power consumption and limits for a power domain.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PowerControl {
    /// The identifier of this domain within the power resource.
    #[serde(rename = "MemberId")]
    pub member_id: String,
    /// The domain name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The power currently consumed, in watts.
    #[serde(rename = "PowerConsumedWatts")]
    pub power_consumed_watts: Option<f64>,
    /// The total power capacity available, in watts.
    #[serde(rename = "PowerCapacityWatts")]
    pub power_capacity_watts: Option<f64>,
}

/// One power supply of a chassis.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PowerSupply {
    /// The identifier of this supply within the power resource.
    #[serde(rename = "MemberId")]
    pub member_id: String,
    /// The supply name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The capacity of the supply, in watts.
    #[serde(rename = "PowerCapacityWatts")]
    pub power_capacity_watts: Option<f64>,
    /// The measured line input voltage.
    #[serde(rename = "LineInputVoltage")]
    pub line_input_voltage: Option<f64>,
    /// The health of the supply.
    #[serde(rename = "Status")]
    pub status: Status,
}

/// The power readings and supplies of a chassis. Read-only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Power {
    #[serde(flatten)]
    entity: Entity,
    /// The power domains of the chassis.
    #[serde(rename = "PowerControl")]
    pub power_control: Vec<PowerControl>,
    /// The power supplies of the chassis.
    #[serde(rename = "PowerSupplies")]
    pub power_supplies: Vec<PowerSupply>,
}

impl Resource for Power {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
