//! Thermal readings of a chassis.

use serde::Deserialize;

use crate::model::common::Status;
use crate::resource::{Entity, Resource};

/// One temperature sensor reading.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Temperature {
    /// The identifier of this sensor within the thermal resource.
    #[serde(rename = "MemberId")]
    pub member_id: String,
    /// The sensor name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The current reading in degrees Celsius.
    #[serde(rename = "ReadingCelsius")]
    pub reading_celsius: Option<f64>,
    /// The reading above which the sensor is in a critical condition.
    #[serde(rename = "UpperThresholdCritical")]
    pub upper_threshold_critical: Option<f64>,
    /// The health of the sensor.
    #[serde(rename = "Status")]
    pub status: Status,
}

/// One fan reading.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fan {
    /// The identifier of this fan within the thermal resource.
    #[serde(rename = "MemberId")]
    pub member_id: String,
    /// The fan name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The current speed reading.
    #[serde(rename = "Reading")]
    pub reading: Option<i64>,
    /// The units the reading is reported in, typically RPM or percent.
    #[serde(rename = "ReadingUnits")]
    pub reading_units: Option<String>,
    /// The health of the fan.
    #[serde(rename = "Status")]
    pub status: Status,
}

/// The temperature and cooling readings of a chassis. Read-only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Thermal {
    #[serde(flatten)]
    entity: Entity,
    /// The temperature sensors of the chassis.
    #[serde(rename = "Temperatures")]
    pub temperatures: Vec<Temperature>,
    /// The fans of the chassis.
    #[serde(rename = "Fans")]
    pub fans: Vec<Fan>,
}

impl Resource for Thermal {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_sensor_readings() {
        let body = r#"{
            "@odata.id": "/redfish/v1/Chassis/1/Thermal",
            "Id": "Thermal",
            "Name": "Thermal",
            "Temperatures": [
                {"MemberId": "0", "Name": "CPU1 Temp", "ReadingCelsius": 41.0,
                 "UpperThresholdCritical": 90.0, "Status": {"State": "Enabled", "Health": "OK"}},
                {"MemberId": "1", "Name": "CPU2 Temp", "ReadingCelsius": null}
            ],
            "Fans": [
                {"MemberId": "0", "Name": "BaseBoard System Fan", "Reading": 2100, "ReadingUnits": "RPM"}
            ]
        }"#;

        let thermal: Thermal = serde_json::from_str(body).unwrap();
        assert_eq!(thermal.temperatures.len(), 2);
        assert_eq!(thermal.temperatures[0].reading_celsius, Some(41.0));
        assert_eq!(thermal.temperatures[1].reading_celsius, None);
        assert_eq!(thermal.fans[0].reading, Some(2100));
        assert_eq!(thermal.fans[0].reading_units.as_deref(), Some("RPM"));
    }
}
