//! The service root: the entry point of the resource graph.

use serde::Deserialize;

use crate::error::{RedfishError, RedfishResult};
use crate::http::SharedClient;
use crate::model::{AccountService, Chassis, ComputerSystem, Manager};
use crate::resource::{get_resource, list_referenced, Entity, Link, Resource};

/// The location every Redfish service publishes its root document at.
pub const SERVICE_ROOT_LOCATION: &str = "/redfish/v1/";

/// The root document of a Redfish service, linking to its sub-services.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceRoot {
    #[serde(flatten)]
    entity: Entity,
    /// The protocol version the service implements.
    #[serde(rename = "RedfishVersion")]
    pub redfish_version: String,
    /// The universally unique identifier of the service.
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Systems")]
    systems: Link,
    #[serde(rename = "Chassis")]
    chassis: Link,
    #[serde(rename = "Managers")]
    managers: Link,
    #[serde(rename = "AccountService")]
    account_service: Link,
}

impl Resource for ServiceRoot {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl ServiceRoot {
    /// Fetch the service root.
    pub fn get(client: &SharedClient) -> RedfishResult<Self> {
        get_resource(client, SERVICE_ROOT_LOCATION)
    }

    /// The computer systems of this service.
    pub fn systems(&self) -> RedfishResult<Vec<ComputerSystem>> {
        list_referenced(self.entity.client()?, self.systems.as_str())
    }

    /// The chassis of this service.
    pub fn chassis(&self) -> RedfishResult<Vec<Chassis>> {
        list_referenced(self.entity.client()?, self.chassis.as_str())
    }

    /// The managers of this service.
    pub fn managers(&self) -> RedfishResult<Vec<Manager>> {
        list_referenced(self.entity.client()?, self.managers.as_str())
    }

    /// The account service, when the service exposes one.
    pub fn account_service(&self) -> RedfishResult<AccountService> {
        if self.account_service.is_empty() {
            return Err(RedfishError::MissingLink("AccountService"));
        }
        get_resource(self.entity.client()?, self.account_service.as_str())
    }
}
