//! The role resource for user accounts.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::RedfishResult;
use crate::http::SharedClient;
use crate::resource::{get_resource, Entity, Resource, Updatable, WritableField};

/// A privilege a role grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivilegeType {
    /// Can log in to the service and read resources.
    Login,
    /// Can configure managers.
    ConfigureManager,
    /// Can configure users and their accounts.
    ConfigureUsers,
    /// Can change the password for the current user account and log out of
    /// their own sessions.
    ConfigureSelf,
    /// Can configure components that this service manages.
    ConfigureComponents,
    /// Indicates an operation does not require authentication. Not used in
    /// roles.
    NoAuth,
}

/// A set of privileges assignable to user accounts.
///
/// For predefined roles the privilege lists are read-only; custom roles may
/// allow writing them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(flatten)]
    entity: Entity,
    /// A description of this role.
    #[serde(rename = "Description")]
    pub description: String,
    /// The Redfish privileges this role grants. Writable on custom roles.
    #[serde(rename = "AssignedPrivileges")]
    pub assigned_privileges: Vec<PrivilegeType>,
    /// The OEM privileges this role grants. Writable on custom roles.
    #[serde(rename = "OemPrivileges")]
    pub oem_privileges: Vec<String>,
    /// Whether the role is predefined by the service rather than custom.
    #[serde(rename = "IsPredefined")]
    pub is_predefined: bool,
    /// The name of the role, matching its identifier.
    #[serde(rename = "RoleId")]
    pub role_id: String,
}

impl Resource for Role {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Updatable for Role {
    fn writable_fields() -> &'static [WritableField<Self>] {
        const FIELDS: &[WritableField<Role>] = &[
            WritableField {
                key: "AssignedPrivileges",
                value: |role| json!(role.assigned_privileges),
            },
            WritableField {
                key: "OemPrivileges",
                value: |role| json!(role.oem_privileges),
            },
        ];
        FIELDS
    }
}

impl Role {
    /// Fetch a role from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }
}
