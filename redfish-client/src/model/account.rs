//! The account service and the user accounts it manages.

use serde::Deserialize;
use serde_json::json;

use crate::error::RedfishResult;
use crate::http::SharedClient;
use crate::model::Role;
use crate::resource::{
    get_resource, list_referenced, Entity, Link, Resource, Updatable, WritableField,
};

/// The account service: entry point to the user accounts and roles of the
/// managed system.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountService {
    #[serde(flatten)]
    entity: Entity,
    /// Whether the account service itself is enabled. When disabled, users
    /// cannot be created, deleted or modified.
    #[serde(rename = "ServiceEnabled")]
    pub service_enabled: bool,
    /// The number of failed logins after which an account is locked.
    #[serde(rename = "AccountLockoutThreshold")]
    pub account_lockout_threshold: u64,
    /// The minimum password length the service enforces.
    #[serde(rename = "MinPasswordLength")]
    pub min_password_length: u64,
    /// The maximum password length the service enforces.
    #[serde(rename = "MaxPasswordLength")]
    pub max_password_length: u64,
    #[serde(rename = "Accounts")]
    accounts: Link,
    #[serde(rename = "Roles")]
    roles: Link,
}

impl Resource for AccountService {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl AccountService {
    /// Fetch the account service from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }

    /// The user accounts the service manages.
    pub fn accounts(&self) -> RedfishResult<Vec<ManagerAccount>> {
        list_referenced(self.entity.client()?, self.accounts.as_str())
    }

    /// The roles assignable to user accounts.
    pub fn roles(&self) -> RedfishResult<Vec<Role>> {
        list_referenced(self.entity.client()?, self.roles.as_str())
    }
}

/// A user account of the managed system.
///
/// The service never returns the password; the field decodes as absent and
/// is only ever sent when the caller assigns a new one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ManagerAccount {
    #[serde(flatten)]
    entity: Entity,
    /// The user name. Writable.
    #[serde(rename = "UserName")]
    pub user_name: String,
    /// The account password. Writable; always absent on fetch.
    #[serde(rename = "Password")]
    pub password: Option<String>,
    /// The role assigned to this account. Writable.
    #[serde(rename = "RoleId")]
    pub role_id: String,
    /// Whether the account is enabled. Writable.
    #[serde(rename = "Enabled")]
    pub enabled: bool,
    /// Whether the account is locked out after failed login attempts.
    /// Writable, but the service only accepts clearing it.
    #[serde(rename = "Locked")]
    pub locked: bool,
}

impl Resource for ManagerAccount {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Updatable for ManagerAccount {
    fn writable_fields() -> &'static [WritableField<Self>] {
        const FIELDS: &[WritableField<ManagerAccount>] = &[
            WritableField {
                key: "UserName",
                value: |account| json!(account.user_name),
            },
            WritableField {
                key: "Password",
                value: |account| json!(account.password),
            },
            WritableField {
                key: "RoleId",
                value: |account| json!(account.role_id),
            },
            WritableField {
                key: "Enabled",
                value: |account| json!(account.enabled),
            },
            WritableField {
                key: "Locked",
                value: |account| json!(account.locked),
            },
        ];
        FIELDS
    }
}

impl ManagerAccount {
    /// Fetch a user account from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::http::test::{json_response, MockHttpClientMockall};
    use crate::http::SharedClient;
    use crate::resource::get_resource;

    const ACCOUNT_BODY: &str = r##"{
        "@odata.id": "/redfish/v1/AccountService/Accounts/1",
        "@odata.type": "#ManagerAccount.v1_1_3.ManagerAccount",
        "Id": "1",
        "Name": "User Account",
        "UserName": "operator",
        "Password": null,
        "RoleId": "Operator",
        "Enabled": true,
        "Locked": false
    }"##;

    #[test]
    fn decodes_with_a_null_password() {
        let account: ManagerAccount = serde_json::from_str(ACCOUNT_BODY).unwrap();

        assert_eq!(account.user_name, "operator");
        assert_eq!(account.password, None);
        assert_eq!(account.role_id, "Operator");
        assert!(account.enabled);
        assert!(!account.locked);
    }

    #[test]
    fn credential_rotation_sends_both_changed_fields() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client.should_get("/redfish/v1/AccountService/Accounts/1", ACCOUNT_BODY);
        mock_client
            .expect_patch()
            .withf(|location, body| {
                location == "/redfish/v1/AccountService/Accounts/1"
                    && serde_json::from_slice::<serde_json::Value>(body).unwrap()
                        == json!({"UserName": "admin2", "Password": "hunter2"})
            })
            .once()
            .returning(|_, _| Ok(json_response(http::StatusCode::OK, "{}")));
        let client: SharedClient = Arc::new(mock_client);

        let mut account: ManagerAccount =
            get_resource(&client, "/redfish/v1/AccountService/Accounts/1").unwrap();
        account.user_name = "admin2".to_string();
        account.password = Some("hunter2".to_string());

        assert!(account.update().is_ok());
    }

    #[test]
    fn unchanged_account_commit_is_a_no_op() {
        let mut mock_client = MockHttpClientMockall::new();
        mock_client.should_get("/redfish/v1/AccountService/Accounts/1", ACCOUNT_BODY);
        let client: SharedClient = Arc::new(mock_client);

        let account: ManagerAccount =
            get_resource(&client, "/redfish/v1/AccountService/Accounts/1").unwrap();
        assert!(account.update().is_ok());
    }
}
