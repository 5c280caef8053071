//! Rotate the credentials of the account used to log in.

use redfish_client::http::HttpConfig;
use redfish_client::resource::{Resource, Updatable};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let username = "my-username";
    let config = HttpConfig::new("https://bmc-ip")?.with_credentials(username, "my-password");
    let api = redfish_client::connect(config)?;

    let service = api.service_root()?;
    let account_service = service.account_service()?;

    for mut account in account_service.accounts()? {
        if account.user_name == username {
            info!(account = account.entity().id(), "rotating credentials");
            account.user_name = "new-username".to_string();
            // The new password must satisfy the MinPasswordLength and
            // MaxPasswordLength rules of the account service.
            account.password = Some("new-password".to_string());
            account.update()?;
        }
    }

    api.logout()?;
    Ok(())
}
