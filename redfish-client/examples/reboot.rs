//! Set a one-shot PXE boot override on every system, then force-restart it.

use redfish_client::http::HttpConfig;
use redfish_client::model::{Boot, BootSourceOverrideEnabled, BootSourceOverrideTarget, ResetType};
use redfish_client::resource::Resource;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::metadata::LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    let config = HttpConfig::new("https://bmc-ip")?.with_credentials("my-username", "my-password");
    let api = redfish_client::connect(config)?;

    let service = api.service_root()?;

    for system in service.systems()? {
        info!(system = system.entity().id(), "overriding next boot to PXE");
        system.set_boot(Boot {
            target: BootSourceOverrideTarget::Pxe,
            enabled: BootSourceOverrideEnabled::Once,
            ..Default::default()
        })?;
        system.reset(ResetType::ForceRestart)?;
    }

    api.logout()?;
    Ok(())
}
