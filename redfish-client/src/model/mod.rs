//! The resource catalog: typed declarations over the generic machinery in
//! [`crate::resource`].
//!
//! This is a representative sample of the standard schema, not the full
//! catalog; new resource types follow the same pattern (a struct embedding
//! [`crate::resource::Entity`], a `Resource` impl, and an `Updatable` impl
//! when the schema declares writable fields).

mod account;
mod chassis;
mod common;
mod computer_system;
mod manager;
mod power;
mod role;
mod service_root;
mod thermal;
mod virtual_media;

pub use account::{AccountService, ManagerAccount};
pub use chassis::{Chassis, ChassisType};
pub use common::{Health, IndicatorLed, PowerState, ResetType, State, Status};
pub use computer_system::{
    Boot, BootSourceOverrideEnabled, BootSourceOverrideTarget, ComputerSystem,
};
pub use manager::{Manager, ManagerType};
pub use power::{Power, PowerControl, PowerSupply};
pub use role::{PrivilegeType, Role};
pub use service_root::{ServiceRoot, SERVICE_ROOT_LOCATION};
pub use thermal::{Fan, Temperature, Thermal};
pub use virtual_media::{ConnectedVia, MediaType, VirtualMedia};
