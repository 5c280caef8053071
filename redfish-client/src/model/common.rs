//! Property types shared across the resource catalog.

use serde::{Deserialize, Serialize};

/// The health and provisioning state a resource reports for itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    /// The known state of the resource.
    #[serde(rename = "State")]
    pub state: Option<State>,
    /// The health of the resource itself.
    #[serde(rename = "Health")]
    pub health: Option<Health>,
    /// The worst health of the resource and its dependents.
    #[serde(rename = "HealthRollup")]
    pub health_rollup: Option<Health>,
}

/// Health of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Health {
    /// Normal.
    OK,
    /// A condition requires attention.
    Warning,
    /// A critical condition requires immediate attention.
    Critical,
}

/// Known state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// The resource is enabled.
    Enabled,
    /// The resource is disabled.
    Disabled,
    /// The resource is enabled but awaits an external action to activate it.
    StandbyOffline,
    /// The resource is part of a redundancy set and awaits a failover.
    StandbySpare,
    /// The resource is undergoing testing.
    InTest,
    /// The resource is starting.
    Starting,
    /// The resource is either not present or detected.
    Absent,
    /// The resource is present but cannot be used.
    UnavailableOffline,
    /// The element does not process any commands but queues new requests.
    Deferring,
    /// The element is enabled but only processes a restricted set of
    /// commands.
    Quiesced,
    /// The element is updating and may be unavailable or degraded.
    Updating,
}

/// The power cycle operations a resource can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetType {
    /// Turn on the unit.
    On,
    /// Turn off the unit immediately (non-graceful shutdown).
    ForceOff,
    /// Perform a graceful shutdown and power off.
    GracefulShutdown,
    /// Perform a graceful shutdown followed by a restart of the system.
    GracefulRestart,
    /// Perform an immediate (non-graceful) shutdown, followed by a restart.
    ForceRestart,
    /// Generate a diagnostic interrupt, usually an NMI on x86 systems.
    Nmi,
    /// Turn on the unit immediately.
    ForceOn,
    /// Simulate the pressing of the physical power button on this unit.
    PushPowerButton,
    /// Power cycle the unit.
    PowerCycle,
}

/// The state of the indicator LED.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorLed {
    /// The state of the indicator LED cannot be determined.
    #[default]
    Unknown,
    /// The indicator LED is lit.
    Lit,
    /// The indicator LED is blinking.
    Blinking,
    /// The indicator LED is off.
    Off,
}

/// The power state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    /// The resource is powered on.
    On,
    /// The resource is powered off; components may still have auxiliary
    /// power.
    Off,
    /// A temporary state between off and on.
    PoweringOn,
    /// A temporary state between on and off.
    PoweringOff,
}

/// The wire shape of a reset action declaration: the target to POST to and
/// the reset types the service allows, when it chooses to advertise them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResetAction {
    #[serde(rename = "target")]
    pub(crate) target: String,
    #[serde(rename = "ResetType@Redfish.AllowableValues")]
    pub(crate) allowed_reset_types: Vec<ResetType>,
}

/// The wire shape of an action declaration carrying only a target.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ActionTarget {
    #[serde(rename = "target")]
    pub(crate) target: String,
}

/// The body of a reset action request.
#[derive(Serialize)]
pub(crate) struct ResetRequest {
    #[serde(rename = "ResetType")]
    pub(crate) reset_type: ResetType,
}
