//! Hub and device configuration

use crate::OutboundQueue;
use serde::{Deserialize, Serialize};

/// Configuration handed to a protocol provider when a connection is opened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Hub instance name, e.g. "myhub"
    pub hub_name: String,
    /// DNS suffix appended to the hub name, e.g. "example-devices.net"
    pub hub_suffix: String,
    /// Device identity; a shared, device-agnostic connection carries none
    pub device: Option<DeviceConfig>,
    /// Optional gateway to connect through instead of the hub endpoint
    pub gateway_hostname: Option<String>,
    /// Outbound messages waiting to be handed to the connection; a shared
    /// connection starts with no queue attached
    #[serde(skip)]
    pub waiting_to_send: Option<OutboundQueue>,
}

impl TransportConfig {
    /// Configuration for a shared connection that devices attach to later
    pub fn shared(hub_name: impl Into<String>, hub_suffix: impl Into<String>) -> Self {
        Self {
            hub_name: hub_name.into(),
            hub_suffix: hub_suffix.into(),
            device: None,
            gateway_hostname: None,
            waiting_to_send: None,
        }
    }

    /// Configuration for a single-device connection
    pub fn for_device(
        hub_name: impl Into<String>,
        hub_suffix: impl Into<String>,
        device: DeviceConfig,
    ) -> Self {
        let mut config = Self::shared(hub_name, hub_suffix);
        config.device = Some(device);
        config
    }

    /// Fully qualified host name of the hub endpoint
    pub fn fully_qualified_name(&self) -> String {
        format!("{}.{}", self.hub_name, self.hub_suffix)
    }
}

/// Identity of one device attaching to the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device identifier, unique within the hub
    pub device_id: String,
    /// Shared-access key, if key authentication is used
    pub device_key: Option<String>,
}

impl DeviceConfig {
    /// Create a device identity without credentials
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            device_key: None,
        }
    }

    /// Attach a shared-access key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.device_key = Some(key.into());
        self
    }
}
