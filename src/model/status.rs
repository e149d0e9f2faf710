// MIT License - Copyright (c) 2026 visonic-alarm developers

use serde::Deserialize;
use serde_json::Value;

use super::{de_lenient_string_opt, TEXT_UNKNOWN};

#[derive(Debug, Clone, Default, Deserialize)]
struct ChannelStatus {
    #[serde(default)]
    is_connected: bool,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConnectedStatus {
    #[serde(default)]
    bba: Option<ChannelStatus>,
    #[serde(default)]
    gprs: Option<ChannelStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Discovery {
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    stages: Option<u32>,
    #[serde(default)]
    in_queue: Option<u32>,
    #[serde(default)]
    triggered: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Rssi {
    #[serde(default, deserialize_with = "de_lenient_string_opt")]
    level: Option<String>,
    #[serde(default)]
    network: Option<String>,
}

/// State of one partition within the status document.
#[derive(Debug, Clone, Deserialize)]
pub struct Partition {
    /// Partition id; -1 addresses the whole system on single-partition panels
    pub id: i32,
    /// Arm state ("HOME", "AWAY", "DISARM", "EXIT", ...)
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the partition is ready to arm (no open zones)
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub options: Vec<Value>,
}

/// Panel status as returned by the status endpoint.
///
/// The interesting nested parts (per-channel connection state, enrollment
/// discovery, signal strength) are exposed through accessors that apply the
/// documented fallbacks when the server omits them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    /// Whether the server currently holds a connection to the panel
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    connected_status: Option<ConnectedStatus>,
    #[serde(default)]
    discovery: Option<Discovery>,
    #[serde(default)]
    pub partitions: Vec<Partition>,
    #[serde(default)]
    rssi: Option<Rssi>,
}

impl Status {
    fn bba(&self) -> Option<&ChannelStatus> {
        self.connected_status.as_ref().and_then(|c| c.bba.as_ref())
    }

    fn gprs(&self) -> Option<&ChannelStatus> {
        self.connected_status.as_ref().and_then(|c| c.gprs.as_ref())
    }

    /// Whether the broadband (ethernet) channel is connected.
    pub fn bba_connected(&self) -> bool {
        self.bba().map(|c| c.is_connected).unwrap_or(false)
    }

    /// Broadband channel state, "Unknown" when not reported.
    pub fn bba_state(&self) -> &str {
        self.bba().and_then(|c| c.state.as_deref()).unwrap_or(TEXT_UNKNOWN)
    }

    /// Whether the cellular channel is connected.
    pub fn gprs_connected(&self) -> bool {
        self.gprs().map(|c| c.is_connected).unwrap_or(false)
    }

    /// Cellular channel state, "Unknown" when not reported.
    pub fn gprs_state(&self) -> &str {
        self.gprs().and_then(|c| c.state.as_deref()).unwrap_or(TEXT_UNKNOWN)
    }

    pub fn discovery_completed(&self) -> Option<bool> {
        self.discovery.as_ref().and_then(|d| d.completed)
    }

    pub fn discovery_stages(&self) -> Option<u32> {
        self.discovery.as_ref().and_then(|d| d.stages)
    }

    pub fn discovery_in_queue(&self) -> Option<u32> {
        self.discovery.as_ref().and_then(|d| d.in_queue)
    }

    pub fn discovery_triggered(&self) -> Option<bool> {
        self.discovery.as_ref().and_then(|d| d.triggered)
    }

    /// Cellular signal level, e.g. "ok".
    pub fn rssi_level(&self) -> Option<&str> {
        self.rssi.as_ref().and_then(|r| r.level.as_deref())
    }

    /// Network the signal level refers to.
    pub fn rssi_network(&self) -> Option<&str> {
        self.rssi.as_ref().and_then(|r| r.network.as_deref())
    }
}

/// State of a server-side process spawned by a panel command.
///
/// Commands such as arming do not complete within the request; the server
/// answers with a process token that can be polled through the process
/// status endpoint until the process succeeds or fails.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessStatus {
    #[serde(default)]
    pub token: String,
    /// "start", "handled", "succeeded" or "failed"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
