// MIT License - Copyright (c) 2026 visonic-alarm developers

use serde::Deserialize;

use super::de_title_case_opt;

/// Panel linked to the user account, from the panels endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    pub panel_serial: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// Partition descriptor within the panel info document.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelPartition {
    pub id: i32,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub exit_delay_time: Option<u32>,
    /// Which arm states the partition may be set to
    #[serde(default)]
    pub state_set: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Capability switches within the panel info document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelFeatures {
    #[serde(default)]
    pub video_on_demand: bool,
    #[serde(default)]
    pub alert: bool,
    #[serde(default)]
    pub enabling_siren: bool,
    #[serde(default)]
    pub disabling_siren: bool,
    #[serde(default)]
    pub wi_fi_connection: bool,
    #[serde(default)]
    pub set_date_time: bool,
    #[serde(default)]
    pub outputs_setup: bool,
}

/// General panel information.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelInfo {
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub bypass_mode: Option<String>,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub current_user: Option<String>,
    #[serde(default)]
    pub local_wakeup_needed: bool,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub model: Option<String>,
    /// Whether switching the panel into programming mode remotely needs
    /// acceptance by a local user
    #[serde(
        rename = "remote_switch_to_programming_mode_requires_user_acceptance",
        default
    )]
    pub remote_admin_requires_user_acceptance: bool,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub partitions: Vec<PanelPartition>,
    #[serde(default)]
    pub features: PanelFeatures,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FeatureFlag {
    #[serde(default)]
    is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PartitionsFeature {
    #[serde(default)]
    is_enabled: bool,
    #[serde(default)]
    is_labels_enabled: bool,
    #[serde(default)]
    max_partitions: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SirensFeature {
    #[serde(default)]
    can_enable: bool,
    #[serde(default)]
    can_disable: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StateFeature {
    #[serde(default)]
    is_enabled: bool,
    #[serde(default)]
    can_set: bool,
    #[serde(default)]
    can_get: bool,
}

/// What the current account and panel combination is allowed to do.
///
/// The feature set endpoint groups its switches by area; the accessors
/// flatten the groups and answer false for anything the server left out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    events: Option<FeatureFlag>,
    #[serde(default)]
    datetime: Option<FeatureFlag>,
    #[serde(default)]
    partitions: Option<PartitionsFeature>,
    #[serde(default)]
    devices: Option<FeatureFlag>,
    #[serde(default)]
    sirens: Option<SirensFeature>,
    #[serde(default)]
    home_automation_devices: Option<FeatureFlag>,
    #[serde(default)]
    state: Option<StateFeature>,
    #[serde(default)]
    faults: Option<FeatureFlag>,
    #[serde(default)]
    diagnostic: Option<FeatureFlag>,
    #[serde(default)]
    wifi: Option<FeatureFlag>,
}

impl FeatureSet {
    pub fn events_enabled(&self) -> bool {
        self.events.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn datetime_enabled(&self) -> bool {
        self.datetime.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn partitions_enabled(&self) -> bool {
        self.partitions.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn partitions_has_labels(&self) -> bool {
        self.partitions.as_ref().map(|f| f.is_labels_enabled).unwrap_or(false)
    }

    pub fn partitions_max_count(&self) -> Option<u32> {
        self.partitions.as_ref().and_then(|f| f.max_partitions)
    }

    pub fn devices_enabled(&self) -> bool {
        self.devices.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn sirens_can_enable(&self) -> bool {
        self.sirens.as_ref().map(|f| f.can_enable).unwrap_or(false)
    }

    pub fn sirens_can_disable(&self) -> bool {
        self.sirens.as_ref().map(|f| f.can_disable).unwrap_or(false)
    }

    pub fn home_automation_devices_enabled(&self) -> bool {
        self.home_automation_devices
            .as_ref()
            .map(|f| f.is_enabled)
            .unwrap_or(false)
    }

    pub fn state_enabled(&self) -> bool {
        self.state.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn state_can_set(&self) -> bool {
        self.state.as_ref().map(|f| f.can_set).unwrap_or(false)
    }

    pub fn state_can_get(&self) -> bool {
        self.state.as_ref().map(|f| f.can_get).unwrap_or(false)
    }

    pub fn faults_enabled(&self) -> bool {
        self.faults.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn diagnostic_enabled(&self) -> bool {
        self.diagnostic.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }

    pub fn wifi_enabled(&self) -> bool {
        self.wifi.as_ref().map(|f| f.is_enabled).unwrap_or(false)
    }
}

/// Location registered on the panel.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    /// Location id; the wire field is named "hel_id"
    #[serde(rename = "hel_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_editable: bool,
}

/// Number and message body used to wake the panel up over SMS.
///
/// Panels on power-saving cellular plans drop their server connection;
/// texting this message to this number makes the panel reconnect.
#[derive(Debug, Clone, Deserialize)]
pub struct WakeupSms {
    #[serde(rename = "phone", default)]
    pub phone_number: String,
    #[serde(rename = "sms", default)]
    pub message: String,
}
