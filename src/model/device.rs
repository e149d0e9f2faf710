// MIT License - Copyright (c) 2026 visonic-alarm developers

use std::fmt;

use serde::{Deserialize, Deserializer};

use super::{de_title_case_opt, title_case, TEXT_UNKNOWN};

/// Warning attached to a device, e.g. an open contact or a low battery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EnabledTrait {
    #[serde(default)]
    enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LocationTrait {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MeteoValue {
    #[serde(default)]
    value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MeteoTrait {
    #[serde(default)]
    brightness: Option<MeteoValue>,
    #[serde(default)]
    temperature: Option<MeteoValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SignalTrait {
    #[serde(default, deserialize_with = "super::de_lenient_string_opt")]
    level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OwnerTrait {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ParentTrait {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    port: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DeviceTraits {
    #[serde(default)]
    bypass: Option<EnabledTrait>,
    #[serde(default)]
    location: Option<LocationTrait>,
    #[serde(default)]
    soak: Option<EnabledTrait>,
    #[serde(default)]
    meteo_info: Option<MeteoTrait>,
    #[serde(default)]
    signal_level: Option<SignalTrait>,
    #[serde(default)]
    owner: Option<OwnerTrait>,
    #[serde(default)]
    parent: Option<ParentTrait>,
}

/// Wire shape of one entry from the devices endpoint.
#[derive(Debug, Clone, Deserialize)]
struct RawDevice {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    device_number: i64,
    #[serde(default)]
    device_type: Option<String>,
    #[serde(default)]
    enrollment_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    partitions: Vec<i32>,
    #[serde(default)]
    preenroll: bool,
    #[serde(default)]
    removable: bool,
    #[serde(default)]
    renamable: bool,
    #[serde(default)]
    subtype: Option<String>,
    #[serde(default)]
    warnings: Option<Vec<Warning>>,
    #[serde(default)]
    zone_type: Option<String>,
    #[serde(default)]
    traits: DeviceTraits,
}

/// State of a contact sensor, derived from its warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Open,
    Closed,
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// Device kind with the extra readings that kind carries.
///
/// Classification follows the `subtype` field first and falls back to
/// `device_type`; anything unrecognized lands in [`DeviceKind::Generic`] so
/// new hardware never breaks the device listing.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    /// Door or window contact (subtype CONTACT or MC303_VANISH)
    Contact {
        /// None when the device carries warnings but none of them is "Open"
        state: Option<ContactState>,
    },
    /// PIR with embedded camera (subtype MOTION_CAMERA)
    Camera,
    /// Smoke detector (subtype SMOKE)
    Smoke,
    /// Keyfob remote (subtype BASIC_KEYFOB or KEYFOB_ARM_LED)
    KeyFob { owner_id: i64, owner_name: String },
    /// PIR with meteo readings (subtype FLAT_PIR_SMART)
    Motion {
        brightness: Option<f64>,
        temperature: Option<f64>,
    },
    /// Cellular module on the panel (device_type GSM)
    Gsm { signal_level: Option<String> },
    /// Programmable output (device_type PGM)
    Pgm { parent_id: i64, parent_port: i64 },
    /// Everything else, including sirens
    Generic,
}

/// One device enrolled on the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: i64,
    pub device_number: i64,
    pub device_type: Option<String>,
    pub enrollment_id: Option<String>,
    /// Device name, "Unknown" when not set
    pub name: String,
    /// Location label, title-cased
    pub location: Option<String>,
    pub partitions: Vec<i32>,
    pub preenroll: bool,
    pub removable: bool,
    pub renamable: bool,
    /// Whether the zone is currently bypassed; None when the panel does not
    /// report a bypass trait for this device
    pub bypass: Option<bool>,
    /// Whether the zone is in soak test
    pub soak: bool,
    /// Raw subtype string, "Unknown" when not set
    pub subtype: String,
    pub warnings: Vec<Warning>,
    pub zone_type: String,
    pub kind: DeviceKind,
}

impl<'de> Deserialize<'de> for Device {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RawDevice::deserialize(deserializer)?.into())
    }
}

fn contact_state(warnings: Option<&Vec<Warning>>) -> Option<ContactState> {
    let warnings = match warnings {
        Some(w) if !w.is_empty() => w,
        _ => return Some(ContactState::Closed),
    };
    warnings
        .iter()
        .any(|w| w.kind == "Open")
        .then_some(ContactState::Open)
}

impl From<RawDevice> for Device {
    fn from(raw: RawDevice) -> Self {
        let traits = &raw.traits;
        let kind = match raw.subtype.as_deref() {
            Some("CONTACT") | Some("MC303_VANISH") => DeviceKind::Contact {
                state: contact_state(raw.warnings.as_ref()),
            },
            Some("MOTION_CAMERA") => DeviceKind::Camera,
            Some("SMOKE") => DeviceKind::Smoke,
            Some("BASIC_KEYFOB") | Some("KEYFOB_ARM_LED") => DeviceKind::KeyFob {
                owner_id: traits.owner.as_ref().and_then(|o| o.id).unwrap_or(0),
                owner_name: traits
                    .owner
                    .as_ref()
                    .and_then(|o| o.name.clone())
                    .unwrap_or_else(|| TEXT_UNKNOWN.to_string()),
            },
            Some("FLAT_PIR_SMART") => DeviceKind::Motion {
                brightness: traits
                    .meteo_info
                    .as_ref()
                    .and_then(|m| m.brightness.as_ref())
                    .and_then(|v| v.value),
                temperature: traits
                    .meteo_info
                    .as_ref()
                    .and_then(|m| m.temperature.as_ref())
                    .and_then(|v| v.value),
            },
            Some("WL_SIREN") => DeviceKind::Generic,
            _ => match raw.device_type.as_deref() {
                Some("GSM") => DeviceKind::Gsm {
                    signal_level: traits.signal_level.as_ref().and_then(|s| s.level.clone()),
                },
                Some("PGM") => DeviceKind::Pgm {
                    parent_id: traits.parent.as_ref().and_then(|p| p.id).unwrap_or(0),
                    parent_port: traits.parent.as_ref().and_then(|p| p.port).unwrap_or(0),
                },
                _ => DeviceKind::Generic,
            },
        };

        Self {
            id: raw.id,
            device_number: raw.device_number,
            device_type: raw.device_type,
            enrollment_id: raw.enrollment_id,
            name: raw.name.unwrap_or_else(|| TEXT_UNKNOWN.to_string()),
            location: raw
                .traits
                .location
                .as_ref()
                .and_then(|l| l.name.as_deref())
                .map(title_case),
            partitions: raw.partitions,
            preenroll: raw.preenroll,
            removable: raw.removable,
            renamable: raw.renamable,
            bypass: raw.traits.bypass.as_ref().map(|b| b.enabled),
            soak: raw.traits.soak.as_ref().map(|s| s.enabled).unwrap_or(false),
            subtype: raw.subtype.unwrap_or_else(|| TEXT_UNKNOWN.to_string()),
            warnings: raw.warnings.unwrap_or_default(),
            zone_type: raw.zone_type.unwrap_or_else(|| TEXT_UNKNOWN.to_string()),
            kind,
        }
    }
}

/// Camera view from the cameras endpoint.
///
/// This is the video-capable subset of the device list, with preview
/// metadata the devices endpoint does not carry.
#[derive(Debug, Clone, Deserialize)]
pub struct Camera {
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub location: Option<String>,
    #[serde(default)]
    pub partitions: Vec<i32>,
    #[serde(default)]
    pub preenroll: bool,
    #[serde(default)]
    pub preview_path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub zone: Option<i64>,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub zone_name: Option<String>,
}
