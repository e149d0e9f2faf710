// MIT License - Copyright (c) 2026 visonic-alarm developers

//! Typed views over the JSON documents the REST API returns.
//!
//! Every struct here derives [`serde::Deserialize`] against the wire shape
//! of one endpoint. Fields the server may omit are either `Option` or carry
//! a default; display fields the server reports in panel-style upper case
//! (locations, user names, event labels) are normalized to title case while
//! decoding.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod device;
pub mod event;
pub mod panel;
pub mod status;
pub mod trouble;
pub mod user;

pub use device::{Camera, ContactState, Device, DeviceKind, Warning};
pub use event::Event;
pub use panel::{FeatureSet, Location, Panel, PanelFeatures, PanelInfo, PanelPartition, WakeupSms};
pub use status::{Partition, ProcessStatus, Status};
pub use trouble::Trouble;
pub use user::User;

/// Label used when the server does not report a display value.
pub const TEXT_UNKNOWN: &str = "Unknown";

/// Title-case a display string the way the panel's labels are meant to be
/// shown ("LIVING ROOM" becomes "Living Room").
///
/// Every alphabetic character following a non-alphabetic one is upper-cased,
/// everything else is lower-cased.
pub(crate) fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Deserialize an optional string, normalizing it to title case.
pub(crate) fn de_title_case_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| title_case(&s)))
}

/// Deserialize an optional string from a field the server types loosely.
///
/// Some firmware versions report signal levels as strings ("ok"), others as
/// bare numbers; both decode to a string here.
pub(crate) fn de_lenient_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|v| match v {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("LIVING ROOM"), "Living Room");
        assert_eq!(title_case("kitchen"), "Kitchen");
        assert_eq!(title_case("Back Door"), "Back Door");
        assert_eq!(title_case("GSM-1"), "Gsm-1");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_lenient_string() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "de_lenient_string_opt")]
            level: Option<String>,
        }

        let s: Probe = serde_json::from_value(serde_json::json!({ "level": "ok" })).unwrap();
        assert_eq!(s.level.as_deref(), Some("ok"));

        let n: Probe = serde_json::from_value(serde_json::json!({ "level": 3 })).unwrap();
        assert_eq!(n.level.as_deref(), Some("3"));

        let missing: Probe = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(missing.level, None);

        let null: Probe = serde_json::from_value(serde_json::json!({ "level": null })).unwrap();
        assert_eq!(null.level, None);
    }
}
