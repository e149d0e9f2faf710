// MIT License - Copyright (c) 2026 visonic-alarm developers

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de_title_case_opt;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry from the panel's event log.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event id; the wire field is named "event"
    #[serde(rename = "event", default)]
    pub id: i64,
    #[serde(default)]
    pub type_id: i64,
    /// Event label ("Disarm", "Arm Away", ...), title-cased
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Who or what triggered the event, title-cased
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub appointment: Option<String>,
    /// Raw server timestamp, "2026-01-10 09:12:44"
    #[serde(default)]
    pub datetime: Option<String>,
    /// Whether video is attached to the event
    #[serde(default)]
    pub video: bool,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub zone: Option<i64>,
    #[serde(default)]
    pub partitions: Vec<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Event {
    /// The event time parsed out of [`datetime`](Self::datetime).
    ///
    /// The server reports panel-local time without an offset, so this is a
    /// naive timestamp. None when the field is missing or malformed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.datetime
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok())
    }
}
