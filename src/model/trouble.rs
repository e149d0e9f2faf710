// MIT License - Copyright (c) 2026 visonic-alarm developers

use serde::Deserialize;

use super::de_title_case_opt;

/// Trouble condition reported by the panel, e.g. an open zone blocking
/// arming or a device with a low battery.
#[derive(Debug, Clone, Deserialize)]
pub struct Trouble {
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub location: Option<String>,
    #[serde(default)]
    pub partitions: Vec<i32>,
    /// Trouble kind ("OPENED", "LOW_BATTERY", ...)
    #[serde(default)]
    pub trouble_type: Option<String>,
    #[serde(default)]
    pub zone: Option<i64>,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub zone_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trouble_fields() {
        let trouble: Trouble = serde_json::from_value(json!({
            "device_type": "ZONE",
            "location": "KITCHEN",
            "partitions": [1],
            "trouble_type": "OPENED",
            "zone": 4,
            "zone_name": "BACK DOOR",
            "zone_type": "PERIMETER"
        }))
        .unwrap();

        assert_eq!(trouble.device_type.as_deref(), Some("ZONE"));
        assert_eq!(trouble.location.as_deref(), Some("Kitchen"));
        assert_eq!(trouble.trouble_type.as_deref(), Some("OPENED"));
        assert_eq!(trouble.zone, Some(4));
        assert_eq!(trouble.zone_name.as_deref(), Some("Back Door"));
    }

    #[test]
    fn test_trouble_minimal() {
        let trouble: Trouble = serde_json::from_value(json!({})).unwrap();
        assert_eq!(trouble.zone, None);
        assert!(trouble.partitions.is_empty());
    }
}
