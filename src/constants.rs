// MIT License - Copyright (c) 2026 visonic-alarm developers

/// Application type reported to the server on panel login.
pub const APP_TYPE: &str = "com.visonic.powermaxapp";

/// Tyco-hosted PowerManage server most installations point at.
pub const DEFAULT_HOSTNAME: &str = "visonic.tycomonitor.com";

/// User agent the official mobile application sends.
pub const DEFAULT_USER_AGENT: &str = "Dart/2.10 (dart:io)";

/// REST API version used until negotiation picks another one.
pub const DEFAULT_REST_VERSION: &str = "9.0";

/// Request timeout in seconds (connect and total).
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

/// Partition id addressing the whole system on single-partition panels.
pub const ALL_PARTITIONS: i32 = -1;

/// Header carrying the panel session token.
pub const HEADER_SESSION_TOKEN: &str = "Session-Token";

/// Header carrying the account user token.
pub const HEADER_USER_TOKEN: &str = "User-Token";

/// REST endpoint paths, relative to `https://{hostname}/rest_api/{version}/`.
///
/// The one exception is [`endpoints::VERSION`], which is served unversioned
/// at `https://{hostname}/rest_api/version`.
pub mod endpoints {
    pub const ACCESS_GRANT: &str = "access/grant";
    pub const ACCESS_REVOKE: &str = "access/revoke";
    pub const ACTIVATE_SIREN: &str = "activate_siren";
    pub const ALARMS: &str = "alarms";
    pub const ALERTS: &str = "alerts";
    pub const AUTH: &str = "auth";
    pub const CAMERAS: &str = "cameras";
    pub const DEVICES: &str = "devices";
    pub const DISABLE_SIREN: &str = "disable_siren";
    pub const EVENTS: &str = "events";
    pub const FEATURE_SET: &str = "feature_set";
    pub const LOCATIONS: &str = "locations";
    pub const NOTIFICATIONS_EMAIL: &str = "notifications/email";
    pub const PANEL_ADD: &str = "panel/add";
    pub const PANEL_INFO: &str = "panel_info";
    pub const PANEL_LOGIN: &str = "panel/login";
    pub const PANEL_RENAME: &str = "panel/rename";
    pub const PANEL_UNLINK: &str = "panel/unlink";
    pub const PANELS: &str = "panels";
    pub const PASSWORD_RESET: &str = "password/reset";
    pub const PASSWORD_RESET_COMPLETE: &str = "password/reset/complete";
    pub const PROCESS_STATUS: &str = "process_status";
    pub const SET_BYPASS_ZONE: &str = "set_bypass_zone";
    pub const SET_NAME: &str = "set_name";
    pub const SET_STATE: &str = "set_state";
    pub const SET_USER_CODE: &str = "set_user_code";
    pub const SMART_DEVICES: &str = "smart_devices";
    pub const SMART_DEVICES_SETTINGS: &str = "smart_devices/settings";
    pub const STATUS: &str = "status";
    pub const TROUBLES: &str = "troubles";
    pub const USERS: &str = "users";
    pub const VERSION: &str = "version";
    pub const WAKEUP_SMS: &str = "wakeup_sms";
}
