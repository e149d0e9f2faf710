// MIT License - Copyright (c) 2026 visonic-alarm developers

use std::cmp::Ordering;
use std::time::Duration;

use uuid::Uuid;

use crate::constants::{
    DEFAULT_HOSTNAME, DEFAULT_REST_VERSION, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Arm state for partition state-change commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmState {
    /// Partial/stay arm (perimeter only)
    Home,
    /// Full arm
    Away,
    /// Disarm
    Disarm,
}

impl ArmState {
    /// The wire value the server expects in a `set_state` request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Away => "AWAY",
            Self::Disarm => "DISARM",
        }
    }
}

/// REST API version selector.
///
/// The server advertises the versions it supports on its unversioned
/// `version` endpoint; every other endpoint is versioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestVersion {
    /// Highest version the server advertises
    Latest,
    /// A specific version string, e.g. "9.0"
    Exact(String),
}

/// Compare two dotted REST version strings (e.g. "10.0" vs "9.0").
///
/// Parts are compared numerically, so "10.0" sorts above "9.0". When all
/// shared parts are equal, the longer version is greater.
pub fn compare_rest_version(v1: &str, v2: &str) -> Ordering {
    if v1 == v2 {
        return Ordering::Equal;
    }
    let parts1: Vec<u32> = v1.split('.').filter_map(|s| s.parse().ok()).collect();
    let parts2: Vec<u32> = v2.split('.').filter_map(|s| s.parse().ok()).collect();
    let len = parts1.len().min(parts2.len());
    for i in 0..len {
        match parts1[i].cmp(&parts2[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    parts1.len().cmp(&parts2.len())
}

/// Configuration for connecting to a PowerManage server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname (default: visonic.tycomonitor.com). May carry an
    /// explicit scheme; https is assumed when it does not.
    pub hostname: String,
    /// App id sent on authentication; any UUID works, but the server ties
    /// granted panel access to it, so reuse one per installation
    pub app_id: String,
    /// User-Agent header value
    pub user_agent: String,
    /// REST API version used in request paths (default: "9.0")
    pub rest_version: String,
    /// Request timeout (default: 4s)
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            app_id: Uuid::new_v4().to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rest_version: DEFAULT_REST_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder starting from defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = hostname.into();
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config.app_id = app_id.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn rest_version(mut self, version: impl Into<String>) -> Self {
        self.config.rest_version = version.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_rest_version() {
        assert_eq!(compare_rest_version("9.0", "9.0"), Ordering::Equal);
        assert_eq!(compare_rest_version("9.1", "9.0"), Ordering::Greater);
        assert_eq!(compare_rest_version("8.0", "9.0"), Ordering::Less);
        // Numeric compare, not lexicographic
        assert_eq!(compare_rest_version("10.0", "9.0"), Ordering::Greater);
        assert_eq!(compare_rest_version("9.0", "10.0"), Ordering::Less);
        assert_eq!(compare_rest_version("9.0.1", "9.0"), Ordering::Greater);
    }

    #[test]
    fn test_version_sort() {
        let mut versions = vec!["9.0".to_string(), "10.0".to_string(), "8.0".to_string()];
        versions.sort_by(|a, b| compare_rest_version(a, b));
        assert_eq!(versions, vec!["8.0", "9.0", "10.0"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.hostname, "visonic.tycomonitor.com");
        assert_eq!(config.rest_version, "9.0");
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert!(Uuid::parse_str(&config.app_id).is_ok());
    }

    #[test]
    fn test_default_app_id_is_unique() {
        let a = ClientConfig::default();
        let b = ClientConfig::default();
        assert_ne!(a.app_id, b.app_id);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .hostname("alarm.example.com")
            .app_id("00000000-0000-0000-0000-000000000001")
            .rest_version("10.0")
            .timeout(Duration::from_secs(10))
            .build();

        assert_eq!(config.hostname, "alarm.example.com");
        assert_eq!(config.app_id, "00000000-0000-0000-0000-000000000001");
        assert_eq!(config.rest_version, "10.0");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_arm_state_wire_values() {
        assert_eq!(ArmState::Home.as_str(), "HOME");
        assert_eq!(ArmState::Away.as_str(), "AWAY");
        assert_eq!(ArmState::Disarm.as_str(), "DISARM");
    }
}
