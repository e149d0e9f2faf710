// MIT License - Copyright (c) 2026 visonic-alarm developers

use serde_json::{json, Value};
use tracing::info;

use crate::config::{compare_rest_version, ArmState, ClientConfig, RestVersion};
use crate::constants::endpoints;
use crate::error::{Result, VisonicError};
use crate::model::{
    Camera, Device, Event, FeatureSet, Location, Panel, PanelInfo, ProcessStatus, Status, Trouble,
    User, WakeupSms,
};
use crate::rest::{RestClient, TokenScope};

/// The main public API for one account on a PowerManage server.
///
/// # Example
///
/// ```no_run
/// use visonic_alarm::{Alarm, ClientConfig, ALL_PARTITIONS};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ClientConfig::builder()
///         .hostname("visonic.tycomonitor.com")
///         .app_id("00000000-0000-0000-0000-000000000001")
///         .build();
///
///     let mut alarm = Alarm::new(&config)?;
///     alarm.authenticate("user@example.com", "secret").await?;
///     alarm.panel_login("123ABC", "1234").await?;
///
///     let status = alarm.status().await?;
///     println!("panel connected: {}", status.connected);
///     for partition in &status.partitions {
///         println!("partition {}: {:?}", partition.id, partition.state);
///     }
///
///     let token = alarm.arm_away(ALL_PARTITIONS).await?;
///     for process in alarm.process_status(&token).await? {
///         println!("arm process: {:?}", process.status);
///     }
///     Ok(())
/// }
/// ```
pub struct Alarm {
    rest: RestClient,
}

/// Pull the process token out of a command reply.
fn process_token(reply: &Value) -> Result<String> {
    reply
        .get("process_token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| VisonicError::UnexpectedResponse {
            details: "command reply carried no process_token".to_string(),
        })
}

impl Alarm {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// The underlying REST transport, for raw access.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn rest_mut(&mut self) -> &mut RestClient {
        &mut self.rest
    }

    /// REST API versions the server supports, sorted ascending.
    pub async fn rest_versions(&self) -> Result<Vec<String>> {
        let info = self.rest.version_info().await?;
        let mut versions: Vec<String> = match info.get("rest_versions") {
            Some(list) => serde_json::from_value(list.clone())?,
            None => {
                return Err(VisonicError::UnexpectedResponse {
                    details: "version reply carried no rest_versions".to_string(),
                })
            }
        };
        versions.sort_by(|a, b| compare_rest_version(a, b));
        Ok(versions)
    }

    /// Pick the API version used for all subsequent requests.
    ///
    /// [`RestVersion::Latest`] selects the highest version the server
    /// advertises; [`RestVersion::Exact`] fails with
    /// [`VisonicError::UnsupportedRestVersion`] when the server does not
    /// list it. Returns the version that was selected.
    pub async fn set_rest_version(&mut self, version: RestVersion) -> Result<String> {
        let versions = self.rest_versions().await?;
        let chosen = match version {
            RestVersion::Latest => {
                versions
                    .last()
                    .cloned()
                    .ok_or_else(|| VisonicError::UnexpectedResponse {
                        details: "server advertised no rest_versions".to_string(),
                    })?
            }
            RestVersion::Exact(wanted) => {
                if versions.iter().any(|v| v == &wanted) {
                    wanted
                } else {
                    return Err(VisonicError::UnsupportedRestVersion { version: wanted });
                }
            }
        };
        info!("Using REST API version {}", chosen);
        self.rest.set_rest_version(chosen.clone());
        Ok(chosen)
    }

    /// Authenticate the account and store the user token.
    ///
    /// Negotiates the latest API version the server supports before
    /// sending the credentials.
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<()> {
        self.set_rest_version(RestVersion::Latest).await?;
        self.rest.authenticate(email, password).await
    }

    /// Log in to one panel and store the session token.
    pub async fn panel_login(&mut self, panel_serial: &str, user_code: &str) -> Result<()> {
        self.rest.panel_login(panel_serial, user_code).await
    }

    /// Whether the stored tokens still let us read the panel.
    ///
    /// Probes the status endpoint; an authentication failure answers false,
    /// anything else (network trouble, server errors) propagates.
    pub async fn is_logged_in(&self) -> Result<bool> {
        match self.status().await {
            Ok(_) => Ok(true),
            Err(err) if err.needs_relogin() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Whether the server currently holds a connection to the panel.
    pub async fn connected(&self) -> Result<bool> {
        Ok(self.status().await?.connected)
    }

    /// Current panel status: connection channels, partitions, signal.
    pub async fn status(&self) -> Result<Status> {
        let reply = self.rest.get(endpoints::STATUS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// All devices enrolled on the panel, classified by kind.
    pub async fn devices(&self) -> Result<Vec<Device>> {
        let reply = self.rest.get(endpoints::DEVICES, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Video-capable devices with their preview metadata.
    pub async fn cameras(&self) -> Result<Vec<Camera>> {
        let reply = self.rest.get(endpoints::CAMERAS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// The panel event log, most recent last.
    pub async fn events(&self) -> Result<Vec<Event>> {
        let reply = self.rest.get(endpoints::EVENTS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Open troubles, e.g. zones blocking arming.
    pub async fn troubles(&self) -> Result<Vec<Trouble>> {
        let reply = self.rest.get(endpoints::TROUBLES, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Panel users. Only a master user sees the full list.
    pub async fn users(&self) -> Result<Vec<User>> {
        let reply = self.rest.get(endpoints::USERS, TokenScope::Full).await?;
        match reply.get("users") {
            Some(users) => Ok(serde_json::from_value(users.clone())?),
            None => Err(VisonicError::UnexpectedResponse {
                details: "users reply carried no users list".to_string(),
            }),
        }
    }

    /// Locations configured on the panel.
    pub async fn locations(&self) -> Result<Vec<Location>> {
        let reply = self.rest.get(endpoints::LOCATIONS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// General information about the panel hardware.
    pub async fn panel_info(&self) -> Result<PanelInfo> {
        let reply = self.rest.get(endpoints::PANEL_INFO, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Panels linked to this account.
    pub async fn panels(&self) -> Result<Vec<Panel>> {
        let reply = self.rest.get(endpoints::PANELS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// What this account and panel combination may do.
    pub async fn feature_set(&self) -> Result<FeatureSet> {
        let reply = self.rest.get(endpoints::FEATURE_SET, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Number and message that wake the panel up over SMS.
    pub async fn wakeup_sms(&self) -> Result<WakeupSms> {
        let reply = self.rest.get(endpoints::WAKEUP_SMS, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Poll the processes behind a command token.
    pub async fn process_status(&self, process_token: &str) -> Result<Vec<ProcessStatus>> {
        let endpoint = format!("{}?process_tokens={}", endpoints::PROCESS_STATUS, process_token);
        let reply = self.rest.get(&endpoint, TokenScope::Full).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Active alarms, as the raw server document.
    pub async fn alarms(&self) -> Result<Value> {
        self.rest.get(endpoints::ALARMS, TokenScope::Full).await
    }

    /// Active alerts, as the raw server document.
    pub async fn alerts(&self) -> Result<Value> {
        self.rest.get(endpoints::ALERTS, TokenScope::Full).await
    }

    /// Smart home devices, as the raw server document.
    pub async fn smart_devices(&self) -> Result<Value> {
        self.rest.get(endpoints::SMART_DEVICES, TokenScope::Full).await
    }

    /// Smart home device settings, as the raw server document.
    pub async fn smart_devices_settings(&self) -> Result<Value> {
        self.rest
            .get(endpoints::SMART_DEVICES_SETTINGS, TokenScope::Full)
            .await
    }

    /// Email notification settings for this account.
    pub async fn email_notifications(&self) -> Result<Value> {
        self.rest
            .get(endpoints::NOTIFICATIONS_EMAIL, TokenScope::Full)
            .await
    }

    /// Change email notification settings, e.g. "on" or "off".
    pub async fn set_email_notifications(&self, mode: &str) -> Result<Value> {
        let body = json!({ "mode": mode });
        self.rest
            .post(endpoints::NOTIFICATIONS_EMAIL, TokenScope::Full, &body)
            .await
    }

    /// Set the arm state of a partition and return the process token.
    ///
    /// Use [`ALL_PARTITIONS`](crate::constants::ALL_PARTITIONS) on panels
    /// without partitioning.
    pub async fn set_state(&self, partition: i32, state: ArmState) -> Result<String> {
        info!("Setting partition {} to {}", partition, state.as_str());
        let body = json!({ "partition": partition, "state": state.as_str() });
        let reply = self.rest.post(endpoints::SET_STATE, TokenScope::Full, &body).await?;
        process_token(&reply)
    }

    /// Arm a partition in home (stay) mode.
    pub async fn arm_home(&self, partition: i32) -> Result<String> {
        self.set_state(partition, ArmState::Home).await
    }

    /// Arm a partition in away mode.
    pub async fn arm_away(&self, partition: i32) -> Result<String> {
        self.set_state(partition, ArmState::Away).await
    }

    /// Disarm a partition.
    pub async fn disarm(&self, partition: i32) -> Result<String> {
        self.set_state(partition, ArmState::Disarm).await
    }

    /// Sound the siren. Returns the process token.
    pub async fn activate_siren(&self) -> Result<String> {
        info!("Activating siren");
        let reply = self
            .rest
            .post(endpoints::ACTIVATE_SIREN, TokenScope::Full, &json!({}))
            .await?;
        process_token(&reply)
    }

    /// Mute the siren; `mode` is typically "all". Returns the process token.
    pub async fn disable_siren(&self, mode: &str) -> Result<String> {
        info!("Disabling siren ({})", mode);
        let body = json!({ "mode": mode });
        let reply = self
            .rest
            .post(endpoints::DISABLE_SIREN, TokenScope::Full, &body)
            .await?;
        process_token(&reply)
    }

    /// Bypass or unbypass a zone. Returns the process token.
    pub async fn set_bypass_zone(&self, zone: i64, enabled: bool) -> Result<String> {
        info!("Setting bypass on zone {} to {}", zone, enabled);
        let body = json!({ "zone": zone, "set": enabled });
        let reply = self
            .rest
            .post(endpoints::SET_BYPASS_ZONE, TokenScope::Full, &body)
            .await?;
        process_token(&reply)
    }

    /// Change the pin code of a panel user. Returns the process token.
    pub async fn set_user_code(&self, user_id: i64, user_code: &str) -> Result<String> {
        let body = json!({ "user_code": user_code, "user_id": user_id });
        let reply = self
            .rest
            .post(endpoints::SET_USER_CODE, TokenScope::Full, &body)
            .await?;
        process_token(&reply)
    }

    async fn set_name(&self, object_class: &str, id: i64, name: &str) -> Result<String> {
        let body = json!({ "class": object_class, "id": id, "name": name });
        let reply = self.rest.post(endpoints::SET_NAME, TokenScope::Full, &body).await?;
        process_token(&reply)
    }

    /// Rename a panel user. Returns the process token.
    pub async fn set_name_user(&self, user_id: i64, name: &str) -> Result<String> {
        self.set_name("USER", user_id, name).await
    }

    /// Grant another account access to the panel.
    pub async fn access_grant(&self, user_id: i64, email: &str) -> Result<Value> {
        info!("Granting panel access to {}", email);
        let body = json!({ "user": user_id, "email": email });
        self.rest.post(endpoints::ACCESS_GRANT, TokenScope::Full, &body).await
    }

    /// Revoke a previously granted panel access.
    pub async fn access_revoke(&self, user_id: i64) -> Result<Value> {
        info!("Revoking panel access for user {}", user_id);
        let body = json!({ "user": user_id });
        self.rest.post(endpoints::ACCESS_REVOKE, TokenScope::Full, &body).await
    }

    /// Link a panel to this account. Requires the master user code.
    pub async fn panel_add(
        &self,
        alias: &str,
        panel_serial: &str,
        master_user_code: &str,
        access_proof: Option<&str>,
    ) -> Result<Value> {
        info!("Linking panel {} as \"{}\"", panel_serial, alias);
        let body = json!({
            "alias": alias,
            "panel_serial": panel_serial,
            "access_proof": access_proof,
            "master_user_code": master_user_code,
        });
        self.rest.post(endpoints::PANEL_ADD, TokenScope::Full, &body).await
    }

    /// Change the alias of a linked panel.
    pub async fn panel_rename(&self, alias: &str, panel_serial: &str) -> Result<Value> {
        let body = json!({ "panel_serial": panel_serial, "alias": alias });
        self.rest.post(endpoints::PANEL_RENAME, TokenScope::Full, &body).await
    }

    /// Unlink a panel from the account that owns it.
    pub async fn panel_unlink(
        &self,
        panel_serial: &str,
        password: &str,
        app_id: &str,
    ) -> Result<Value> {
        info!("Unlinking panel {}", panel_serial);
        let body = json!({
            "panel_serial": panel_serial,
            "password": password,
            "app_id": app_id,
        });
        self.rest.post(endpoints::PANEL_UNLINK, TokenScope::Full, &body).await
    }

    /// Ask the server to mail a password reset code to `email`.
    pub async fn password_reset(&self, email: &str) -> Result<Value> {
        let body = json!({ "email": email });
        self.rest.post(endpoints::PASSWORD_RESET, TokenScope::Full, &body).await
    }

    /// Finish a password reset with the mailed code.
    ///
    /// Returns the fresh user token the server hands out. The stored
    /// session is left untouched; call
    /// [`authenticate`](Self::authenticate) with the new password to log
    /// back in normally.
    pub async fn password_reset_complete(
        &self,
        reset_password_code: &str,
        new_password: &str,
    ) -> Result<String> {
        let body = json!({
            "reset_password_code": reset_password_code,
            "new_password": new_password,
            "app_id": self.rest.app_id(),
        });
        let reply = self
            .rest
            .post(endpoints::PASSWORD_RESET_COMPLETE, TokenScope::Full, &body)
            .await?;
        reply
            .get("user_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| VisonicError::UnexpectedResponse {
                details: "password reset reply carried no user_token".to_string(),
            })
    }

    /// GET an arbitrary endpoint with the stored tokens attached.
    pub async fn send_get(&self, endpoint: &str) -> Result<Value> {
        self.rest.get(endpoint, TokenScope::Full).await
    }

    /// POST an arbitrary endpoint with the stored tokens attached.
    pub async fn send_post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.rest.post(endpoint, TokenScope::Full, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_token_extraction() {
        let reply = json!({ "process_token": "2ce839ea-5a0b-42fc-9571-acb54bf8a484" });
        assert_eq!(
            process_token(&reply).unwrap(),
            "2ce839ea-5a0b-42fc-9571-acb54bf8a484"
        );
    }

    #[test]
    fn test_process_token_missing() {
        let err = process_token(&json!({})).unwrap_err();
        assert!(matches!(err, VisonicError::UnexpectedResponse { .. }));

        let err = process_token(&Value::Null).unwrap_err();
        assert!(matches!(err, VisonicError::UnexpectedResponse { .. }));
    }

    #[test]
    fn test_alarm_construction() {
        let config = ClientConfig::builder().hostname("example.com").build();
        let alarm = Alarm::new(&config).unwrap();
        assert_eq!(alarm.rest().hostname(), "example.com");
        assert!(alarm.rest().session_token().is_none());
    }
}
