// MIT License - Copyright (c) 2026 visonic-alarm developers

use std::fmt;

use serde::Deserialize;

/// Numeric reason codes the server embeds in error response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// 10001 - Bad request parameters
    BadRequestParams,
    /// 10002 - User authentication required
    UserAuthRequired,
    /// 10004 - Wrong combination
    WrongCombination,
    /// 10010 - Not allowed
    NotAllowed,
    /// 10020 - Login temporary blocked
    LoginTemporaryBlocked,
    /// 10021 - Wrong user code
    WrongUserCode,
}

impl ApiErrorCode {
    /// Parse a numeric reason code from an error body.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            10001 => Some(Self::BadRequestParams),
            10002 => Some(Self::UserAuthRequired),
            10004 => Some(Self::WrongCombination),
            10010 => Some(Self::NotAllowed),
            10020 => Some(Self::LoginTemporaryBlocked),
            10021 => Some(Self::WrongUserCode),
            _ => None,
        }
    }

    /// The numeric code as sent on the wire.
    pub fn code(&self) -> u32 {
        match self {
            Self::BadRequestParams => 10001,
            Self::UserAuthRequired => 10002,
            Self::WrongCombination => 10004,
            Self::NotAllowed => 10010,
            Self::LoginTemporaryBlocked => 10020,
            Self::WrongUserCode => 10021,
        }
    }

    /// Human-readable description of the reason code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::BadRequestParams => "Bad request parameters",
            Self::UserAuthRequired => "User authentication required",
            Self::WrongCombination => "Wrong combination",
            Self::NotAllowed => "Not allowed",
            Self::LoginTemporaryBlocked => "Login temporary blocked",
            Self::WrongUserCode => "Wrong user code",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Body shape of non-2xx responses.
///
/// ```json
/// {"error": 10004, "error_message": "Wrong combination",
///  "error_reason_code": "WrongCombination",
///  "extras": [{"key": "email", "value": "wrong_combination"}]}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: u32,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub error_reason_code: String,
    #[serde(default)]
    pub extras: Vec<ErrorExtra>,
}

/// One key/value pair from the `extras` list of an error body.
/// Values are strings for parameter problems and numbers for block timers.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorExtra {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// All errors that can occur in the visonic-alarm library.
#[derive(Debug, thiserror::Error)]
pub enum VisonicError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection to {hostname} timed out after {seconds} seconds")]
    ConnectionTimeout { hostname: String, seconds: u64 },

    #[error("Malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response: {details}")]
    UnexpectedResponse { details: String },

    // HTTP 400 taxonomy
    #[error("Panel serial is incorrect")]
    PanelSerialIncorrect,

    #[error("Reset password code is incorrect")]
    ResetPasswordCodeIncorrect,

    #[error("Panel serial is required")]
    PanelSerialRequired,

    #[error("Email address is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,

    #[error("App ID is required")]
    AppIdRequired,

    #[error("User code is required")]
    UserCodeRequired,

    #[error("User has already been granted access")]
    AlreadyGranted,

    #[error("Email address is already linked to a user")]
    AlreadyLinked,

    #[error("New password is not strong enough")]
    NewPasswordStrength,

    #[error("Wrong username or password")]
    WrongUsernameOrPassword,

    #[error("Wrong combination of panel serial and master user code")]
    WrongPanelSerialOrMasterUserCode,

    #[error("User code is incorrect")]
    UserCodeIncorrect,

    #[error("Panel is not connected to the server")]
    PanelNotConnected,

    #[error("Bad request: {body}")]
    BadRequest { body: String },

    // HTTP 401 / 403
    #[error("Unauthorized: {body}")]
    Unauthorized { body: String },

    #[error("Request not allowed")]
    NotAllowed,

    #[error("User authentication required")]
    UserAuthRequired,

    #[error("Forbidden: {body}")]
    Forbidden { body: String },

    // Other statuses
    #[error("Endpoint not found on server")]
    NotFound,

    #[error("Login temporarily blocked ({seconds} seconds remaining)")]
    LoginTemporaryBlocked { seconds: u64 },

    #[error("Session token missing or expired, log in to the panel first")]
    SessionTokenInvalid,

    #[error("Login attempts limit reached")]
    LoginAttemptsLimitReached,

    #[error("Wrong user code")]
    InvalidUserCode,

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("REST API version {version} is not supported by the server")]
    UnsupportedRestVersion { version: String },
}

impl VisonicError {
    /// Whether this error is transient and the request may be retried as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::ConnectionTimeout { .. } => true,
            Self::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the tokens held by the client are no longer accepted and the
    /// authenticate/panel-login flow has to be repeated.
    pub fn needs_relogin(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::UserAuthRequired | Self::SessionTokenInvalid
        )
    }
}

pub type Result<T> = std::result::Result<T, VisonicError>;

/// Map a non-2xx HTTP status plus its response body to the error taxonomy.
///
/// 420/440/442/444 are non-standard statuses of this server and are matched
/// numerically.
pub(crate) fn classify_response(status: u16, body: &str) -> VisonicError {
    match status {
        400 => classify_bad_request(body),
        401 => VisonicError::Unauthorized { body: body.to_string() },
        403 => classify_forbidden(body),
        404 => VisonicError::NotFound,
        420 => VisonicError::LoginTemporaryBlocked { seconds: blocked_seconds(body) },
        440 => VisonicError::SessionTokenInvalid,
        442 => VisonicError::LoginAttemptsLimitReached,
        444 => VisonicError::InvalidUserCode,
        _ => VisonicError::UnexpectedStatus { status, body: body.to_string() },
    }
}

/// Dispatch an HTTP 400 body on its reason code and extras pairs.
fn classify_bad_request(body: &str) -> VisonicError {
    let Ok(api) = serde_json::from_str::<ErrorBody>(body) else {
        return VisonicError::BadRequest { body: body.to_string() };
    };

    match ApiErrorCode::from_code(api.error) {
        Some(ApiErrorCode::BadRequestParams) => {
            for pair in &api.extras {
                let value = pair.value.as_str().unwrap_or_default();
                match (pair.key.as_str(), value) {
                    ("panel_serial", "incorrect") => return VisonicError::PanelSerialIncorrect,
                    ("reset_password_code", "incorrect") => {
                        return VisonicError::ResetPasswordCodeIncorrect
                    }
                    ("panel_serial", "required") => return VisonicError::PanelSerialRequired,
                    ("email", "required") => return VisonicError::EmailRequired,
                    ("password", "required") | ("new_password", "required") => {
                        return VisonicError::PasswordRequired
                    }
                    ("app_id", "required") => return VisonicError::AppIdRequired,
                    ("user_code", "required") => return VisonicError::UserCodeRequired,
                    (_, "already_granted") => return VisonicError::AlreadyGranted,
                    (_, "already_linked") => return VisonicError::AlreadyLinked,
                    ("new_password", _) => return VisonicError::NewPasswordStrength,
                    _ => {}
                }
            }
        }
        Some(ApiErrorCode::WrongCombination) => {
            for pair in &api.extras {
                if pair.value.as_str() == Some("wrong_combination") {
                    match pair.key.as_str() {
                        "email" | "password" => return VisonicError::WrongUsernameOrPassword,
                        "panel_serial" | "master_user_code" => {
                            return VisonicError::WrongPanelSerialOrMasterUserCode
                        }
                        _ => {}
                    }
                }
            }
        }
        Some(ApiErrorCode::WrongUserCode) => return VisonicError::UserCodeIncorrect,
        _ => {
            if api.error == 400 && api.error_reason_code == "PanelNotConnected" {
                return VisonicError::PanelNotConnected;
            }
        }
    }

    VisonicError::BadRequest { body: body.to_string() }
}

fn classify_forbidden(body: &str) -> VisonicError {
    let Ok(api) = serde_json::from_str::<ErrorBody>(body) else {
        return VisonicError::Forbidden { body: body.to_string() };
    };
    match ApiErrorCode::from_code(api.error) {
        Some(ApiErrorCode::NotAllowed) => VisonicError::NotAllowed,
        Some(ApiErrorCode::UserAuthRequired) => VisonicError::UserAuthRequired,
        _ => VisonicError::Forbidden { body: body.to_string() },
    }
}

/// Remaining block time of an HTTP 420 body, from the `timeout` extras key.
fn blocked_seconds(body: &str) -> u64 {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|api| api.extras.into_iter().find(|p| p.key == "timeout"))
        .and_then(|p| p.value.as_u64())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: serde_json::Value) -> String {
        v.to_string()
    }

    #[test]
    fn test_api_error_code_roundtrip() {
        assert_eq!(ApiErrorCode::from_code(10001), Some(ApiErrorCode::BadRequestParams));
        assert_eq!(ApiErrorCode::from_code(10004), Some(ApiErrorCode::WrongCombination));
        assert_eq!(ApiErrorCode::from_code(10021), Some(ApiErrorCode::WrongUserCode));
        assert_eq!(ApiErrorCode::from_code(9999), None);
        assert_eq!(ApiErrorCode::WrongCombination.code(), 10004);
        assert_eq!(ApiErrorCode::NotAllowed.description(), "Not allowed");
        assert_eq!(
            ApiErrorCode::LoginTemporaryBlocked.to_string(),
            "10020: Login temporary blocked"
        );
    }

    #[test]
    fn test_wrong_combination_email() {
        let b = body(json!({
            "error": 10004,
            "error_message": "Wrong combination",
            "error_reason_code": "WrongCombination",
            "extras": [{"key": "email", "value": "wrong_combination"}]
        }));
        assert!(matches!(
            classify_response(400, &b),
            VisonicError::WrongUsernameOrPassword
        ));
    }

    #[test]
    fn test_wrong_combination_master_user_code() {
        let b = body(json!({
            "error": 10004,
            "error_reason_code": "WrongCombination",
            "extras": [{"key": "master_user_code", "value": "wrong_combination"}]
        }));
        assert!(matches!(
            classify_response(400, &b),
            VisonicError::WrongPanelSerialOrMasterUserCode
        ));
    }

    #[test]
    fn test_bad_request_params_required_fields() {
        let cases = [
            ("email", VisonicError::EmailRequired),
            ("password", VisonicError::PasswordRequired),
            ("new_password", VisonicError::PasswordRequired),
            ("app_id", VisonicError::AppIdRequired),
            ("user_code", VisonicError::UserCodeRequired),
            ("panel_serial", VisonicError::PanelSerialRequired),
        ];
        for (key, expected) in cases {
            let b = body(json!({
                "error": 10001,
                "error_reason_code": "BadRequestParams",
                "extras": [{"key": key, "value": "required"}]
            }));
            let got = classify_response(400, &b);
            assert_eq!(
                std::mem::discriminant(&got),
                std::mem::discriminant(&expected),
                "key={key} mapped to {got:?}"
            );
        }
    }

    #[test]
    fn test_bad_request_params_incorrect_panel_serial() {
        let b = body(json!({
            "error": 10001,
            "extras": [{"key": "panel_serial", "value": "incorrect"}]
        }));
        assert!(matches!(classify_response(400, &b), VisonicError::PanelSerialIncorrect));
    }

    #[test]
    fn test_bad_request_params_weak_password() {
        let b = body(json!({
            "error": 10001,
            "extras": [{"key": "new_password", "value": "weak"}]
        }));
        assert!(matches!(classify_response(400, &b), VisonicError::NewPasswordStrength));
    }

    #[test]
    fn test_bad_request_params_already_granted() {
        let b = body(json!({
            "error": 10001,
            "extras": [{"key": "user", "value": "already_granted"}]
        }));
        assert!(matches!(classify_response(400, &b), VisonicError::AlreadyGranted));
    }

    #[test]
    fn test_wrong_user_code() {
        let b = body(json!({"error": 10021, "error_reason_code": "WrongUserCode"}));
        assert!(matches!(classify_response(400, &b), VisonicError::UserCodeIncorrect));
    }

    #[test]
    fn test_panel_not_connected() {
        let b = body(json!({
            "error": 400,
            "error_message": "Bad request",
            "error_reason_code": "PanelNotConnected"
        }));
        assert!(matches!(classify_response(400, &b), VisonicError::PanelNotConnected));
    }

    #[test]
    fn test_undefined_bad_request_falls_through() {
        let b = body(json!({"error": 10099, "error_reason_code": "SomethingNew"}));
        assert!(matches!(classify_response(400, &b), VisonicError::BadRequest { .. }));

        // Non-JSON bodies must not panic either
        assert!(matches!(
            classify_response(400, "<html>nope</html>"),
            VisonicError::BadRequest { .. }
        ));
    }

    #[test]
    fn test_forbidden_dispatch() {
        let not_allowed = body(json!({"error": 10010}));
        assert!(matches!(classify_response(403, &not_allowed), VisonicError::NotAllowed));

        let auth_required = body(json!({"error": 10002}));
        assert!(matches!(
            classify_response(403, &auth_required),
            VisonicError::UserAuthRequired
        ));

        let other = body(json!({"error": 12345}));
        assert!(matches!(classify_response(403, &other), VisonicError::Forbidden { .. }));
    }

    #[test]
    fn test_plain_status_codes() {
        assert!(matches!(classify_response(401, "{}"), VisonicError::Unauthorized { .. }));
        assert!(matches!(classify_response(404, ""), VisonicError::NotFound));
        assert!(matches!(classify_response(440, ""), VisonicError::SessionTokenInvalid));
        assert!(matches!(
            classify_response(442, ""),
            VisonicError::LoginAttemptsLimitReached
        ));
        assert!(matches!(classify_response(444, ""), VisonicError::InvalidUserCode));
    }

    #[test]
    fn test_login_temporary_blocked_seconds() {
        let b = body(json!({
            "error": 10020,
            "error_message": "Login temporary blocked",
            "error_reason_code": "LoginTemporaryBlocked",
            "extras": [{"key": "timeout", "value": 44}]
        }));
        match classify_response(420, &b) {
            VisonicError::LoginTemporaryBlocked { seconds } => assert_eq!(seconds, 44),
            other => panic!("unexpected: {other:?}"),
        }

        // No extras: degrade to zero rather than failing
        match classify_response(420, "{\"error\": 10020}") {
            VisonicError::LoginTemporaryBlocked { seconds } => assert_eq!(seconds, 0),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_status() {
        match classify_response(503, "oops") {
            VisonicError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "oops");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_retryable() {
        assert!(VisonicError::UnexpectedStatus { status: 502, body: String::new() }.is_retryable());
        assert!(!VisonicError::UnexpectedStatus { status: 418, body: String::new() }.is_retryable());
        assert!(VisonicError::ConnectionTimeout {
            hostname: "example.com".into(),
            seconds: 4
        }
        .is_retryable());
        assert!(!VisonicError::WrongUsernameOrPassword.is_retryable());
    }

    #[test]
    fn test_needs_relogin() {
        assert!(VisonicError::SessionTokenInvalid.needs_relogin());
        assert!(VisonicError::UserAuthRequired.needs_relogin());
        assert!(VisonicError::Unauthorized { body: String::new() }.needs_relogin());
        assert!(!VisonicError::NotFound.needs_relogin());
        assert!(!VisonicError::PanelNotConnected.needs_relogin());
    }
}
