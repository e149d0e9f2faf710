// MIT License - Copyright (c) 2026 visonic-alarm developers

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::constants::{endpoints, APP_TYPE, HEADER_SESSION_TOKEN, HEADER_USER_TOKEN};
use crate::error::{classify_response, Result, VisonicError};

/// Which authentication tokens a request carries.
///
/// The server hands out two tokens with different lifetimes: a user token
/// from [`RestClient::authenticate`] and a per-panel session token from
/// [`RestClient::panel_login`]. Most endpoints want both; the login
/// endpoints themselves want fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    /// No tokens (authentication, version discovery)
    None,
    /// User token only (panel login)
    UserOnly,
    /// User and session tokens (everything else)
    Full,
}

/// Low-level REST transport for a PowerManage server.
///
/// Owns the HTTP client, the active API version and the two authentication
/// tokens. [`Alarm`](crate::alarm::Alarm) builds the typed operations on
/// top of this; the raw [`get`](RestClient::get) and
/// [`post`](RestClient::post) methods remain available for endpoints the
/// typed surface does not cover.
pub struct RestClient {
    http: reqwest::Client,
    hostname: String,
    app_id: String,
    rest_version: String,
    timeout: Duration,
    user_token: Option<String>,
    session_token: Option<String>,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-us"));

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            hostname: config.hostname.clone(),
            app_id: config.app_id.clone(),
            rest_version: config.rest_version.clone(),
            timeout: config.timeout,
            user_token: None,
            session_token: None,
        })
    }

    /// Server hostname this client talks to.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// App id sent with authentication and panel login.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// REST API version currently used in request paths.
    pub fn rest_version(&self) -> &str {
        &self.rest_version
    }

    /// Switch the API version used in request paths.
    pub fn set_rest_version(&mut self, version: impl Into<String>) {
        self.rest_version = version.into();
    }

    /// User token obtained by [`authenticate`](Self::authenticate), if any.
    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    /// Session token obtained by [`panel_login`](Self::panel_login), if any.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    fn base_url(&self) -> String {
        // The hostname may carry an explicit scheme; https is assumed
        // when it does not.
        if self.hostname.contains("://") {
            format!("{}/rest_api", self.hostname)
        } else {
            format!("https://{}/rest_api", self.hostname)
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        // The version endpoint is the one unversioned path on the server.
        if endpoint == endpoints::VERSION {
            format!("{}/{}", self.base_url(), endpoint)
        } else {
            format!("{}/{}/{}", self.base_url(), self.rest_version, endpoint)
        }
    }

    /// Issue a request and return the decoded JSON body.
    ///
    /// Token headers are attached only when `scope` asks for them and the
    /// token has actually been obtained; an unset token is omitted rather
    /// than sent empty. A 200 with an empty body and any other 2xx both
    /// decode to [`Value::Null`]. Non-2xx statuses are classified into a
    /// [`VisonicError`] from the response body.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        scope: TokenScope,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if scope == TokenScope::Full {
            if let Some(token) = &self.session_token {
                request = request.header(HEADER_SESSION_TOKEN, token);
            }
        }
        if matches!(scope, TokenScope::UserOnly | TokenScope::Full) {
            if let Some(token) = &self.user_token {
                request = request.header(HEADER_USER_TOKEN, token);
            }
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                VisonicError::ConnectionTimeout {
                    hostname: self.hostname.clone(),
                    seconds: self.timeout.as_secs(),
                }
            } else {
                VisonicError::Http(err)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            if status != StatusCode::OK {
                return Ok(Value::Null);
            }
            let text = response.text().await?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        // Best effort on the error body; classification falls back to the
        // bare status when it cannot be read.
        let body = response.text().await.unwrap_or_default();
        Err(classify_response(status.as_u16(), &body))
    }

    /// GET an endpoint.
    pub async fn get(&self, endpoint: &str, scope: TokenScope) -> Result<Value> {
        self.send(Method::GET, endpoint, scope, None).await
    }

    /// POST a JSON body to an endpoint.
    pub async fn post(&self, endpoint: &str, scope: TokenScope, body: &Value) -> Result<Value> {
        self.send(Method::POST, endpoint, scope, Some(body)).await
    }

    /// Fetch the server's version document from the unversioned endpoint.
    ///
    /// Works before any authentication; the reply lists the REST versions
    /// the server supports under `rest_versions`.
    pub async fn version_info(&self) -> Result<Value> {
        self.get(endpoints::VERSION, TokenScope::None).await
    }

    /// Exchange account credentials for a user token.
    ///
    /// On success the token is stored and attached to every subsequent
    /// request that allows it.
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<()> {
        debug!("Authenticating {} with {}", email, self.hostname);
        let body = json!({
            "email": email,
            "password": password,
            "app_id": self.app_id,
        });
        let reply = self.post(endpoints::AUTH, TokenScope::None, &body).await?;
        match reply.get("user_token").and_then(Value::as_str) {
            Some(token) => {
                self.user_token = Some(token.to_string());
                info!("Authenticated {} with {}", email, self.hostname);
                Ok(())
            }
            None => Err(VisonicError::UnexpectedResponse {
                details: "authentication reply carried no user_token".to_string(),
            }),
        }
    }

    /// Log in to one panel and obtain a session token.
    ///
    /// Requires a prior [`authenticate`](Self::authenticate); the request
    /// carries the user token but no session token. `user_code` is the
    /// master user pin configured on the panel itself.
    pub async fn panel_login(&mut self, panel_serial: &str, user_code: &str) -> Result<()> {
        debug!("Logging in to panel {}", panel_serial);
        let body = json!({
            "user_code": user_code,
            "app_type": APP_TYPE,
            "app_id": self.app_id,
            "panel_serial": panel_serial,
        });
        let reply = self
            .post(endpoints::PANEL_LOGIN, TokenScope::UserOnly, &body)
            .await?;
        match reply.get("session_token").and_then(Value::as_str) {
            Some(token) => {
                self.session_token = Some(token.to_string());
                info!("Panel {} session established", panel_serial);
                Ok(())
            }
            None => Err(VisonicError::UnexpectedResponse {
                details: "panel login reply carried no session_token".to_string(),
            }),
        }
    }
}
