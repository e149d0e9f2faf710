// MIT License - Copyright (c) 2026 visonic-alarm developers
//
//! # visonic-alarm
//!
//! Client for the Visonic PowerManage cloud REST API, used by PowerMaster
//! and PowerMax alarm panels behind monitoring servers such as
//! visonic.tycomonitor.com.
//!
//! The API speaks JSON over HTTPS with two bearer tokens: a user token from
//! account authentication and a per-panel session token from panel login.
//! This crate handles the token lifecycle, negotiates the REST API version,
//! decodes the server's documents into typed views, and classifies its
//! error bodies into [`VisonicError`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use visonic_alarm::{Alarm, ClientConfig, ALL_PARTITIONS};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::builder()
//!         .hostname("visonic.tycomonitor.com")
//!         .app_id("00000000-0000-0000-0000-000000000001")
//!         .build();
//!
//!     let mut alarm = Alarm::new(&config)?;
//!     alarm.authenticate("user@example.com", "secret").await?;
//!     alarm.panel_login("123ABC", "1234").await?;
//!
//!     let status = alarm.status().await?;
//!     println!("panel connected: {}", status.connected);
//!
//!     for device in alarm.devices().await? {
//!         println!("{} ({:?}): {:?}", device.name, device.location, device.kind);
//!     }
//!
//!     let token = alarm.disarm(ALL_PARTITIONS).await?;
//!     println!("disarm process: {}", token);
//!     Ok(())
//! }
//! ```

pub mod alarm;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod rest;

// Re-exports for convenience
pub use alarm::Alarm;
pub use config::{ArmState, ClientConfig, ClientConfigBuilder, RestVersion};
pub use constants::ALL_PARTITIONS;
pub use error::{ApiErrorCode, Result, VisonicError};
pub use model::{
    Camera, ContactState, Device, DeviceKind, Event, FeatureSet, Location, Panel, PanelInfo,
    Partition, ProcessStatus, Status, Trouble, User, WakeupSms,
};
pub use rest::{RestClient, TokenScope};
