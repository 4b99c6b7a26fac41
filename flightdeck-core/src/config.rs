//! Configuration management
//!
//! Settings live in `settings.json` under the flightdeck directory:
//! ```json
//! {
//!   "app": { "demoMode": false, "bookingPolicy": "append-new-entry" }
//! }
//! ```
//! Unmanaged keys are preserved on save.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// How repeated bookings for the same (flight, passenger) pair behave
///
/// Both behaviors are selectable in settings: append a distinct entry per
/// call, or refuse the second booking outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingPolicy {
    /// Each booking call appends a distinct entry (default)
    #[default]
    #[serde(rename = "append-new-entry")]
    AppendNewEntry,
    /// A second booking for an already-booked flight fails
    #[serde(rename = "reject-duplicate")]
    RejectDuplicate,
}

impl fmt::Display for BookingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppendNewEntry => f.write_str("append-new-entry"),
            Self::RejectDuplicate => f.write_str("reject-duplicate"),
        }
    }
}

impl FromStr for BookingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "append-new-entry" => Ok(Self::AppendNewEntry),
            "reject-duplicate" => Ok(Self::RejectDuplicate),
            other => Err(format!(
                "unknown booking policy '{}' (expected append-new-entry or reject-duplicate)",
                other
            )),
        }
    }
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default)]
    booking_policy: BookingPolicy,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Flightdeck configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    pub booking_policy: BookingPolicy,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            booking_policy: BookingPolicy::default(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the flightdeck directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (fd demo on)
    /// 2. Environment variable FLIGHTDECK_DEMO_MODE (for CI/testing)
    pub fn load(flightdeck_dir: &Path) -> Result<Self> {
        let settings_path = flightdeck_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("FLIGHTDECK_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            booking_policy: raw.app.booking_policy,
            _raw_settings: raw,
        })
    }

    /// Save config to the flightdeck directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, flightdeck_dir: &Path) -> Result<()> {
        let settings_path = flightdeck_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.app.booking_policy = self.booking_policy;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }

    pub fn set_booking_policy(&mut self, policy: BookingPolicy) {
        self.booking_policy = policy;
    }
}
