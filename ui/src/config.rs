//! Runtime configuration: report destination, export naming and target overrides.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Desktop builds look for `config.json` in the per-user config directory;
//! web builds always run on defaults.
//!
//! ```json
//! {
//!   "messaging": { "phone": "51900000000", "encoding": "utf8" },
//!   "export": { "quoting": "rfc4180" },
//!   "targets": { "taquilleros": { "casillas": 25 } }
//! }
//! ```
//!
//! Status bands and alert thresholds are fixed and deliberately absent here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::value::IndicatorValue;
use crate::core::zones::{IndicatorId, ZoneId};

pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_PHONE: &str = "51984717428";
pub const DEFAULT_FILENAME_PREFIX: &str = "control_inventario";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionConfig {
    pub messaging: MessagingConfig,
    pub export: ExportConfig,
    /// Target overrides keyed by zone, then indicator.
    pub targets: BTreeMap<ZoneId, BTreeMap<IndicatorId, IndicatorValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Deep-link prefix of the messaging service, without trailing slash.
    pub base_url: String,
    /// Destination phone number, digits only, international format.
    pub phone: String,
    pub encoding: MessageEncoding,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            encoding: MessageEncoding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name stem; the inspection date and `.csv` are appended.
    pub filename_prefix: String,
    pub quoting: CsvQuoting,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            quoting: CsvQuoting::default(),
        }
    }
}

/// How the report text is percent-encoded into the deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEncoding {
    /// Each UTF-8 byte is re-read as a Latin-1 code point before encoding.
    /// Matches links produced by the existing web form.
    #[default]
    Latin1Roundtrip,
    /// Plain UTF-8 percent-encoding.
    Utf8,
}

/// Field quoting applied by the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvQuoting {
    /// Fields are joined with commas as-is.
    #[default]
    Verbatim,
    /// Fields containing a comma, quote or newline are quoted.
    Rfc4180,
}

impl InspectionConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.warn_unknown_targets();
        Ok(config)
    }

    /// Effective target for an indicator: the override if present, else the
    /// built-in default. `None` when the zone does not track the indicator.
    pub fn target_for(&self, zone: ZoneId, indicator: IndicatorId) -> Option<IndicatorValue> {
        let default = zone.default_target(indicator)?;
        let configured = self
            .targets
            .get(&zone)
            .and_then(|overrides| overrides.get(&indicator))
            .cloned();
        Some(configured.unwrap_or(default))
    }

    fn warn_unknown_targets(&self) {
        for (zone, overrides) in &self.targets {
            for indicator in overrides.keys() {
                if !zone.has_indicator(*indicator) {
                    warn!(?zone, ?indicator, "ignoring target override for untracked indicator");
                }
            }
        }
    }

    /// Load the user config. Missing or unreadable files fall back to defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = config_path() {
            return Self::load_from(&path);
        }
        Self::default()
    }

    /// Load `path`, falling back to defaults when it is absent or unusable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(path = %path.display(), "no config file found; using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "config unusable; using defaults");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn try_load_from(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading config");
        Self::from_json(&raw).map(Some)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    crate::dispatch::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}
