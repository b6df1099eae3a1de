//! Page configuration.
//!
//! Defaults reproduce the page's built-in behavior; a host document can
//! override individual values by embedding a JSON block (see the crate
//! docs). Nothing is ever persisted back.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log verbosity setting for the page scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Page configuration that can be embedded in the host document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Download toast settings
    #[serde(default)]
    pub toast: ToastConfig,

    /// Image lightbox settings
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Download toast section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Id of the download control the toast listens on
    #[serde(default = "default_toast_element_id")]
    pub element_id: String,

    /// Message shown in the toast
    #[serde(default = "default_toast_text")]
    pub text: String,

    /// How long the toast stays on screen, in milliseconds
    #[serde(default = "default_toast_duration")]
    pub duration_ms: u32,
}

fn default_toast_element_id() -> String {
    constants::DOWNLOAD_CONTROL_ID.to_string()
}

fn default_toast_text() -> String {
    constants::DEFAULT_TOAST_TEXT.to_string()
}

fn default_toast_duration() -> u32 {
    constants::DEFAULT_TOAST_DURATION_MS
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            element_id: default_toast_element_id(),
            text: default_toast_text(),
            duration_ms: default_toast_duration(),
        }
    }
}

/// Image lightbox section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Backdrop color behind the enlarged image
    #[serde(default = "default_backdrop")]
    pub backdrop: String,

    /// Maximum image extent, in percent of the viewport per dimension
    #[serde(default = "default_image_max")]
    pub image_max_percent: u8,
}

fn default_backdrop() -> String {
    constants::DEFAULT_BACKDROP.to_string()
}

fn default_image_max() -> u8 {
    constants::DEFAULT_IMAGE_MAX_PERCENT
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            backdrop: default_backdrop(),
            image_max_percent: default_image_max(),
        }
    }
}

impl PageConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            toast: ToastConfig::default(),
            lightbox: LightboxConfig::default(),
        }
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}
