//! Runtime configuration
//!
//! Read once at startup from `localStorage["meltcd_ui_config"]`. Every field
//! is optional in the stored JSON:
//!
//! ```json
//! { "log_level": "debug", "toast": { "max_visible": 3, "position": "bottom-right" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::{Result, UiError};

/// localStorage key holding the serialized [`UiConfig`]
pub const STORAGE_KEY: &str = "meltcd_ui_config";

/// Console settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub log_level: LogLevel,
    pub toast: ToastConfig,
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from localStorage; a missing entry yields the defaults
    pub fn load() -> Result<Self> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| UiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| UiError::Storage("localStorage unavailable".to_string()))?;

        match storage
            .get_item(STORAGE_KEY)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))?
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

/// Maximum level passed to the browser console subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Notification host settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Oldest toasts are evicted past this many
    pub max_visible: usize,
    pub position: ToastPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: 5,
            position: ToastPosition::TopCenter,
        }
    }
}

/// Where the notification host anchors its stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopCenter,
    TopRight,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Tailwind classes anchoring the host
    pub fn class(&self) -> &'static str {
        match self {
            ToastPosition::TopCenter => "top-4 inset-x-0 flex-col items-center",
            ToastPosition::TopRight => "top-4 right-4 flex-col items-end",
            ToastPosition::BottomCenter => "bottom-4 inset-x-0 flex-col-reverse items-center",
            ToastPosition::BottomRight => "bottom-4 right-4 flex-col-reverse items-end",
        }
    }
}
