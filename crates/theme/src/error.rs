//! Error types for meltcd-theme

use thiserror::Error;

use crate::Rgb;

/// Errors that can occur while building or reading theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Color literal is not `#rgb` or `#rrggbb`
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Name does not belong to the palette
    #[error("Unknown color token: {0}")]
    UnknownToken(String),

    /// Config color disagrees with the palette
    #[error("Color {token} is {found}, palette has {expected}")]
    ColorMismatch {
        token: String,
        expected: Rgb,
        found: Rgb,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Text is not a rendered `tailwind.config.js` module
    #[error("Malformed config module: {0}")]
    MalformedModule(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
