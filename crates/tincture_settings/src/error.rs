//! # Settings Error Types
//!
//! All errors that can occur while binding colors to settings.

use thiserror::Error;
use tincture_color::ColorError;

/// Errors that can occur in the settings layer.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The source offers no change listener that can be registered.
    #[error("settings source cannot register a change listener for {key:?}")]
    UnsupportedListener {
        /// Key the binding was requested for.
        key: String,
    },

    /// The source has no value for the key.
    #[error("setting not found: {0}")]
    MissingKey(String),

    /// The stored value is not a usable color.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Settings file is not valid TOML.
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings file could not be read.
    #[error("settings file unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
