//! # Window Configuration
//!
//! Startup parameters for a [`Window`](crate::Window): client area size,
//! title bar text and the initial vsync state. Missing fields in a config
//! file fall back to the defaults.

use super::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Window creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width of the drawing area in pixels
    pub width: u32,
    /// Height of the drawing area in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether buffer swaps wait for the display refresh
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a configuration with vsync enabled
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            vsync: true,
        }
    }

    /// Set the drawing area size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the title bar text
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(800, 600, "gl_window")
    }
}

impl Config for WindowConfig {}
