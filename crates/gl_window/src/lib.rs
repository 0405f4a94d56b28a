//! # gl_window
//!
//! A thin wrapper around a GLFW window and its OpenGL context.
//!
//! ## Features
//!
//! - **Centered creation**: windows open in the middle of the primary monitor
//! - **VSync control**: toggle the swap interval at runtime
//! - **Escape to close**: pressing Escape requests closure during [`Window::update`]
//! - **Config files**: load window settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WindowConfig::default().with_title("Quick Start");
//!     let mut window = Window::from_config(&config)?;
//!
//!     while !window.is_closing() {
//!         window.update();
//!     }
//!
//!     window.destroy();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod foundation;
pub mod opengl;
pub mod window;

pub use config::{Config, ConfigError, WindowConfig};
pub use window::{CreationError, KeyEvent, VideoMode, Window, WindowBackend, WindowResult};

/// Common imports for window users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WindowConfig},
        window::{CreationError, Window, WindowResult},
    };
}
