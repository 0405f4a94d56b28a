//! Window management
//!
//! The window subsystem is split in two layers:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Render loop                 │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public handle (handle.rs)
//!         └─────┬─────┘
//!               │ Owns
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Native calls (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ opengl::GlfwBackend   │ ← GLFW + OpenGL (opengl/window.rs)
//!   └───────────────────────┘
//! ```
//!
//! The handle keeps the state GLFW does not hold for us (the vsync flag and the
//! key observer) and forwards everything else to the backend. Tests swap the
//! backend for a recording mock.

pub mod backend;
pub mod handle;

#[cfg(test)]
pub(crate) mod mock;

use thiserror::Error;

pub use backend::WindowBackend;
pub use handle::{centered_position, close_on_escape, Window};

/// Window creation errors
#[derive(Error, Debug)]
pub enum CreationError {
    /// The windowing library could not be initialized (no display, missing driver)
    #[error("GLFW initialization failed: {0}")]
    Init(#[from] glfw::InitError),

    /// The native window or its OpenGL context could not be created
    #[error("Window creation failed")]
    WindowCreation,

    /// Width or height was zero
    #[error("Invalid window size {width}x{height}, both dimensions must be positive")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Result type for window creation
pub type WindowResult<T> = Result<T, CreationError>;

/// Resolution reported by a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Horizontal resolution in screen coordinates
    pub width: u32,
    /// Vertical resolution in screen coordinates
    pub height: u32,
}

/// A key transition delivered by the event poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// Logical key
    pub key: glfw::Key,
    /// Platform-specific scancode
    pub scancode: glfw::Scancode,
    /// Press, release or repeat
    pub action: glfw::Action,
    /// Modifier keys held during the transition
    pub modifiers: glfw::Modifiers,
}

impl KeyEvent {
    /// Key event without scancode or modifiers
    pub fn new(key: glfw::Key, action: glfw::Action) -> Self {
        Self {
            key,
            scancode: 0,
            action,
            modifiers: glfw::Modifiers::empty(),
        }
    }
}
