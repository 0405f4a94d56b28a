//! Native window operations
//!
//! This trait is the seam between [`Window`](super::Window) and the windowing
//! library. It lists exactly the native calls the handle needs and nothing
//! more.
//!
//! # Thread Safety
//! Implementations are not required to be `Send`. GLFW windows and their
//! OpenGL contexts must stay on the thread that created them.

use super::{KeyEvent, VideoMode};

/// Backend contract for a single native window with a rendering context
pub trait WindowBackend {
    /// Resolution of the primary monitor, if one is connected
    fn primary_video_mode(&mut self) -> Option<VideoMode>;

    /// Current position of the window's top-left corner in screen coordinates
    fn position(&self) -> (i32, i32);

    /// Move the window's top-left corner to the given screen coordinates
    fn set_position(&mut self, x: i32, y: i32);

    /// Bind the window's rendering context to the calling thread
    ///
    /// OpenGL function pointers are loaded here, so GL calls are valid once
    /// this returns.
    fn make_context_current(&mut self);

    /// Number of display refreshes to wait between buffer swaps
    ///
    /// `0` disables vsync.
    fn set_swap_interval(&mut self, interval: u32);

    /// Whether a close has been requested
    fn should_close(&self) -> bool;

    /// Request or cancel window closure
    fn set_should_close(&mut self, should_close: bool);

    /// Set the title bar text
    fn set_title(&mut self, title: &str);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending OS events and return the key transitions they produced
    fn poll_events(&mut self) -> Vec<KeyEvent>;

    /// Release the native window and stop event delivery
    fn destroy(self: Box<Self>);
}
