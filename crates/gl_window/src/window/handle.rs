//! Window handle for render loops
//!
//! [`Window`] owns one native window and its OpenGL context. A typical frame
//! loop looks like this:
//!
//! ```rust,no_run
//! use gl_window::Window;
//!
//! let mut window = Window::new(800, 600, "Hello", true)?;
//! while !window.is_closing() {
//!     // draw the frame
//!     window.update();
//! }
//! window.destroy();
//! # Ok::<(), gl_window::CreationError>(())
//! ```

use super::{CreationError, KeyEvent, VideoMode, WindowBackend, WindowResult};
use crate::config::WindowConfig;
use crate::opengl::GlfwBackend;

/// Called for every key transition during [`Window::update`]; returning
/// `true` requests window closure.
type KeyObserver = Box<dyn FnMut(&KeyEvent) -> bool>;

/// A native window with a current OpenGL context
///
/// Must be used on the thread that created it. Call [`Window::destroy`] once
/// the render loop ends. Dropping the handle without destroying it still
/// releases the native window through GLFW's own cleanup, but skips the
/// destroy log entry.
pub struct Window {
    backend: Box<dyn WindowBackend>,
    key_observer: KeyObserver,
    vsync: bool,
    width: u32,
    height: u32,
    title: String,
}

impl Window {
    /// Create a centered window with an OpenGL context bound to this thread
    ///
    /// # Arguments
    /// * `width` - Width of the drawing area in pixels
    /// * `height` - Height of the drawing area in pixels
    /// * `title` - Title bar text
    /// * `vsync` - Whether buffer swaps wait for the display refresh
    ///
    /// # Errors
    /// Returns [`CreationError`] if the size is zero or GLFW cannot create the
    /// window or its context.
    pub fn new(width: u32, height: u32, title: &str, vsync: bool) -> WindowResult<Self> {
        Self::from_config(&WindowConfig::new(width, height, title).with_vsync(vsync))
    }

    /// Create a window from a loaded configuration
    pub fn from_config(config: &WindowConfig) -> WindowResult<Self> {
        check_size(config.width, config.height)?;
        let backend = GlfwBackend::create(config.width, config.height, &config.title)?;
        Self::with_backend(Box::new(backend), config)
    }

    /// Wrap an already created native window
    ///
    /// Centers the window on the primary monitor, makes its context current,
    /// applies the vsync setting and installs the escape-to-close observer.
    pub fn with_backend(
        backend: Box<dyn WindowBackend>,
        config: &WindowConfig,
    ) -> WindowResult<Self> {
        check_size(config.width, config.height)?;

        let mut window = Self {
            backend,
            key_observer: Box::new(close_on_escape),
            vsync: config.vsync,
            width: config.width,
            height: config.height,
            title: config.title.clone(),
        };

        window.center_on_primary_monitor();
        window.backend.make_context_current();
        window.apply_swap_interval();

        log::info!(
            "Created window '{}' ({}x{}, vsync {})",
            window.title,
            window.width,
            window.height,
            if window.vsync { "on" } else { "off" }
        );

        Ok(window)
    }

    /// Returns true once a close has been requested, either by the escape key
    /// or by the OS (close button, Alt+F4)
    pub fn is_closing(&self) -> bool {
        self.backend.should_close()
    }

    /// Set the title bar text
    pub fn set_title(&mut self, title: &str) {
        log::debug!("Window title set to '{}'", title);
        self.backend.set_title(title);
        self.title = title.to_string();
    }

    /// Last title set on the window
    ///
    /// GLFW cannot read the title back, so this is the cached value.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Present the rendered frame and process pending events
    ///
    /// Key events are handed to the key observer before this returns. Call
    /// once per frame.
    pub fn update(&mut self) {
        self.backend.swap_buffers();

        for event in self.backend.poll_events() {
            if (self.key_observer)(&event) {
                log::debug!("Close requested by {:?} {:?}", event.key, event.action);
                self.backend.set_should_close(true);
            }
        }
    }

    /// Release the native window and detach the key observer
    ///
    /// Consumes the handle, so the window cannot be used or destroyed again.
    pub fn destroy(self) {
        let Self {
            backend,
            key_observer,
            title,
            ..
        } = self;

        backend.destroy();
        drop(key_observer);

        log::info!("Destroyed window '{}'", title);
    }

    /// Enable or disable vsync, applying the swap interval immediately
    pub fn set_vsync(&mut self, vsync: bool) {
        self.vsync = vsync;
        self.apply_swap_interval();
        log::debug!("VSync {}", if vsync { "enabled" } else { "disabled" });
    }

    /// Whether vsync is enabled
    pub fn is_vsync_enabled(&self) -> bool {
        self.vsync
    }

    /// Current window position in screen coordinates
    pub fn position(&self) -> (i32, i32) {
        self.backend.position()
    }

    /// Drawing area size requested at creation
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn center_on_primary_monitor(&mut self) {
        match self.backend.primary_video_mode() {
            Some(mode) => {
                let (x, y) = centered_position(mode, self.width, self.height);
                self.backend.set_position(x, y);
            }
            None => log::warn!("No primary monitor video mode, keeping default window position"),
        }
    }

    fn apply_swap_interval(&mut self) {
        self.backend.set_swap_interval(u32::from(self.vsync));
    }
}

/// Top-left position that centers a `width` x `height` window on `mode`
///
/// Negative when the window is larger than the screen.
pub fn centered_position(mode: VideoMode, width: u32, height: u32) -> (i32, i32) {
    (half_gap(mode.width, width), half_gap(mode.height, height))
}

/// Default key observer: requests closure when Escape is pressed
pub fn close_on_escape(event: &KeyEvent) -> bool {
    event.key == glfw::Key::Escape && event.action == glfw::Action::Press
}

fn half_gap(screen: u32, window: u32) -> i32 {
    let gap = (i64::from(screen) - i64::from(window)) / 2;
    // Half the difference of two u32 values always fits
    gap as i32
}

fn check_size(width: u32, height: u32) -> WindowResult<()> {
    if width == 0 || height == 0 {
        return Err(CreationError::InvalidSize { width, height });
    }
    Ok(())
}
