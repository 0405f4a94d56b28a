//! GLFW-based window with an OpenGL context
//!
//! Owns the GLFW library token, the native window and its event receiver.
//! Only key events are polled; everything else the render loop needs is read
//! directly from the window.

use crate::window::{CreationError, KeyEvent, VideoMode, WindowBackend, WindowResult};
use glfw::Context;

/// GLFW window wrapper with an OpenGL context
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwBackend {
    /// Initialize GLFW and create a windowed-mode window
    ///
    /// Window hints are reset to their defaults first, so the context is the
    /// platform's default OpenGL context.
    pub fn create(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)?;

        glfw.default_window_hints();

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(CreationError::WindowCreation)?;

        window.set_key_polling(true);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }
}

impl WindowBackend for GlfwBackend {
    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(|m| m.get_video_mode())
                .map(|mode| VideoMode {
                    width: mode.width,
                    height: mode.height,
                })
        })
    }

    fn position(&self) -> (i32, i32) {
        self.window.get_pos()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn make_context_current(&mut self) {
        self.window.make_current();

        let window = &mut self.window;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = match interval {
            0 => glfw::SwapInterval::None,
            n => glfw::SwapInterval::Sync(n),
        };
        self.glfw.set_swap_interval(interval);
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) -> Vec<KeyEvent> {
        self.glfw.poll_events();

        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::Key(key, scancode, action, modifiers) => Some(KeyEvent {
                    key,
                    scancode,
                    action,
                    modifiers,
                }),
                _ => None,
            })
            .collect()
    }

    fn destroy(self: Box<Self>) {
        let Self { window, events, .. } = *self;

        // Destroying the window first stops GLFW from queueing further events
        drop(window);
        drop(events);
    }
}
