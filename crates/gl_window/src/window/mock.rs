//! Recording backend for tests
//!
//! Every native call is appended to a shared log so tests can assert on call
//! order after the window has been consumed by `destroy`.

use super::{KeyEvent, VideoMode, WindowBackend};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendCall {
    SetPosition(i32, i32),
    MakeContextCurrent,
    SetSwapInterval(u32),
    SetShouldClose(bool),
    SetTitle(String),
    SwapBuffers,
    PollEvents,
    Destroy,
}

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub calls: Vec<BackendCall>,
    pub video_mode: Option<VideoMode>,
    pub position: (i32, i32),
    pub should_close: bool,
    /// Key events handed out by the next poll
    pub pending_keys: Vec<KeyEvent>,
}

impl MockState {
    pub fn count(&self, call: &BackendCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

pub(crate) type SharedState = Rc<RefCell<MockState>>;

pub(crate) struct MockBackend {
    state: SharedState,
}

impl MockBackend {
    pub fn new(video_mode: Option<VideoMode>) -> (Self, SharedState) {
        let state = Rc::new(RefCell::new(MockState {
            video_mode,
            ..MockState::default()
        }));
        (Self { state: state.clone() }, state)
    }

    pub fn with_screen(width: u32, height: u32) -> (Self, SharedState) {
        Self::new(Some(VideoMode { width, height }))
    }

    fn record(&self, call: BackendCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl WindowBackend for MockBackend {
    fn primary_video_mode(&mut self) -> Option<VideoMode> {
        self.state.borrow().video_mode
    }

    fn position(&self) -> (i32, i32) {
        self.state.borrow().position
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.record(BackendCall::SetPosition(x, y));
        self.state.borrow_mut().position = (x, y);
    }

    fn make_context_current(&mut self) {
        self.record(BackendCall::MakeContextCurrent);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.record(BackendCall::SetSwapInterval(interval));
    }

    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.record(BackendCall::SetShouldClose(should_close));
        self.state.borrow_mut().should_close = should_close;
    }

    fn set_title(&mut self, title: &str) {
        self.record(BackendCall::SetTitle(title.to_string()));
    }

    fn swap_buffers(&mut self) {
        self.record(BackendCall::SwapBuffers);
    }

    fn poll_events(&mut self) -> Vec<KeyEvent> {
        self.record(BackendCall::PollEvents);
        std::mem::take(&mut self.state.borrow_mut().pending_keys)
    }

    fn destroy(self: Box<Self>) {
        self.record(BackendCall::Destroy);
    }
}
