//! GLFW + OpenGL backend

mod window;

pub use window::GlfwBackend;
