//! Reusable rendering widgets.

pub mod code_window;

pub use code_window::render_code_window;
