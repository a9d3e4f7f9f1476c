//! Application state and transitions.

mod core;
mod state;

pub use core::App;
pub use state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
