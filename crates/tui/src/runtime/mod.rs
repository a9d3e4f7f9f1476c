//! Runtime support for the event loop.

mod terminal;

pub use terminal::TerminalGuard;
