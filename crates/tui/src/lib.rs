//! folio-tui Library
//!
//! This library provides the application logic, the typing animator and
//! syntax highlighter core, and the UI components for the terminal
//! portfolio.

pub mod action;
pub mod app;
pub mod cli;
pub mod export;
pub mod runtime;
pub mod syntax;
pub mod typing;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, CurrentScreen};
pub use typing::{CodeWindowView, Phase, TypingAnimator, TypingConfig};
