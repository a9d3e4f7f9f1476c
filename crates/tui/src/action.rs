//! Actions driving the application state machine.
//!
//! Responsibilities:
//! - Define every state transition the event loop can dispatch.
//!
//! Does NOT handle:
//! - Key-to-action mapping (see `App::handle_input`).
//! - State mutation (see `App::update`).

use crossterm::event::KeyEvent;

/// TUI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raw key press, translated by `App::handle_input`.
    Input(KeyEvent),
    /// UI tick; advances animations.
    Tick,
    /// Terminal resize.
    Resize(u16, u16),
    /// Navigate to the next screen tab.
    NextScreen,
    /// Navigate to the previous screen tab.
    PreviousScreen,
    /// Jump to a screen directly (number keys).
    GoToScreen(crate::app::CurrentScreen),
    /// Skip to the next code snippet, restarting the reveal.
    NextSnippet,
    /// Skip to the previous code snippet, restarting the reveal.
    PreviousSnippet,
    /// Cycle to the next color theme.
    CycleTheme,
    /// Exit the application.
    Quit,
}
