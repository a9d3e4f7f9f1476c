//! Application state types and enums.
//!
//! Responsibilities:
//! - Define the screen navigation enum (`CurrentScreen`).
//! - Define layout constants shared by the render code.
//!
//! Does NOT handle:
//! - State mutations (in the `App` impl).
//! - Rendering (see the `ui` module).

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Current active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Hero,
    Projects,
    Skills,
    Showcase,
}

impl CurrentScreen {
    /// All screens in tab order.
    pub const ALL: [CurrentScreen; 4] = [
        CurrentScreen::Hero,
        CurrentScreen::Projects,
        CurrentScreen::Skills,
        CurrentScreen::Showcase,
    ];

    /// Returns the next screen in cyclic navigation order.
    pub fn next(self) -> Self {
        match self {
            CurrentScreen::Hero => CurrentScreen::Projects,
            CurrentScreen::Projects => CurrentScreen::Skills,
            CurrentScreen::Skills => CurrentScreen::Showcase,
            CurrentScreen::Showcase => CurrentScreen::Hero, // Wrap around
        }
    }

    /// Returns the previous screen in cyclic navigation order.
    pub fn previous(self) -> Self {
        match self {
            CurrentScreen::Hero => CurrentScreen::Showcase, // Wrap around
            CurrentScreen::Projects => CurrentScreen::Hero,
            CurrentScreen::Skills => CurrentScreen::Projects,
            CurrentScreen::Showcase => CurrentScreen::Skills,
        }
    }

    /// Tab title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            CurrentScreen::Hero => "Home",
            CurrentScreen::Projects => "Projects",
            CurrentScreen::Skills => "Skills",
            CurrentScreen::Showcase => "Code",
        }
    }

    /// Position of this screen in `ALL`, for the tab highlight.
    pub fn index(self) -> usize {
        match self {
            CurrentScreen::Hero => 0,
            CurrentScreen::Projects => 1,
            CurrentScreen::Skills => 2,
            CurrentScreen::Showcase => 3,
        }
    }
}
