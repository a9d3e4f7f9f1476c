//! Application core state and transitions.
//!
//! Responsibilities:
//! - Own the loaded content, the active screen, the theme and the typing
//!   animator.
//! - Translate key events into actions and apply actions to state.
//!
//! Does NOT handle:
//! - Terminal I/O or the event loop (see `main.rs` and `runtime`).
//! - Rendering (see `ui`).

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_content::{ColorTheme, PortfolioContent, Theme};
use tracing::debug;

use crate::action::Action;
use crate::typing::{TypingAnimator, TypingConfig};

use super::state::CurrentScreen;

/// Top-level application state.
pub struct App {
    pub content: PortfolioContent,
    pub screen: CurrentScreen,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub animator: TypingAnimator,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        content: PortfolioContent,
        color_theme: ColorTheme,
        config: TypingConfig,
        now: Instant,
    ) -> Self {
        let animator = TypingAnimator::new(content.snippets.clone(), config, now);
        Self {
            content,
            screen: CurrentScreen::Hero,
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            animator,
            should_quit: false,
        }
    }

    /// Map a key press to an action. Returns `None` for keys without a
    /// binding.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Right => Some(Action::NextScreen),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PreviousScreen),
            KeyCode::Char('n') => Some(Action::NextSnippet),
            KeyCode::Char('p') => Some(Action::PreviousSnippet),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('1') => Some(Action::GoToScreen(CurrentScreen::Hero)),
            KeyCode::Char('2') => Some(Action::GoToScreen(CurrentScreen::Projects)),
            KeyCode::Char('3') => Some(Action::GoToScreen(CurrentScreen::Skills)),
            KeyCode::Char('4') => Some(Action::GoToScreen(CurrentScreen::Showcase)),
            _ => None,
        }
    }

    /// Apply an action at a given instant. Split out from the event loop
    /// so transitions are testable with synthetic clocks.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Input(key) => {
                if let Some(mapped) = self.handle_input(key) {
                    self.update_at(mapped, now);
                }
            }
            Action::Tick => {
                self.animator.tick(now);
            }
            Action::Resize(_, _) => {}
            Action::NextScreen => {
                self.screen = self.screen.next();
            }
            Action::PreviousScreen => {
                self.screen = self.screen.previous();
            }
            Action::GoToScreen(screen) => {
                self.screen = screen;
            }
            Action::NextSnippet => {
                let count = self.animator.snippet_count();
                if count > 0 {
                    self.animator.jump_to(self.animator.active_index() + 1, now);
                }
            }
            Action::PreviousSnippet => {
                let count = self.animator.snippet_count();
                if count > 0 {
                    self.animator
                        .jump_to(self.animator.active_index() + count - 1, now);
                }
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                debug!(theme = %self.color_theme, "theme cycled");
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Apply an action with the real clock.
    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }
}
