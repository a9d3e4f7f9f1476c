//! Top-level content document and typing settings.
//!
//! Responsibilities:
//! - Define `PortfolioContent`, the whole deserialized content file.
//! - Define `TypingSettings`, the animator configuration knobs.
//!
//! Does NOT handle:
//! - File IO (see `loader`).
//! - Animation state (see the TUI crate's `typing` module).

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SNIPPET_PAUSE_MS, DEFAULT_TYPING_DELAY_MS};
use crate::types::{HeroIdentity, Project, SkillGroup, Snippet};

/// Animator configuration.
///
/// Invariants:
/// - `typing_delay_ms` of 0 is accepted (instant reveal per tick) but
///   `sanitize` floors the pause at 1 ms so a paused snippet always yields
///   at least one scheduling round before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSettings {
    /// Base delay between revealed characters, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Pause after a full reveal before advancing, in milliseconds.
    #[serde(default = "default_snippet_pause_ms")]
    pub snippet_pause_ms: u64,
    /// Whether to wrap from the last snippet back to the first.
    #[serde(default = "default_loop_snippets")]
    pub loop_snippets: bool,
}

fn default_typing_delay_ms() -> u64 {
    DEFAULT_TYPING_DELAY_MS
}

fn default_snippet_pause_ms() -> u64 {
    DEFAULT_SNIPPET_PAUSE_MS
}

fn default_loop_snippets() -> bool {
    true
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            snippet_pause_ms: DEFAULT_SNIPPET_PAUSE_MS,
            loop_snippets: true,
        }
    }
}

impl TypingSettings {
    /// Enforce invariants on values coming from a content file or the CLI.
    pub fn sanitize(mut self) -> Self {
        if self.snippet_pause_ms == 0 {
            self.snippet_pause_ms = 1;
        }
        self
    }
}

/// Everything the portfolio displays, as one deserialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub hero: HeroIdentity,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub typing: TypingSettings,
}

impl PortfolioContent {
    /// Enforce invariants across the whole document.
    pub fn sanitize(mut self) -> Self {
        self.skill_groups = self
            .skill_groups
            .into_iter()
            .map(SkillGroup::sanitize)
            .collect();
        self.typing = self.typing.sanitize();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_settings_defaults() {
        let settings = TypingSettings::default();
        assert_eq!(settings.typing_delay_ms, 35);
        assert_eq!(settings.snippet_pause_ms, 3000);
        assert!(settings.loop_snippets);
    }

    #[test]
    fn test_typing_settings_sanitize_floors_pause() {
        let settings = TypingSettings {
            snippet_pause_ms: 0,
            ..TypingSettings::default()
        }
        .sanitize();
        assert_eq!(settings.snippet_pause_ms, 1);
    }

    #[test]
    fn test_typing_settings_partial_deserialize() {
        let settings: TypingSettings = serde_yaml::from_str("loop_snippets: false\n").unwrap();
        assert!(!settings.loop_snippets);
        assert_eq!(settings.typing_delay_ms, 35);
    }

    #[test]
    fn test_content_deserialize_hero_only() {
        let content: PortfolioContent =
            serde_yaml::from_str("hero:\n  name: Jane\n  tagline: hi\n").unwrap();
        assert!(content.snippets.is_empty());
        assert!(content.projects.is_empty());
        assert_eq!(content.typing, TypingSettings::default());
    }
}
