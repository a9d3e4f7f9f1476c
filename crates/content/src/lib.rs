//! Portfolio content for folio-tui.
//!
//! This crate provides the typed content model (snippets, projects,
//! skills, hero identity), the color themes, and the loader that reads
//! a content file or falls back to the built-in defaults.

pub mod constants;
pub mod defaults;
mod loader;
pub mod types;

pub use loader::{ContentError, default_content_path, load_content, load_content_from};
pub use types::{
    ColorTheme, HeroIdentity, PortfolioContent, Project, ProjectStatus, Skill, SkillGroup,
    Snippet, Theme, TypingSettings,
};
