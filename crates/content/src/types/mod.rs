//! Typed content model for the portfolio.

mod hero;
mod portfolio;
mod project;
mod skill;
mod snippet;
mod theme;

pub use hero::HeroIdentity;
pub use portfolio::{PortfolioContent, TypingSettings};
pub use project::{Project, ProjectStatus};
pub use skill::{Skill, SkillGroup};
pub use snippet::Snippet;
pub use theme::{ColorTheme, Theme};
