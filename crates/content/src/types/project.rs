//! Project gallery types.

use serde::{Deserialize, Serialize};

/// Lifecycle badge shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Stable,
    Featured,
    Archived,
}

impl ProjectStatus {
    /// Badge text shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Stable => "Stable",
            Self::Featured => "Featured",
            Self::Archived => "Archived",
        }
    }
}

/// A single entry in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub status: ProjectStatus,
}
