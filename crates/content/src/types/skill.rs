//! Skill display types.
//!
//! Invariants:
//! - `percentage` is clamped to 0..=100 at load time via `Skill::sanitize`.

use serde::{Deserialize, Serialize};

/// One named proficiency bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, percentage: u8) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// Clamp the percentage into displayable range.
    pub fn sanitize(mut self) -> Self {
        self.percentage = self.percentage.min(100);
        self
    }
}

/// A titled group of skills (e.g. "Languages", "Tools").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    pub fn new(title: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            title: title.into(),
            skills,
        }
    }

    pub fn sanitize(mut self) -> Self {
        self.skills = self.skills.into_iter().map(Skill::sanitize).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_sanitize_clamps() {
        assert_eq!(Skill::new("Git", 120).sanitize().percentage, 100);
        assert_eq!(Skill::new("Git", 95).sanitize().percentage, 95);
    }

    #[test]
    fn test_group_sanitize_applies_to_all() {
        let group = SkillGroup::new(
            "Tools",
            vec![Skill::new("Git", 255), Skill::new("Docker", 85)],
        )
        .sanitize();
        assert_eq!(group.skills[0].percentage, 100);
        assert_eq!(group.skills[1].percentage, 85);
    }
}
