//! Built-in portfolio content.
//!
//! Used whenever no content file is present, so the binary always has
//! something to show. A user's own content file replaces all of this.

use crate::types::{
    HeroIdentity, PortfolioContent, Project, ProjectStatus, Skill, SkillGroup, Snippet,
    TypingSettings,
};

const SNIPPET_FETCH_TS: &str = r#"import { useState, useEffect } from 'react';

interface FetchState<T> {
  data: T | null;
  loading: boolean;
  error: Error | null;
}

export function useDataFetching<T>(url: string) {
  const [state, setState] = useState<FetchState<T>>({
    data: null,
    loading: true,
    error: null,
  });

  useEffect(() => {
    const controller = new AbortController();

    async function fetchData() {
      try {
        const response = await fetch(url, { signal: controller.signal });
        if (!response.ok) {
          throw new Error(`HTTP error! Status: ${response.status}`);
        }
        const result = await response.json();
        setState({ data: result, loading: false, error: null });
      } catch (error) {
        setState({ data: null, loading: false, error });
      }
    }

    fetchData(); // re-runs when the url changes

    return () => controller.abort();
  }, [url]);

  return state;
}"#;

const SNIPPET_THEME_TSX: &str = r#"import React, { createContext, useContext, useState } from 'react';

type Theme = 'light' | 'dark' | 'system';

const ThemeContext = createContext<Theme>('system');

export function ThemeProvider({ children }: { children: React.ReactNode }) {
  const [theme, setTheme] = useState<Theme>('system');

  return (
    <ThemeContext.Provider value={theme}>
      {children}
    </ThemeContext.Provider>
  );
}

export function useTheme() {
  const context = useContext(ThemeContext);
  if (context === undefined) {
    throw new Error('useTheme must be used within a ThemeProvider');
  }
  return context;
}"#;

const SNIPPET_DB_PY: &str = r#"import os
import logging
from contextlib import contextmanager
from sqlalchemy import create_engine
from sqlalchemy.orm import sessionmaker

logging.basicConfig(level=logging.INFO)
logger = logging.getLogger(__name__)

DATABASE_URL = os.environ.get('DATABASE_URL', 'sqlite:///app.db')

engine = create_engine(DATABASE_URL, echo=False, pool_pre_ping=True)
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)

@contextmanager
def get_db_session():
    """Context manager for database sessions."""
    session = SessionLocal()
    try:
        yield session
        session.commit()
    except Exception as e:
        session.rollback()
        logger.error(f"Database session error: {e}")
        raise
    finally:
        session.close()"#;

/// Built-in content document.
pub fn default_content() -> PortfolioContent {
    PortfolioContent {
        hero: HeroIdentity {
            name: "Jordan Reyes".to_string(),
            tagline: "Building fast, friendly developer tools.".to_string(),
            roles: vec![
                "Software Engineer".to_string(),
                "UI/UX Developer".to_string(),
                "Full Stack Developer".to_string(),
                "Open Source Contributor".to_string(),
            ],
            github: "github.com/jordanreyes".to_string(),
            email: "jordan@example.dev".to_string(),
        },
        projects: vec![
            Project {
                name: "CodeCraft".to_string(),
                description: "An AI-powered code editor with real-time collaboration \
                              features and intelligent code suggestions."
                    .to_string(),
                stars: 128,
                last_updated: "Last updated 2 days ago".to_string(),
                technologies: vec![
                    "TypeScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                ],
                repo_url: "https://github.com/jordanreyes/codecraft".to_string(),
                status: ProjectStatus::Active,
            },
            Project {
                name: "DevFlow".to_string(),
                description: "Streamlined CI/CD pipeline tool for developers with GitHub \
                              integration and automated deployment."
                    .to_string(),
                stars: 94,
                last_updated: "Last updated 1 week ago".to_string(),
                technologies: vec![
                    "JavaScript".to_string(),
                    "Docker".to_string(),
                    "AWS".to_string(),
                ],
                repo_url: "https://github.com/jordanreyes/devflow".to_string(),
                status: ProjectStatus::Stable,
            },
            Project {
                name: "NeuralCanvas".to_string(),
                description: "An interactive machine learning visualization platform with \
                              advanced data analysis capabilities."
                    .to_string(),
                stars: 212,
                last_updated: "Last updated 3 days ago".to_string(),
                technologies: vec![
                    "Python".to_string(),
                    "TensorFlow".to_string(),
                    "D3.js".to_string(),
                ],
                repo_url: "https://github.com/jordanreyes/neuralcanvas".to_string(),
                status: ProjectStatus::Featured,
            },
        ],
        skill_groups: vec![
            SkillGroup::new(
                "Languages",
                vec![
                    Skill::new("JavaScript", 90),
                    Skill::new("TypeScript", 85),
                    Skill::new("Python", 75),
                    Skill::new("Go", 65),
                ],
            ),
            SkillGroup::new(
                "Frameworks",
                vec![
                    Skill::new("React", 92),
                    Skill::new("Node.js", 80),
                    Skill::new("Next.js", 75),
                    Skill::new("Express", 70),
                ],
            ),
            SkillGroup::new(
                "Tools",
                vec![
                    Skill::new("Git", 95),
                    Skill::new("Docker", 85),
                    Skill::new("Webpack", 80),
                    Skill::new("CI/CD", 75),
                ],
            ),
            SkillGroup::new(
                "Cloud",
                vec![
                    Skill::new("AWS", 88),
                    Skill::new("Firebase", 75),
                    Skill::new("Vercel", 70),
                    Skill::new("GCP", 65),
                ],
            ),
        ],
        snippets: vec![
            Snippet::new(SNIPPET_FETCH_TS, "useDataFetching.ts", "ts"),
            Snippet::new(SNIPPET_THEME_TSX, "ThemeProvider.tsx", "tsx"),
            Snippet::new(SNIPPET_DB_PY, "db.py", "py"),
        ],
        typing: TypingSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_nonempty() {
        let content = default_content();
        assert!(!content.snippets.is_empty());
        assert!(!content.projects.is_empty());
        assert_eq!(content.skill_groups.len(), 4);
    }

    #[test]
    fn test_default_snippets_have_known_languages() {
        for snippet in default_content().snippets {
            assert!(!snippet.code.is_empty());
            assert!(matches!(snippet.language.as_str(), "ts" | "tsx" | "py"));
        }
    }

    #[test]
    fn test_default_content_survives_sanitize() {
        let content = default_content();
        assert_eq!(content.clone().sanitize(), content);
    }
}
