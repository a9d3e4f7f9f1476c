//! Code snippet type for the animated showcase.
//!
//! Responsibilities:
//! - Define the `Snippet` record (code, filename, language tag).
//! - Map language tags to human-readable display labels.
//!
//! Does NOT handle:
//! - Typing animation (see the TUI crate's `typing` module).
//! - Syntax highlighting (see the TUI crate's `syntax` module).
//!
//! Invariants:
//! - Snippets are immutable once loaded; the animator references them by
//!   index and never mutates them.

use serde::{Deserialize, Serialize};

/// A labeled block of source text used purely as display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// The source text revealed character by character.
    pub code: String,
    /// Filename shown in the window title bar.
    pub filename: String,
    /// Language tag keying the highlight rule table (e.g. "ts", "py").
    pub language: String,
}

impl Snippet {
    pub fn new(
        code: impl Into<String>,
        filename: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            filename: filename.into(),
            language: language.into(),
        }
    }

    /// Human-readable label for this snippet's language tag.
    pub fn language_label(&self) -> String {
        language_label(&self.language)
    }
}

/// Map a language tag to its display label.
///
/// Unrecognized tags are uppercased verbatim rather than rejected.
pub fn language_label(language: &str) -> String {
    match language {
        "js" => "JavaScript".to_string(),
        "jsx" => "React".to_string(),
        "ts" => "TypeScript".to_string(),
        "tsx" => "React TSX".to_string(),
        "py" => "Python".to_string(),
        "rb" => "Ruby".to_string(),
        "go" => "Go".to_string(),
        "java" => "Java".to_string(),
        "php" => "PHP".to_string(),
        "c" => "C".to_string(),
        "cpp" => "C++".to_string(),
        "cs" => "C#".to_string(),
        "rust" => "Rust".to_string(),
        "swift" => "Swift".to_string(),
        "kotlin" => "Kotlin".to_string(),
        "html" => "HTML".to_string(),
        "css" => "CSS".to_string(),
        "json" => "JSON".to_string(),
        "md" => "Markdown".to_string(),
        "sql" => "SQL".to_string(),
        "sh" => "Shell".to_string(),
        "yml" | "yaml" => "YAML".to_string(),
        "graphql" => "GraphQL".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_labels() {
        assert_eq!(language_label("ts"), "TypeScript");
        assert_eq!(language_label("tsx"), "React TSX");
        assert_eq!(language_label("jsx"), "React");
        assert_eq!(language_label("py"), "Python");
        assert_eq!(language_label("yml"), "YAML");
        assert_eq!(language_label("yaml"), "YAML");
    }

    #[test]
    fn test_unknown_language_label_uppercased() {
        assert_eq!(language_label("zig"), "ZIG");
        assert_eq!(language_label("spl"), "SPL");
        assert_eq!(language_label(""), "");
    }

    #[test]
    fn test_snippet_label_delegates() {
        let snippet = Snippet::new("fn main() {}", "main.rs", "rust");
        assert_eq!(snippet.language_label(), "Rust");
    }

    #[test]
    fn test_snippet_serde_round_trip() {
        let snippet = Snippet::new("let x = 1;", "x.ts", "ts");
        let yaml = serde_yaml::to_string(&snippet).unwrap();
        let back: Snippet = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(snippet, back);
    }
}
