//! Command-line argument parsing for folio-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Content loading or validation (see `folio_content::loader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for folio-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --typing-speed, --theme)
/// 2. Content file settings (content.yaml)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "folio-tui",
    about = "Terminal portfolio with an animated code showcase",
    version,
    after_help = "Examples:\n  folio-tui\n  folio-tui --content ./content.yaml\n  folio-tui --theme light --typing-speed 20\n  folio-tui --no-loop\n  folio-tui --export portfolio.html\n"
)]
pub struct Cli {
    /// Path to a custom content file
    #[arg(long, short = 'c')]
    pub content: Option<PathBuf>,

    /// Color theme name (github_dark, light, high_contrast, monochrome)
    #[arg(long, short = 't', env = "FOLIO_THEME")]
    pub theme: Option<String>,

    /// Base typing delay per character, in milliseconds
    #[arg(long)]
    pub typing_speed: Option<u64>,

    /// Pause between snippets, in milliseconds
    #[arg(long)]
    pub snippet_pause: Option<u64>,

    /// Stop on the last snippet instead of cycling forever
    #[arg(long)]
    pub no_loop: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Render the portfolio to a static HTML file and exit
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio-tui"]);
        assert!(cli.content.is_none());
        assert!(cli.theme.is_none());
        assert!(cli.typing_speed.is_none());
        assert!(cli.snippet_pause.is_none());
        assert!(!cli.no_loop);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(cli.export.is_none());
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::parse_from([
            "folio-tui",
            "--content",
            "site.yaml",
            "--theme",
            "light",
            "--typing-speed",
            "20",
            "--snippet-pause",
            "5000",
            "--no-loop",
            "--log-dir",
            "/tmp/folio-logs",
            "--export",
            "out.html",
        ]);
        assert_eq!(cli.content, Some(PathBuf::from("site.yaml")));
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert_eq!(cli.typing_speed, Some(20));
        assert_eq!(cli.snippet_pause, Some(5000));
        assert!(cli.no_loop);
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/folio-logs"));
        assert_eq!(cli.export, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["folio-tui", "-c", "c.yaml", "-t", "monochrome"]);
        assert_eq!(cli.content, Some(PathBuf::from("c.yaml")));
        assert_eq!(cli.theme.as_deref(), Some("monochrome"));
    }
}
