//! Content loading.
//!
//! Responsibilities:
//! - Resolve the default content file path (`directories` conventions).
//! - Deserialize a YAML content file into `PortfolioContent`.
//! - Fall back to the built-in defaults when no file exists.
//!
//! Does NOT handle:
//! - CLI flag parsing (see the TUI crate).
//! - Writing content files; the content file is user-authored.
//!
//! Invariants:
//! - Every loaded document passes through `PortfolioContent::sanitize`.
//! - A missing file is not an error; a malformed file is.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::defaults::default_content;
use crate::types::PortfolioContent;

/// Errors from content loading.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// Default content file location, e.g. `~/.config/folio-tui/content.yaml`.
pub fn default_content_path() -> Result<PathBuf, ContentError> {
    let dirs = ProjectDirs::from("dev", "folio-tui", "folio-tui")
        .ok_or(ContentError::NoConfigDir)?;
    Ok(dirs.config_dir().join("content.yaml"))
}

/// Load content from an explicit path.
pub fn load_content_from(path: &Path) -> Result<PortfolioContent, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content: PortfolioContent =
        serde_yaml::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content.sanitize())
}

/// Load content, preferring an explicit path, then the default path, then
/// the built-in defaults.
///
/// An explicit path that fails to load is an error; a missing file at the
/// default path silently falls back to the built-in content.
pub fn load_content(explicit: Option<&Path>) -> Result<PortfolioContent, ContentError> {
    if let Some(path) = explicit {
        tracing::info!(path = %path.display(), "Loading content file");
        return load_content_from(path);
    }

    let path = default_content_path()?;
    if path.exists() {
        tracing::info!(path = %path.display(), "Loading content file");
        load_content_from(&path)
    } else {
        tracing::info!("No content file found, using built-in content");
        Ok(default_content().sanitize())
    }
}
