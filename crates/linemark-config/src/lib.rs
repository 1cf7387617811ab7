//! Settings for the `linemark` command-line tool, stored as TOML at
//! `~/.config/linemark/config.toml`.
//!
//! ```toml
//! draft_path = "~/notes/draft.md"
//!
//! [preview]
//! source_width = 60
//! export_html = true
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_SOURCE_WIDTH: u16 = 10;
pub const MAX_SOURCE_WIDTH: u16 = 90;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("draft_path {0} is a directory, expected a markdown file")]
    DraftIsDirectory(PathBuf),

    #[error("preview.source_width must be between 10 and 90 percent, got {0}")]
    SourceWidth(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Markdown file the live preview opens when no path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_path: Option<PathBuf>,
    #[serde(default)]
    pub preview: PreviewSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Width of the markdown pane, as a percentage of the terminal.
    pub source_width: u16,
    /// Also write `<draft>.html` whenever the draft is saved.
    pub export_html: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            source_width: 50,
            export_html: false,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        expand(Path::new("~/.config/linemark")).join("config.toml")
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Loads and validates the config at `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.draft_path = config.draft_path.as_deref().map(expand);
        config.validate()?;

        Ok(Some(config))
    }

    /// Validates and writes the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;

        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content.as_bytes())
        };
        write(path).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(draft) = &self.draft_path
            && draft.is_dir()
        {
            return Err(ConfigError::DraftIsDirectory(draft.clone()));
        }

        let width = self.preview.source_width;
        if !(MIN_SOURCE_WIDTH..=MAX_SOURCE_WIDTH).contains(&width) {
            return Err(ConfigError::SourceWidth(width));
        }

        Ok(())
    }
}

/// Expands `~` and `$VAR`, leaving the path untouched if expansion fails.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
