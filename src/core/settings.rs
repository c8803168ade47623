use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{PackError, PackResult};

const APP_DIR_NAME: &str = "packwriter";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveCompression {
    Stored,
    Deflated,
}

/// Output options for a pack build, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WriterSettings {
    /// Indent JSON documents. Whitespace only; keys and values are unchanged.
    pub pretty: bool,
    pub compression: ArchiveCompression,
    /// Zip compression level, `None` for the method's default.
    pub compression_level: Option<i64>,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            pretty: false,
            compression: ArchiveCompression::Deflated,
            compression_level: None,
        }
    }
}

impl WriterSettings {
    /// `<config dir>/packwriter/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(SETTINGS_FILE)
    }

    pub fn load(path: &Path) -> PackResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like [`load`](Self::load) but falls back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> PackResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PackError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
