//! JSON file storage for palette data.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::palette::PaletteData;
use crate::traits::PaletteStorage;

const CONFIG_DIR_NAME: &str = ".ladle-color-picker";
const PALETTE_FILE_NAME: &str = "palette.json";

/// Errors that can occur while loading or saving a palette.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine the user's home directory")]
    NoHomeDir,
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed palette file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode palette: {0}")]
    Encode(#[from] serde_json::Error),
}

/// `<home>/.ladle-color-picker/palette.json`, if a home directory is known.
pub fn default_palette_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(PALETTE_FILE_NAME))
}

/// Palette storage backed by an indented JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the per-user default location.
    pub fn user_default() -> Result<Self, StorageError> {
        default_palette_path()
            .map(Self::new)
            .ok_or(StorageError::NoHomeDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PaletteStorage for JsonFileStorage {
    fn load(&self) -> Result<PaletteData, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No palette file at {}, starting empty", self.path.display());
                return Ok(PaletteData::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let data: PaletteData =
            serde_json::from_str(&text).map_err(|source| StorageError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded palette from {}: {} recent, {} saved",
            self.path.display(),
            data.recent.len(),
            data.saved.len()
        );
        Ok(data)
    }

    fn save(&self, data: &PaletteData) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // Create parent directories if needed
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut json = serde_json::to_string_pretty(data)?;
        json.push('\n');

        // Write beside the target and rename over it, so a crash never
        // leaves a half-written palette
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!("Saved palette to {}", self.path.display());
        Ok(())
    }
}
