//! Abstractions for persistence and side effects to enable testing.
//!
//! This module provides traits for:
//! - `PaletteStorage`: Abstracting where palette data is kept
//! - `Notifier`: Abstracting user-facing messages

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use crate::palette::PaletteData;
use crate::storage::StorageError;

// ==================== PaletteStorage Trait ====================

/// Trait for loading and saving palette data.
///
/// `load` must return empty data when nothing has been stored yet.
pub trait PaletteStorage: Send + Sync {
    fn load(&self) -> Result<PaletteData, StorageError>;

    fn save(&self, data: &PaletteData) -> Result<(), StorageError>;
}

/// In-memory storage for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Arc<Mutex<Option<PaletteData>>>,
    saves: Arc<Mutex<usize>>,
    fail_saves: bool,
}

impl MemoryStorage {
    /// Create empty storage, as if no file exists yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with data.
    pub fn with_data(data: PaletteData) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(data))),
            saves: Arc::default(),
            fail_saves: false,
        }
    }

    /// Create storage whose `save` always fails, as on a read-only disk.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Last saved (or initial) data, if any.
    pub fn stored(&self) -> Option<PaletteData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaletteStorage for MemoryStorage {
    fn load(&self) -> Result<PaletteData, StorageError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, data: &PaletteData) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Io {
                path: "memory".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only storage"),
            });
        }
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = Some(data.clone());
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

// ==================== Notifier Trait ====================

/// Trait for short user-facing messages ("Color saved to palette!").
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that writes messages to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
