//! Thread-safe palette bound to its storage.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::palette::{Palette, PaletteLimits};
use crate::storage::StorageError;
use crate::traits::PaletteStorage;

/// A [`Palette`] plus the storage it is persisted to.
///
/// Every mutation holds one lock across the in-memory update and the write,
/// so concurrent callers cannot lose updates or interleave file writes.
/// When persisting fails the in-memory change is kept and the error returned.
pub struct PaletteStore {
    palette: Mutex<Palette>,
    storage: Box<dyn PaletteStorage>,
}

impl PaletteStore {
    /// Load the palette from `storage`.
    pub fn open(
        storage: impl PaletteStorage + 'static,
        limits: PaletteLimits,
    ) -> Result<Self, StorageError> {
        let data = storage.load()?;
        Ok(Self {
            palette: Mutex::new(Palette::from_data(data, limits)),
            storage: Box::new(storage),
        })
    }

    // The palette holds plain lists, so a panic mid-update cannot leave it unusable
    fn lock(&self) -> MutexGuard<'_, Palette> {
        self.palette.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current palette.
    pub fn snapshot(&self) -> Palette {
        self.lock().clone()
    }

    pub fn recent(&self) -> Vec<String> {
        self.lock().recent().to_vec()
    }

    pub fn saved(&self) -> Vec<String> {
        self.lock().saved().to_vec()
    }

    /// Record `hex` as most recent. Only the in-memory palette changes.
    pub fn add_recent(&self, hex: &str) {
        self.lock().add_recent(hex);
    }

    /// Add `hex` to the saved colors and persist.
    ///
    /// Returns `Ok(false)` without writing if it was already saved.
    pub fn add_saved(&self, hex: &str) -> Result<bool, StorageError> {
        let mut palette = self.lock();
        if !palette.add_saved(hex) {
            return Ok(false);
        }
        self.storage.save(&palette.to_data())?;
        Ok(true)
    }

    /// Remove `hex` from the saved colors and persist if it was present.
    pub fn remove_saved(&self, hex: &str) -> Result<bool, StorageError> {
        let mut palette = self.lock();
        if !palette.remove_saved(hex) {
            return Ok(false);
        }
        self.storage.save(&palette.to_data())?;
        Ok(true)
    }

    /// Write the current palette to storage.
    pub fn save(&self) -> Result<(), StorageError> {
        let palette = self.lock();
        self.storage.save(&palette.to_data())
    }
}
