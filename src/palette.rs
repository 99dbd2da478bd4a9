//! Recent and saved color lists.

use serde::{Deserialize, Serialize};

use crate::config::PaletteConfig;

/// Default number of recent colors kept.
pub const DEFAULT_MAX_RECENT: usize = 8;
/// Default number of saved colors kept.
pub const DEFAULT_MAX_SAVED: usize = 16;

/// Persisted form of a palette.
///
/// Unknown keys are ignored and missing keys default to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteData {
    #[serde(rename = "recent_colors", default)]
    pub recent: Vec<String>,
    #[serde(rename = "saved_colors", default)]
    pub saved: Vec<String>,
}

/// Capacity limits for a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLimits {
    pub max_recent: usize,
    pub max_saved: usize,
}

impl Default for PaletteLimits {
    fn default() -> Self {
        Self {
            max_recent: DEFAULT_MAX_RECENT,
            max_saved: DEFAULT_MAX_SAVED,
        }
    }
}

impl From<&PaletteConfig> for PaletteLimits {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            max_recent: config.max_recent,
            max_saved: config.max_saved,
        }
    }
}

/// Most-recently-used colors plus a bounded set of saved colors.
///
/// Entries are hex strings compared case-sensitively; callers should pass
/// the output of [`Color::to_hex`](crate::Color::to_hex).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    recent: Vec<String>,
    saved: Vec<String>,
    limits: PaletteLimits,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: PaletteLimits) -> Self {
        Self {
            recent: Vec::new(),
            saved: Vec::new(),
            limits,
        }
    }

    /// Rebuild a palette from persisted data.
    ///
    /// Entries are replayed through the normal add operations so duplicates
    /// and overlong lists in a hand-edited file are cut back to the limits.
    pub fn from_data(data: PaletteData, limits: PaletteLimits) -> Self {
        let mut palette = Self::with_limits(limits);
        // Stored most-recent-first, so replay oldest first
        for hex in data.recent.into_iter().rev() {
            palette.add_recent(hex);
        }
        for hex in data.saved {
            palette.add_saved(hex);
        }
        palette
    }

    pub fn to_data(&self) -> PaletteData {
        PaletteData {
            recent: self.recent.clone(),
            saved: self.saved.clone(),
        }
    }

    /// Recent colors, most recent first.
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Saved colors, oldest first.
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    pub fn limits(&self) -> PaletteLimits {
        self.limits
    }

    pub fn is_saved(&self, hex: &str) -> bool {
        self.saved.iter().any(|c| c == hex)
    }

    /// Move `hex` to the front of the recent list, trimming to `max_recent`.
    pub fn add_recent(&mut self, hex: impl Into<String>) {
        let hex = hex.into();
        if let Some(pos) = self.recent.iter().position(|c| *c == hex) {
            self.recent.remove(pos);
        }
        self.recent.insert(0, hex);
        self.recent.truncate(self.limits.max_recent);
    }

    /// Append `hex` to the saved colors.
    ///
    /// Returns `false` without changing anything if it is already saved.
    /// Evicts the oldest entry once over `max_saved`.
    pub fn add_saved(&mut self, hex: impl Into<String>) -> bool {
        let hex = hex.into();
        if self.is_saved(&hex) {
            return false;
        }
        self.saved.push(hex);
        while self.saved.len() > self.limits.max_saved {
            self.saved.remove(0);
        }
        true
    }

    /// Remove `hex` from the saved colors. Returns whether it was present.
    pub fn remove_saved(&mut self, hex: &str) -> bool {
        match self.saved.iter().position(|c| c == hex) {
            Some(pos) => {
                self.saved.remove(pos);
                true
            }
            None => false,
        }
    }
}
