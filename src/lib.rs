//! Ladle color picker core
//!
//! Color model (HEX/RGB/HSL) and a persisted palette of recent and saved
//! colors, consumed by a front end through [`ColorPicker`].

pub mod color;
pub mod config;
pub mod palette;
pub mod picker;
pub mod storage;
pub mod store;
pub mod traits;

// Re-export commonly used types
pub use color::{Channel, Color, Hsl, ParseColorError, presets};
pub use config::AppConfig;
pub use palette::{Palette, PaletteData, PaletteLimits};
pub use picker::{ColorPicker, Effect, Message, Swatch, SwatchRow};
pub use storage::{JsonFileStorage, StorageError, default_palette_path};
pub use store::PaletteStore;
pub use traits::{LogNotifier, MemoryStorage, Notifier, PaletteStorage};
