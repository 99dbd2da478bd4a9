//! UI-agnostic color picker state.
//!
//! A front end feeds user input in as [`Message`]s and carries out the
//! returned [`Effect`]s (clipboard writes, notifications). Swatch buttons are
//! described as data by [`ColorPicker::swatches`].

use crate::color::{self, Channel, Color};
use crate::store::PaletteStore;

pub const SAVED_MESSAGE: &str = "Color saved to palette!";
pub const ALREADY_SAVED_MESSAGE: &str = "Color already saved!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A channel slider moved.
    SetChannel(Channel, u8),
    /// A swatch was clicked or a hex value was typed.
    ApplyHex(String),
    SaveCurrent,
    RemoveSaved(String),
    CopyHex,
    CopyRgb,
    CopyHsl,
}

/// Side effects the front end must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Copy(String),
    Notify(String),
}

/// One clickable color entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub hex: String,
    pub message: Message,
}

impl Swatch {
    fn apply(hex: String) -> Self {
        let message = Message::ApplyHex(hex.clone());
        Self { hex, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchRow {
    pub title: &'static str,
    pub swatches: Vec<Swatch>,
}

pub struct ColorPicker {
    current: Color,
    store: PaletteStore,
}

impl ColorPicker {
    /// Start at red, the picker's initial color.
    pub fn new(store: PaletteStore) -> Self {
        Self {
            current: color::RED,
            store,
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::SetChannel(channel, value) => {
                self.current = self.current.with_channel(channel, value);
                self.store.add_recent(&self.current.to_hex());
                Vec::new()
            }
            Message::ApplyHex(hex) => {
                // Invalid input leaves the current color alone
                let Ok(color) = Color::from_hex(&hex) else {
                    tracing::debug!("Ignoring invalid hex input {:?}", hex);
                    return Vec::new();
                };
                self.current = color;
                self.store.add_recent(&color.to_hex());
                match self.store.save() {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::save_failed(e)],
                }
            }
            Message::SaveCurrent => match self.store.add_saved(&self.current.to_hex()) {
                Ok(true) => vec![Effect::Notify(SAVED_MESSAGE.to_string())],
                Ok(false) => vec![Effect::Notify(ALREADY_SAVED_MESSAGE.to_string())],
                Err(e) => vec![Self::save_failed(e)],
            },
            Message::RemoveSaved(hex) => match self.store.remove_saved(&hex) {
                Ok(_) => Vec::new(),
                Err(e) => vec![Self::save_failed(e)],
            },
            Message::CopyHex => vec![Effect::Copy(self.current.to_hex())],
            Message::CopyRgb => vec![Effect::Copy(self.current.to_rgb_string())],
            Message::CopyHsl => vec![Effect::Copy(self.current.to_hsl_string())],
        }
    }

    fn save_failed(err: impl std::fmt::Display) -> Effect {
        tracing::warn!("could not save palette: {}", err);
        Effect::Notify(format!("Could not save palette: {}", err))
    }

    /// Preset, recent and saved swatches, one entry per color.
    pub fn swatches(&self) -> Vec<SwatchRow> {
        let palette = self.store.snapshot();
        let row = |title: &'static str, hexes: Vec<String>| SwatchRow {
            title,
            swatches: hexes.into_iter().map(Swatch::apply).collect(),
        };

        vec![
            row("Preset Colors", color::presets().iter().map(|c| c.to_hex()).collect()),
            row("Recent Colors", palette.recent().to_vec()),
            row("Saved Colors", palette.saved().to_vec()),
        ]
    }
}
