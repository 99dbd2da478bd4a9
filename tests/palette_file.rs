//! Integration tests for palette persistence through the JSON file.
//!
//! Each test works in its own temporary directory, never the user's home.

use std::fs;

use ladle_color_picker::{
    Color, ColorPicker, JsonFileStorage, Message, Palette, PaletteLimits, PaletteStorage,
    PaletteStore, StorageError,
};
use tempfile::tempdir;

/// Load a palette the way the application does at startup.
fn load(storage: &JsonFileStorage) -> Result<Palette, StorageError> {
    Ok(Palette::from_data(storage.load()?, PaletteLimits::default()))
}

#[test]
fn test_load_without_file_returns_empty_palette() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join(".ladle-color-picker/palette.json"));

    let palette = load(&storage).expect("missing file should not be an error");
    assert!(palette.recent().is_empty());
    assert!(palette.saved().is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join(".ladle-color-picker/palette.json"));

    let mut palette = Palette::new();
    for hex in ["#ff0000", "#00ff00", "#0000ff"] {
        palette.add_recent(hex);
    }
    palette.add_saved("#ffff00");
    palette.add_saved("#00ffff");
    storage.save(&palette.to_data()).unwrap();

    let loaded = load(&storage).unwrap();
    assert_eq!(loaded.recent(), palette.recent());
    assert_eq!(loaded.saved(), palette.saved());
}

#[test]
fn test_file_format_matches_documented_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("palette.json");
    let storage = JsonFileStorage::new(&path);

    let mut palette = Palette::new();
    palette.add_recent("#ff0000");
    palette.add_saved("#0000ff");
    storage.save(&palette.to_data()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "recent_colors": ["#ff0000"],
            "saved_colors": ["#0000ff"],
        })
    );
}

#[test]
fn test_malformed_file_is_reported_not_discarded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("palette.json");
    fs::write(&path, "{\"recent_colors\": [\"#ff0000\",").unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(matches!(load(&storage), Err(StorageError::Decode { .. })));

    // The broken file is left in place for the user to recover
    assert!(fs::read_to_string(&path).unwrap().contains("#ff0000"));
}

#[test]
fn test_store_persists_saved_mutations_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("palette.json");

    {
        let store =
            PaletteStore::open(JsonFileStorage::new(&path), PaletteLimits::default()).unwrap();
        assert!(store.add_saved("#ff0000").unwrap());
        assert!(store.add_saved("#00ff00").unwrap());
        assert!(store.remove_saved("#ff0000").unwrap());
    }

    let store = PaletteStore::open(JsonFileStorage::new(&path), PaletteLimits::default()).unwrap();
    assert_eq!(store.saved(), vec!["#00ff00"]);
}

#[test]
fn test_store_applies_configured_limits_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("palette.json");
    fs::write(
        &path,
        r##"{"recent_colors": ["#000001", "#000002", "#000003"], "saved_colors": ["#000004", "#000005"]}"##,
    )
    .unwrap();

    let limits = PaletteLimits {
        max_recent: 2,
        max_saved: 1,
    };
    let store = PaletteStore::open(JsonFileStorage::new(&path), limits).unwrap();

    assert_eq!(store.recent(), vec!["#000001", "#000002"]);
    assert_eq!(store.saved(), vec!["#000005"]);
}

#[test]
fn test_picker_session_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("palette.json");

    {
        let store =
            PaletteStore::open(JsonFileStorage::new(&path), PaletteLimits::default()).unwrap();
        let mut picker = ColorPicker::new(store);
        picker.update(Message::ApplyHex("#336699".to_string()));
        picker.update(Message::SaveCurrent);
        picker.update(Message::ApplyHex("#ffcc00".to_string()));
    }

    let store = PaletteStore::open(JsonFileStorage::new(&path), PaletteLimits::default()).unwrap();
    assert_eq!(store.recent(), vec!["#ffcc00", "#336699"]);
    assert_eq!(store.saved(), vec!["#336699"]);

    let first = Color::from_hex(&store.recent()[1]).unwrap();
    assert_eq!(first.to_hsl_string(), "hsl(210, 50%, 40%)");
}
