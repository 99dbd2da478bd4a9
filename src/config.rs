use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::palette::{DEFAULT_MAX_RECENT, DEFAULT_MAX_SAVED};
use crate::storage::default_palette_path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub palette: PaletteConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    pub max_recent: usize,
    pub max_saved: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            max_recent: DEFAULT_MAX_RECENT,
            max_saved: DEFAULT_MAX_SAVED,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Overrides `~/.ladle-color-picker/palette.json`
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured palette path, or the per-user default.
    pub fn palette_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(default_palette_path)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env file (silently ignore if not present)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ladle-color-picker");

        let builder = Config::builder()
            // 1. Defaults
            .set_default("palette.max_recent", DEFAULT_MAX_RECENT as u64)?
            .set_default("palette.max_saved", DEFAULT_MAX_SAVED as u64)?
            .set_default("storage.path", None::<String>)?
            // 2. Local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("config.toml")).required(false))
            // 3. User config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false))
            // 4. Environment variables (LADLE__PALETTE__MAX_RECENT=...)
            .add_source(Environment::with_prefix("LADLE").separator("__"));

        let s = builder.build().context("Failed to build configuration")?;
        let config: Self = s
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if config.palette.max_recent == 0 || config.palette.max_saved == 0 {
            anyhow::bail!(
                "palette limits must be positive (max_recent={}, max_saved={})",
                config.palette.max_recent,
                config.palette.max_saved
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default Value Tests ====================

    #[test]
    fn test_palette_config_defaults() {
        let config = PaletteConfig::default();
        assert_eq!(config.max_recent, 8);
        assert_eq!(config.max_saved, 16);
    }

    #[test]
    fn test_storage_config_defaults_to_home_path() {
        let config = StorageConfig::default();
        assert!(config.path.is_none());
        if let Some(path) = config.palette_path() {
            assert!(path.ends_with(".ladle-color-picker/palette.json"));
        }
    }

    #[test]
    fn test_storage_config_explicit_path_wins() {
        let config = StorageConfig {
            path: Some(PathBuf::from("/tmp/custom.json")),
        };
        assert_eq!(config.palette_path(), Some(PathBuf::from("/tmp/custom.json")));
    }

    // ==================== Config Loading Tests ====================

    #[test]
    fn test_config_load_with_defaults() {
        // Should succeed even without a config file (uses defaults)
        let result = AppConfig::load();
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_config_structs_are_debug() {
        let config = AppConfig::default();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PaletteConfig"));
        assert!(debug_str.contains("max_recent"));
    }

    // ==================== Environment Variable Override Tests ====================

    /// Helper to set and remove an environment variable around a closure.
    fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        // SAFETY: Test environment, key is unique to this test
        unsafe {
            std::env::set_var(key, value);
        }
        let result = f();
        unsafe {
            std::env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_env_var_overrides_storage_path() {
        let config = with_env_var("LADLE__STORAGE__PATH", "/tmp/ladle-env/palette.json", || {
            AppConfig::load().expect("Config should load")
        });

        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/tmp/ladle-env/palette.json")),
            "Environment variable should override storage.path"
        );
    }
}
