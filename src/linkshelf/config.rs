use crate::error::{Result, ShelfError};
use crate::favicon::DEFAULT_ICON_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 3] = ["favicon-size", "shuffle-palette", "confirm-delete"];

/// Configuration for linkshelf, stored next to the shelf as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Pixel size requested from the primary favicon service
    #[serde(default = "default_favicon_size")]
    pub favicon_size: u32,

    /// Permute the card palette at startup
    #[serde(default = "default_true")]
    pub shuffle_palette: bool,

    /// Ask before deleting a link
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

fn default_favicon_size() -> u32 {
    DEFAULT_ICON_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            favicon_size: DEFAULT_ICON_SIZE,
            shuffle_palette: true,
            confirm_delete: true,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "favicon-size" => Ok(self.favicon_size.to_string()),
            "shuffle-palette" => Ok(self.shuffle_palette.to_string()),
            "confirm-delete" => Ok(self.confirm_delete.to_string()),
            other => Err(ShelfError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "favicon-size" => {
                let size: u32 = value
                    .parse()
                    .map_err(|_| ShelfError::Api(format!("Invalid favicon size: {}", value)))?;
                if size == 0 {
                    return Err(ShelfError::Api("Favicon size must be positive".into()));
                }
                self.favicon_size = size;
            }
            "shuffle-palette" => self.shuffle_palette = parse_bool(value)?,
            "confirm-delete" => self.confirm_delete = parse_bool(value)?,
            other => return Err(ShelfError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ShelfError::Api(format!("Expected true or false, got: {}", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.favicon_size, 64);
        assert!(config.shuffle_palette);
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = ShelfConfig::default();
        config.set("favicon-size", "32").unwrap();
        config.set("confirm-delete", "off").unwrap();
        assert_eq!(config.get("favicon-size").unwrap(), "32");
        assert_eq!(config.get("confirm-delete").unwrap(), "false");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ShelfConfig::default();
        assert!(config.set("favicon-size", "big").is_err());
        assert!(config.set("favicon-size", "0").is_err());
        assert!(config.set("shuffle-palette", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = ShelfConfig::default();
        config.set("shuffle-palette", "false").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = ShelfConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.shuffle_palette);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ShelfConfig = serde_json::from_str(r#"{"favicon_size": 16}"#).unwrap();
        assert_eq!(config.favicon_size, 16);
        assert!(config.confirm_delete);
    }
}
