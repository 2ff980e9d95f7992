use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_FILENAME: &str = "storage.json";

/// File-backed slot storage: one JSON object, slot name to string value.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn load_slots(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        let slots: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(slots)
    }

    fn save_slots(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(slots).map_err(ShelfError::Serialization)?;
        fs::write(self.storage_path(), content).map_err(ShelfError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.load_slots()?;
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.load_slots()?;
        slots.insert(key.to_string(), value.to_string());
        self.save_slots(&slots)?;
        tracing::debug!(slot = key, path = %self.storage_path().display(), "wrote slot");
        Ok(())
    }
}
