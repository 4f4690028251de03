//! Palette persistence: the user's custom colors as a JSON array of hex
//! strings, fully rewritten on every save.
//!
//! Default colors never cross this boundary.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by palette stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("palette io error: {0}")]
    Io(#[from] io::Error),
    #[error("stored palette is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no writable config directory")]
    NoConfigDir,
}

/// Load/save boundary for the custom color list.
pub trait PaletteStore {
    /// The stored hex strings, oldest first. An absent store reads as empty.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Overwrite the store with the full current list.
    fn save(&self, hexes: &[String]) -> Result<(), StoreError>;
}

/// File-backed store: one JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory
    /// (`<config>/floem-palette/colors.json`).
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::new(dir.join("floem-palette").join("colors.json")))
    }
}

impl PaletteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let hexes: Vec<String> = serde_json::from_str(&raw)?;
        tracing::debug!(count = hexes.len(), "loaded palette");
        Ok(hexes)
    }

    fn save(&self, hexes: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(hexes)?)?;
        Ok(())
    }
}

/// In-memory store for tests and demos without a writable disk.
#[derive(Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaletteStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        match &*self.raw.borrow() {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    fn save(&self, hexes: &[String]) -> Result<(), StoreError> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(hexes)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("colors.json"));
        assert_eq!(store.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("palette").join("colors.json"));
        let hexes = vec!["#ABCDEF".to_string(), "#112233".to_string()];
        store.save(&hexes).unwrap();
        assert_eq!(store.load().unwrap(), hexes);
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("colors.json"));
        store.save(&["#111111".to_string(), "#222222".to_string()])
            .unwrap();
        store.save(&["#333333".to_string()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["#333333".to_string()]);
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn stored_format_is_a_plain_string_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let store = JsonFileStore::new(&path);
        store.save(&["#ABCDEF".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r##"["#ABCDEF"]"##);
    }

    #[test]
    fn memory_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Vec::<String>::new());
        store.save(&["#00AAFF".to_string()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["#00AAFF".to_string()]);
    }
}
