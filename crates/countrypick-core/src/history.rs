// crates/countrypick-core/src/history.rs
//! Selection history stores.

use crate::error::Result;
use crate::traits::HistoryStore;
use std::collections::HashMap;

#[cfg(feature = "json")]
use crate::error::PickerError;
#[cfg(feature = "json")]
use std::collections::BTreeMap;
#[cfg(feature = "json")]
use std::path::{Path, PathBuf};

/// In-process store. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    lists: HashMap<String, Vec<String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn get(&self, key: &str) -> Vec<String> {
        self.lists.get(key).cloned().unwrap_or_default()
    }

    fn set(&mut self, key: &str, codes: Vec<String>) -> Result<()> {
        self.lists.insert(key.to_owned(), codes);
        Ok(())
    }
}

/// Store persisted as one JSON object (`{ key: [codes] }`) on disk.
///
/// The file is read once on open and rewritten whole on every `set`.
#[cfg(feature = "json")]
#[derive(Clone, Debug)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
    lists: BTreeMap<String, Vec<String>>,
}

#[cfg(feature = "json")]
impl JsonFileHistoryStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let lists = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                PickerError::InvalidData(format!("History file {} is corrupt: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(PickerError::Io(e)),
        };
        Ok(Self { path, lists })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_lists(&self, lists: &BTreeMap<String, Vec<String>>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(lists)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(feature = "json")]
impl HistoryStore for JsonFileHistoryStore {
    fn get(&self, key: &str) -> Vec<String> {
        self.lists.get(key).cloned().unwrap_or_default()
    }

    /// Memory only changes once the file write succeeded.
    fn set(&mut self, key: &str, codes: Vec<String>) -> Result<()> {
        let mut next = self.lists.clone();
        next.insert(key.to_owned(), codes);
        self.write_lists(&next)?;
        self.lists = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_missing_key_is_empty() {
        let mut store = MemoryHistoryStore::new();
        assert!(store.get("recent").is_empty());
        store.set("recent", vec!["FR".into()]).unwrap();
        assert_eq!(store.get("recent"), vec!["FR".to_string()]);
        assert!(store.get("other").is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut store = JsonFileHistoryStore::open(&path).unwrap();
        assert!(store.get("recent").is_empty());
        store.set("recent", vec!["DE".into(), "FR".into()]).unwrap();

        let reopened = JsonFileHistoryStore::open(&path).unwrap();
        assert_eq!(reopened.get("recent"), vec!["DE".to_string(), "FR".to_string()]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn failed_write_keeps_previous_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = JsonFileHistoryStore::open(&path).unwrap();
        store.set("recent", vec!["DE".into()]).unwrap();

        // A directory at the target path makes the write fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(store.set("recent", vec!["FR".into(), "DE".into()]).is_err());
        assert_eq!(store.get("recent"), vec!["DE".to_string()]);
        assert!(store.get("other").is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileHistoryStore::open(&path),
            Err(PickerError::InvalidData(_))
        ));
    }
}
