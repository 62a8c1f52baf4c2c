use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::VisitDocument;

/// Flat-file store for the visit document.
///
/// Every call reads or writes the whole file. There is no locking, so two
/// requests doing load, mutate, save at the same time can lose an update;
/// the last writer wins.
#[derive(Debug, Clone)]
pub struct VisitStore {
    path: PathBuf,
}

impl VisitStore {
    /// Opens the store, writing an empty document if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            store.save(&VisitDocument::default())?;
            tracing::info!("Created visit store at {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<VisitDocument, AppError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, doc: &VisitDocument) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("visits.json");

        let store = VisitStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), VisitDocument::default());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"sessions\": {}"));
        assert!(raw.contains("\"visits\": []"));
    }

    #[test]
    fn test_open_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.json");

        let store = VisitStore::open(&path).unwrap();
        let mut doc = store.load().unwrap();
        doc.start_session("abc".into(), "127.0.0.1".into(), String::new(), 1.0);
        store.save(&doc).unwrap();

        let reopened = VisitStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), doc);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.json");
        fs::write(&path, "{}").unwrap();

        let store = VisitStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), VisitDocument::default());
    }

    #[test]
    fn test_interleaved_saves_last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = VisitStore::open(dir.path().join("visits.json")).unwrap();

        let mut first = store.load().unwrap();
        let mut second = store.load().unwrap();
        first.start_session("a".into(), "1.1.1.1".into(), String::new(), 1.0);
        second.start_session("b".into(), "2.2.2.2".into(), String::new(), 2.0);
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.visits.len(), 1);
        assert!(doc.sessions.contains_key("b"));
        assert!(!doc.sessions.contains_key("a"));
    }
}
