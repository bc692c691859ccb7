//! File-per-word lexicon backend.

use super::{check_key, is_valid_key, LexiconEntry, LexiconStore};
use crate::{LexiconError, LexiconResult};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A [`LexiconStore`] keeping one file per word inside a directory.
///
/// The file is named after the word and holds the encoded
/// [`LexiconEntry`]. Writes land in a temporary file in the same directory
/// and are renamed over the record, so a reader sees either the old record
/// or the new one and never a partial write.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open the store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> LexiconResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| LexiconError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, word: &str) -> LexiconResult<PathBuf> {
        check_key(word)?;
        Ok(self.root.join(word))
    }

    fn staged(&self, entry: &LexiconEntry) -> LexiconResult<NamedTempFile> {
        let io_err = |source| LexiconError::Io {
            path: self.root.clone(),
            source,
        };
        let mut file = NamedTempFile::new_in(&self.root).map_err(io_err)?;
        file.write_all(entry.encode().as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        Ok(file)
    }
}

impl LexiconStore for DirectoryStore {
    fn get(&self, word: &str) -> LexiconResult<Option<LexiconEntry>> {
        let path = self.record_path(word)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(LexiconError::Io { path, source }),
        };
        let content = String::from_utf8(bytes).map_err(|err| LexiconError::Corrupt {
            word: word.to_string(),
            content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })?;
        LexiconEntry::decode(word, &content).map(Some)
    }

    fn put(&self, word: &str, entry: &LexiconEntry) -> LexiconResult<()> {
        let path = self.record_path(word)?;
        self.staged(entry)?
            .persist(&path)
            .map_err(|err| LexiconError::Io {
                path,
                source: err.error,
            })?;
        Ok(())
    }

    fn insert_root(&self, word: &str) -> LexiconResult<()> {
        let path = self.record_path(word)?;
        match self.staged(&LexiconEntry::Root)?.persist_noclobber(&path) {
            Ok(_) => Ok(()),
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                match self.get(word)? {
                    Some(LexiconEntry::Root) => Ok(()),
                    _ => self.put(word, &LexiconEntry::Root),
                }
            }
            Err(err) => Err(LexiconError::Io {
                path,
                source: err.error,
            }),
        }
    }

    fn entries(&self) -> LexiconResult<Vec<(String, LexiconEntry)>> {
        let io_err = |source| LexiconError::Io {
            path: self.root.clone(),
            source,
        };
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.root).map_err(io_err)? {
            let dir_entry = dir_entry.map_err(io_err)?;
            let name = dir_entry.file_name();
            // Staged temporaries and foreign files are not records.
            let Some(word) = name.to_str().filter(|w| is_valid_key(w)) else {
                continue;
            };
            if let Some(entry) = self.get(word)? {
                entries.push((word.to_string(), entry));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MAX_KEY_LEN;
    use tempfile::TempDir;

    fn store() -> (TempDir, DirectoryStore) {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path().join("lexicon")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_record() {
        let (_dir, store) = store();
        assert_eq!(store.get("cat").unwrap(), None);
    }

    #[test]
    fn test_record_layout() {
        let (_dir, store) = store();
        store.put("cat", &LexiconEntry::Root).unwrap();
        store
            .put("cats", &LexiconEntry::Variant("cat".into()))
            .unwrap();
        store.put("the", &LexiconEntry::Blacklisted).unwrap();

        assert_eq!(fs::read_to_string(store.path().join("cat")).unwrap(), "1");
        assert_eq!(
            fs::read_to_string(store.path().join("cats")).unwrap(),
            "2cat"
        );
        assert_eq!(fs::read_to_string(store.path().join("the")).unwrap(), "0");
    }

    #[test]
    fn test_reopen_keeps_records() {
        let (_dir, store) = store();
        store
            .put("running", &LexiconEntry::Variant("run".into()))
            .unwrap();

        let reopened = DirectoryStore::open(store.path()).unwrap();
        assert_eq!(
            reopened.get("running").unwrap(),
            Some(LexiconEntry::Variant("run".into()))
        );
    }

    #[test]
    fn test_overlong_key_rejected_before_io() {
        let (_dir, store) = store();
        let word = "x".repeat(300);

        let err = store.get(&word).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidKey { .. }), "{:?}", err);
        assert!(store.get(&"x".repeat(MAX_KEY_LEN)).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_record_is_not_a_miss() {
        let (_dir, store) = store();
        fs::create_dir(store.path().join("cat")).unwrap();

        let err = store.get("cat").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }), "{:?}", err);
    }

    #[test]
    fn test_corrupt_record() {
        let (_dir, store) = store();
        fs::write(store.path().join("cat"), "9").unwrap();
        assert!(matches!(
            store.get("cat"),
            Err(LexiconError::Corrupt { .. })
        ));

        fs::write(store.path().join("dog"), [0xff, 0xfe]).unwrap();
        assert!(matches!(
            store.get("dog"),
            Err(LexiconError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_insert_root() {
        let (_dir, store) = store();
        store.insert_root("cat").unwrap();
        store.insert_root("cat").unwrap();
        assert_eq!(store.get("cat").unwrap(), Some(LexiconEntry::Root));

        store
            .put("happi", &LexiconEntry::Variant("hap".into()))
            .unwrap();
        store.insert_root("happi").unwrap();
        assert_eq!(store.get("happi").unwrap(), Some(LexiconEntry::Root));
    }

    #[test]
    fn test_entries_skip_foreign_files() {
        let (_dir, store) = store();
        store.put("cat", &LexiconEntry::Root).unwrap();
        store
            .put("cats", &LexiconEntry::Variant("cat".into()))
            .unwrap();
        fs::write(store.path().join(".tmpXYZ"), "1").unwrap();
        fs::write(store.path().join("README.md"), "notes").unwrap();

        assert_eq!(
            store.entries().unwrap(),
            vec![
                ("cat".to_string(), LexiconEntry::Root),
                ("cats".to_string(), LexiconEntry::Variant("cat".into())),
            ]
        );
    }

    #[test]
    fn test_invalid_key_never_touches_disk() {
        let (_dir, store) = store();
        assert!(matches!(
            store.put("../escape", &LexiconEntry::Root),
            Err(LexiconError::InvalidKey { .. })
        ));
    }
}
