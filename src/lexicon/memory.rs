//! In-memory lexicon backend.

use super::{check_key, LexiconEntry, LexiconStore};
use crate::LexiconResult;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// A [`LexiconStore`] backed by a sorted map.
///
/// Nothing survives the process; use [`DirectoryStore`](super::DirectoryStore)
/// for a lexicon shared across runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, LexiconEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LexiconStore for MemoryStore {
    fn get(&self, word: &str) -> LexiconResult<Option<LexiconEntry>> {
        check_key(word)?;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
            .cloned())
    }

    fn put(&self, word: &str, entry: &LexiconEntry) -> LexiconResult<()> {
        check_key(word)?;
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word.to_string(), entry.clone());
        Ok(())
    }

    fn insert_root(&self, word: &str) -> LexiconResult<()> {
        check_key(word)?;
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word.to_string(), LexiconEntry::Root);
        Ok(())
    }

    fn entries(&self) -> LexiconResult<Vec<(String, LexiconEntry)>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(word, entry)| (word.clone(), entry.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexiconError;

    #[test]
    fn test_put_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cat").unwrap(), None);

        store.put("cat", &LexiconEntry::Root).unwrap();
        assert_eq!(store.get("cat").unwrap(), Some(LexiconEntry::Root));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("cat", &LexiconEntry::Blacklisted).unwrap();
        store.put("cat", &LexiconEntry::Root).unwrap();
        assert_eq!(store.get("cat").unwrap(), Some(LexiconEntry::Root));
    }

    #[test]
    fn test_invalid_key() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get("Cat"),
            Err(LexiconError::InvalidKey { .. })
        ));
    }
}
