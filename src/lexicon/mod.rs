//! Durable word classification cache.
//!
//! Every distinct normalized word the pipeline has classified owns one
//! record. A record says the word is noise ([`LexiconEntry::Blacklisted`]),
//! a canonical form ([`LexiconEntry::Root`]), or an inflected form of some
//! root ([`LexiconEntry::Variant`]).
//!
//! ## Invariant
//!
//! If `w` is recorded as `Variant(r)`, then `r` is recorded as `Root`.
//! Lookups therefore never follow more than one hop. [`Lexicon::record`]
//! maintains this by writing the root record before the variant record: a
//! crash between the two writes leaves a harmless extra root behind, and a
//! retry derives and writes the same values again.
//!
//! ## Storage
//!
//! Records are kept behind the [`LexiconStore`] trait. [`DirectoryStore`]
//! keeps one file per word so that vocabularies larger than memory and
//! state shared across runs both work; [`MemoryStore`] is a map for tests
//! and throwaway runs.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use crate::normalize::is_normalized;
use crate::{LexiconError, LexiconResult};
use tracing::debug;

/// A stored classification for one word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LexiconEntry {
    /// Functional noise, never emitted.
    Blacklisted,
    /// The word is its own canonical form.
    Root,
    /// The word is an inflected or derived form of `root`.
    Variant(String),
}

impl LexiconEntry {
    /// On-disk encoding: `0`, `1`, or `2` followed by the root word.
    pub fn encode(&self) -> String {
        match self {
            LexiconEntry::Blacklisted => "0".to_string(),
            LexiconEntry::Root => "1".to_string(),
            LexiconEntry::Variant(root) => format!("2{}", root),
        }
    }

    /// Parse a record body previously produced by [`encode`](Self::encode).
    ///
    /// Trailing whitespace is tolerated so hand-edited records still load.
    pub fn decode(word: &str, content: &str) -> LexiconResult<Self> {
        let corrupt = || LexiconError::Corrupt {
            word: word.to_string(),
            content: content.to_string(),
        };
        let trimmed = content.trim_end();
        let mut chars = trimmed.chars();
        let code = chars.next().ok_or_else(corrupt)?;
        let rest = chars.as_str();

        match code {
            '0' if rest.is_empty() => Ok(LexiconEntry::Blacklisted),
            '1' if rest.is_empty() => Ok(LexiconEntry::Root),
            '2' if is_normalized(rest) => Ok(LexiconEntry::Variant(rest.to_string())),
            _ => Err(corrupt()),
        }
    }
}

/// Result of a lexicon lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No record exists yet; the word still needs classifying.
    Unknown,
    Blacklisted,
    Root,
    Variant(String),
}

impl From<LexiconEntry> for Classification {
    fn from(entry: LexiconEntry) -> Self {
        match entry {
            LexiconEntry::Blacklisted => Classification::Blacklisted,
            LexiconEntry::Root => Classification::Root,
            LexiconEntry::Variant(root) => Classification::Variant(root),
        }
    }
}

/// Point-lookup storage for lexicon records.
///
/// Implementations must distinguish "no record" (`Ok(None)`) from a
/// failure to read one (`Err`).
pub trait LexiconStore {
    /// Fetch the record for `word`, if any.
    fn get(&self, word: &str) -> LexiconResult<Option<LexiconEntry>>;

    /// Write the record for `word`, replacing any previous one.
    fn put(&self, word: &str, entry: &LexiconEntry) -> LexiconResult<()>;

    /// Ensure `word` is recorded as [`LexiconEntry::Root`].
    ///
    /// Does nothing when the record is already a root, so concurrent
    /// writers converge on the same value.
    fn insert_root(&self, word: &str) -> LexiconResult<()> {
        match self.get(word)? {
            Some(LexiconEntry::Root) => Ok(()),
            _ => self.put(word, &LexiconEntry::Root),
        }
    }

    /// Every record in the store, sorted by word.
    fn entries(&self) -> LexiconResult<Vec<(String, LexiconEntry)>>;
}

impl<S: LexiconStore + ?Sized> LexiconStore for &S {
    fn get(&self, word: &str) -> LexiconResult<Option<LexiconEntry>> {
        (**self).get(word)
    }

    fn put(&self, word: &str, entry: &LexiconEntry) -> LexiconResult<()> {
        (**self).put(word, entry)
    }

    fn insert_root(&self, word: &str) -> LexiconResult<()> {
        (**self).insert_root(word)
    }

    fn entries(&self) -> LexiconResult<Vec<(String, LexiconEntry)>> {
        (**self).entries()
    }
}

/// Longest word a store accepts as a key.
///
/// Matches the common file name limit so every key is storable by
/// [`DirectoryStore`].
pub const MAX_KEY_LEN: usize = 255;

/// True when `word` can be used as a lexicon key.
pub fn is_valid_key(word: &str) -> bool {
    word.len() <= MAX_KEY_LEN && is_normalized(word)
}

pub(crate) fn check_key(word: &str) -> LexiconResult<()> {
    if is_valid_key(word) {
        Ok(())
    } else {
        Err(LexiconError::InvalidKey {
            word: word.to_string(),
        })
    }
}

/// The word classification cache.
#[derive(Debug)]
pub struct Lexicon<S> {
    store: S,
}

impl<S: LexiconStore> Lexicon<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Look up the classification of `word`.
    ///
    /// A missing record yields [`Classification::Unknown`]; storage faults
    /// are returned as errors.
    pub fn lookup(&self, word: &str) -> LexiconResult<Classification> {
        Ok(self
            .store
            .get(word)?
            .map(Classification::from)
            .unwrap_or(Classification::Unknown))
    }

    /// Persist the classification of `word`.
    ///
    /// Recording `Variant(root)` first makes sure `root` is recorded as a
    /// root. A variant pointing at the word itself is stored as a root.
    pub fn record(&self, word: &str, entry: &LexiconEntry) -> LexiconResult<()> {
        check_key(word)?;
        match entry {
            LexiconEntry::Variant(root) if root == word => {
                debug!(word, "recording root");
                self.store.insert_root(word)
            }
            LexiconEntry::Variant(root) => {
                check_key(root)?;
                debug!(word, root = root.as_str(), "recording variant");
                self.store.insert_root(root)?;
                self.store.put(word, entry)
            }
            LexiconEntry::Root => {
                debug!(word, "recording root");
                self.store.insert_root(word)
            }
            LexiconEntry::Blacklisted => {
                debug!(word, "recording blacklisted");
                self.store.put(word, entry)
            }
        }
    }

    /// All `(word, root)` pairs for roots and variants, sorted by word.
    ///
    /// A root maps to itself. Blacklisted records are skipped.
    pub fn export(&self) -> LexiconResult<Vec<(String, String)>> {
        Ok(self
            .store
            .entries()?
            .into_iter()
            .filter_map(|(word, entry)| match entry {
                LexiconEntry::Root => Some((word.clone(), word)),
                LexiconEntry::Variant(root) => Some((word, root)),
                LexiconEntry::Blacklisted => None,
            })
            .collect())
    }

    /// Variant records whose root is not recorded as a root.
    ///
    /// Empty for a converged lexicon.
    pub fn dangling_variants(&self) -> LexiconResult<Vec<(String, String)>> {
        let mut dangling = Vec::new();
        for (word, entry) in self.store.entries()? {
            if let LexiconEntry::Variant(root) = entry {
                if self.store.get(&root)? != Some(LexiconEntry::Root) {
                    dangling.push((word, root));
                }
            }
        }
        Ok(dangling)
    }
}
