//! Static blacklist of functional noise words.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Articles, pronouns, auxiliaries and honorifics dropped before any
/// lexicon lookup.
const STANDARD_WORDS: &[&str] = &[
    "a", "an", "the", "so", "as", "how", "i", "me", "we", "they", "you", "it", "he", "she", "but",
    "have", "had", "for", "by", "in", "out", "not", "be", "were", "was", "am", "are", "is", "mr",
    "mrs", "and",
];

static STANDARD: Lazy<Blacklist> = Lazy::new(|| Blacklist::from_words(STANDARD_WORDS));

/// Immutable set of words that never reach the lexicon or the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Blacklist {
    words: BTreeSet<String>,
}

impl Blacklist {
    /// The built-in English noise list.
    pub fn standard() -> &'static Blacklist {
        &STANDARD
    }

    /// An empty blacklist.
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl From<Vec<String>> for Blacklist {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words.as_slice())
    }
}
