//! Dictionary-backed lemmatizer.
//!
//! Works the way WordNet's `morphy` does: irregular forms are looked up in
//! an exception list, regular ones are recovered by detaching inflectional
//! suffixes and keeping the first candidate found in the vocabulary.
//!
//! ## Dictionary format
//!
//! ```text
//! # comment
//! whale
//! happily
//! ran run
//! ```
//!
//! A line with one word adds a base form. A line with two words records an
//! irregular inflection and its base form (the base is added too).

use crate::{DictionaryError, DictionaryResult};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Part of speech whose detachment rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
}

impl Pos {
    /// Lookup order when the part of speech is unknown.
    pub const ALL: [Pos; 3] = [Pos::Noun, Pos::Verb, Pos::Adjective];

    /// (suffix, replacement) detachment rules.
    pub fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Pos::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        }
    }
}

/// Maps inflected words to base forms found in a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    vocabulary: HashSet<String>,
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lemmatizer = Self::new();
        for word in words {
            lemmatizer.add_word(word.as_ref());
        }
        lemmatizer
    }

    /// Parse a dictionary in the format described in the module docs.
    pub fn parse(content: &str) -> DictionaryResult<Self> {
        let mut lemmatizer = Self::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [word] => lemmatizer.add_word(word),
                [inflected, base] => lemmatizer.add_exception(inflected, base),
                _ => {
                    return Err(DictionaryError::Malformed {
                        line: i + 1,
                        content: line.to_string(),
                    })
                }
            }
        }
        Ok(lemmatizer)
    }

    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn add_word(&mut self, word: &str) {
        self.vocabulary.insert(word.to_lowercase());
    }

    /// Record `inflected` as an irregular form of `base`.
    pub fn add_exception(&mut self, inflected: &str, base: &str) {
        let base = base.to_lowercase();
        self.exceptions.insert(inflected.to_lowercase(), base.clone());
        self.vocabulary.insert(base);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Number of base forms known.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Base form of `word`, or `None` if it is not a known word.
    pub fn lemma(&self, word: &str) -> Option<String> {
        if let Some(base) = self.exceptions.get(word) {
            return Some(base.clone());
        }
        if self.vocabulary.contains(word) {
            return Some(word.to_string());
        }
        Pos::ALL.iter().find_map(|pos| self.detach(word, *pos))
    }

    /// Base form of `word` using only the rules for `pos`.
    pub fn detach(&self, word: &str, pos: Pos) -> Option<String> {
        pos.rules().iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            if stem.is_empty() {
                return None;
            }
            let candidate = format!("{}{}", stem, replacement);
            self.vocabulary.contains(&candidate).then_some(candidate)
        })
    }
}
