//! Morphological classifier for rootword.
//!
//! This crate provides a concrete [`rootword::Morphology`]:
//!
//! - [`Lemmatizer`] - dictionary lookup with exception lists and
//!   suffix detachment rules
//! - [`PorterStemmer`] - the classic Porter suffix-stripping stemmer
//! - [`DictionaryMorphology`] - both of the above behind the core trait
//!
//! ## Usage
//!
//! ```ignore
//! use rootword::{root_form, Morphology};
//! use rootword_morphology::DictionaryMorphology;
//!
//! let morphology = DictionaryMorphology::load(Path::new("words.txt"))?;
//! assert_eq!(root_form(&morphology, "happily"), Some("happi".to_string()));
//! ```

mod lemmatizer;
mod porter;

pub use lemmatizer::{Lemmatizer, Pos};
pub use porter::PorterStemmer;

use rootword::Morphology;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dictionary entry at line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// A [`Lemmatizer`] and a [`PorterStemmer`] used together.
#[derive(Debug, Clone, Default)]
pub struct DictionaryMorphology {
    lemmatizer: Lemmatizer,
    stemmer: PorterStemmer,
}

impl DictionaryMorphology {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        Self {
            lemmatizer,
            stemmer: PorterStemmer::new(),
        }
    }

    /// Load the lemmatizer's dictionary from `path`.
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let lemmatizer = Lemmatizer::load(path)?;
        debug!(path = %path.display(), words = lemmatizer.len(), "loaded dictionary");
        Ok(Self::new(lemmatizer))
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

impl Morphology for DictionaryMorphology {
    fn lemma(&self, word: &str) -> Option<String> {
        self.lemmatizer.lemma(word)
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }
}
