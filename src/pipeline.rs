//! Document processing pipeline.
//!
//! For every body paragraph yielded by the [`BoundaryDetector`]:
//!
//! 1. Split the paragraph into whitespace tokens, line by line.
//! 2. Normalize each token; drop it if it is too short or blacklisted.
//! 3. Resolve it through the [`Lexicon`], falling back to the
//!    [`Morphology`] classifier on a miss and recording the verdict.
//! 4. Emit the paragraph's roots as one space-joined line if there are
//!    more of them than the configured minimum.
//!
//! Words the classifier does not recognize are dropped without a lexicon
//! record, so a better dictionary can still classify them later.

use crate::boundary::{BoundaryDetector, DocumentState, Paragraph};
use crate::lexicon::{
    is_valid_key, Classification, Lexicon, LexiconEntry, LexiconStore, MemoryStore, MAX_KEY_LEN,
};
use crate::morphology::{root_form, Morphology};
use crate::normalize::normalize_token;
use crate::{PipelineConfig, PipelineError, PipelineResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of the boundary scan for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// A START marker was found.
    Parsed,
    /// The document ended without a START marker; it produced nothing.
    BadlyParsed,
}

/// The result of running one document through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    /// One line of roots per emitted paragraph, in document order.
    pub lines: Vec<String>,
    /// Body paragraphs examined, emitted or not.
    pub paragraphs_read: usize,
    pub status: DocumentStatus,
    /// Boundary state when processing stopped.
    pub final_state: DocumentState,
}

impl ProcessedDocument {
    pub fn is_badly_parsed(&self) -> bool {
        self.status == DocumentStatus::BadlyParsed
    }
}

/// Normalizes documents into lines of canonical roots.
#[derive(Debug)]
pub struct Pipeline<'a, M: ?Sized, S = MemoryStore> {
    config: PipelineConfig,
    morphology: &'a M,
    lexicon: Option<&'a Lexicon<S>>,
}

impl<'a, M: Morphology + ?Sized> Pipeline<'a, M, MemoryStore> {
    /// A pipeline that classifies every word afresh and records nothing.
    pub fn without_lexicon(config: PipelineConfig, morphology: &'a M) -> Self {
        Self {
            config,
            morphology,
            lexicon: None,
        }
    }
}

impl<'a, M: Morphology + ?Sized, S: LexiconStore> Pipeline<'a, M, S> {
    pub fn new(config: PipelineConfig, morphology: &'a M, lexicon: &'a Lexicon<S>) -> Self {
        Self {
            config,
            morphology,
            lexicon: Some(lexicon),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn lexicon(&self) -> Option<&'a Lexicon<S>> {
        self.lexicon.filter(|_| self.config.use_lexicon)
    }

    /// Read and process the document at `path`.
    pub fn process_file(&self, path: &Path) -> PipelineResult<ProcessedDocument> {
        info!(path = %path.display(), "processing document");
        let text = fs::read_to_string(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = self.process_text(&text)?;
        if document.is_badly_parsed() {
            warn!(path = %path.display(), "no start marker found");
        }
        Ok(document)
    }

    /// Process a whole document held in memory.
    pub fn process_text(&self, text: &str) -> PipelineResult<ProcessedDocument> {
        let mut detector = BoundaryDetector::new(text, &self.config.markers);
        let mut lines = Vec::new();
        let mut paragraphs_read = 0;

        for paragraph in detector.by_ref() {
            paragraphs_read += 1;
            if let Some(line) = self.process_paragraph(&paragraph)? {
                lines.push(line);
            }
        }

        let final_state = detector.state();
        let status = match final_state {
            DocumentState::Header => DocumentStatus::BadlyParsed,
            DocumentState::Body | DocumentState::Done => DocumentStatus::Parsed,
        };
        debug!(
            paragraphs_read,
            emitted = lines.len(),
            ?final_state,
            "document pass finished"
        );

        Ok(ProcessedDocument {
            lines,
            paragraphs_read,
            status,
            final_state,
        })
    }

    /// Classify every token of `paragraph` and join the roots.
    ///
    /// Returns `None` when the paragraph has too few roots to keep.
    pub fn process_paragraph(&self, paragraph: &Paragraph<'_>) -> PipelineResult<Option<String>> {
        let mut terms = Vec::new();
        for token in paragraph.tokens() {
            if let Some(term) = self.classify_token(token)? {
                terms.push(term);
            }
        }

        if terms.len() > self.config.min_terms {
            Ok(Some(terms.join(" ")))
        } else {
            Ok(None)
        }
    }

    /// Resolve one raw token to the root it contributes, if any.
    pub fn classify_token(&self, token: &str) -> PipelineResult<Option<String>> {
        let word = normalize_token(token);
        if word.is_empty()
            || word.len() < self.config.min_word_len
            || word.len() > self.config.max_word_len.min(MAX_KEY_LEN)
            || self.config.blacklist.contains(&word)
        {
            return Ok(None);
        }

        let Some(lexicon) = self.lexicon() else {
            return Ok(self.derive(&word).map(|entry| emitted(word, entry)));
        };

        match lexicon.lookup(&word)? {
            Classification::Blacklisted => Ok(None),
            Classification::Root => Ok(Some(word)),
            Classification::Variant(root) => Ok(Some(root)),
            Classification::Unknown => {
                debug!(word = word.as_str(), "lexicon miss");
                match self.derive(&word) {
                    Some(entry) => {
                        lexicon.record(&word, &entry)?;
                        Ok(Some(emitted(word, entry)))
                    }
                    None => Ok(None),
                }
            }
        }
    }

    /// Ask the classifier what `word` should be recorded as.
    ///
    /// `None` means the word is dropped without a record.
    fn derive(&self, word: &str) -> Option<LexiconEntry> {
        let root = root_form(self.morphology, word).filter(|root| is_valid_key(root))?;
        if root == word {
            Some(LexiconEntry::Root)
        } else if !self.config.blacklist.contains(&root) && root.len() > 2 {
            Some(LexiconEntry::Variant(root))
        } else {
            None
        }
    }
}

fn emitted(word: String, entry: LexiconEntry) -> String {
    match entry {
        LexiconEntry::Variant(root) => root,
        LexiconEntry::Root | LexiconEntry::Blacklisted => word,
    }
}
