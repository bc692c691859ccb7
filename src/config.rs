//! Pipeline configuration.

use crate::{Blacklist, BoundaryMarkers};
use serde::Deserialize;

/// How emitted paragraphs are grouped into output artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputGranularity {
    /// One file per document, one line per emitted paragraph.
    #[default]
    WholeDocument,
    /// One numbered file per emitted paragraph.
    PerParagraph,
}

/// Configuration for a [`Pipeline`](crate::Pipeline).
///
/// Deserializable from a settings file; every field falls back to its
/// default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub granularity: OutputGranularity,
    /// A paragraph is emitted only with strictly more terms than this.
    pub min_terms: usize,
    /// Normalized words shorter than this are dropped.
    pub min_word_len: usize,
    /// Normalized words longer than this are dropped. Never more than
    /// [`MAX_KEY_LEN`](crate::MAX_KEY_LEN) in effect.
    pub max_word_len: usize,
    /// Consult and populate the lexicon; when false every word goes
    /// straight to the classifier and nothing is recorded.
    pub use_lexicon: bool,
    pub blacklist: Blacklist,
    pub markers: BoundaryMarkers,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            granularity: OutputGranularity::WholeDocument,
            min_terms: 4,
            min_word_len: 3,
            max_word_len: 64,
            use_lexicon: true,
            blacklist: Blacklist::default(),
            markers: BoundaryMarkers::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_granularity(mut self, granularity: OutputGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_min_terms(mut self, min_terms: usize) -> Self {
        self.min_terms = min_terms;
        self
    }

    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    pub fn with_lexicon(mut self, use_lexicon: bool) -> Self {
        self.use_lexicon = use_lexicon;
        self
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_markers(mut self, markers: BoundaryMarkers) -> Self {
        self.markers = markers;
        self
    }
}
