//! Corpus normalization into canonical word roots.
//!
//! `rootword` reads raw natural-language documents and reduces every
//! paragraph of their body to a line of canonical roots. Each distinct
//! surface word is classified once and the verdict is kept in a durable
//! [`Lexicon`], so later documents (and later runs) resolve the same word
//! with a single point lookup instead of another trip through the
//! morphological classifier.
//!
//! ## Modules
//!
//! - [`normalize`] - Token normalization (lowercase, letters only)
//! - [`blacklist`] - Static set of functional noise words
//! - [`lexicon`] - Word classification cache and its storage backends
//! - [`morphology`] - Interface to the external lemmatizer/stemmer
//! - [`boundary`] - Header/body/footer detection over paragraphs
//! - [`pipeline`] - Orchestration of the above into output lines
//! - [`output`] - Writing processed documents to disk
//! - [`config`] - Pipeline configuration
//! - [`errors`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use rootword::{Lexicon, MemoryStore, Pipeline, PipelineConfig};
//!
//! let lexicon = Lexicon::new(MemoryStore::new());
//! let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);
//! let document = pipeline.process_text(&text)?;
//! for line in &document.lines {
//!     println!("{}", line);
//! }
//! ```

pub mod blacklist;
pub mod boundary;
pub mod config;
pub mod errors;
pub mod lexicon;
pub mod morphology;
pub mod normalize;
pub mod output;
pub mod pipeline;

pub use blacklist::Blacklist;
pub use boundary::{BoundaryDetector, BoundaryMarkers, DocumentState, Paragraph, Paragraphs};
pub use config::{OutputGranularity, PipelineConfig};
pub use errors::{LexiconError, LexiconResult, PipelineError, PipelineResult};
pub use lexicon::{
    is_valid_key, Classification, DirectoryStore, Lexicon, LexiconEntry, LexiconStore,
    MemoryStore, MAX_KEY_LEN,
};
pub use morphology::{root_form, Morphology};
pub use normalize::normalize_token;
pub use output::{output_stem, write_document};
pub use pipeline::{DocumentStatus, Pipeline, ProcessedDocument};

#[cfg(test)]
mod tests;
