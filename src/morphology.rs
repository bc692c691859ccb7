//! Interface to the morphological classifier.
//!
//! Lemmatization and stemming are supplied from outside the core (see the
//! `rootword-morphology` crate for a dictionary-backed implementation). The
//! core only owns the adverb correction applied to stems ending in `li`.

use crate::normalize::is_normalized;

/// A lemmatizer paired with a rule-based stemmer.
pub trait Morphology {
    /// Canonical base form of `word`, or `None` when `word` is not
    /// recognized.
    fn lemma(&self, word: &str) -> Option<String>;

    /// Root of `word` by suffix stripping. Non-empty for non-empty input.
    fn stem(&self, word: &str) -> String;

    /// True when the classifier recognizes `word`.
    fn is_word(&self, word: &str) -> bool {
        self.lemma(word).is_some()
    }
}

impl<M: Morphology + ?Sized> Morphology for &M {
    fn lemma(&self, word: &str) -> Option<String> {
        (**self).lemma(word)
    }

    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }

    fn is_word(&self, word: &str) -> bool {
        (**self).is_word(word)
    }
}

/// Re-stem a stem ending in `li` without that suffix.
///
/// Adverbs such as "happily" stem to "happili" while their adjectives stem
/// to "happi"; this folds the former onto the latter.
pub fn adjust_li<M: Morphology + ?Sized>(morphology: &M, stem: String) -> String {
    match stem.strip_suffix("li") {
        Some(head) if !head.is_empty() => {
            let restemmed = morphology.stem(head);
            if restemmed.is_empty() {
                stem
            } else {
                restemmed
            }
        }
        _ => stem,
    }
}

/// Derive the root of a normalized word: lemma, then stem, then the `li`
/// adjustment.
///
/// Returns `None` when the classifier rejects the word or produces
/// something that is not a normalized word.
pub fn root_form<M: Morphology + ?Sized>(morphology: &M, word: &str) -> Option<String> {
    let lemma = morphology.lemma(word)?;
    let stem = morphology.stem(&lemma);
    if stem.is_empty() {
        return None;
    }
    Some(adjust_li(morphology, stem)).filter(|root| is_normalized(root))
}
