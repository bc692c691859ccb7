//! Token normalization.

/// Lowercase `token` and drop every character outside `a`-`z`.
///
/// An empty result means the token carries no word and should be
/// discarded.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// True when `word` is non-empty and made only of `a`-`z`.
pub fn is_normalized(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
