//! The Porter suffix-stripping stemmer.
//!
//! A straight implementation of M.F. Porter's 1980 algorithm over ASCII
//! lowercase words. Words of two letters or fewer, and words containing
//! anything other than `a`-`z`, are returned unchanged.

/// Rule-based stemmer reducing inflected English words to a common stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    pub fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }
        let mut w = Word {
            b: word.as_bytes().to_vec(),
        };
        w.step1a();
        w.step1b();
        w.step1c();
        w.step2();
        w.step3();
        w.step4();
        w.step5();
        w.b.into_iter().map(char::from).collect()
    }
}

/// (suffix, replacement) pairs applied when the stem measure is above 0.
const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Suffixes removed when the stem measure is above 1.
const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

struct Word {
    b: Vec<u8>,
}

impl Word {
    fn len(&self) -> usize {
        self.b.len()
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => {
                // Within a run of `y`s the classes alternate, starting from
                // the letter before the run.
                let mut first = i;
                while first > 0 && self.b[first - 1] == b'y' {
                    first -= 1;
                }
                let starts_consonant =
                    first == 0 || matches!(self.b[first - 1], b'a' | b'e' | b'i' | b'o' | b'u');
                starts_consonant == ((i - first) % 2 == 0)
            }
            _ => true,
        }
    }

    /// Consonant flags for `b[..len]` in one forward pass.
    fn consonants(&self, len: usize) -> impl Iterator<Item = bool> + '_ {
        self.b[..len].iter().scan(None, |prev: &mut Option<bool>, &c| {
            let consonant = match c {
                b'a' | b'e' | b'i' | b'o' | b'u' => false,
                b'y' => prev.map_or(true, |p| !p),
                _ => true,
            };
            *prev = Some(consonant);
            Some(consonant)
        })
    }

    /// Number of vowel-consonant sequences in `b[..len]`.
    fn measure(&self, len: usize) -> usize {
        let mut m = 0;
        let mut prev_vowel = false;
        for consonant in self.consonants(len) {
            if consonant && prev_vowel {
                m += 1;
            }
            prev_vowel = !consonant;
        }
        m
    }

    fn has_vowel(&self, len: usize) -> bool {
        self.consonants(len).any(|consonant| !consonant)
    }

    fn ends_double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.b[len - 1] == self.b[len - 2] && self.is_consonant(len - 1)
    }

    /// consonant-vowel-consonant ending, last consonant not w, x or y.
    fn ends_cvc(&self, len: usize) -> bool {
        len >= 3
            && self.is_consonant(len - 3)
            && !self.is_consonant(len - 2)
            && self.is_consonant(len - 1)
            && !matches!(self.b[len - 1], b'w' | b'x' | b'y')
    }

    fn ends(&self, suffix: &str) -> bool {
        self.b.ends_with(suffix.as_bytes())
    }

    fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        let keep = self.len() - suffix_len;
        self.b.truncate(keep);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    /// Apply the first rule whose suffix matches, if its stem measure
    /// exceeds `min_measure`.
    fn apply_rules(&mut self, rules: &[(&str, &str)], min_measure: usize) {
        if let Some((suffix, replacement)) = rules.iter().find(|(s, _)| self.ends(s)) {
            if self.measure(self.len() - suffix.len()) > min_measure {
                self.replace_suffix(suffix.len(), replacement);
            }
        }
    }

    fn step1a(&mut self) {
        if self.ends("sses") || self.ends("ies") {
            self.b.truncate(self.len() - 2);
        } else if !self.ends("ss") && self.ends("s") {
            self.b.pop();
        }
    }

    fn step1b(&mut self) {
        if self.ends("eed") {
            if self.measure(self.len() - 3) > 0 {
                self.b.pop();
            }
            return;
        }
        let suffix_len = if self.ends("ed") {
            2
        } else if self.ends("ing") {
            3
        } else {
            return;
        };
        if !self.has_vowel(self.len() - suffix_len) {
            return;
        }
        self.b.truncate(self.len() - suffix_len);

        let len = self.len();
        if self.ends("at") || self.ends("bl") || self.ends("iz") {
            self.b.push(b'e');
        } else if self.ends_double_consonant(len)
            && !matches!(self.b[len - 1], b'l' | b's' | b'z')
        {
            self.b.pop();
        } else if self.measure(len) == 1 && self.ends_cvc(len) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        let len = self.len();
        if self.ends("y") && self.has_vowel(len - 1) {
            self.b[len - 1] = b'i';
        }
    }

    fn step2(&mut self) {
        self.apply_rules(STEP2, 0);
    }

    fn step3(&mut self) {
        self.apply_rules(STEP3, 0);
    }

    fn step4(&mut self) {
        let Some(suffix) = STEP4.iter().find(|s| self.ends(s)) else {
            return;
        };
        let stem_len = self.len() - suffix.len();
        if *suffix == "ion" && !(stem_len > 0 && matches!(self.b[stem_len - 1], b's' | b't')) {
            return;
        }
        if self.measure(stem_len) > 1 {
            self.b.truncate(stem_len);
        }
    }

    fn step5(&mut self) {
        if self.ends("e") {
            let stem_len = self.len() - 1;
            let m = self.measure(stem_len);
            if m > 1 || (m == 1 && !self.ends_cvc(stem_len)) {
                self.b.pop();
            }
        }
        let len = self.len();
        if self.ends("l") && self.ends_double_consonant(len) && self.measure(len) > 1 {
            self.b.pop();
        }
    }
}
