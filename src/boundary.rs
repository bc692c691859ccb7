//! Paragraph segmentation and header/body/footer detection.
//!
//! Documents open with a license header and close with a footer, each
//! delimited by literal marker text. [`BoundaryDetector`] walks the
//! blank-line-delimited paragraphs of a document and yields only those
//! between the START and END markers:
//!
//! ```text
//! Header --START--> Body --END--> Done
//! ```
//!
//! The paragraph carrying a marker is never yielded. Once END is seen the
//! rest of the document is not read at all.

use serde::Deserialize;
use tracing::debug;

/// Literal marker text that opens and closes the usable body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoundaryMarkers {
    /// Any of these ends the header.
    pub start: Vec<String>,
    /// Any of these begins the footer.
    pub end: Vec<String>,
}

impl BoundaryMarkers {
    /// Project Gutenberg header and footer wording.
    pub fn gutenberg() -> Self {
        Self {
            start: vec!["*** START OF ".into(), "*END THE SMALL PRINT".into()],
            end: vec![
                "*** END OF ".into(),
                "End of Project Gutenberg's".into(),
                "End of the Project Gutenberg".into(),
            ],
        }
    }

    pub fn new(start: Vec<String>, end: Vec<String>) -> Self {
        Self { start, end }
    }

    pub fn is_start(&self, paragraph: &Paragraph<'_>) -> bool {
        self.start.iter().any(|marker| paragraph.contains(marker))
    }

    pub fn is_end(&self, paragraph: &Paragraph<'_>) -> bool {
        self.end.iter().any(|marker| paragraph.contains(marker))
    }
}

impl Default for BoundaryMarkers {
    fn default() -> Self {
        Self::gutenberg()
    }
}

/// Where a document pass currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Before the START marker; paragraphs are discarded.
    Header,
    /// Between the markers; paragraphs are processed.
    Body,
    /// END marker seen; nothing more is read.
    Done,
}

/// Consecutive non-blank lines of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// True when any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Whitespace-separated tokens, line by line, left to right.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied().flat_map(str::split_whitespace)
    }
}

/// Splits text into paragraphs on blank lines.
///
/// Runs of blank (or whitespace-only) lines count as one separator.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Paragraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Paragraph<'a>> {
        let mut lines = Vec::new();
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                if lines.is_empty() {
                    continue;
                }
                break;
            }
            lines.push(line);
        }
        if lines.is_empty() {
            None
        } else {
            Some(Paragraph::new(lines))
        }
    }
}

/// Yields the body paragraphs of one document.
#[derive(Debug)]
pub struct BoundaryDetector<'t, 'm> {
    paragraphs: Paragraphs<'t>,
    markers: &'m BoundaryMarkers,
    state: DocumentState,
}

impl<'t, 'm> BoundaryDetector<'t, 'm> {
    pub fn new(text: &'t str, markers: &'m BoundaryMarkers) -> Self {
        Self {
            paragraphs: Paragraphs::new(text),
            markers,
            state: DocumentState::Header,
        }
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }
}

impl<'t, 'm> Iterator for BoundaryDetector<'t, 'm> {
    type Item = Paragraph<'t>;

    fn next(&mut self) -> Option<Paragraph<'t>> {
        loop {
            if self.state == DocumentState::Done {
                return None;
            }
            let paragraph = self.paragraphs.next()?;
            match self.state {
                DocumentState::Header => {
                    if self.markers.is_start(&paragraph) {
                        debug!("start marker found, entering body");
                        self.state = DocumentState::Body;
                    }
                }
                DocumentState::Body => {
                    // A repeated START marker inside the body is dropped.
                    if self.markers.is_start(&paragraph) {
                        continue;
                    }
                    if self.markers.is_end(&paragraph) {
                        debug!("end marker found, document done");
                        self.state = DocumentState::Done;
                        return None;
                    }
                    return Some(paragraph);
                }
                DocumentState::Done => return None,
            }
        }
    }
}
