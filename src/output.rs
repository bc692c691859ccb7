//! Writing processed documents to disk.
//!
//! Artifacts are named after the input file: `books/pg1342.txt` becomes
//! `<out>/pg1342clean.txt`, or the directory `<out>/pg1342clean/` holding
//! `1.txt`, `2.txt`, ... when writing one file per paragraph.

use crate::{OutputGranularity, PipelineError, PipelineResult, ProcessedDocument};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The part of the input's file name before its first `.`.
pub fn output_stem(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

/// Write `document` under `out_dir` and return the artifact path.
///
/// A badly parsed document produces no artifact and `Ok(None)`.
pub fn write_document(
    document: &ProcessedDocument,
    input: &Path,
    out_dir: &Path,
    granularity: OutputGranularity,
) -> PipelineResult<Option<PathBuf>> {
    if document.is_badly_parsed() {
        return Ok(None);
    }
    let stem = output_stem(input);

    match granularity {
        OutputGranularity::WholeDocument => {
            let path = out_dir.join(format!("{}clean.txt", stem));
            let mut content = document.lines.join("\n");
            if !content.is_empty() {
                content.push('\n');
            }
            fs::write(&path, content).map_err(|source| write_error(&path, source))?;
            debug!(path = %path.display(), lines = document.lines.len(), "wrote document");
            Ok(Some(path))
        }
        OutputGranularity::PerParagraph => {
            let dir = out_dir.join(format!("{}clean", stem));
            // Stale paragraphs from an earlier, longer run must not survive.
            match fs::remove_dir_all(&dir) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(source) => return Err(write_error(&dir, source)),
            }
            fs::create_dir_all(&dir).map_err(|source| write_error(&dir, source))?;
            for (i, line) in document.lines.iter().enumerate() {
                let path = dir.join(format!("{}.txt", i + 1));
                fs::write(&path, format!("{}\n", line))
                    .map_err(|source| write_error(&path, source))?;
            }
            debug!(path = %dir.display(), paragraphs = document.lines.len(), "wrote paragraphs");
            Ok(Some(dir))
        }
    }
}

fn write_error(path: &Path, source: io::Error) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        source,
    }
}
