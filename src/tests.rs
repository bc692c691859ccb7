//! Whole-pipeline scenarios against on-disk lexicons.

use crate::morphology::testing::TableMorphology;
use crate::*;
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

const MOBY: &str = "\
The Project Gutenberg EBook of a sea story

*** START OF THIS PROJECT GUTENBERG EBOOK ***

The whales swam, and the sailors sailed happily
past the ships.

Call me Ishmael.

The captain watched the whales; the sailors watched
the captain and the ships.

*** END OF THIS PROJECT GUTENBERG EBOOK ***

The whales in the footer are never counted whales whales whales.
";

fn morphology() -> TableMorphology {
    TableMorphology::new()
        .word("whales", "whale")
        .word("whale", "whale")
        .stem_to("whale", "whale")
        .word("swam", "swim")
        .word("sailors", "sailor")
        .stem_to("sailor", "sailor")
        .word("sailed", "sail")
        .word("happily", "happily")
        .stem_to("happily", "happili")
        .stem_to("happi", "happi")
        .word("past", "past")
        .word("ships", "ship")
        .word("call", "call")
        .word("captain", "captain")
        .word("watched", "watch")
}

#[test]
fn test_document_against_directory_lexicon() {
    let dir = TempDir::new().unwrap();
    let lexicon = Lexicon::new(DirectoryStore::open(dir.path()).unwrap());
    let morphology = morphology();
    let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);

    let document = pipeline.process_text(MOBY).unwrap();

    assert_eq!(document.status, DocumentStatus::Parsed);
    assert_eq!(document.final_state, DocumentState::Done);
    assert_eq!(document.paragraphs_read, 3);
    insta::assert_snapshot!(document.lines.join("\n"), @r###"
    whale swim sailor sail happi past ship
    captain watch whale sailor watch captain ship
    "###);

    assert_eq!(
        fs::read_to_string(dir.path().join("happily")).unwrap(),
        "2happi"
    );
    assert_eq!(fs::read_to_string(dir.path().join("happi")).unwrap(), "1");
    assert!(!dir.path().join("ishmael").exists());
}

#[test]
fn test_cache_convergence() {
    let dir = TempDir::new().unwrap();
    let lexicon = Lexicon::new(DirectoryStore::open(dir.path()).unwrap());
    let morphology = morphology();
    let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);
    pipeline.process_text(MOBY).unwrap();

    let entries = lexicon.store().entries().unwrap();
    assert!(entries
        .iter()
        .any(|(_, entry)| matches!(entry, LexiconEntry::Variant(_))));
    for (word, entry) in entries {
        if let LexiconEntry::Variant(root) = entry {
            assert_eq!(
                lexicon.lookup(&root).unwrap(),
                Classification::Root,
                "{} -> {}",
                word,
                root
            );
        }
    }
    assert!(lexicon.dangling_variants().unwrap().is_empty());
}

#[test]
fn test_rerun_is_byte_identical() {
    let lexicon_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = out.path().join("moby.txt");
    fs::write(&input, MOBY).unwrap();

    let morphology = morphology();
    let mut artifacts = Vec::new();
    for _ in 0..2 {
        // A fresh store handle each time, as a separate run would have.
        let lexicon = Lexicon::new(DirectoryStore::open(lexicon_dir.path()).unwrap());
        let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);
        let document = pipeline.process_file(&input).unwrap();
        let path = write_document(
            &document,
            &input,
            out.path(),
            OutputGranularity::WholeDocument,
        )
        .unwrap()
        .unwrap();
        artifacts.push(fs::read(path).unwrap());
    }

    assert!(!artifacts[0].is_empty());
    assert_eq!(artifacts[0], artifacts[1]);
}

/// Records every word the classifier is asked about.
struct Recording<'a> {
    inner: &'a TableMorphology,
    asked: RefCell<Vec<String>>,
}

impl Morphology for Recording<'_> {
    fn lemma(&self, word: &str) -> Option<String> {
        self.asked.borrow_mut().push(word.to_string());
        self.inner.lemma(word)
    }

    fn stem(&self, word: &str) -> String {
        self.inner.stem(word)
    }
}

#[test]
fn test_blacklist_short_circuits() {
    let table = morphology();
    let morphology = Recording {
        inner: &table,
        asked: RefCell::new(Vec::new()),
    };
    let lexicon = Lexicon::new(MemoryStore::new());
    let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);

    let document = pipeline.process_text(MOBY).unwrap();

    let asked = morphology.asked.borrow();
    for noise in ["the", "and", "me"] {
        assert!(!asked.iter().any(|w| w == noise), "{} reached classifier", noise);
        assert_eq!(lexicon.lookup(noise).unwrap(), Classification::Unknown);
        assert!(document
            .lines
            .iter()
            .all(|line| line.split(' ').all(|term| term != noise)));
    }
}

#[test]
fn test_cache_hit_skips_classifier() {
    let table = morphology();
    let lexicon = Lexicon::new(MemoryStore::new());
    Pipeline::new(PipelineConfig::default(), &table, &lexicon)
        .process_text(MOBY)
        .unwrap();

    let morphology = Recording {
        inner: &table,
        asked: RefCell::new(Vec::new()),
    };
    let second = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon)
        .process_text(MOBY)
        .unwrap();

    assert_eq!(second.lines.len(), 2);
    // Only words the classifier rejected are asked about again.
    assert_eq!(*morphology.asked.borrow(), vec!["ishmael".to_string()]);
}

#[test]
fn test_boundary_example() {
    let morphology = TableMorphology::new()
        .word("cat", "cat")
        .word("sat", "sit");
    let lexicon = Lexicon::new(MemoryStore::new());
    let config = PipelineConfig::default().with_min_terms(0);
    let pipeline = Pipeline::new(config, &morphology, &lexicon);

    let document = pipeline
        .process_text("garbage\n\n*** START OF FOO ***\n\nThe cat sat.\n\n*** END OF FOO ***\n\nmore garbage")
        .unwrap();

    assert_eq!(document.paragraphs_read, 1);
    assert_eq!(document.lines, vec!["cat sit".to_string()]);
    assert_eq!(lexicon.lookup("garbage").unwrap(), Classification::Unknown);
}

#[test]
fn test_no_start_marker_reports_and_writes_nothing() {
    let out = TempDir::new().unwrap();
    let input = out.path().join("junk.txt");
    fs::write(&input, "whales whales whales whales whales whales\n").unwrap();

    let morphology = morphology();
    let lexicon = Lexicon::new(MemoryStore::new());
    let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);
    let document = pipeline.process_file(&input).unwrap();

    assert!(document.is_badly_parsed());
    let written = write_document(
        &document,
        &input,
        out.path(),
        OutputGranularity::WholeDocument,
    )
    .unwrap();
    assert_eq!(written, None);
}

#[test]
fn test_two_runs_share_one_lexicon() {
    let dir = TempDir::new().unwrap();
    let first = DirectoryStore::open(dir.path()).unwrap();
    let second = DirectoryStore::open(dir.path()).unwrap();
    let morphology = morphology();

    let a = Lexicon::new(&first);
    let b = Lexicon::new(&second);
    let out_a = Pipeline::new(PipelineConfig::default(), &morphology, &a)
        .process_text(MOBY)
        .unwrap();
    let out_b = Pipeline::new(PipelineConfig::default(), &morphology, &b)
        .process_text(MOBY)
        .unwrap();

    assert_eq!(out_a, out_b);
    assert_eq!(first.entries().unwrap(), second.entries().unwrap());
}

#[test]
fn test_corrupt_record_surfaces() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("whales"), "7").unwrap();
    let lexicon = Lexicon::new(DirectoryStore::open(dir.path()).unwrap());
    let morphology = morphology();
    let pipeline = Pipeline::new(PipelineConfig::default(), &morphology, &lexicon);

    let err = pipeline.process_text(MOBY).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Lexicon(LexiconError::Corrupt { .. })
    ));
}

#[test]
fn test_overlong_token_is_dropped() {
    let dir = TempDir::new().unwrap();
    let lexicon = Lexicon::new(DirectoryStore::open(dir.path()).unwrap());
    let morphology = morphology();
    let config = PipelineConfig::default().with_min_terms(0);
    let pipeline = Pipeline::new(config, &morphology, &lexicon);

    let text = format!(
        "*** START OF X ***\n\nThe whales swam past the ships {}\n",
        "x".repeat(300)
    );
    let document = pipeline.process_text(&text).unwrap();

    assert_eq!(document.lines, vec!["whale swim past ship".to_string()]);
    assert!(lexicon.dangling_variants().unwrap().is_empty());
}
