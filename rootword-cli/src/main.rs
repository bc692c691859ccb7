//! Command-line interface for rootword.
//!
//! Usage:
//!   rootword clean `<document>...` [--dictionary `<file>`] [--lexicon `<dir>`] [--output `<dir>`]
//!   rootword export [--lexicon `<dir>`] [--output `<file>`]

mod settings;

use clap::{Args, Parser, Subcommand};
use rootword::{
    write_document, DirectoryStore, Lexicon, LexiconError, LexiconStore, OutputGranularity,
    Pipeline,
};
use rootword_morphology::{DictionaryError, DictionaryMorphology};
use settings::{Settings, SettingsError, DEFAULT_SETTINGS_FILE};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "rootword",
    version,
    about = "Normalize documents into canonical word roots"
)]
struct Cli {
    /// Settings file (default: ./rootword.toml if present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Process documents into cleaned root text
    Clean(CleanArgs),
    /// Print every root and variant in the lexicon as `word root` lines
    Export(ExportArgs),
}

#[derive(Debug, Args)]
struct CleanArgs {
    /// Documents to process
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Dictionary for the lemmatizer
    #[arg(long, short)]
    dictionary: Option<PathBuf>,

    /// Lexicon directory
    #[arg(long, short)]
    lexicon: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Emit a paragraph only with more roots than this
    #[arg(long)]
    min_terms: Option<usize>,

    /// Write one numbered file per paragraph
    #[arg(long)]
    per_paragraph: bool,

    /// Classify every word afresh without reading or writing the lexicon
    #[arg(long)]
    no_lexicon: bool,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Lexicon directory
    #[arg(long, short)]
    lexicon: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error("no dictionary configured: pass --dictionary or set paths.dictionary")]
    MissingDictionary,

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(Path::new(DEFAULT_SETTINGS_FILE))?,
    };

    match cli.command {
        Command::Clean(args) => clean(args, settings),
        Command::Export(args) => export(args, settings),
    }
}

fn clean(args: CleanArgs, settings: Settings) -> Result<ExitCode, CliError> {
    let Settings {
        pipeline: mut config,
        paths,
    } = settings;
    if let Some(min_terms) = args.min_terms {
        config.min_terms = min_terms;
    }
    if args.per_paragraph {
        config.granularity = OutputGranularity::PerParagraph;
    }
    if args.no_lexicon {
        config.use_lexicon = false;
    }

    let dictionary = args
        .dictionary
        .or(paths.dictionary)
        .ok_or(CliError::MissingDictionary)?;
    let morphology = DictionaryMorphology::load(&dictionary)?;

    let out_dir = args.output.unwrap_or(paths.output);
    fs::create_dir_all(&out_dir).map_err(|source| CliError::Output {
        path: out_dir.clone(),
        source,
    })?;

    let failed = if config.use_lexicon {
        let lexicon_dir = args.lexicon.unwrap_or(paths.lexicon);
        let lexicon = Lexicon::new(DirectoryStore::open(lexicon_dir)?);
        let pipeline = Pipeline::new(config, &morphology, &lexicon);
        clean_documents(&pipeline, &args.documents, &out_dir)
    } else {
        let pipeline = Pipeline::without_lexicon(config, &morphology);
        clean_documents(&pipeline, &args.documents, &out_dir)
    };

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Process each document in turn; returns how many failed.
///
/// A badly parsed document is reported but does not count as a failure.
fn clean_documents<S: LexiconStore>(
    pipeline: &Pipeline<'_, DictionaryMorphology, S>,
    documents: &[PathBuf],
    out_dir: &Path,
) -> usize {
    let granularity = pipeline.config().granularity;
    let mut failed = 0;

    for path in documents {
        println!("{}", path.display());
        let result = pipeline
            .process_file(path)
            .and_then(|document| write_document(&document, path, out_dir, granularity));
        match result {
            Ok(Some(artifact)) => {
                info!(path = %path.display(), artifact = %artifact.display(), "document cleaned");
            }
            Ok(None) => println!("{} was badly parsed, no output", path.display()),
            Err(err) => {
                error!(path = %path.display(), "{}", err);
                eprintln!("error: {}: {}", path.display(), err);
                failed += 1;
            }
        }
    }

    failed
}

fn export(args: ExportArgs, settings: Settings) -> Result<ExitCode, CliError> {
    let lexicon_dir = args.lexicon.unwrap_or(settings.paths.lexicon);
    let lexicon = Lexicon::new(DirectoryStore::open(lexicon_dir)?);
    let pairs = lexicon.export()?;

    let mut content = String::new();
    for (word, root) in &pairs {
        content.push_str(word);
        content.push(' ');
        content.push_str(root);
        content.push('\n');
    }

    match args.output {
        Some(path) => fs::write(&path, content).map_err(|source| CliError::Output {
            path: path.clone(),
            source,
        })?,
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|source| CliError::Output {
                path: PathBuf::from("<stdout>"),
                source,
            })?,
    }
    info!(pairs = pairs.len(), "lexicon exported");

    Ok(ExitCode::SUCCESS)
}
