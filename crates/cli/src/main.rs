//! docprep — corpus preparation command line.
//!
//! Loads a dataset (markdown directory or JSON file), splits each document
//! into chunks, and persists the keyed chunk map for later pipeline stages.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::info;

use docprep_core::Config;
use docprep_dataset::load_dataset_from_json;
use docprep_persist::{load_chunks, save_chunks, ChunkMap};
use docprep_preprocess::{drop_empty_units, Preprocessor, SplitConfig, SplitMode};

#[derive(Parser, Debug)]
#[command(name = "docprep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dataset and split its documents into a keyed chunk map.
    Preprocess {
        /// Dataset source: a JSON file or a directory of markdown files.
        #[arg(long, env = "DOCPREP_INPUT")]
        input: PathBuf,

        /// Output path for the chunk blob (default: <data_dir>/chunks.bin).
        #[arg(long, env = "DOCPREP_OUTPUT")]
        out: Option<PathBuf>,

        /// Split mode: "passage", "sentence" or "word".
        #[arg(long)]
        split_by: Option<String>,

        /// Units per chunk.
        #[arg(long)]
        split_length: Option<usize>,

        /// Units shared between adjacent chunks.
        #[arg(long)]
        split_overlap: Option<usize>,

        /// Drop empty/whitespace-only units before assembly.
        #[arg(long, default_value_t = false)]
        drop_empty_units: bool,

        /// Suppress per-document progress events.
        #[arg(long, default_value_t = false)]
        no_progress: bool,

        /// Replace an existing output file instead of renaming the new one.
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },

    /// Summarize a saved chunk blob.
    Inspect {
        /// Path to a chunk blob written by `preprocess`.
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    docprep_core::config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Preprocess {
            input,
            out,
            split_by,
            split_length,
            split_overlap,
            drop_empty_units,
            no_progress,
            overwrite,
        } => {
            config.log_summary();

            let split_config = SplitConfig {
                split_by: SplitMode::from_str(
                    split_by.as_deref().unwrap_or(&config.preprocess.split_by),
                )?,
                split_length: split_length.unwrap_or(config.preprocess.split_length),
                split_overlap: split_overlap.unwrap_or(config.preprocess.split_overlap),
                progress: config.preprocess.progress && !no_progress,
            };
            let out = out.unwrap_or_else(|| config.storage.data_dir.join("chunks.bin"));

            run_preprocess(&input, &out, split_config, drop_empty_units, overwrite)
        }
        Command::Inspect { path } => run_inspect(&path),
    }
}

fn run_preprocess(
    input: &Path,
    out: &Path,
    split_config: SplitConfig,
    filter_empty_units: bool,
    overwrite: bool,
) -> anyhow::Result<()> {
    let records = load_dataset_from_json(input)?;
    let docs: Vec<_> = records.iter().map(|r| r.to_document()).collect();

    let mut processor = Preprocessor::new(split_config);
    if filter_empty_units {
        processor = processor.with_cleaner(drop_empty_units);
    }

    let nested = processor.process_batch(&docs)?;

    // Key chunks by source filename and chunk index; filenames are unique
    // within one load.
    let mut chunks = ChunkMap::new();
    for (record, doc_chunks) in records.iter().zip(&nested) {
        for (i, chunk) in doc_chunks.iter().enumerate() {
            chunks.insert(format!("{}#{}", record.filename, i), chunk.clone());
        }
    }

    let written = save_chunks(&chunks, out, overwrite)?;
    info!(
        documents = records.len(),
        chunks = chunks.len(),
        path = %written.display(),
        "preprocessing complete"
    );
    Ok(())
}

fn run_inspect(path: &Path) -> anyhow::Result<()> {
    let chunks = load_chunks(path)?;

    let mut keys: Vec<&String> = chunks.keys().collect();
    keys.sort();

    println!("{}: {} chunks", path.display(), chunks.len());
    for key in keys.iter().take(10) {
        let doc = &chunks[key.as_str()];
        let preview: String = doc.content.chars().take(60).collect();
        println!("  {key}  {} chars  {preview:?}", doc.content.len());
    }
    if keys.len() > 10 {
        println!("  ... and {} more", keys.len() - 10);
    }
    Ok(())
}
