//! Rack Words - CLI
//!
//! Search a word list with a seven-letter rack and maintain the list.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rack_words::{
    commands::{BenchmarkConfig, Edit, run_benchmark, run_edit, run_search, run_simple},
    output::{print_benchmark_result, print_edit_result, print_search_result, print_word_list},
    service::WordService,
    store::{DICTIONARY, MemoryStore, loader},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rack_words",
    about = "Find every word that can be spelled from seven letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary, read-only)
    #[arg(short, long, global = true, env = "RACK_WORDS_STORE")]
    store: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// List every word the rack can spell
    Search {
        /// Exactly seven letters, any case
        letters: String,

        /// Show search timing
        #[arg(short, long)]
        timing: bool,
    },

    /// Add a word (3 to 7 letters)
    Add {
        word: String,
    },

    /// Replace a stored word with another
    Rename {
        old: String,
        new: String,
    },

    /// Remove a stored word
    Remove {
        word: String,
    },

    /// Print every stored word
    List,

    /// Search random racks and report throughput
    Benchmark {
        /// Number of random racks
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Check candidates on the rayon thread pool
        #[arg(short, long)]
        parallel: bool,

        /// RNG seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the word store based on the --store flag
///
/// - absent: built-in dictionary
/// - existing file: its words
/// - missing file: built-in dictionary, written to the file on the first edit
fn load_store(path: Option<&Path>) -> Result<MemoryStore> {
    let words = match path {
        None => loader::words_from_slice(DICTIONARY),
        Some(path) if path.exists() => loader::load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?,
        Some(path) => {
            tracing::info!(
                path = %path.display(),
                "word list not found, seeding from built-in dictionary"
            );
            loader::words_from_slice(DICTIONARY)
        }
    };

    Ok(MemoryStore::from_words(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store_path = cli.store.as_deref();
    let service = WordService::new(load_store(store_path)?);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&service, store_path)?,
        Commands::Search { letters, timing } => {
            let result = run_search(&service, &letters)?;
            print_search_result(&result, timing);
        }
        Commands::Add { word } => run_edit_command(&service, &Edit::Add(word), store_path)?,
        Commands::Rename { old, new } => {
            run_edit_command(&service, &Edit::Rename { old, new }, store_path)?;
        }
        Commands::Remove { word } => {
            run_edit_command(&service, &Edit::Remove(word), store_path)?;
        }
        Commands::List => print_word_list(&service.list()),
        Commands::Benchmark {
            count,
            parallel,
            seed,
        } => run_benchmark_command(&service, count, parallel, seed),
    }

    Ok(())
}

fn run_edit_command(
    service: &WordService<MemoryStore>,
    edit: &Edit,
    store_path: Option<&Path>,
) -> Result<()> {
    let path = store_path
        .context("Editing the word list requires --store <PATH> or RACK_WORDS_STORE")?;

    let result = run_edit(service, edit, path)?;
    print_edit_result(&result);
    Ok(())
}

fn run_benchmark_command(
    service: &WordService<MemoryStore>,
    count: usize,
    parallel: bool,
    seed: Option<u64>,
) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark on {count} random racks (seed {seed})...");

    let words = service.list();
    let mut config = BenchmarkConfig::new(count);
    config.parallel = parallel;

    let mut rng = StdRng::seed_from_u64(seed);
    let result = run_benchmark(&words, &config, &mut rng);
    print_benchmark_result(&result);
}
