//! Scrabbler - CLI
//!
//! Finds playable words from your tiles, with TUI, interactive and one-shot modes.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use scrabbler::{
    commands::{
        BenchmarkConfig, SearchConfig, benchmark::RACK_SIZE, find_words, run_benchmark,
        run_simple,
    },
    matcher::LengthPolicy,
    output::{print_benchmark_result, print_count, print_find_result, print_plain},
    wordlists::WordSource,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scrabbler",
    about = "Generate possible scrabble words given your tiles and board constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A file with the words to be searched. Defaults to the built-in list.
    #[arg(short = 'S', long, global = true)]
    source_file: Option<PathBuf>,

    /// Your tiles, e.g. 'aertsl' or 'a,e,r,t,s,l'
    #[arg(short = 'T', long, global = true)]
    tiles: Option<String>,

    /// Board letters to incorporate as letter,position pairs, e.g. 'a,1,t,3'
    #[arg(short = 'C', long, global = true)]
    constraints: Option<String>,

    /// Longest word to consider (default: tiles + constraints)
    #[arg(short = 'm', long, global = true)]
    max_length: Option<usize>,

    /// Length rule: budget (default), reach, or both
    #[arg(short = 'p', long, global = true, default_value = "budget")]
    length_policy: LengthPolicy,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find playable words once (default when --tiles is given)
    Find {
        /// Print one word per line without decoration
        #[arg(long, conflicts_with = "count")]
        plain: bool,

        /// Print only the number of matches
        #[arg(long)]
        count: bool,
    },

    /// Interactive TUI mode (default without --tiles)
    Play,

    /// Simple CLI mode (prompt for tiles repeatedly)
    Simple,

    /// Benchmark the matcher on random racks
    Benchmark {
        /// Number of random racks to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Tiles per rack
        #[arg(long, default_value_t = RACK_SIZE)]
        rack_size: usize,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Configure `env_logger`; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbosity: u8, tui: bool) {
    let level = match (verbosity, tui) {
        // Log lines would corrupt the alternate screen
        (_, true) => LevelFilter::Off,
        (0, false) => LevelFilter::Warn,
        (1, false) => LevelFilter::Info,
        (2, false) => LevelFilter::Debug,
        (_, false) => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(if cli.tiles.is_some() {
        Commands::Find {
            plain: false,
            count: false,
        }
    } else {
        Commands::Play
    });

    init_logging(cli.verbose, matches!(command, Commands::Play));

    let source = WordSource::from_path(cli.source_file);
    let words = source
        .load()
        .with_context(|| format!("Failed to read word list from {}", source.describe()))?;

    let config = SearchConfig::new(cli.tiles.clone().unwrap_or_default())
        .with_constraints(cli.constraints.clone())
        .with_max_length(cli.max_length)
        .with_policy(cli.length_policy);

    match command {
        Commands::Find { plain, count } => {
            if cli.tiles.is_none() {
                bail!("--tiles is required to find words");
            }
            run_find_command(&config, &words, plain, count)
        }
        Commands::Play => run_play_command(&words, config),
        Commands::Simple => Ok(run_simple(&words, &config)?),
        Commands::Benchmark {
            count,
            rack_size,
            seed,
        } => {
            let config = BenchmarkConfig {
                rack_size,
                constraints: config.constraints,
                max_length: config.max_length,
                policy: config.policy,
                seed,
                show_progress: true,
                ..BenchmarkConfig::new(count)
            };
            run_benchmark_command(&config, &words)
        }
    }
}

fn run_find_command(
    config: &SearchConfig,
    words: &[String],
    plain: bool,
    count: bool,
) -> Result<()> {
    let result = find_words(config, words)?;

    if count {
        print_count(&result);
    } else if plain {
        print_plain(&result);
    } else {
        print_find_result(&result);
    }
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, words: &[String]) -> Result<()> {
    println!(
        "Running benchmark on {} random racks of {} tiles...",
        config.racks, config.rack_size
    );

    let result = run_benchmark(config, words)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(words: &[String], config: SearchConfig) -> Result<()> {
    use scrabbler::interactive::{App, run_tui};

    let app = App::new(words, config);
    run_tui(app)
}
