//! lifegrid - CLI Entry Point
//!
//! Loads an initial pattern (from a file or randomly), then steps the
//! simulation a fixed number of generations, printing each one to stdout.

use clap::error::ErrorKind;
use clap::Parser;
use lifegrid::{Config, PatternError, World};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Pattern argument meaning "generate a random first generation"
const PATTERN_RANDOM: &str = "RANDOM";

// Process exit codes; 0 is success
const EXIT_TOO_MANY_ARGUMENTS: i32 = -1;
const EXIT_FILE_OPEN_FAILURE: i32 = -2;
const EXIT_INVALID_FILE_FORMAT: i32 = -3;
const EXIT_BAD_CONFIG: i32 = 1;

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal 8x8 grid")]
struct Cli {
    /// Initial pattern file, or RANDOM for a random pattern (the default)
    pattern: Option<String>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible random patterns
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to run, counting the initial pattern as the first
    #[arg(short, long)]
    generations: Option<u32>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::UnknownArgument | ErrorKind::TooManyValues) => {
            // A second positional argument lands here
            let _ = e.print();
            process::exit(EXIT_TOO_MANY_ARGUMENTS);
        }
        Err(e) => e.exit(),
    };

    // Load config, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config {:?}: {}", path, e);
                process::exit(EXIT_BAD_CONFIG);
            }
        },
        None => Config::default(),
    };
    if let Some(generations) = cli.generations {
        config.run.generations = generations;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(EXIT_BAD_CONFIG);
    }

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.log_level),
    )
    .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("{}", e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), PatternError> {
    let symbols = config.symbols();

    let mut world = match cli.seed {
        Some(seed) => World::new_with_seed(seed),
        None => World::new(),
    };
    log::info!("world seed: {}", world.seed());

    let selector = cli.pattern.as_deref().unwrap_or(PATTERN_RANDOM);
    if selector.eq_ignore_ascii_case(PATTERN_RANDOM) {
        world.initialize_random();
    } else {
        world.initialize_from_file(selector, symbols)?;
    }

    // First generation: the selector on its own line, then the grid
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", selector)?;
    world.render(&mut out, symbols)?;
    writeln!(out)?;

    // Generate and display the remaining generations
    while world.generation() < config.run.generations {
        world.advance();
        world.render(&mut out, symbols)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Map an initialization failure to the process exit code
fn exit_code(err: &PatternError) -> i32 {
    match err {
        PatternError::FileOpen { .. } => EXIT_FILE_OPEN_FAILURE,
        // Mid-read stream errors are indistinguishable from a truncated
        // file at this level; report them as a format failure too.
        PatternError::TooShort | PatternError::InvalidSymbol { .. } | PatternError::Io(_) => {
            EXIT_INVALID_FILE_FORMAT
        }
    }
}
