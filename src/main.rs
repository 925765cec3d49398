use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use autotranspose::{
    DisplayMode, InstrumentTable, OffsetSource, TransposeRequest, ACCEPTED_SPELLINGS,
};

#[derive(Debug, Parser)]
#[command(name = "autotranspose")]
#[command(about = "Transpose note names between instruments")]
#[command(version)]
struct Cli {
    /// Log each transposition step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML instrument table to use instead of the built-in one
    #[arg(long, global = true)]
    instruments: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Transpose a single note name
    Note {
        /// Note name, e.g. C, F#, Bb
        note: String,

        #[command(flatten)]
        offsets: Offsets,

        /// Spell the result with flats
        #[arg(long)]
        flats: bool,
    },

    /// List the instrument table
    Instruments,

    /// List every accepted note spelling
    Spellings,
}

#[derive(Debug, Args)]
struct Offsets {
    /// Instrument the note is written for
    #[arg(long, conflicts_with = "from_semitones")]
    from: Option<String>,

    /// Semitones to apply first, instead of an instrument
    #[arg(long, allow_negative_numbers = true)]
    from_semitones: Option<i32>,

    /// Instrument to transpose for
    #[arg(long, conflicts_with = "to_semitones")]
    to: Option<String>,

    /// Semitones to apply second, instead of an instrument
    #[arg(long, allow_negative_numbers = true)]
    to_semitones: Option<i32>,
}

fn offset_source(instrument: Option<String>, semitones: Option<i32>) -> OffsetSource {
    match (instrument, semitones) {
        (Some(name), _) => OffsetSource::Instrument(name),
        (None, Some(n)) => OffsetSource::Semitones(n),
        (None, None) => OffsetSource::default(),
    }
}

fn load_table(path: Option<&Path>) -> Result<InstrumentTable> {
    match path {
        Some(path) => InstrumentTable::from_path(path)
            .with_context(|| format!("Failed to load instrument table {}", path.display())),
        None => Ok(InstrumentTable::builtin()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let table = load_table(cli.instruments.as_deref())?;

    match cli.command {
        Commands::Note {
            note,
            offsets,
            flats,
        } => {
            let request = TransposeRequest::new(note)
                .from(offset_source(offsets.from, offsets.from_semitones))
                .to(offset_source(offsets.to, offsets.to_semitones))
                .display(DisplayMode::from_prefer_flats(flats));
            let result = request.run(&table)?;
            println!("{}", result.name());
        }

        Commands::Instruments => {
            for instrument in table.iter() {
                println!("{}\t{}", instrument.name, instrument.transposition);
            }
        }

        Commands::Spellings => {
            for (token, pitch) in ACCEPTED_SPELLINGS {
                println!("{}\t{}", token, pitch);
            }
        }
    }

    Ok(())
}

/// Filter directives for the subscriber. `--verbose` forces debug output,
/// otherwise `RUST_LOG` applies and falls back to warnings only.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn main() {
    let cli = Cli::parse();

    let directives = log_directives(cli.verbose, std::env::var("RUST_LOG").ok());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
