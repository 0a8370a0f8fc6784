//! Self-play CLI.
//!
//! Plays the engine against itself on each board given, or on a generated
//! lattice, and writes one JSON match record per line.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS] <BOARD>...
//!   cargo run --release --bin selfplay -- --generate triangle --rows 6 --cols 6

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use pursuit::eval::ScoringWeights;
use pursuit::logging;
use pursuit::protocol::{lattice, read_descriptor, BoardDescriptor, Layout};
use pursuit::selfplay::{self, SelfPlayConfig};

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Plays the engine against itself")]
struct Args {
    /// Board descriptor files, one match each
    #[arg(required_unless_present = "generate")]
    boards: Vec<PathBuf>,

    /// Also play on a generated lattice of this layout
    #[arg(long, value_enum)]
    generate: Option<Layout>,

    /// Rows of the generated lattice
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Columns of the generated lattice
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Cops on the generated lattice
    #[arg(long, default_value_t = 1)]
    cops: usize,

    /// Robbers on the generated lattice
    #[arg(long, default_value_t = 3)]
    robbers: usize,

    /// Turn limit on the generated lattice (default: 2 * robbers * sqrt(vertices))
    #[arg(long)]
    max_turn: Option<usize>,

    /// JSON file overriding scoring weights for both sides
    #[arg(short, long)]
    weights: Option<PathBuf>,

    /// Number of parallel threads
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut boards: Vec<(String, BoardDescriptor)> = Vec::with_capacity(args.boards.len());
    for path in &args.boards {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| format!("cannot open {}: {}", name, e))?;
        let descriptor = read_descriptor(BufReader::new(file))
            .map_err(|e| format!("cannot parse {}: {}", name, e))?;
        boards.push((name, descriptor));
    }
    if let Some(layout) = args.generate {
        let mut generated = lattice(layout, args.rows, args.cols, args.cops, args.robbers)?;
        if let Some(max_turn) = args.max_turn {
            generated = generated.with_max_turn(max_turn);
        }
        boards.push((generated.name(), generated.to_descriptor()?));
    }

    let weights = match &args.weights {
        Some(p) => ScoringWeights::load(p)?,
        None => ScoringWeights::default(),
    };
    let config = SelfPlayConfig {
        threads: args.threads,
        weights,
    };

    info!(
        "Self-play: {} boards, {} threads",
        boards.len(),
        config.threads
    );
    let start = Instant::now();
    let records = selfplay::run_matches(&boards, &config)?;
    info!(
        "Completed {} matches in {:.2}s",
        records.len(),
        start.elapsed().as_secs_f64()
    );
    selfplay::log_summary(&records);

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            selfplay::write_jsonl(&records, &mut writer)?;
            info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&records, &mut writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_replaces_board_files() {
        assert!(Args::try_parse_from(["selfplay"]).is_err());
        let args =
            Args::try_parse_from(["selfplay", "--generate", "triangle", "--rows", "3"]).unwrap();
        assert!(args.boards.is_empty());
        assert_eq!(args.generate, Some(Layout::Triangle));
        assert_eq!((args.rows, args.cols, args.robbers), (3, 5, 3));
        assert!(Args::try_parse_from(["selfplay", "--generate", "hex"]).is_err());
    }
}
