//! Board generator CLI.
//!
//! Writes a grid or triangular-lattice board descriptor to stdout or a file.
//!
//! Usage:
//!   cargo run --bin genboard -- triangle --rows 6 --cols 6 --robbers 3 -o board.txt

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use pursuit::logging;
use pursuit::protocol::{lattice, Layout};

#[derive(Debug, Parser)]
#[command(name = "genboard", about = "Writes a lattice board descriptor")]
struct Args {
    /// Lattice layout
    #[arg(value_enum)]
    layout: Layout,

    #[arg(long, default_value_t = 5)]
    rows: usize,

    #[arg(long, default_value_t = 5)]
    cols: usize,

    #[arg(long, default_value_t = 1)]
    cops: usize,

    #[arg(long, default_value_t = 3)]
    robbers: usize,

    /// Turn limit (default: 2 * robbers * sqrt(vertices))
    #[arg(long)]
    max_turn: Option<usize>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    logging::init(false, false);

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = lattice(args.layout, args.rows, args.cols, args.cops, args.robbers)?;
    if let Some(max_turn) = args.max_turn {
        board = board.with_max_turn(max_turn);
    }

    let text = board.to_text();
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(
                "Wrote {} ({} vertices, {} edges) to {}",
                board.name(),
                board.size(),
                board.edges.len(),
                path.display()
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}
