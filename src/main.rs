//! Pursuit -- plays one side of a cops-and-robbers game.
//!
//! Reads the board descriptor named on the command line, then exchanges
//! positions with the adversary: this program's moves on stdout, the
//! adversary's on stdin, one vertex index per line. Diagnostics go to stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use pursuit::board::Role;
use pursuit::eval::{ScoringWeights, WeightsError};
use pursuit::game::{Game, GameError, Outcome};
use pursuit::logging;
use pursuit::protocol::{read_descriptor, DescriptorError, LineChannel};

#[derive(Debug, Parser)]
#[command(
    name = "pursuit",
    version,
    about = "Plays one side of a cops-and-robbers game over stdin/stdout"
)]
struct Cli {
    /// Board descriptor file
    board: PathBuf,

    /// Side to play: 0 for cops, 1 for robbers
    #[arg(value_parser = parse_role)]
    role: Role,

    /// JSON file overriding scoring weights
    #[arg(short, long)]
    weights: Option<PathBuf>,

    /// Log strategy decisions
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open board file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse board file {path}: {source}")]
    Descriptor {
        path: String,
        #[source]
        source: DescriptorError,
    },

    #[error(transparent)]
    Weights(#[from] WeightsError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Maps the numeric selector to a role; anything but 0 or 1 is rejected.
fn parse_role(s: &str) -> Result<Role, String> {
    s.parse::<u8>()
        .ok()
        .and_then(Role::from_selector)
        .ok_or_else(|| format!("expected 0 (cops) or 1 (robbers), got '{}'", s))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let path = cli.board.display().to_string();
    let file = File::open(&cli.board).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
    })?;
    let descriptor =
        read_descriptor(BufReader::new(file)).map_err(|source| CliError::Descriptor {
            path: path.clone(),
            source,
        })?;

    let weights = match &cli.weights {
        Some(p) => ScoringWeights::load(p)?,
        None => ScoringWeights::default(),
    };
    let role = cli.role;

    info!(
        "playing {} on {} ({} vertices, {} cops, {} robbers, {} turns)",
        role,
        path,
        descriptor.board.size(),
        descriptor.cops,
        descriptor.robbers,
        descriptor.max_turn
    );

    let mut game = Game::new(descriptor, role, weights)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut channel = LineChannel::new(stdin.lock(), BufWriter::new(stdout.lock()));
    Ok(game.run(&mut channel)?)
}
