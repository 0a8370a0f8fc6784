//! Terminal logging for the binaries.
//!
//! Everything goes to stderr; stdout is reserved for protocol lines.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Level selected by the `-v`/`-q` flags. Quiet wins over verbose.
pub fn level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the stderr logger. A logger installed earlier is kept.
pub fn init(verbose: bool, quiet: bool) {
    let _ = TermLogger::init(
        level(verbose, quiet),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
