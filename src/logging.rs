//! Diagnostic logging.
//!
//! Diagnostics go to stderr and stay silent below WARN unless `--verbose` is
//! given, so normal stdout output is never interleaved with log lines.

use std::io::{self, IsTerminal};

use tracing::Level;

pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // A second init (e.g. from tests calling `run` twice) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
