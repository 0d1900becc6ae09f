//! github-activity library root.
//! Exposes the CLI parser, the high-level `run()` pipeline and the
//! fetch / format / present stages it is built from.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod github;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::Parser;
use clap::error::ErrorKind;
use cli::parser::Cli;
use config::Config;
use errors::{AppError, AppResult};
use github::GithubClient;
use tracing::debug;

/// Parse arguments, turning clap failures into `AppError::Usage`.
///
/// `--help` and `--version` are not failures: clap prints them and exits 0.
pub fn parse_args<I, T>(args: I) -> AppResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) if !is_valid_username(&cli.username) => Err(AppError::Usage(format!(
            "Usage: github-activity <USERNAME>\n\nInvalid username '{}': only letters, digits and '-' are allowed.\n",
            cli.username
        ))),
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(AppError::Usage(e.render().to_string())),
    }
}

/// GitHub logins are non-empty and made of ASCII letters, digits and `-`.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Apply command-line overrides on top of the built-in defaults.
pub fn build_config(cli: &Cli) -> Config {
    let mut cfg = Config::default();
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    cfg.limit = cli.limit;
    cfg
}

/// Fetch → format → present for a single user.
pub fn show_activity(cfg: &Config, username: &str) -> AppResult<()> {
    let client = GithubClient::new(cfg)?;
    let events = client.fetch_user_events(username)?;

    let lines = core::format::format_events(&events);
    debug!(events = events.len(), lines = lines.len(), "formatted activity");

    let stdout = io::stdout();
    let tty = stdout.is_terminal();
    let mut out = stdout.lock();
    ui::presenter::display_activity(&mut out, username, &lines, cfg.limit, tty)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = parse_args(std::env::args_os())?;
    logging::init(cli.verbose);

    let cfg = build_config(&cli);

    println!();
    ui::messages::info(format!("Fetching GitHub activity for {}...", cli.username));
    println!();

    show_activity(&cfg, &cli.username)
}
