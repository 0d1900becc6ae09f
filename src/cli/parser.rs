use clap::Parser;

use crate::config::DEFAULT_LIMIT;

/// Command-line interface definition for github-activity
/// Show a GitHub user's recent public activity
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch a GitHub user's recent public activity and print a short summary",
    long_about = None
)]
pub struct Cli {
    /// GitHub username whose activity is shown
    pub username: String,

    /// Print diagnostic logs to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Override the API base URL (useful for tests or GitHub Enterprise)
    #[arg(long = "api-url", value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Number of events to show
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LIMIT, hide = true)]
    pub limit: usize,
}
