//! Runtime settings.
//!
//! The tool reads no configuration file and no environment variables: every
//! setting has a built-in default and may only be overridden from the
//! command line (see `run()`).

use reqwest::Url;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API, without trailing slash.
    pub api_url: String,
    /// How many formatted lines the presenter shows.
    pub limit: usize,
    /// Sent as `User-Agent`; GitHub refuses anonymous clients without one.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            limit: DEFAULT_LIMIT,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl Config {
    pub fn default_user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Return the events endpoint for the given account.
    ///
    /// The username is appended as a single percent-encoded path segment, so
    /// it can never address a different resource.
    pub fn events_url(&self, username: &str) -> AppResult<Url> {
        let invalid = || AppError::Config(format!("invalid API URL: {}", self.api_url));

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["users", username, "events"]);
        Ok(url)
    }
}
