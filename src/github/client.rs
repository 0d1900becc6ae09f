use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;

/// Thin blocking client for the public events endpoint.
#[derive(Clone, Debug)]
pub struct GithubClient {
    config: Config,
    headers: HeaderMap,
    http: Client,
}

impl GithubClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(env!("CARGO_PKG_NAME")));
        headers.insert(USER_AGENT, agent);

        let http = Client::builder().build()?;

        Ok(Self {
            config: config.clone(),
            headers,
            http,
        })
    }

    /// Fetch the first page of public events for `username`.
    ///
    /// One request, no retries. A 404 maps to `UserNotFound`, any other
    /// non-success status to `Http`, connection problems to `Transport`.
    pub fn fetch_user_events(&self, username: &str) -> AppResult<Vec<Event>> {
        let url = self.config.events_url(username)?;
        info!(%url, "fetching user events");

        let response = self
            .http
            .get(url.clone())
            .headers(self.headers.clone())
            .send()?;

        let status = response.status();
        debug!(%status, "received response");

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Http {
                status,
                url: url.to_string(),
            });
        }

        let text = response.text()?;
        let events: Vec<Event> = serde_json::from_str(&text)
            .map_err(|e| AppError::InvalidResponse(e.to_string()))?;

        debug!(count = events.len(), "decoded events");
        Ok(events)
    }
}
