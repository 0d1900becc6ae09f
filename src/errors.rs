//! Unified application error type.
//! Every stage of the pipeline (cli, github, ui) returns AppError so that
//! `main` alone decides how a failure is reported and which exit code is used.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Command line
    // ---------------------------
    /// Wrong arguments. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Fetching
    // ---------------------------
    #[error("User '{0}' not found on GitHub.")]
    UserNotFound(String),

    #[error("HTTP error occurred: {status} for url: {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Could not fetch data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from GitHub: {0}")]
    InvalidResponse(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Usage errors already carry their own wording and must not get the
    /// `Error:` prefix added by `main`.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
