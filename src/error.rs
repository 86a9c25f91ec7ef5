//! Error types for the Spotify user session.
//!
//! The Web API surfaces two kinds of failure to callers: a generic domain
//! error with a static message, and a status-code error that carries the
//! numeric HTTP status of a write operation that did not return its expected
//! success code. Transport and token-encoding failures are kept separate so
//! callers can tell a rejected request from one that never reached Spotify.

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SpotifyError>;

#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Generic domain failure: profile lookup, over-limit input, top items.
    #[error("{0}")]
    Spotify(String),

    /// The API answered with a status other than the one the call expects.
    #[error("API returned error code {0}")]
    StatusCode(u16),

    /// Network failure or a response body that could not be decoded.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token cannot be sent as an HTTP header value.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}

impl SpotifyError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        SpotifyError::Spotify(msg.into())
    }

    /// Returns the HTTP status carried by a status-code error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::StatusCode(code) => Some(*code),
            _ => None,
        }
    }
}
