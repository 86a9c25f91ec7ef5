//! # Spotify Integration Module
//!
//! Blocking client for the user-scoped part of the Spotify Web API. Every
//! operation is a single request/response cycle (or one cycle per batch of
//! track URIs) issued on behalf of the user whose access token the session
//! was built with.
//!
//! ## Architecture
//!
//! ```text
//! CLI / caller
//!      ↓
//! UserSession  ──────→  PlaylistSource (playlist listing)
//!  ├── profile (GET /me, once)
//!  ├── playlist writes (create, details, tracks, follow)
//!  └── top items (artists, tracks)
//!      ↓
//! reqwest::blocking::Client (owned per session, bearer header preset)
//!      ↓
//! Spotify Web API
//! ```
//!
//! ## Modules
//!
//! - [`session`] - `UserSession` construction, accessors and the playlist cache
//! - [`playlist`] - playlist create/update, track add/remove/replace, follow
//! - [`top`] - the user's top artists and tracks
//! - [`client`] - `PlaylistSource` and the `WebClient` implementation
//!
//! ## Transport
//!
//! Each session and each `WebClient` builds its own HTTP client with the
//! `Authorization: Bearer` header installed as a default header. Nothing is
//! shared between instances, so sessions for different users can live side
//! by side in one process.
//!
//! ## Status Handling
//!
//! Every call names the status code (or codes) it treats as success. Any
//! other status fails the call immediately; there is no retry and no
//! distinction between transient and permanent failures.
//!
//! ## Track Batches
//!
//! The API accepts at most 100 track URIs per request. Adding and removing
//! tracks splits the input into batches and sends them in order, stopping at
//! the first failed batch. Replacing items is a single request and rejects
//! more than 100 URIs up front.

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::error::{Result, SpotifyError};

pub mod client;
pub mod playlist;
pub mod session;
pub mod top;

pub use client::{PlaylistSource, WebClient};
pub use session::UserSession;

/// Builds an HTTP client that sends `access_token` as bearer credential on
/// every request.
pub(crate) fn authorized_client(access_token: &str) -> Result<Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    Ok(Client::builder().default_headers(headers).build()?)
}

/// Passes the response through when its status is one of `expected`.
pub(crate) fn expect_status(response: Response, expected: &[StatusCode]) -> Result<Response> {
    let status = response.status();
    if expected.contains(&status) {
        Ok(response)
    } else {
        Err(SpotifyError::StatusCode(status.as_u16()))
    }
}
