//! # CLI Module
//!
//! Command implementations for the `spotuser` binary. Every command opens a
//! [`UserSession`] for the token found in the environment, runs exactly one
//! session operation and reports the outcome with the crate's logging
//! macros.
//!
//! ## Commands
//!
//! - [`me`] - show the authenticated profile
//! - [`playlists`] - list the user's playlists
//! - [`create_playlist`] / [`change_details`] - playlist metadata
//! - [`add_tracks`] / [`remove_tracks`] / [`replace_tracks`] - playlist content
//! - [`top`] - top artists or tracks
//! - [`follow`] / [`unfollow`] - playlist following
//!
//! ## Usage
//!
//! ```bash
//! export SPOTIFY_ACCESS_TOKEN=BQC...
//! spotuser me
//! spotuser create "Road trip" --public false
//! spotuser add 3cEYpjA9oz9GiPac4AsH4n spotify:track:4iV5W9uYEdYUVa79Axb7Rh
//! spotuser top tracks --term short --limit 10
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    spotify::{UserSession, WebClient},
};

mod playlist;
mod profile;
mod top;
mod tracks;

pub use playlist::change_details;
pub use playlist::create_playlist;
pub use playlist::follow;
pub use playlist::playlists;
pub use playlist::unfollow;
pub use profile::me;
pub use top::top;
pub use tracks::add_tracks;
pub use tracks::remove_tracks;
pub use tracks::replace_tracks;

/// Opens a session for the configured token, exiting on failure.
fn open_session() -> UserSession<WebClient> {
    let access_token = match config::spotify_access_token() {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let client = match WebClient::new(&access_token) {
        Ok(client) => client,
        Err(e) => error!("Cannot set up Spotify client. Err: {}", e),
    };

    let pb = spinner("Fetching user profile...");
    let session = UserSession::new(client, config::spotify_refresh_token(), access_token);
    pb.finish_and_clear();

    match session {
        Ok(session) => session,
        Err(e) => error!("{}. Check SPOTIFY_ACCESS_TOKEN.", e),
    }
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
