//! Spotify User Session Library
//!
//! This library wraps the user-scoped part of the Spotify Web API in a
//! blocking, strongly typed session: profile retrieval, playlist creation and
//! updates, adding/removing/replacing tracks, top artists and tracks, and
//! following playlists.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The `SpotifyError` type shared by every operation
//! - `spotify` - `UserSession`, `PlaylistSource` and `WebClient`
//! - `types` - Request and response models
//! - `utils` - Track URI batching and formatting helpers
//!
//! # Example
//!
//! ```
//! use spotuser::{NewPlaylist, UserSession, WebClient};
//!
//! fn main() -> spotuser::Result<()> {
//!     let token = "BQC...";
//!     let session = UserSession::new(WebClient::new(token)?, "", token)?;
//!     let playlist = session.create_playlist(&NewPlaylist::new("Road trip"))?;
//!     session.add_songs_to_playlist(&playlist.id, &["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"])?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Result, SpotifyError};
pub use spotify::{PlaylistSource, UserSession, WebClient};
pub use types::{NewPlaylist, PlaylistDetails, TimeRange, TopItemType};

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching playlists for {}", user);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Added {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command-line binary; library code returns
/// `SpotifyError` instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a batch of tracks that was applied
/// before a later batch failed.
///
/// # Example
///
/// ```
/// warning!("Added {} of {} uris before the request failed", done, total);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
