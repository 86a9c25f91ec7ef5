//! Configuration management for spotuser.
//!
//! Values are read from environment variables, which may be seeded from a
//! `.env` file in the local data directory. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults (where applicable)

use std::{env, path::PathBuf};

/// Default root of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/spotuser/.env`
/// - macOS: `~/Library/Application Support/spotuser/.env`
/// - Windows: `%LOCALAPPDATA%/spotuser/.env`
///
/// A missing file is not an error, as every value can also come from the
/// process environment. Variables already set are never overridden.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be parsed.
pub fn load_env() -> Result<(), String> {
    let path = env_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotuser/.env");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to [`SPOTIFY_API_URL`]. Trailing
/// slashes are stripped so paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| SPOTIFY_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the bearer access token from `SPOTIFY_ACCESS_TOKEN`.
pub fn spotify_access_token() -> Result<String, String> {
    env::var("SPOTIFY_ACCESS_TOKEN").map_err(|_| "SPOTIFY_ACCESS_TOKEN must be set".to_string())
}

/// Returns the refresh token from `SPOTIFY_REFRESH_TOKEN`, or an empty string.
///
/// The session stores it for callers but never exchanges it.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_REFRESH_TOKEN").unwrap_or_default()
}
