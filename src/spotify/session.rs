use std::fmt;

use reqwest::{StatusCode, blocking::Client};

use crate::{
    config,
    error::{Result, SpotifyError},
    spotify::{PlaylistSource, authorized_client},
    types::{Playlist, UserProfile},
};

/// An authenticated Spotify user context.
///
/// A session is only ever handed out after its profile was fetched, so every
/// method can rely on [`UserSession::user`]. The access token is installed on
/// a transport owned by this session alone; two sessions never observe each
/// other's credentials.
///
/// The refresh token is stored for the caller but never exchanged. Once the
/// access token expires, requests fail with a status-code error and a new
/// session has to be built.
pub struct UserSession<C> {
    client: C,
    refresh_token: String,
    access_token: String,
    base_url: String,
    http: Client,
    user: UserProfile,
    playlists: Option<Vec<Playlist>>,
}

impl<C: PlaylistSource> UserSession<C> {
    /// Creates a session against the configured API root.
    ///
    /// Issues `GET /me` before returning. See [`UserSession::with_base_url`].
    pub fn new(
        client: C,
        refresh_token: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(client, refresh_token, access_token, &config::spotify_apiurl())
    }

    /// Creates a session against `base_url` (e.g. `https://api.spotify.com/v1`).
    ///
    /// # Errors
    ///
    /// - `SpotifyError::Spotify` if `/me` answers anything but 200
    /// - `SpotifyError::InvalidToken` if the token is not a valid header value
    /// - `SpotifyError::Http` if the request cannot be sent or decoded
    pub fn with_base_url(
        client: C,
        refresh_token: impl Into<String>,
        access_token: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        let access_token = access_token.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = authorized_client(&access_token)?;

        let response = http.get(format!("{}/me", base_url)).send()?;
        if response.status() != StatusCode::OK {
            return Err(SpotifyError::new("Could not retrieve user data"));
        }
        let user = response.json::<UserProfile>()?;

        Ok(Self {
            client,
            refresh_token: refresh_token.into(),
            access_token,
            base_url,
            http,
            user,
            playlists: None,
        })
    }

    /// Returns the user's playlists, fetching them through the client on
    /// first use.
    pub fn playlists(&mut self) -> Result<&[Playlist]> {
        if self.playlists.is_none() {
            self.refresh_playlists()?;
        }
        Ok(self.playlists.as_deref().unwrap_or_default())
    }

    /// Fetches the playlists again and replaces the cached list.
    pub fn refresh_playlists(&mut self) -> Result<&[Playlist]> {
        let playlists = self.client.user_playlists(&self.user)?;
        Ok(self.playlists.insert(playlists).as_slice())
    }
}

impl<C> UserSession<C> {
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The playlist list as last fetched, without touching the network.
    pub fn cached_playlists(&self) -> Option<&[Playlist]> {
        self.playlists.as_deref()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl<C> fmt::Debug for UserSession<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("user", &self.user.id)
            .field("base_url", &self.base_url)
            .field("cached_playlists", &self.playlists.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}
