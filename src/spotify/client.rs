use reqwest::{StatusCode, blocking::Client};

use crate::{
    config,
    error::Result,
    spotify::{authorized_client, expect_status},
    types::{Paging, Playlist, UserProfile},
};

/// Supplies the playlist list of a user to a [`UserSession`].
///
/// Closures of the form `Fn(&UserProfile) -> Result<Vec<Playlist>>` implement
/// this trait, so callers can plug in their own listing logic.
///
/// [`UserSession`]: crate::spotify::UserSession
pub trait PlaylistSource {
    fn user_playlists(&self, user: &UserProfile) -> Result<Vec<Playlist>>;
}

impl<F> PlaylistSource for F
where
    F: Fn(&UserProfile) -> Result<Vec<Playlist>>,
{
    fn user_playlists(&self, user: &UserProfile) -> Result<Vec<Playlist>> {
        self(user)
    }
}

/// Lists playlists straight from the Web API.
///
/// Only the first page is fetched; users with more than
/// [`WebClient::PAGE_LIMIT`] playlists see a truncated list.
pub struct WebClient {
    base_url: String,
    http: Client,
}

impl WebClient {
    pub const PAGE_LIMIT: u32 = 50;

    pub fn new(access_token: &str) -> Result<Self> {
        Self::with_base_url(access_token, &config::spotify_apiurl())
    }

    pub fn with_base_url(access_token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: authorized_client(access_token)?,
        })
    }
}

impl PlaylistSource for WebClient {
    fn user_playlists(&self, user: &UserProfile) -> Result<Vec<Playlist>> {
        let url = format!("{}/users/{}/playlists", self.base_url, user.id);
        let response = self
            .http
            .get(url)
            .query(&[("limit", Self::PAGE_LIMIT)])
            .send()?;
        let response = expect_status(response, &[StatusCode::OK])?;

        Ok(response.json::<Paging<Playlist>>()?.items)
    }
}
