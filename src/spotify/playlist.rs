use reqwest::StatusCode;

use crate::{
    error::{Result, SpotifyError},
    spotify::{UserSession, expect_status},
    types::{FollowRequest, NewPlaylist, Playlist, PlaylistDetails},
    utils, warning,
};

impl NewPlaylist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PlaylistDetails {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<C> UserSession<C> {
    /// Creates a playlist owned by the session user.
    ///
    /// Succeeds on 200 or 201 and returns the playlist as stored by Spotify.
    pub fn create_playlist(&self, playlist: &NewPlaylist) -> Result<Playlist> {
        let url = self.url(&format!("/users/{}/playlists", self.user().id));
        let response = self.http().post(url).json(playlist).send()?;
        let response = expect_status(response, &[StatusCode::OK, StatusCode::CREATED])?;

        Ok(response.json::<Playlist>()?)
    }

    /// Updates name, visibility, collaboration or description. Fields left
    /// as `None` keep their current value.
    pub fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Result<()> {
        let url = self.url(&format!("/playlists/{}", playlist_id));
        let response = self.http().put(url).json(details).send()?;
        expect_status(response, &[StatusCode::OK])?;
        Ok(())
    }

    /// Appends tracks to a playlist, 100 URIs per request.
    ///
    /// Batches are sent in order and the first failing batch aborts the
    /// call. Batches that were already accepted stay in the playlist, and a
    /// `warning!` line with the applied count is printed to stdout.
    pub fn add_songs_to_playlist<S: AsRef<str>>(
        &self,
        playlist_id: &str,
        uris: &[S],
    ) -> Result<()> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let mut applied = 0;

        for batch in utils::uri_batches(uris) {
            // Spotify requires a Content-Length on bodiless writes.
            let result = self
                .http()
                .post(&url)
                .query(&[("uris", utils::join_uris(batch))])
                .body("")
                .send()
                .map_err(SpotifyError::from)
                .and_then(|response| expect_status(response, &[StatusCode::CREATED]));

            if let Err(e) = result {
                report_partial("Added", applied, uris.len(), playlist_id);
                return Err(e);
            }
            applied += batch.len();
        }

        Ok(())
    }

    /// Removes every occurrence of the given tracks, 100 URIs per request.
    ///
    /// Same fail-stop behaviour as [`UserSession::add_songs_to_playlist`],
    /// including the `warning!` line on a partial removal.
    pub fn remove_songs_from_playlist<S: AsRef<str>>(
        &self,
        playlist_id: &str,
        uris: &[S],
    ) -> Result<()> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let mut applied = 0;

        for batch in utils::uri_batches(uris) {
            let result = self
                .http()
                .delete(&url)
                .json(&utils::track_removal(batch))
                .send()
                .map_err(SpotifyError::from)
                .and_then(|response| expect_status(response, &[StatusCode::OK]));

            if let Err(e) = result {
                report_partial("Removed", applied, uris.len(), playlist_id);
                return Err(e);
            }
            applied += batch.len();
        }

        Ok(())
    }

    /// Replaces the whole playlist content in a single request.
    ///
    /// More than 100 URIs are rejected before anything is sent.
    pub fn replace_playlist_items<S: AsRef<str>>(
        &self,
        playlist_id: &str,
        uris: &[S],
    ) -> Result<()> {
        if uris.len() > utils::MAX_URIS_PER_REQUEST {
            return Err(SpotifyError::new(format!(
                "Too many uris. Max of {}",
                utils::MAX_URIS_PER_REQUEST
            )));
        }

        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let response = self
            .http()
            .put(url)
            .query(&[("uris", utils::join_uris(uris))])
            .body("")
            .send()?;
        expect_status(response, &[StatusCode::CREATED])?;
        Ok(())
    }

    /// Follows a playlist, optionally showing it on the user's public profile.
    ///
    /// Spotify itself defaults to `public = true`, see
    /// [`UserSession::follow_playlist_public`].
    pub fn follow_playlist(&self, playlist_id: &str, public: bool) -> Result<()> {
        let url = self.url(&format!("/playlists/{}/followers", playlist_id));
        let response = self
            .http()
            .put(url)
            .json(&FollowRequest { public })
            .send()?;
        expect_status(response, &[StatusCode::OK])?;
        Ok(())
    }

    /// Follows a playlist publicly.
    pub fn follow_playlist_public(&self, playlist_id: &str) -> Result<()> {
        self.follow_playlist(playlist_id, true)
    }

    pub fn unfollow_playlist(&self, playlist_id: &str) -> Result<()> {
        let url = self.url(&format!("/playlists/{}/followers", playlist_id));
        let response = self.http().delete(url).send()?;
        expect_status(response, &[StatusCode::OK])?;
        Ok(())
    }
}

fn report_partial(action: &str, applied: usize, total: usize, playlist_id: &str) {
    if let Some(message) = partial_message(action, applied, total, playlist_id) {
        warning!("{}", message);
    }
}

/// Nothing to report when the very first batch failed.
fn partial_message(
    action: &str,
    applied: usize,
    total: usize,
    playlist_id: &str,
) -> Option<String> {
    (applied > 0).then(|| {
        format!(
            "{} {} of {} uris on playlist {} before the request failed",
            action, applied, total, playlist_id
        )
    })
}
