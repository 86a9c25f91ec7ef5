use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    error::{Result, SpotifyError},
    spotify::UserSession,
    types::{Artist, Paging, TimeRange, TopItemType, Track},
};

/// Page size Spotify uses when no limit is given.
pub const DEFAULT_TOP_LIMIT: u32 = 20;

impl<C> UserSession<C> {
    /// Retrieves the user's top items of `item_type` over `term`.
    ///
    /// `T` is the item model; use `serde_json::Value` to keep the raw JSON.
    ///
    /// # Errors
    ///
    /// Any status other than 200 yields `SpotifyError::Spotify` naming the
    /// item type and the user.
    pub fn get_top<T: DeserializeOwned>(
        &self,
        term: TimeRange,
        item_type: TopItemType,
        limit: u32,
    ) -> Result<Paging<T>> {
        let url = self.url(&format!("/me/top/{}", item_type));
        let response = self
            .http()
            .get(url)
            .query(&[("limit", limit.to_string()), ("time_range", term.to_string())])
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(SpotifyError::new(format!(
                "Could not retrieve top {} for {}",
                item_type,
                self.user().name()
            )));
        }

        Ok(response.json::<Paging<T>>()?)
    }

    pub fn get_top_artists(&self, term: TimeRange, limit: Option<u32>) -> Result<Paging<Artist>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);
        self.get_top(term, TopItemType::Artists, limit)
    }

    pub fn get_top_songs(&self, term: TimeRange, limit: Option<u32>) -> Result<Paging<Track>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);
        self.get_top(term, TopItemType::Tracks, limit)
    }
}
