use std::slice::Chunks;

use crate::types::{TrackRemoval, TrackUri};

/// Most track URIs the Web API accepts in a single playlist request.
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Splits `uris` into request-sized batches, preserving order.
pub fn uri_batches<S: AsRef<str>>(uris: &[S]) -> Chunks<'_, S> {
    uris.chunks(MAX_URIS_PER_REQUEST)
}

/// Number of requests needed to send `len` URIs.
pub fn batch_count(len: usize) -> usize {
    len.div_ceil(MAX_URIS_PER_REQUEST)
}

/// Comma-joins URIs for the `uris` query parameter.
pub fn join_uris<S: AsRef<str>>(uris: &[S]) -> String {
    uris.iter()
        .map(|uri| uri.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn track_removal<S: AsRef<str>>(uris: &[S]) -> TrackRemoval {
    TrackRemoval {
        tracks: uris
            .iter()
            .map(|uri| TrackUri {
                uri: uri.as_ref().to_string(),
            })
            .collect(),
    }
}

/// First `max` genres, comma separated, for table output.
pub fn short_genres(genres: &[String], max: usize) -> String {
    genres
        .iter()
        .take(max)
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}
