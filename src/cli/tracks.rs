use crate::{error, info, success, utils};

use super::open_session;

pub fn add_tracks(playlist_id: String, uris: Vec<String>) {
    let session = open_session();

    info!(
        "Adding {} tracks to playlist {} in {} request(s)",
        uris.len(),
        playlist_id,
        utils::batch_count(uris.len())
    );
    match session.add_songs_to_playlist(&playlist_id, &uris) {
        Ok(()) => success!("Tracks added to playlist {}", playlist_id),
        Err(e) => error!("Failed to add tracks to playlist. Err: {}", e),
    }
}

pub fn remove_tracks(playlist_id: String, uris: Vec<String>) {
    let session = open_session();

    info!(
        "Removing {} tracks from playlist {} in {} request(s)",
        uris.len(),
        playlist_id,
        utils::batch_count(uris.len())
    );
    match session.remove_songs_from_playlist(&playlist_id, &uris) {
        Ok(()) => success!("Tracks removed from playlist {}", playlist_id),
        Err(e) => error!("Failed to remove tracks from playlist. Err: {}", e),
    }
}

pub fn replace_tracks(playlist_id: String, uris: Vec<String>) {
    let session = open_session();

    match session.replace_playlist_items(&playlist_id, &uris) {
        Ok(()) => success!(
            "Playlist {} now holds {} tracks",
            playlist_id,
            uris.len()
        ),
        Err(e) => error!("Failed to replace playlist items. Err: {}", e),
    }
}
