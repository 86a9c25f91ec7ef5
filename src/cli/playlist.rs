use tabled::Table;

use crate::{
    error, info, success,
    types::{NewPlaylist, PlaylistDetails, PlaylistTableRow},
    warning,
};

use super::{open_session, spinner};

pub fn playlists() {
    let mut session = open_session();

    let pb = spinner("Fetching playlists...");
    let result = session.playlists().map(|p| p.to_vec());
    pb.finish_and_clear();

    let mut playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists. Err: {}", e),
    };

    if playlists.is_empty() {
        warning!("No playlists found for {}", session.user().name());
        return;
    }

    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
            tracks: p
                .tracks
                .map(|t| t.total.to_string())
                .unwrap_or_else(|| "-".to_string()),
            public: match p.public {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
        })
        .collect();

    println!("{}", Table::new(table_rows));
}

pub fn create_playlist(
    name: String,
    public: Option<bool>,
    collaborative: Option<bool>,
    description: Option<String>,
) {
    let session = open_session();
    let playlist = NewPlaylist {
        name,
        public,
        collaborative,
        description,
    };

    info!("Creating playlist {}", playlist.name);
    match session.create_playlist(&playlist) {
        Ok(created) => success!("Playlist {} created with id {}", created.name, created.id),
        Err(e) => error!("Failed to create playlist. Err: {}", e),
    }
}

pub fn change_details(playlist_id: String, details: PlaylistDetails) {
    let session = open_session();

    match session.change_playlist_details(&playlist_id, &details) {
        Ok(()) => success!("Playlist {} updated", playlist_id),
        Err(e) => error!("Failed to update playlist {}. Err: {}", playlist_id, e),
    }
}

pub fn follow(playlist_id: String, public: bool) {
    let session = open_session();

    match session.follow_playlist(&playlist_id, public) {
        Ok(()) => success!("Following playlist {}", playlist_id),
        Err(e) => error!("Failed to follow playlist {}. Err: {}", playlist_id, e),
    }
}

pub fn unfollow(playlist_id: String) {
    let session = open_session();

    match session.unfollow_playlist(&playlist_id) {
        Ok(()) => success!("Unfollowed playlist {}", playlist_id),
        Err(e) => error!("Failed to unfollow playlist {}. Err: {}", playlist_id, e),
    }
}
