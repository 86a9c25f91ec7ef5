mod common;

use std::{cell::Cell, net::TcpListener};

use common::{DISPLAY_NAME, MockSpotify, NoPlaylists, USER_ID, no_playlists, playlist_json};
use spotuser::{
    PlaylistSource, SpotifyError, UserSession, WebClient,
    types::{Playlist, UserProfile},
};

fn sample_playlists(names: &[&str]) -> Vec<Playlist> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| serde_json::from_str(&playlist_json(&format!("pl{i}"), name)).unwrap())
        .collect()
}

#[test]
fn construction_fetches_profile_once() {
    let mock = MockSpotify::with_profile();
    let session = common::session(&mock);

    assert_eq!(session.user().id, USER_ID);
    assert_eq!(session.user().display_name.as_deref(), Some(DISPLAY_NAME));
    assert_eq!(session.access_token(), "access-token");
    assert_eq!(session.refresh_token(), "refresh-token");
    assert_eq!(session.base_url(), mock.base_url);
    assert!(session.cached_playlists().is_none());

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/me");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer access-token"));
}

#[test]
fn trailing_slash_in_base_url_is_ignored() {
    let mock = MockSpotify::with_profile();
    let session = UserSession::with_base_url(
        no_playlists as NoPlaylists,
        "",
        "access-token",
        &format!("{}/", mock.base_url),
    )
    .unwrap();

    assert_eq!(session.base_url(), mock.base_url);
    assert_eq!(mock.requests()[0].path, "/me");
}

#[test]
fn construction_fails_on_any_non_200_profile_response() {
    for status in [201, 401, 403, 404, 429, 500, 503] {
        let mock = MockSpotify::start();
        mock.respond("GET", "/me", status, "{}");

        let result = UserSession::with_base_url(
            no_playlists as NoPlaylists,
            "refresh-token",
            "expired-token",
            &mock.base_url,
        );

        match result {
            Err(SpotifyError::Spotify(msg)) => assert_eq!(msg, "Could not retrieve user data"),
            other => panic!("status {status}: expected domain error, got {other:?}"),
        }
    }
}

#[test]
fn construction_reports_transport_failure() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let result = UserSession::with_base_url(
        no_playlists as NoPlaylists,
        "",
        "access-token",
        &format!("http://{addr}/v1"),
    );

    assert!(matches!(result, Err(SpotifyError::Http(_))));
}

#[test]
fn construction_rejects_token_that_is_not_a_header_value() {
    let result = UserSession::with_base_url(
        no_playlists as NoPlaylists,
        "",
        "bad\ntoken",
        "http://127.0.0.1:9/v1",
    );

    assert!(matches!(result, Err(SpotifyError::InvalidToken(_))));
}

#[test]
fn sessions_keep_their_own_credentials() {
    let mock = MockSpotify::with_profile();
    mock.respond("DELETE", "/playlists/abc/followers", 200, "");

    let first =
        UserSession::with_base_url(no_playlists as NoPlaylists, "", "token-a", &mock.base_url)
            .unwrap();
    let second =
        UserSession::with_base_url(no_playlists as NoPlaylists, "", "token-b", &mock.base_url)
            .unwrap();

    first.unfollow_playlist("abc").unwrap();
    second.unfollow_playlist("abc").unwrap();
    first.unfollow_playlist("abc").unwrap();

    let auth: Vec<_> = mock
        .requests()
        .into_iter()
        .map(|r| r.authorization.unwrap_or_default())
        .collect();
    assert_eq!(
        auth,
        vec![
            "Bearer token-a",
            "Bearer token-b",
            "Bearer token-a",
            "Bearer token-b",
            "Bearer token-a",
        ]
    );
}

#[test]
fn playlists_are_fetched_once_and_memoized() {
    let mock = MockSpotify::with_profile();
    let calls = Cell::new(0);
    let source = |user: &UserProfile| -> spotuser::Result<Vec<Playlist>> {
        assert_eq!(user.id, USER_ID);
        calls.set(calls.get() + 1);
        Ok(sample_playlists(&["Focus", "Gym"]))
    };

    let mut session =
        UserSession::with_base_url(source, "", "access-token", &mock.base_url).unwrap();

    assert_eq!(session.playlists().unwrap().len(), 2);
    assert_eq!(session.playlists().unwrap()[1].name, "Gym");
    assert_eq!(calls.get(), 1);
    assert_eq!(session.cached_playlists().map(|p| p.len()), Some(2));
}

#[test]
fn refresh_playlists_always_refetches_and_replaces_cache() {
    let mock = MockSpotify::with_profile();
    let calls = Cell::new(0);
    let source = |_: &UserProfile| -> spotuser::Result<Vec<Playlist>> {
        calls.set(calls.get() + 1);
        if calls.get() == 1 {
            Ok(sample_playlists(&["Focus"]))
        } else {
            Ok(sample_playlists(&["Focus", "Gym", "Sleep"]))
        }
    };

    let mut session =
        UserSession::with_base_url(source, "", "access-token", &mock.base_url).unwrap();

    assert_eq!(session.playlists().unwrap().len(), 1);
    assert_eq!(session.refresh_playlists().unwrap().len(), 3);
    assert_eq!(session.playlists().unwrap().len(), 3);
    assert_eq!(calls.get(), 2);
}

#[test]
fn failed_playlist_fetch_leaves_cache_empty() {
    let mock = MockSpotify::with_profile();
    let calls = Cell::new(0);
    let source = |_: &UserProfile| -> spotuser::Result<Vec<Playlist>> {
        calls.set(calls.get() + 1);
        Err(SpotifyError::StatusCode(503))
    };

    let mut session =
        UserSession::with_base_url(source, "", "access-token", &mock.base_url).unwrap();

    assert!(matches!(session.playlists(), Err(SpotifyError::StatusCode(503))));
    assert!(session.cached_playlists().is_none());
    assert!(session.playlists().is_err());
    assert_eq!(calls.get(), 2);
}

#[test]
fn web_client_lists_first_page_of_user_playlists() {
    let mock = MockSpotify::with_profile();
    let page = format!(
        r#"{{"items":[{},{}],"total":2,"limit":50,"offset":0,"next":null,"previous":null,"href":null}}"#,
        playlist_json("37i9dQZF1DXcBWIGoYBM5M", "Today's Top Hits"),
        playlist_json("3cEYpjA9oz9GiPac4AsH4n", "Spotify Web API Testing playlist"),
    );
    mock.respond("GET", &format!("/users/{USER_ID}/playlists"), 200, page);

    let client = WebClient::with_base_url("access-token", &mock.base_url).unwrap();
    let mut session =
        UserSession::with_base_url(client, "", "access-token", &mock.base_url).unwrap();

    let names: Vec<_> = session
        .playlists()
        .unwrap()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, ["Today's Top Hits", "Spotify Web API Testing playlist"]);

    let listing = mock.requests_to("GET", &format!("/users/{USER_ID}/playlists"));
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].query.get("limit").map(String::as_str), Some("50"));
    assert_eq!(listing[0].authorization.as_deref(), Some("Bearer access-token"));
}

#[test]
fn web_client_surfaces_status_code() {
    let mock = MockSpotify::with_profile();
    mock.respond("GET", &format!("/users/{USER_ID}/playlists"), 401, "{}");

    let client = WebClient::with_base_url("access-token", &mock.base_url).unwrap();
    let profile: UserProfile =
        serde_json::from_str(&common::profile_json(USER_ID, None)).unwrap();

    let err = client.user_playlists(&profile).unwrap_err();
    assert_eq!(err.status(), Some(401));
}
