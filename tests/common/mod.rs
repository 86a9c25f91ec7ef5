//! Local stand-in for the Spotify Web API.
//!
//! Records every request it receives and answers with scripted responses
//! keyed by method and path. The server runs on its own current-thread tokio
//! runtime so the blocking client under test can talk to it from a plain
//! `#[test]`.
#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    net::TcpListener,
    sync::{Arc, Mutex},
    thread,
};

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use spotuser::{UserSession, types::{Playlist, UserProfile}};

pub const USER_ID: &str = "wizzler";
pub const DISPLAY_NAME: &str = "JM Wizzler";

type Shared = Arc<Mutex<Inner>>;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    /// URIs sent in the `uris` query parameter, in order.
    pub fn uris(&self) -> Vec<String> {
        self.query
            .get("uris")
            .map(|u| u.split(',').map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Default)]
struct Inner {
    requests: Vec<Recorded>,
    routes: HashMap<(String, String), VecDeque<(u16, String)>>,
}

#[derive(Clone)]
pub struct MockSpotify {
    inner: Shared,
    pub base_url: String,
}

impl MockSpotify {
    pub fn start() -> Self {
        let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let inner: Shared = Arc::new(Mutex::new(Inner::default()));
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&inner));

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            inner,
            base_url: format!("http://{addr}/v1"),
        }
    }

    /// Mock with `GET /me` answering the default profile.
    pub fn with_profile() -> Self {
        let mock = Self::start();
        mock.respond("GET", "/me", 200, profile_json(USER_ID, Some(DISPLAY_NAME)));
        mock
    }

    /// Queues a response for `method path`. The last queued response for a
    /// route keeps being served once the ones before it are used up.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.into()));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn handle(
    State(inner): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let path = uri.path().trim_start_matches("/v1").to_string();
    let mut inner = inner.lock().unwrap();

    inner.requests.push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });

    let (status, body) = match inner.routes.get_mut(&(method.to_string(), path)) {
        Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
        Some(queue) if !queue.is_empty() => queue[0].clone(),
        _ => (404, r#"{"error":{"status":404,"message":"Not found."}}"#.to_string()),
    };

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

pub fn profile_json(id: &str, display_name: Option<&str>) -> String {
    serde_json::json!({
        "id": id,
        "display_name": display_name,
        "email": "wizzler@example.com",
        "country": "SE",
        "product": "premium",
        "uri": format!("spotify:user:{id}"),
        "href": format!("https://api.spotify.com/v1/users/{id}"),
        "followers": { "total": 12 }
    })
    .to_string()
}

pub fn playlist_json(id: &str, name: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": "",
        "public": false,
        "collaborative": false,
        "snapshot_id": "MTAsZDYxNmMyNzQ1YmE2NjNlMzQ0ZmE4Mzk3ZTc0OTgxZWI5YzE3NmFmOA==",
        "uri": format!("spotify:playlist:{id}"),
        "owner": { "id": USER_ID, "display_name": DISPLAY_NAME },
        "tracks": { "total": 0 }
    })
    .to_string()
}

pub fn track_uris(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("spotify:track:{:022}", i))
        .collect()
}

pub type NoPlaylists = fn(&UserProfile) -> spotuser::Result<Vec<Playlist>>;

pub fn no_playlists(_: &UserProfile) -> spotuser::Result<Vec<Playlist>> {
    Ok(Vec::new())
}

/// Session for the default profile, without a playlist source.
pub fn session(mock: &MockSpotify) -> UserSession<NoPlaylists> {
    UserSession::with_base_url(
        no_playlists as NoPlaylists,
        "refresh-token",
        "access-token",
        &mock.base_url,
    )
    .unwrap()
}
