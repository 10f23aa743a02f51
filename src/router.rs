use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::LyricsStorage;
use crate::deck::SegmentationPolicy;
use crate::handlers::{accounts, deck, songs};
use crate::service::{AccountService, SongService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct LyricsState {
    pub accounts: AccountService,
    pub songs: SongService,
    pub segmentation: SegmentationPolicy,
    pub body_limit: usize,
}

impl LyricsState {
    pub fn new(storage: LyricsStorage, cfg: &Config) -> Self {
        Self {
            accounts: AccountService::new(storage.clone()),
            songs: SongService::new(storage),
            segmentation: cfg.segmentation,
            body_limit: cfg.body_limit,
        }
    }
}

pub fn lyrics_router(state: LyricsState) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/songs", post(songs::create_song))
        // one placeholder name per path: user id for GET, song id otherwise
        .route(
            "/songs/{id}",
            get(songs::list_songs)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .route("/generate-ppt", post(deck::generate_ppt))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
