use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::db::models::{SongId, UserId};
use crate::types::songs::{
    CreateSongRequest, CreatedSongResponse, SongListResponse, SongView, UpdateSongRequest,
};
use crate::types::{MessageResponse, required};
use crate::{LyricsError, router::LyricsState};

/// POST /songs
pub async fn create_song(
    State(state): State<LyricsState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateSongRequest>, LyricsError>,
) -> Result<(StatusCode, Json<CreatedSongResponse>), LyricsError> {
    const MISSING: &str = "Missing data!";
    let title = required(body.title, MISSING)?;
    let lyrics = required(body.lyrics, MISSING)?;
    let user_id = required(body.user_id, MISSING)?;

    let song_id = state.songs.create(&title, &lyrics, user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedSongResponse {
            message: "Song created!".to_string(),
            song_id,
        }),
    ))
}

/// GET /songs/{user_id}
pub async fn list_songs(
    State(state): State<LyricsState>,
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, LyricsError>,
) -> Result<Json<SongListResponse>, LyricsError> {
    let songs = state.songs.list(user_id).await?;
    Ok(Json(SongListResponse {
        songs: songs.into_iter().map(SongView::from).collect(),
    }))
}

/// PUT /songs/{song_id}
pub async fn update_song(
    State(state): State<LyricsState>,
    WithRejection(Path(song_id), _): WithRejection<Path<SongId>, LyricsError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateSongRequest>, LyricsError>,
) -> Result<Json<MessageResponse>, LyricsError> {
    state.songs.update(song_id, body.into()).await?;
    Ok(Json(MessageResponse::new("Song updated!")))
}

/// DELETE /songs/{song_id}
pub async fn delete_song(
    State(state): State<LyricsState>,
    WithRejection(Path(song_id), _): WithRejection<Path<SongId>, LyricsError>,
) -> Result<Json<MessageResponse>, LyricsError> {
    state.songs.delete(song_id).await?;
    Ok(Json(MessageResponse::new("Song deleted!")))
}
