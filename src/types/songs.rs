use serde::{Deserialize, Serialize};

use crate::db::models::{DbSong, SongId, SongPatch, UserId};

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub title: Option<String>,
    pub lyrics: Option<String>,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSongRequest {
    pub title: Option<String>,
    pub lyrics: Option<String>,
}

impl From<UpdateSongRequest> for SongPatch {
    fn from(value: UpdateSongRequest) -> Self {
        SongPatch {
            title: value.title,
            lyrics: value.lyrics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedSongResponse {
    pub message: String,
    pub song_id: SongId,
}

#[derive(Debug, Serialize)]
pub struct SongView {
    pub id: SongId,
    pub title: String,
    pub lyrics: String,
}

impl From<DbSong> for SongView {
    fn from(song: DbSong) -> Self {
        Self {
            id: song.id,
            title: song.title,
            lyrics: song.lyrics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SongListResponse {
    pub songs: Vec<SongView>,
}
