use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type UserId = i64;
pub type SongId = i64;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSong {
    pub id: SongId,
    pub title: String,
    pub lyrics: String,
    pub user_id: UserId,
}

/// Partial update for a song; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongPatch {
    pub title: Option<String>,
    pub lyrics: Option<String>,
}

impl SongPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.lyrics.is_none()
    }
}
