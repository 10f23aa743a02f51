use crate::db::models::{DbSong, DbUser, SongId, SongPatch, UserId};
use crate::db::schema::SQLITE_INIT;
use crate::error::LyricsError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct LyricsStorage {
    pool: SqlitePool,
}

impl LyricsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> Result<Self, LyricsError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), LyricsError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a user. Returns the row id.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserId, LyricsError> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DbUser>, LyricsError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn user_exists(&self, id: UserId) -> Result<bool, LyricsError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(1) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0 > 0)
    }

    /// Insert a song owned by `user_id`. Returns the row id.
    pub async fn insert_song(
        &self,
        title: &str,
        lyrics: &str,
        user_id: UserId,
    ) -> Result<SongId, LyricsError> {
        let result = sqlx::query("INSERT INTO songs (title, lyrics, user_id) VALUES (?, ?, ?)")
            .bind(title)
            .bind(lyrics)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_song(&self, id: SongId) -> Result<Option<DbSong>, LyricsError> {
        let song = sqlx::query_as::<_, DbSong>(
            "SELECT id, title, lyrics, user_id FROM songs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(song)
    }

    /// All songs of a user, title ascending.
    pub async fn list_songs_by_user(&self, user_id: UserId) -> Result<Vec<DbSong>, LyricsError> {
        let songs = sqlx::query_as::<_, DbSong>(
            "SELECT id, title, lyrics, user_id FROM songs WHERE user_id = ? ORDER BY title, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }

    /// Apply a partial update. Returns `false` when no song has this id.
    pub async fn update_song(&self, id: SongId, patch: &SongPatch) -> Result<bool, LyricsError> {
        let result = sqlx::query(
            r#"UPDATE songs SET
                title = COALESCE(?, title),
                lyrics = COALESCE(?, lyrics)
              WHERE id = ?"#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.lyrics.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no song has this id.
    pub async fn delete_song(&self, id: SongId) -> Result<bool, LyricsError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Single-connection in-memory database; every pooled connection would
    /// otherwise see its own empty database.
    pub(crate) async fn memory_storage() -> LyricsStorage {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .unwrap();
        let storage = LyricsStorage::new(pool);
        storage.init_schema().await.unwrap();
        storage
    }

    #[tokio::test]
    async fn duplicate_username_violates_unique_constraint() {
        let storage = memory_storage().await;
        storage.insert_user("ana", "hash").await.unwrap();

        let err = storage.insert_user("ana", "other").await.unwrap_err();
        match err {
            LyricsError::DatabaseError(e) => {
                assert!(e.as_database_error().unwrap().is_unique_violation())
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn songs_are_listed_by_title() {
        let storage = memory_storage().await;
        let uid = storage.insert_user("ana", "hash").await.unwrap();
        storage.insert_song("Zebra", "z", uid).await.unwrap();
        storage.insert_song("Amazing Grace", "a", uid).await.unwrap();

        let titles: Vec<_> = storage
            .list_songs_by_user(uid)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Amazing Grace", "Zebra"]);
    }

    #[tokio::test]
    async fn patch_keeps_unset_fields() {
        let storage = memory_storage().await;
        let uid = storage.insert_user("ana", "hash").await.unwrap();
        let sid = storage.insert_song("Old", "words", uid).await.unwrap();

        let patch = SongPatch {
            title: Some("New".to_string()),
            lyrics: None,
        };
        assert!(storage.update_song(sid, &patch).await.unwrap());

        let song = storage.get_song(sid).await.unwrap().unwrap();
        assert_eq!(song.title, "New");
        assert_eq!(song.lyrics, "words");
    }

    #[tokio::test]
    async fn song_requires_existing_owner() {
        let storage = memory_storage().await;
        assert!(storage.insert_song("t", "l", 42).await.is_err());
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let storage = memory_storage().await;
        assert!(!storage.delete_song(7).await.unwrap());
    }
}
