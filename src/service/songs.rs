use crate::db::models::{DbSong, SongId, SongPatch, UserId};
use crate::db::LyricsStorage;
use crate::error::LyricsError;
use tracing::info;

pub const MAX_TITLE_LEN: usize = 120;

#[derive(Clone)]
pub struct SongService {
    storage: LyricsStorage,
}

impl SongService {
    pub fn new(storage: LyricsStorage) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        title: &str,
        lyrics: &str,
        user_id: UserId,
    ) -> Result<SongId, LyricsError> {
        check_title(title)?;
        if !self.storage.user_exists(user_id).await? {
            return Err(LyricsError::NotFound("User not found!".to_string()));
        }
        let id = self.storage.insert_song(title, lyrics, user_id).await?;
        info!(song_id = id, user_id, "created song");
        Ok(id)
    }

    pub async fn list(&self, user_id: UserId) -> Result<Vec<DbSong>, LyricsError> {
        self.storage.list_songs_by_user(user_id).await
    }

    pub async fn update(&self, id: SongId, patch: SongPatch) -> Result<(), LyricsError> {
        if self.storage.get_song(id).await?.is_none() {
            return Err(song_not_found());
        }
        if let Some(title) = patch.title.as_deref() {
            check_title(title)?;
        }
        // the row can still vanish between the lookup and the write
        if !patch.is_empty() && !self.storage.update_song(id, &patch).await? {
            return Err(song_not_found());
        }
        info!(song_id = id, "updated song");
        Ok(())
    }

    pub async fn delete(&self, id: SongId) -> Result<(), LyricsError> {
        if !self.storage.delete_song(id).await? {
            return Err(song_not_found());
        }
        info!(song_id = id, "deleted song");
        Ok(())
    }
}

fn check_title(title: &str) -> Result<(), LyricsError> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(LyricsError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

fn song_not_found() -> LyricsError {
    LyricsError::NotFound("Song not found!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::tests::memory_storage;

    async fn service_with_user() -> (SongService, UserId) {
        let storage = memory_storage().await;
        let uid = storage.insert_user("ana", "hash").await.unwrap();
        (SongService::new(storage), uid)
    }

    #[tokio::test]
    async fn updating_lyrics_keeps_title() {
        let (svc, uid) = service_with_user().await;
        let sid = svc.create("Hymn", "first", uid).await.unwrap();
        svc.update(
            sid,
            SongPatch {
                title: None,
                lyrics: Some("second".to_string()),
            },
        )
        .await
        .unwrap();

        let songs = svc.list(uid).await.unwrap();
        assert_eq!(songs[0].title, "Hymn");
        assert_eq!(songs[0].lyrics, "second");
    }

    #[tokio::test]
    async fn unknown_song_is_not_found() {
        let (svc, _) = service_with_user().await;
        assert!(matches!(svc.delete(99).await, Err(LyricsError::NotFound(_))));
        assert!(matches!(
            svc.update(99, SongPatch::default()).await,
            Err(LyricsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let (svc, uid) = service_with_user().await;
        assert!(matches!(
            svc.create("t", "l", uid + 1).await,
            Err(LyricsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_for_user_without_songs_is_empty() {
        let (svc, uid) = service_with_user().await;
        assert!(svc.list(uid).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_title_is_accepted() {
        let (svc, uid) = service_with_user().await;
        let sid = svc.create("", "l", uid).await.unwrap();
        svc.update(
            sid,
            SongPatch {
                title: Some(" ".to_string()),
                lyrics: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(svc.list(uid).await.unwrap()[0].title, " ");
    }

    #[tokio::test]
    async fn missing_song_wins_over_title_validation() {
        let (svc, _) = service_with_user().await;
        let patch = SongPatch {
            title: Some("x".repeat(MAX_TITLE_LEN + 1)),
            lyrics: None,
        };
        assert!(matches!(
            svc.update(404, patch).await,
            Err(LyricsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn long_title_is_rejected_for_existing_song() {
        let (svc, uid) = service_with_user().await;
        let sid = svc.create("Hymn", "l", uid).await.unwrap();
        let patch = SongPatch {
            title: Some("x".repeat(MAX_TITLE_LEN + 1)),
            lyrics: None,
        };
        assert!(matches!(
            svc.update(sid, patch).await,
            Err(LyricsError::Validation(_))
        ));
    }
}
