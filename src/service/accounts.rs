use crate::db::LyricsStorage;
use crate::db::models::UserId;
use crate::error::LyricsError;
use crate::service::password;
use tracing::{info, warn};

pub const MAX_USERNAME_LEN: usize = 80;

/// Registration and login over the users table.
#[derive(Clone)]
pub struct AccountService {
    storage: LyricsStorage,
}

impl AccountService {
    pub fn new(storage: LyricsStorage) -> Self {
        Self { storage }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, LyricsError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(LyricsError::Validation(
                "Username and password are required!".to_string(),
            ));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(LyricsError::Validation(format!(
                "Username must be at most {MAX_USERNAME_LEN} characters"
            )));
        }
        if self.storage.find_user_by_username(username).await?.is_some() {
            return Err(LyricsError::Conflict("Username already exists!".to_string()));
        }

        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || password::hash_password(&password)).await??;

        // A concurrent registration can still win between the lookup and the insert.
        let id = self
            .storage
            .insert_user(username, &hash)
            .await
            .map_err(|e| match e {
                LyricsError::DatabaseError(ref db)
                    if db
                        .as_database_error()
                        .is_some_and(|d| d.is_unique_violation()) =>
                {
                    LyricsError::Conflict("Username already exists!".to_string())
                }
                other => other,
            })?;
        info!(user_id = id, username, "registered user");
        Ok(id)
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserId, LyricsError> {
        let Some(user) = self.storage.find_user_by_username(username).await? else {
            warn!(username, "login for unknown user");
            return Err(LyricsError::Unauthorized);
        };

        let password = password.to_owned();
        let phc = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || password::verify_password(&password, &phc))
                .await??;
        if !verified {
            warn!(username, "login with wrong password");
            return Err(LyricsError::Unauthorized);
        }
        Ok(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::tests::memory_storage;

    #[tokio::test]
    async fn register_twice_conflicts() {
        let svc = AccountService::new(memory_storage().await);
        svc.register("ana", "pw").await.unwrap();
        let err = svc.register("ana", "pw").await.unwrap_err();
        assert!(matches!(err, LyricsError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_returns_registered_id() {
        let svc = AccountService::new(memory_storage().await);
        let id = svc.register("ana", "pw").await.unwrap();
        assert_eq!(svc.authenticate("ana", "pw").await.unwrap(), id);
        assert!(matches!(
            svc.authenticate("ana", "nope").await,
            Err(LyricsError::Unauthorized)
        ));
        assert!(matches!(
            svc.authenticate("bob", "pw").await,
            Err(LyricsError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn blank_and_long_usernames_are_rejected() {
        let svc = AccountService::new(memory_storage().await);
        assert!(matches!(
            svc.register("   ", "pw").await,
            Err(LyricsError::Validation(_))
        ));
        let long = "x".repeat(MAX_USERNAME_LEN + 1);
        assert!(matches!(
            svc.register(&long, "pw").await,
            Err(LyricsError::Validation(_))
        ));
    }
}
