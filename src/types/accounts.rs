use serde::{Deserialize, Serialize};

use crate::db::models::UserId;

/// Body of both `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: String,
    pub user_id: UserId,
}
