use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;

use crate::types::accounts::{AccountResponse, CredentialsRequest};
use crate::types::required;
use crate::{LyricsError, router::LyricsState};

/// POST /register
pub async fn register(
    State(state): State<LyricsState>,
    WithRejection(Json(body), _): WithRejection<Json<CredentialsRequest>, LyricsError>,
) -> Result<(StatusCode, Json<AccountResponse>), LyricsError> {
    const MISSING: &str = "Username and password are required!";
    let username = required(body.username, MISSING)?;
    let password = required(body.password, MISSING)?;

    let user_id = state.accounts.register(&username, &password).await?;
    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            message: "New user created!".to_string(),
            user_id,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<LyricsState>,
    WithRejection(Json(body), _): WithRejection<Json<CredentialsRequest>, LyricsError>,
) -> Result<Json<AccountResponse>, LyricsError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(LyricsError::Unauthorized);
    };

    let user_id = state.accounts.authenticate(&username, &password).await?;
    Ok(Json(AccountResponse {
        message: "Login successful!".to_string(),
        user_id,
    }))
}
