use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum LyricsError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid request body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("lyrics are empty")]
    EmptyLyrics,

    #[error("font size must be an integer between {min} and {max} points")]
    InvalidFontSize { min: u32, max: u32 },

    #[error("invalid username or password")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid header value: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

impl LyricsError {
    pub fn status(&self) -> StatusCode {
        match self {
            LyricsError::InvalidJson(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            LyricsError::Validation(_)
            | LyricsError::InvalidJson(_)
            | LyricsError::InvalidPath(_)
            | LyricsError::EmptyLyrics
            | LyricsError::InvalidFontSize { .. } => StatusCode::BAD_REQUEST,
            LyricsError::Unauthorized => StatusCode::UNAUTHORIZED,
            LyricsError::NotFound(_) => StatusCode::NOT_FOUND,
            LyricsError::Conflict(_) => StatusCode::CONFLICT,
            LyricsError::DatabaseError(_)
            | LyricsError::PasswordHash(_)
            | LyricsError::Zip(_)
            | LyricsError::Io(_)
            | LyricsError::Task(_)
            | LyricsError::Header(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LyricsError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_body = match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                // Details stay in the log; the client only sees the opaque body.
                error!(error = %self, "request failed with internal error");
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
            StatusCode::UNAUTHORIZED => ApiErrorBody {
                code: "UNAUTHORIZED".to_string(),
                message: self.to_string(),
            },
            StatusCode::NOT_FOUND => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
            },
            StatusCode::CONFLICT => ApiErrorBody {
                code: "CONFLICT".to_string(),
                message: self.to_string(),
            },
            StatusCode::PAYLOAD_TOO_LARGE => ApiErrorBody {
                code: "PAYLOAD_TOO_LARGE".to_string(),
                message: "request body too large".to_string(),
            },
            _ => ApiErrorBody {
                code: "BAD_REQUEST".to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
