//! Request and response bodies of the JSON API.

pub mod accounts;
pub mod songs;

use serde::Serialize;

use crate::error::LyricsError;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unwrap a field the client must send.
pub(crate) fn required<T>(field: Option<T>, message: &str) -> Result<T, LyricsError> {
    field.ok_or_else(|| LyricsError::Validation(message.to_string()))
}
