use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use tracing::info;

use crate::deck::{self, GeneratedDeck, SlideStyleRequest, filename::content_disposition};
use crate::{LyricsError, router::LyricsState};

/// POST /generate-ppt -> the rendered deck as an attachment.
pub async fn generate_ppt(
    State(state): State<LyricsState>,
    WithRejection(Json(request), _): WithRejection<Json<SlideStyleRequest>, LyricsError>,
) -> Result<Response, LyricsError> {
    let policy = state.segmentation;
    let deck =
        tokio::task::spawn_blocking(move || deck::generate_deck(&request, policy)).await??;

    info!(
        filename = %deck.filename,
        slides = deck.slide_count,
        bytes = deck.bytes.len(),
        "generated slide deck"
    );

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(GeneratedDeck::CONTENT_TYPE),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&content_disposition(&deck.filename))?,
        ),
    ];
    Ok((headers, deck.bytes).into_response())
}
