//! Background resolution: a decodable picture wins, otherwise solid color.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use super::color::RgbColor;
use crate::pptx::{ImageFormat, SlideBackground};

/// Decoded background picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
}

/// Decode base64 image data, with or without a `data:<mime>;base64,` prefix.
pub fn decode_image(encoded: &str) -> Option<BackgroundImage> {
    let payload = match encoded.trim().strip_prefix("data:") {
        Some(rest) => rest.split_once(',')?.1,
        None => encoded,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let data = STANDARD
        .decode(compact.as_bytes())
        .inspect_err(|e| warn!(error = %e, "background image is not valid base64"))
        .ok()?;
    let Some(format) = ImageFormat::detect_from_bytes(&data) else {
        warn!(len = data.len(), "background image format not recognized");
        return None;
    };
    Some(BackgroundImage { data, format })
}

/// Pick the fill for every slide. The picture is returned alongside when used.
pub fn resolve_background(
    image: Option<&str>,
    color: RgbColor,
) -> (SlideBackground, Option<BackgroundImage>) {
    match image.filter(|s| !s.trim().is_empty()).map(decode_image) {
        Some(Some(picture)) => (SlideBackground::Picture, Some(picture)),
        Some(None) => {
            warn!(%color, "falling back to solid background");
            (SlideBackground::Solid(color), None)
        }
        None => (SlideBackground::Solid(color), None),
    }
}
