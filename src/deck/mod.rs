//! Slide deck generation from lyrics text.
//!
//! A [`SlideStyleRequest`] is resolved into a [`DeckStyle`], the lyrics are
//! cut into slide bodies by the configured [`SegmentationPolicy`], and every
//! slide gets the same background and a centered text box on a 16:9 canvas.

pub mod background;
pub mod color;
pub mod filename;
pub mod request;
pub mod segment;

pub use color::RgbColor;
pub use request::{DeckStyle, FontSize, SlideStyleRequest};
pub use segment::SegmentationPolicy;

use tracing::debug;

use crate::error::LyricsError;
use crate::pptx::{self, Presentation, Slide, TextBox, TextStyle, inches};

pub const SLIDE_WIDTH: i64 = inches(16);
pub const SLIDE_HEIGHT: i64 = inches(9);
pub const TEXT_BOX_WIDTH: i64 = inches(14);
pub const TEXT_BOX_HEIGHT: i64 = inches(7);

/// A rendered deck ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct GeneratedDeck {
    pub filename: String,
    pub slide_count: usize,
    pub bytes: Vec<u8>,
}

impl GeneratedDeck {
    pub const CONTENT_TYPE: &'static str = pptx::PPTX_CONTENT_TYPE;
}

/// Lay out slides for a request without serializing them.
pub fn build_presentation(
    request: &SlideStyleRequest,
    policy: SegmentationPolicy,
) -> Result<Presentation, LyricsError> {
    let style = request.style()?;
    let bodies = policy.segment(request.lyrics.as_deref().unwrap_or_default())?;
    let (background, image) = background::resolve_background(
        request.background_image.as_deref(),
        style.background_color,
    );

    let mut presentation = Presentation::new(style.title.clone(), SLIDE_WIDTH, SLIDE_HEIGHT);
    if let Some(image) = image {
        presentation.set_background_image(image.data, image.format);
    }

    let text_style = TextStyle {
        font_name: style.font_name,
        font_size: style.font_size,
        color: style.font_color,
    };
    for body in bodies {
        let text_box = TextBox::centered(
            body,
            (SLIDE_WIDTH, SLIDE_HEIGHT),
            (TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT),
            text_style.clone(),
        );
        presentation.add_slide(Slide::new(background, text_box));
    }
    Ok(presentation)
}

/// Build and serialize a deck. CPU-bound; callers on the runtime should use
/// `spawn_blocking`.
pub fn generate_deck(
    request: &SlideStyleRequest,
    policy: SegmentationPolicy,
) -> Result<GeneratedDeck, LyricsError> {
    let presentation = build_presentation(request, policy)?;
    let bytes = presentation.to_bytes()?;
    let title = request.title.as_deref().unwrap_or(filename::DEFAULT_TITLE);
    let deck = GeneratedDeck {
        filename: filename::sanitize_filename(title),
        slide_count: presentation.slide_count(),
        bytes,
    };
    debug!(
        filename = %deck.filename,
        slides = deck.slide_count,
        size = deck.bytes.len(),
        "rendered deck"
    );
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::SlideBackground;

    fn request(lyrics: &str) -> SlideStyleRequest {
        SlideStyleRequest {
            lyrics: Some(lyrics.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn one_slide_per_paragraph() {
        let pres = build_presentation(
            &request("Verse one\n\nVerse two"),
            SegmentationPolicy::Paragraphs,
        )
        .unwrap();
        let texts: Vec<_> = pres.slides().iter().map(|s| s.text_box.text.as_str()).collect();
        assert_eq!(texts, vec!["Verse one", "Verse two"]);
        assert!(
            pres.slides()
                .iter()
                .all(|s| s.background == SlideBackground::Solid(RgbColor::BLACK))
        );
    }

    #[test]
    fn blank_lyrics_make_an_empty_deck_under_paragraph_policy() {
        let deck = generate_deck(&request("  \n\n "), SegmentationPolicy::Paragraphs).unwrap();
        assert_eq!(deck.slide_count, 0);
        assert!(!deck.bytes.is_empty());
    }

    #[test]
    fn blank_lyrics_are_rejected_under_single_policy() {
        assert!(matches!(
            generate_deck(&request(""), SegmentationPolicy::Single),
            Err(LyricsError::EmptyLyrics)
        ));
    }

    #[test]
    fn text_box_geometry_and_style() {
        let mut req = request("Hallelujah");
        req.font_color = Some("#f00".to_string());
        req.font_size = Some(FontSize::Integer(60));
        req.font_name = Some("Georgia".to_string());
        let pres = build_presentation(&req, SegmentationPolicy::Paragraphs).unwrap();

        let tb = &pres.slides()[0].text_box;
        assert_eq!((tb.x, tb.y), (inches(1), inches(1)));
        assert_eq!((tb.width, tb.height), (inches(14), inches(7)));
        assert_eq!(tb.style.color, RgbColor::new(255, 0, 0));
        assert_eq!(tb.style.font_size, 60);
        assert_eq!(tb.style.font_name, "Georgia");
        assert_eq!(pres.slide_width(), 14_630_400);
        assert_eq!(pres.slide_height(), 8_229_600);
    }

    #[test]
    fn bad_image_falls_back_to_requested_color() {
        let mut req = request("a\n\nb");
        req.background_color = Some("336699".to_string());
        req.background_image = Some("definitely not an image".to_string());
        let pres = build_presentation(&req, SegmentationPolicy::Paragraphs).unwrap();
        assert!(
            pres.slides()
                .iter()
                .all(|s| s.background == SlideBackground::Solid(RgbColor::new(0x33, 0x66, 0x99)))
        );
    }

    #[test]
    fn filename_comes_from_title() {
        let mut req = request("x");
        req.title = Some("My Song!! (Live)".to_string());
        let deck = generate_deck(&req, SegmentationPolicy::Paragraphs).unwrap();
        assert_eq!(deck.filename, "My Song Live.pptx");
    }
}
