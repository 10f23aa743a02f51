//! Minimal PresentationML (.pptx) writer.
//!
//! Produces one slide master, one blank layout and one theme, plus as many
//! slides as the caller adds. Each slide carries a background fill and a
//! single text box.

pub mod format;
pub mod package;
pub mod parts;
pub mod slide;

pub use format::ImageFormat;
pub use package::Presentation;
pub use slide::{Slide, SlideBackground, TextBox, TextStyle};

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

pub const PPTX_EXTENSION: &str = "pptx";

pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub const fn inches(n: i64) -> i64 {
    n * EMU_PER_INCH
}

/// Escape text for element content or attribute values, dropping characters
/// XML 1.0 cannot represent.
pub(crate) fn escape_xml(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || !(c.is_control() || matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect();
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_drops_controls() {
        assert_eq!(escape_xml("a<b & \"c\"\u{0}"), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn drops_noncharacters() {
        assert_eq!(escape_xml("amen\u{FFFE}\u{FFFF}\u{FFFD}"), "amen\u{FFFD}");
    }
}
