use serde::Deserialize;

use super::color::RgbColor;
use super::filename::DEFAULT_TITLE;
use crate::error::LyricsError;

pub const DEFAULT_FONT_SIZE: u32 = 44;
pub const DEFAULT_FONT_NAME: &str = "Arial";
pub const DEFAULT_BACKGROUND: RgbColor = RgbColor::BLACK;
pub const DEFAULT_FONT_COLOR: RgbColor = RgbColor::WHITE;
pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 4000;

/// Body of `POST /generate-ppt`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideStyleRequest {
    pub lyrics: Option<String>,
    pub title: Option<String>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub font_size: Option<FontSize>,
    pub font_name: Option<String>,
    /// Base64 image data, optionally as a `data:` URL.
    pub background_image: Option<String>,
}

/// Clients send the size either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FontSize {
    /// Whole points within the accepted range; fractional sizes are truncated.
    pub fn points(&self) -> Result<u32, LyricsError> {
        let invalid = || LyricsError::InvalidFontSize {
            min: MIN_FONT_SIZE,
            max: MAX_FONT_SIZE,
        };
        let value = match self {
            FontSize::Integer(n) => *n,
            FontSize::Float(f) if f.is_finite() => f.trunc() as i64,
            FontSize::Float(_) => return Err(invalid()),
            FontSize::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        };
        u32::try_from(value)
            .ok()
            .filter(|pt| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(pt))
            .ok_or_else(invalid)
    }
}

/// Styling after defaults and fallbacks are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckStyle {
    pub title: String,
    pub background_color: RgbColor,
    pub font_color: RgbColor,
    pub font_size: u32,
    pub font_name: String,
}

impl SlideStyleRequest {
    pub fn style(&self) -> Result<DeckStyle, LyricsError> {
        let font_size = match &self.font_size {
            Some(size) => size.points()?,
            None => DEFAULT_FONT_SIZE,
        };
        let font_name = self
            .font_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FONT_NAME)
            .to_string();

        Ok(DeckStyle {
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            background_color: self
                .background_color
                .as_deref()
                .map_or(DEFAULT_BACKGROUND, |c| RgbColor::parse_or(c, DEFAULT_BACKGROUND)),
            font_color: self
                .font_color
                .as_deref()
                .map_or(DEFAULT_FONT_COLOR, |c| RgbColor::parse_or(c, DEFAULT_FONT_COLOR)),
            font_size,
            font_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_an_empty_body() {
        let req: SlideStyleRequest = serde_json::from_str("{}").unwrap();
        let style = req.style().unwrap();
        assert_eq!(style.title, "Lyrics");
        assert_eq!(style.background_color, RgbColor::BLACK);
        assert_eq!(style.font_color, RgbColor::WHITE);
        assert_eq!(style.font_size, 44);
        assert_eq!(style.font_name, "Arial");
    }

    #[test]
    fn camel_case_fields_and_string_font_size() {
        let req: SlideStyleRequest = serde_json::from_str(
            r##"{"backgroundColor":"#123","fontColor":"nothex","fontSize":"60","fontName":" Georgia "}"##,
        )
        .unwrap();
        let style = req.style().unwrap();
        assert_eq!(style.background_color, RgbColor::new(0x11, 0x22, 0x33));
        assert_eq!(style.font_color, RgbColor::WHITE);
        assert_eq!(style.font_size, 60);
        assert_eq!(style.font_name, "Georgia");
    }

    #[test]
    fn font_size_bounds() {
        assert_eq!(FontSize::Float(32.9).points().unwrap(), 32);
        assert!(FontSize::Integer(0).points().is_err());
        assert!(FontSize::Integer(-5).points().is_err());
        assert!(FontSize::Integer(4001).points().is_err());
        assert!(FontSize::Text("big".into()).points().is_err());
    }
}
