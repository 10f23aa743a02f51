use std::fmt;

/// An sRGB color as written into `<a:srgbClr val="RRGGBB"/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB`, surrounding whitespace allowed.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Like [`RgbColor::parse_hex`], substituting `fallback` for unusable input.
    pub fn parse_or(input: &str, fallback: RgbColor) -> Self {
        Self::parse_hex(input).unwrap_or(fallback)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_is_doubled() {
        assert_eq!(RgbColor::parse_hex("#fff"), Some(RgbColor::WHITE));
        assert_eq!(
            RgbColor::parse_hex("1a3"),
            Some(RgbColor::new(0x11, 0xAA, 0x33))
        );
    }

    #[test]
    fn full_form_with_whitespace() {
        assert_eq!(
            RgbColor::parse_hex("  #4472c4 "),
            Some(RgbColor::new(0x44, 0x72, 0xC4))
        );
    }

    #[test]
    fn invalid_input_uses_fallback() {
        assert_eq!(RgbColor::parse_or("zzzzzz", RgbColor::BLACK), RgbColor::BLACK);
        assert_eq!(RgbColor::parse_or("12345", RgbColor::WHITE), RgbColor::WHITE);
        assert_eq!(RgbColor::parse_or("", RgbColor::WHITE), RgbColor::WHITE);
        // multi-byte characters must not panic on slicing
        assert_eq!(RgbColor::parse_or("ééé", RgbColor::BLACK), RgbColor::BLACK);
    }

    #[test]
    fn displays_as_uppercase_hex() {
        assert_eq!(RgbColor::new(0xab, 0x01, 0xff).to_string(), "AB01FF");
    }
}
