//! Splitting lyrics text into slide bodies.

use serde::{Deserialize, Serialize};

use crate::error::LyricsError;

/// How lyrics are cut into slides. Chosen once per process via configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationPolicy {
    /// One slide per blank-line separated paragraph.
    #[default]
    Paragraphs,
    /// The whole lyrics text on a single slide.
    Single,
}

impl SegmentationPolicy {
    pub fn segment(self, lyrics: &str) -> Result<Vec<String>, LyricsError> {
        match self {
            SegmentationPolicy::Paragraphs => Ok(paragraphs(lyrics)),
            SegmentationPolicy::Single => {
                let text = normalize_newlines(lyrics);
                let text = text.trim();
                if text.is_empty() {
                    return Err(LyricsError::EmptyLyrics);
                }
                Ok(vec![text.to_string()])
            }
        }
    }
}

/// Blank-line separated, trimmed, non-empty paragraphs.
pub fn paragraphs(lyrics: &str) -> Vec<String> {
    normalize_newlines(lyrics)
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_verses_make_two_slides() {
        let slides = SegmentationPolicy::Paragraphs
            .segment("Verse one\n\nVerse two")
            .unwrap();
        assert_eq!(slides, vec!["Verse one", "Verse two"]);
    }

    #[test]
    fn extra_blank_lines_and_crlf() {
        let slides = paragraphs("\r\n  line a\r\nline b\r\n\r\n\r\n\r\nchorus \n\n \n\n");
        assert_eq!(slides, vec!["line a\nline b", "chorus"]);
    }

    #[test]
    fn whitespace_only_yields_no_paragraphs() {
        assert!(SegmentationPolicy::Paragraphs.segment("  \n\n\t").unwrap().is_empty());
    }

    #[test]
    fn single_policy_rejects_empty_lyrics() {
        assert!(matches!(
            SegmentationPolicy::Single.segment(" \n "),
            Err(LyricsError::EmptyLyrics)
        ));
        assert_eq!(
            SegmentationPolicy::Single.segment(" a\n\nb ").unwrap(),
            vec!["a\n\nb"]
        );
    }
}
