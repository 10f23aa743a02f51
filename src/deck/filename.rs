use crate::pptx::PPTX_EXTENSION;

/// Title used when the caller sends none, or nothing survives sanitizing.
pub const DEFAULT_TITLE: &str = "Lyrics";

/// Keep alphanumerics and spaces, drop trailing whitespace, add the extension.
pub fn sanitize_filename(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();
    let stem = match kept.trim_end() {
        "" => DEFAULT_TITLE,
        stem => stem,
    };
    format!("{stem}.{PPTX_EXTENSION}")
}

/// `Content-Disposition` value with an ASCII `filename` and, when needed, an
/// RFC 5987 `filename*` carrying the UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }
    let ascii: String = filename.chars().filter(char::is_ascii).collect();
    let ascii = match ascii.trim() {
        s if s.is_empty() || s.starts_with('.') => format!("{DEFAULT_TITLE}.{PPTX_EXTENSION}"),
        s => s.to_string(),
    };
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(sanitize_filename("My Song!! (Live)"), "My Song Live.pptx");
    }

    #[test]
    fn trailing_space_is_stripped_but_leading_kept() {
        assert_eq!(sanitize_filename(" Amen ?"), " Amen.pptx");
    }

    #[test]
    fn empty_result_falls_back_to_default() {
        assert_eq!(sanitize_filename("!!!"), "Lyrics.pptx");
        assert_eq!(sanitize_filename(""), "Lyrics.pptx");
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(sanitize_filename("Ave María"), "Ave María.pptx");
    }

    #[test]
    fn disposition_for_ascii_and_unicode() {
        assert_eq!(
            content_disposition("Hymn.pptx"),
            "attachment; filename=\"Hymn.pptx\""
        );
        assert_eq!(
            content_disposition("Ave María.pptx"),
            "attachment; filename=\"Ave Mara.pptx\"; filename*=UTF-8''Ave%20Mar%C3%ADa.pptx"
        );
        assert_eq!(
            content_disposition("頌歌.pptx"),
            "attachment; filename=\"Lyrics.pptx\"; filename*=UTF-8''%E9%A0%8C%E6%AD%8C.pptx"
        );
    }
}
