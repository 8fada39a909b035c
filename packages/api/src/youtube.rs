//! YouTube link handling.
//!
//! A post can reference a YouTube video instead of an uploaded file. The two
//! canonical URL shapes are rewritten into the embeddable player form; anything
//! else is left alone and rendered as a plain link.

/// Length of a YouTube video id.
const VIDEO_ID_LEN: usize = 11;

/// Extract the video id from `youtube.com/watch?v=ID` or `youtu.be/ID`.
///
/// Only a well-formed 11-character id of `[A-Za-z0-9_-]` counts; trailing query
/// parameters and fragments are stripped.
pub fn video_id(url: &str) -> Option<&str> {
    let candidate = if let Some(rest) = url.split_once("youtube.com/watch?v=").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = url.split_once("youtu.be/").map(|(_, r)| r) {
        rest
    } else {
        return None;
    };

    let id = candidate
        .split(['&', '?', '#', '/'])
        .next()
        .unwrap_or_default();
    if id.len() == VIDEO_ID_LEN && id.bytes().all(valid_id_byte) {
        Some(id)
    } else {
        None
    }
}

/// Rewrite a YouTube URL into `https://www.youtube.com/embed/ID`.
///
/// Returns `None` for anything that is not one of the two canonical shapes, in
/// which case the caller falls back to a plain link.
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Whether a media reference is a YouTube link at all.
pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

fn valid_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_rewritten() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_short_url_rewritten() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extra_parameters_stripped() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_malformed_ids_fall_back() {
        // Too short, too long, invalid characters.
        assert_eq!(embed_url("https://youtu.be/short"), None);
        assert_eq!(embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQQQ"), None);
        assert_eq!(embed_url("https://youtu.be/dQw4w9WgXc!"), None);
    }

    #[test]
    fn test_non_youtube_url_falls_back() {
        assert_eq!(embed_url("https://vimeo.com/123456"), None);
        assert!(!is_youtube_url("https://vimeo.com/123456"));
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
    }
}
