//! Client-side media rules.
//!
//! Uploads are validated here before any network call: images and videos up to
//! 10 MB, videos additionally capped at 30 seconds. A post carries at most
//! three media items and the same URL can only be attached once.

use crate::error::ApiError;
use crate::youtube;

/// Hard ceiling for an uploaded file.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
/// Hard ceiling for video length.
pub const MAX_VIDEO_SECONDS: f64 = 30.0;
/// Default number of media items per post.
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// Wire value used for YouTube references in `mediaTypes`.
pub const YOUTUBE_TYPE: &str = "youtube";

/// How a media reference should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    YouTube,
    Unknown,
}

/// Classify a media reference from its stored type string and URL.
pub fn classify(media_type: &str, url: &str) -> MediaKind {
    if media_type == YOUTUBE_TYPE || youtube::is_youtube_url(url) {
        MediaKind::YouTube
    } else if media_type.starts_with("image/") {
        MediaKind::Image
    } else if media_type.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Unknown
    }
}

/// A media reference attached to a post before submission: either the URL the
/// upload endpoint handed back, or a YouTube link.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDraft {
    pub url: String,
    pub media_type: String,
}

impl MediaDraft {
    pub fn uploaded(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media_type: content_type.into(),
        }
    }

    pub fn youtube(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media_type: YOUTUBE_TYPE.to_string(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        classify(&self.media_type, &self.url)
    }
}

/// The media items gathered for one post.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaList {
    items: Vec<MediaDraft>,
    max_items: usize,
}

impl Default for MediaList {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS)
    }
}

impl MediaList {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            max_items,
        }
    }

    pub fn items(&self) -> &[MediaDraft] {
        &self.items
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items
    }

    /// Attach another item, rejecting overflow and duplicate URLs.
    pub fn add(&mut self, draft: MediaDraft) -> Result<(), ApiError> {
        if self.is_full() {
            return Err(ApiError::Validation(format!(
                "Maximum {} media items allowed",
                self.max_items
            )));
        }
        if self.items.iter().any(|item| item.url == draft.url) {
            return Err(ApiError::Validation(
                "This media has already been added".to_string(),
            ));
        }
        self.items.push(draft);
        Ok(())
    }

    pub fn remove(&mut self, url: &str) {
        self.items.retain(|item| item.url != url);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Split into the parallel (links, types) arrays the backend stores.
    pub fn into_wire(self) -> (Vec<String>, Vec<String>) {
        self.items
            .into_iter()
            .map(|item| (item.url, item.media_type))
            .unzip()
    }
}

/// Validate a file before it is uploaded. Rejections happen entirely
/// client-side; no network call is made for an invalid file.
pub fn validate_upload(
    size_bytes: u64,
    content_type: &str,
    video_duration_secs: Option<f64>,
) -> Result<(), ApiError> {
    let is_image = content_type.starts_with("image/");
    let is_video = content_type.starts_with("video/");
    if !is_image && !is_video {
        return Err(ApiError::Validation(
            "Unsupported file type. Please upload an image or video.".to_string(),
        ));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation(
            "Files must be 10 MB or smaller".to_string(),
        ));
    }
    if is_video {
        match video_duration_secs {
            Some(duration) if duration > MAX_VIDEO_SECONDS => {
                return Err(ApiError::Validation(
                    "Videos must be 30 seconds or less".to_string(),
                ));
            }
            Some(_) => {}
            None => {
                return Err(ApiError::Validation(
                    "Could not read the video. Please try another file.".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Build a browser `File` from bytes read out of the picker, so the same
/// object can feed both the duration probe and the multipart upload.
#[cfg(target_arch = "wasm32")]
pub fn file_from_bytes(bytes: &[u8], name: &str, content_type: &str) -> Option<web_sys::File> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::FilePropertyBag::new();
    options.set_type(content_type);
    web_sys::File::new_with_buffer_source_sequence_and_options(&parts, name, &options).ok()
}

/// Guess a MIME type from the picked file's extension. The file engine hands
/// back names and bytes, not types.
pub fn content_type_for(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        "ogg" | "ogv" => Some("video/ogg"),
        _ => None,
    }
}

/// Read a video file's duration through an off-screen `<video>` element, the
/// only way the browser exposes it without decoding the file ourselves.
#[cfg(target_arch = "wasm32")]
pub async fn probe_video_duration(file: &web_sys::File) -> Option<f64> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()?.document()?;
    let video: web_sys::HtmlVideoElement =
        document.create_element("video").ok()?.dyn_into().ok()?;
    video.set_preload("metadata");

    let url = web_sys::Url::create_object_url_with_blob(file).ok()?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let measured = video.clone();
        let on_loaded = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(measured.duration()));
        });
        video.set_onloadedmetadata(Some(on_loaded.unchecked_ref()));

        let on_error = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        video.set_onerror(Some(on_error.unchecked_ref()));
    });
    video.set_src(&url);

    let result = wasm_bindgen_futures::JsFuture::from(promise).await;
    let _ = web_sys::Url::revoke_object_url(&url);
    result.ok().and_then(|value| value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_upload_rejected() {
        let err = validate_upload(MAX_UPLOAD_BYTES + 1, "image/png", None).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(validate_upload(MAX_UPLOAD_BYTES, "image/png", None).is_ok());
    }

    #[test]
    fn test_long_video_rejected() {
        let err = validate_upload(1024, "video/mp4", Some(30.5)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(validate_upload(1024, "video/mp4", Some(30.0)).is_ok());
    }

    #[test]
    fn test_video_without_readable_duration_rejected() {
        assert!(validate_upload(1024, "video/mp4", None).is_err());
    }

    #[test]
    fn test_unsupported_type_rejected() {
        assert!(validate_upload(10, "application/pdf", None).is_err());
        assert!(validate_upload(10, "text/plain", None).is_err());
    }

    #[test]
    fn test_media_list_caps_at_max() {
        let mut list = MediaList::new(3);
        for i in 0..3 {
            list.add(MediaDraft::uploaded(format!("http://x/{i}.jpg"), "image/jpeg"))
                .unwrap();
        }
        let err = list
            .add(MediaDraft::uploaded("http://x/3.jpg", "image/jpeg"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_media_list_rejects_duplicate_url() {
        let mut list = MediaList::default();
        list.add(MediaDraft::youtube("https://youtu.be/dQw4w9WgXcQ"))
            .unwrap();
        let err = list
            .add(MediaDraft::youtube("https://youtu.be/dQw4w9WgXcQ"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_media_list_remove_and_wire_split() {
        let mut list = MediaList::default();
        list.add(MediaDraft::uploaded("http://x/a.jpg", "image/jpeg"))
            .unwrap();
        list.add(MediaDraft::youtube("https://youtu.be/dQw4w9WgXcQ"))
            .unwrap();
        list.remove("http://x/a.jpg");

        let (links, types) = list.into_wire();
        assert_eq!(links, vec!["https://youtu.be/dQw4w9WgXcQ"]);
        assert_eq!(types, vec![YOUTUBE_TYPE]);
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for("dinner.JPG"), Some("image/jpeg"));
        assert_eq!(content_type_for("clip.mp4"), Some("video/mp4"));
        assert_eq!(content_type_for("recipe.pdf"), None);
        assert_eq!(content_type_for("noextension"), None);
    }

    #[test]
    fn test_classify_media() {
        assert_eq!(classify("image/png", "http://x/a.png"), MediaKind::Image);
        assert_eq!(classify("video/mp4", "http://x/a.mp4"), MediaKind::Video);
        assert_eq!(classify(YOUTUBE_TYPE, "https://youtu.be/x"), MediaKind::YouTube);
        // Stored type missing but the URL gives it away.
        assert_eq!(
            classify("", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            MediaKind::YouTube
        );
        assert_eq!(classify("application/pdf", "http://x/a.pdf"), MediaKind::Unknown);
    }
}
