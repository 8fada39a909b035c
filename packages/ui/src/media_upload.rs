//! Media picker for post forms.
//!
//! Files are validated client-side (type, 10 MB cap, 30 s video cap) and then
//! uploaded immediately; the resulting URL joins the draft list. A YouTube
//! link can be attached instead of a file. At most three items per post.

use api::media::{MediaDraft, MediaList};
use api::youtube;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaYoutube;
use dioxus_free_icons::icons::fa_solid_icons::{FaImage, FaXmark};
use dioxus_free_icons::Icon;

use crate::auth::use_api;
use crate::media_view::MediaView;

#[component]
pub fn MediaUpload(mut media: Signal<MediaList>) -> Element {
    let client = use_api();
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);
    let mut youtube_url = use_signal(String::new);

    let on_file = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            error.set(None);
            if media().is_full() {
                error.set(Some("Maximum 3 media items allowed".to_string()));
                return;
            }
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };

            #[cfg(target_arch = "wasm32")]
            {
                uploading.set(true);
                match upload_selected(&client, engine, &name).await {
                    Ok(draft) => {
                        if let Err(err) = media.write().add(draft) {
                            error.set(Some(err.message()));
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "media upload rejected");
                        error.set(Some(err.message()));
                    }
                }
                uploading.set(false);
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (client, name);
            }
        }
    };

    let on_youtube = move |_| {
        error.set(None);
        let url = youtube_url().trim().to_string();
        if url.is_empty() {
            return;
        }
        if !youtube::is_youtube_url(&url) {
            error.set(Some("Please enter a valid YouTube URL".to_string()));
            return;
        }
        if let Err(err) = media.write().add(MediaDraft::youtube(url)) {
            error.set(Some(err.message()));
            return;
        }
        youtube_url.set(String::new());
    };

    rsx! {
        div {
            class: "media-upload",

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            if !media().items().is_empty() {
                div {
                    class: "media-previews",
                    for item in media().items().iter().cloned() {
                        div {
                            key: "{item.url}",
                            class: "media-preview",
                            MediaView { url: item.url.clone(), media_type: item.media_type.clone() }
                            button {
                                r#type: "button",
                                class: "media-remove",
                                onclick: move |_| media.write().remove(&item.url),
                                Icon { icon: FaXmark, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }

            if !media().is_full() {
                div {
                    class: "media-controls",
                    label {
                        class: "file-picker",
                        Icon { icon: FaImage, width: 14, height: 14 }
                        if uploading() { " Uploading..." } else { " Add Photo/Video" }
                        input {
                            r#type: "file",
                            accept: "image/*,video/*",
                            disabled: uploading(),
                            onchange: on_file,
                        }
                    }
                    div {
                        class: "youtube-entry",
                        input {
                            r#type: "text",
                            placeholder: "YouTube URL",
                            value: youtube_url(),
                            oninput: move |evt| youtube_url.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            onclick: on_youtube,
                            Icon { icon: FaYoutube, width: 14, height: 14 }
                            " Add"
                        }
                    }
                }
            }

            p {
                class: "media-hint",
                "Add up to 3 photos or videos. Videos must be 30 seconds or less."
            }
        }
    }
}

/// Validate and upload one picked file, handing back the draft to attach.
#[cfg(target_arch = "wasm32")]
async fn upload_selected(
    client: &api::ApiClient,
    engine: std::sync::Arc<dyn dioxus::html::FileEngine>,
    name: &str,
) -> Result<MediaDraft, api::ApiError> {
    use api::media;

    let Some(content_type) = media::content_type_for(name) else {
        return Err(api::ApiError::Validation(
            "Unsupported file type. Please upload an image or video.".to_string(),
        ));
    };
    let bytes = engine.read_file(name).await.ok_or_else(|| {
        api::ApiError::Validation("Could not read the selected file".to_string())
    })?;
    let file = media::file_from_bytes(&bytes, name, content_type).ok_or_else(|| {
        api::ApiError::Validation("Could not read the selected file".to_string())
    })?;

    let duration = if content_type.starts_with("video/") {
        media::probe_video_duration(&file).await
    } else {
        None
    };
    // All limits are enforced here, before the request goes out.
    media::validate_upload(bytes.len() as u64, content_type, duration)?;

    let uploaded = client.upload_media(&file).await?;
    Ok(MediaDraft::uploaded(uploaded.url, uploaded.content_type))
}
