//! Rendering for a single media reference (uploaded file or YouTube link).

use api::media::{classify, MediaKind};
use api::youtube;
use dioxus::prelude::*;

/// Shows one media item: image, video player, embedded YouTube player, or a
/// plain link when the reference is not something we can render inline.
#[component]
pub fn MediaView(url: String, media_type: String) -> Element {
    match classify(&media_type, &url) {
        MediaKind::Image => rsx! {
            img { class: "media-image", src: "{url}" }
        },
        MediaKind::Video => rsx! {
            video { class: "media-video", controls: true, src: "{url}" }
        },
        MediaKind::YouTube => {
            // Canonical watch/short URLs get the embedded player; anything
            // else stays a plain link.
            match youtube::embed_url(&url) {
                Some(embed) => rsx! {
                    iframe {
                        class: "media-youtube",
                        src: "{embed}",
                        allowfullscreen: true,
                    }
                },
                None => rsx! {
                    a { href: "{url}", target: "_blank", "{url}" }
                },
            }
        }
        MediaKind::Unknown => rsx! {
            a { href: "{url}", target: "_blank", "{url}" }
        },
    }
}
