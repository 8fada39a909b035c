//! Card rendering for one recipe post: media, like/comment/bookmark controls,
//! and the comment thread. All mutations are emitted upward — the owning view
//! talks to the backend and refreshes the props.

use api::models::{Comment, Post};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBookmark, FaComment, FaHeart, FaPenToSquare, FaTrash,
};
use dioxus_free_icons::Icon;

use crate::media_view::MediaView;

/// A comment paired with its author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow {
    pub comment: Comment,
    pub author: String,
}

#[component]
pub fn RecipeCard(
    post: Post,
    author: String,
    current_user_id: String,
    liked: bool,
    like_count: usize,
    bookmarked: bool,
    comments: Vec<CommentRow>,
    on_like: EventHandler<()>,
    on_bookmark: EventHandler<()>,
    on_comment: EventHandler<String>,
    on_edit_comment: EventHandler<(String, String)>,
    on_delete_comment: EventHandler<String>,
    #[props(default)] on_edit: Option<EventHandler<()>>,
    #[props(default)] on_delete: Option<EventHandler<()>>,
) -> Element {
    let mut new_comment = use_signal(String::new);
    let mut show_comments = use_signal(|| false);
    let mut editing = use_signal(|| Option::<(String, String)>::None);

    let submit_comment = move |_| {
        let text = new_comment().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_comment.call(text);
        new_comment.set(String::new());
    };

    let media = post.media();

    rsx! {
        article {
            class: "recipe-card",

            div {
                class: "recipe-card-head",
                div {
                    h3 { "{post.title}" }
                    span { class: "recipe-author", "by {author}" }
                    if let Some(when) = &post.timestamp {
                        span { class: "recipe-time", "{when}" }
                    }
                }
                if on_edit.is_some() || on_delete.is_some() {
                    div {
                        class: "recipe-owner-actions",
                        if let Some(edit) = on_edit {
                            button {
                                class: "icon-btn",
                                onclick: move |_| edit.call(()),
                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            }
                        }
                        if let Some(delete) = on_delete {
                            button {
                                class: "icon-btn danger",
                                onclick: move |_| delete.call(()),
                                Icon { icon: FaTrash, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }

            if let Some(description) = &post.content_description {
                p { class: "recipe-description", "{description}" }
            }

            if !media.is_empty() {
                div {
                    class: "recipe-media",
                    for (url, media_type) in media {
                        MediaView { key: "{url}", url, media_type }
                    }
                }
            }

            div {
                class: "recipe-meta",
                if !post.ingredients.is_empty() {
                    div {
                        h4 { "Ingredients" }
                        ul {
                            for ingredient in &post.ingredients {
                                li { "{ingredient}" }
                            }
                        }
                    }
                }
                if let Some(instructions) = &post.instructions {
                    div {
                        h4 { "Instructions" }
                        p { "{instructions}" }
                    }
                }
                div {
                    class: "recipe-facts",
                    if let Some(time) = &post.cooking_time {
                        span { "⏱ {time}" }
                    }
                    if let Some(level) = &post.difficulty_level {
                        span { "{level}" }
                    }
                    if let Some(cuisine) = &post.cuisine_type {
                        span { "{cuisine}" }
                    }
                }
            }

            div {
                class: "recipe-actions",
                button {
                    class: if liked { "action-btn liked" } else { "action-btn" },
                    onclick: move |_| on_like.call(()),
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    " {like_count}"
                }
                button {
                    class: "action-btn",
                    onclick: move |_| show_comments.toggle(),
                    Icon { icon: FaComment, width: 14, height: 14 }
                    " {comments.len()}"
                }
                button {
                    class: if bookmarked { "action-btn bookmarked" } else { "action-btn" },
                    onclick: move |_| on_bookmark.call(()),
                    Icon { icon: FaBookmark, width: 14, height: 14 }
                }
            }

            if show_comments() {
                div {
                    class: "comment-thread",
                    for row in comments.iter().cloned() {
                        div {
                            key: "{row.comment.id}",
                            class: "comment",
                            span { class: "comment-author", "{row.author}" }
                            if editing().as_ref().map(|(id, _)| id.as_str()) == Some(row.comment.id.as_str()) {
                                input {
                                    r#type: "text",
                                    value: editing().map(|(_, text)| text).unwrap_or_default(),
                                    oninput: move |evt| {
                                        if let Some((id, _)) = editing() {
                                            editing.set(Some((id, evt.value())));
                                        }
                                    },
                                }
                                button {
                                    class: "icon-btn",
                                    onclick: move |_| {
                                        if let Some((id, text)) = editing() {
                                            let text = text.trim().to_string();
                                            if !text.is_empty() {
                                                on_edit_comment.call((id, text));
                                            }
                                        }
                                        editing.set(None);
                                    },
                                    "Save"
                                }
                            } else {
                                span { class: "comment-text", "{row.comment.comment_text}" }
                                if row.comment.user_id == current_user_id {
                                    button {
                                        class: "icon-btn",
                                        onclick: {
                                            let seed = (row.comment.id.clone(), row.comment.comment_text.clone());
                                            move |_| editing.set(Some(seed.clone()))
                                        },
                                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "icon-btn danger",
                                        onclick: {
                                            let id = row.comment.id.clone();
                                            move |_| on_delete_comment.call(id.clone())
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "comment-entry",
                        input {
                            r#type: "text",
                            placeholder: "Write a comment...",
                            value: new_comment(),
                            oninput: move |evt| new_comment.set(evt.value()),
                        }
                        button { onclick: submit_comment, "Post" }
                    }
                }
            }
        }
    }
}
