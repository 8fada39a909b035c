//! The recipe feed: every post, newest first.

use std::collections::HashMap;

use api::models::Post;
use dioxus::prelude::*;
use ui::{use_api, RequireAuth};

use super::post_card::PostCard;
use super::recipes::RecipeForm;

#[component]
pub fn Feed() -> Element {
    let client = use_api();
    let mut composing = use_signal(|| false);

    let feed = use_resource(move || {
        let client = client.clone();
        async move {
            let usernames: HashMap<String, String> = client
                .get_users()
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(%err, "could not load users");
                    Vec::new()
                })
                .into_iter()
                .map(|user| (user.id, user.username))
                .collect();
            let mut posts = client.get_posts().await?;
            // Newest first; timestamps are ISO-8601 so the lexicographic
            // order is the chronological one.
            posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            Ok::<(Vec<Post>, HashMap<String, String>), api::ApiError>((posts, usernames))
        }
    });

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Latest Recipes" }
                    button {
                        onclick: move |_| composing.toggle(),
                        if composing() { "Close" } else { "Share a Recipe" }
                    }
                }

                if composing() {
                    RecipeForm {
                        post: None,
                        on_saved: move |_| {
                            composing.set(false);
                            let mut feed = feed;
                            feed.restart();
                        },
                    }
                }

                match feed() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load the feed: {err.message()}" }
                    },
                    Some(Ok((posts, usernames))) => rsx! {
                        if posts.is_empty() {
                            p { class: "empty-state", "No recipes yet. Be the first to share one!" }
                        }
                        for post in posts {
                            PostCard {
                                key: "{post.id}",
                                author: usernames.get(&post.user_id).cloned().unwrap_or_else(|| "Unknown".to_string()),
                                usernames: usernames.clone(),
                                post,
                            }
                        }
                    },
                }
            }
        }
    }
}
