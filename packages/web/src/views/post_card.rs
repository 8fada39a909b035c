//! Wires one [`RecipeCard`] to the backend: loads the post's likes, comments
//! and bookmark state, and performs the mutations the card emits. Likes and
//! comments on someone else's recipe also notify its author.

use std::collections::HashMap;

use api::models::{
    Bookmark, Like, NewBookmark, NewComment, NewLike, NewNotification, Post,
};
use api::ApiClient;
use dioxus::prelude::*;
use ui::{use_api, use_auth, CommentRow, RecipeCard};

#[derive(Debug, Clone, PartialEq, Default)]
struct Thread {
    likes: Vec<Like>,
    comments: Vec<CommentRow>,
    bookmark: Option<Bookmark>,
}

#[component]
pub fn PostCard(
    post: Post,
    author: String,
    usernames: HashMap<String, String>,
    #[props(default)] on_edit: Option<EventHandler<()>>,
    #[props(default)] on_delete: Option<EventHandler<()>>,
) -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();
    let my_name = auth()
        .user
        .map(|user| user.username)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Someone".to_string());

    let thread = {
        let client = client.clone();
        let post_id = post.id.clone();
        let names = usernames.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let post_id = post_id.clone();
            let names = names.clone();
            let me = me.clone();
            async move { load_thread(&client, &post_id, &names, &me).await }
        })
    };

    let on_like = {
        let client = client.clone();
        let post = post.clone();
        let me = me.clone();
        let my_name = my_name.clone();
        move |_| {
            let client = client.clone();
            let post = post.clone();
            let me = me.clone();
            let my_name = my_name.clone();
            let mut thread = thread;
            spawn(async move {
                let likes = thread().unwrap_or_default().likes;
                let result = match likes.iter().find(|like| like.user_id == me) {
                    Some(mine) => client.delete_like(&mine.id).await,
                    None => {
                        let created = client
                            .create_like(&NewLike {
                                post_id: post.id.clone(),
                                user_id: me.clone(),
                            })
                            .await
                            .map(|_| ());
                        if created.is_ok() {
                            notify(&client, &post, &me, "like", &format!("{my_name} liked your recipe")).await;
                        }
                        created
                    }
                };
                if let Err(err) = result {
                    tracing::warn!(%err, "like toggle failed");
                }
                thread.restart();
            });
        }
    };

    let on_comment = {
        let client = client.clone();
        let post = post.clone();
        let me = me.clone();
        let my_name = my_name.clone();
        move |text: String| {
            let client = client.clone();
            let post = post.clone();
            let me = me.clone();
            let my_name = my_name.clone();
            let mut thread = thread;
            spawn(async move {
                let created = client
                    .create_comment(&NewComment {
                        post_id: post.id.clone(),
                        user_id: me.clone(),
                        comment_text: text,
                    })
                    .await;
                match created {
                    Ok(_) => {
                        notify(&client, &post, &me, "comment", &format!("{my_name} commented on your recipe")).await;
                    }
                    Err(err) => tracing::warn!(%err, "could not post comment"),
                }
                thread.restart();
            });
        }
    };

    let on_edit_comment = {
        let client = client.clone();
        move |(id, text): (String, String)| {
            let client = client.clone();
            let mut thread = thread;
            spawn(async move {
                if let Err(err) = client.update_comment(&id, &text).await {
                    tracing::warn!(%err, "could not update comment");
                }
                thread.restart();
            });
        }
    };

    let on_delete_comment = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut thread = thread;
            spawn(async move {
                if let Err(err) = client.delete_comment(&id).await {
                    tracing::warn!(%err, "could not delete comment");
                }
                thread.restart();
            });
        }
    };

    let on_bookmark = {
        let client = client.clone();
        let post = post.clone();
        let me = me.clone();
        move |_| {
            let client = client.clone();
            let post = post.clone();
            let me = me.clone();
            let mut thread = thread;
            spawn(async move {
                let result = match thread().unwrap_or_default().bookmark {
                    Some(existing) => client.delete_bookmark(&existing.id).await,
                    None => client
                        .create_bookmark(&NewBookmark {
                            user_id: me,
                            resource_id: post.id.clone(),
                            resource_type: "post".to_string(),
                            title: post.title.clone(),
                            tags: post.cuisine_type.clone().into_iter().collect(),
                            ..Default::default()
                        })
                        .await
                        .map(|_| ()),
                };
                if let Err(err) = result {
                    tracing::warn!(%err, "bookmark toggle failed");
                }
                thread.restart();
            });
        }
    };

    let state = thread().unwrap_or_default();
    let liked = state.likes.iter().any(|like| like.user_id == me);

    rsx! {
        RecipeCard {
            post,
            author,
            current_user_id: me,
            liked,
            like_count: state.likes.len(),
            bookmarked: state.bookmark.is_some(),
            comments: state.comments,
            on_like,
            on_bookmark,
            on_comment,
            on_edit_comment,
            on_delete_comment,
            on_edit,
            on_delete,
        }
    }
}

async fn load_thread(
    client: &ApiClient,
    post_id: &str,
    usernames: &HashMap<String, String>,
    me: &str,
) -> Thread {
    let likes = client.get_likes_by_post(post_id).await.unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load likes");
        Vec::new()
    });
    let comments = client
        .get_comments_by_post(post_id)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load comments");
            Vec::new()
        })
        .into_iter()
        .map(|comment| {
            let author = usernames
                .get(&comment.user_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string());
            CommentRow { comment, author }
        })
        .collect();
    let bookmark = if me.is_empty() {
        None
    } else {
        client
            .get_bookmarks(me)
            .await
            .unwrap_or_default()
            .into_iter()
            .find(|bookmark| bookmark.resource_id == post_id)
    };
    Thread {
        likes,
        comments,
        bookmark,
    }
}

/// Best-effort notification to the recipe's author. Self-actions stay silent.
async fn notify(client: &ApiClient, post: &Post, actor: &str, kind: &str, message: &str) {
    if post.user_id == actor {
        return;
    }
    let notification = NewNotification {
        user_id: post.user_id.clone(),
        message: message.to_string(),
        kind: kind.to_string(),
        source_id: post.id.clone(),
        source_type: "post".to_string(),
        action_user_id: actor.to_string(),
    };
    if let Err(err) = client.create_notification(&notification).await {
        tracing::warn!(%err, "could not create notification");
    }
}
