//! Recipe authoring: create, edit, and the signed-in user's own list.

use std::collections::HashMap;

use api::media::{MediaDraft, MediaList};
use api::models::{NewPost, Post};
use dioxus::prelude::*;
use ui::{use_api, use_auth, MediaUpload, RequireAuth};

use super::post_card::PostCard;
use crate::Route;

#[component]
pub fn CreateRecipe() -> Element {
    rsx! {
        RequireAuth {
            RecipeForm { post: None }
        }
    }
}

#[component]
pub fn EditRecipe(post_id: String) -> Element {
    let client = use_api();

    // There is no single-post endpoint; pick the post out of the full list.
    let lookup = use_resource(move || {
        let client = client.clone();
        let post_id = post_id.clone();
        async move {
            client
                .get_posts()
                .await
                .map(|posts| posts.into_iter().find(|post| post.id == post_id))
        }
    });

    rsx! {
        RequireAuth {
            match lookup() {
                None => rsx! { div { class: "page-loading", "Loading..." } },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "Could not load the recipe: {err.message()}" }
                },
                Some(Ok(None)) => rsx! {
                    div { class: "alert alert-error", "This recipe no longer exists." }
                },
                Some(Ok(Some(post))) => rsx! {
                    RecipeForm { post: Some(post) }
                },
            }
        }
    }
}

#[component]
pub fn MyRecipes() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let me = auth().user.map(|user| user.id).unwrap_or_default();

    let mine = {
        let client = client.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let me = me.clone();
            async move {
                if me.is_empty() {
                    return Ok((Vec::new(), HashMap::new()));
                }
                let usernames: HashMap<String, String> = client
                    .get_users()
                    .await
                    .unwrap_or_default()
                    .into_iter()
                    .map(|user| (user.id, user.username))
                    .collect();
                let mut posts = client.get_posts_by_user(&me).await?;
                posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                Ok::<_, api::ApiError>((posts, usernames))
            }
        })
    };

    let delete_post = {
        let client = client.clone();
        let me = me.clone();
        move |post_id: String| {
            let client = client.clone();
            let me = me.clone();
            let mut mine = mine;
            spawn(async move {
                if let Err(err) = client.delete_post(&post_id, &me).await {
                    tracing::warn!(%err, "could not delete recipe");
                }
                mine.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "My Recipes" }
                    Link { class: "button", to: Route::CreateRecipe {}, "Share a Recipe" }
                }

                match mine() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load your recipes: {err.message()}" }
                    },
                    Some(Ok((posts, usernames))) => rsx! {
                        if posts.is_empty() {
                            p { class: "empty-state", "You haven't shared any recipes yet." }
                        }
                        for post in posts {
                            PostCard {
                                key: "{post.id}",
                                author: usernames.get(&post.user_id).cloned().unwrap_or_else(|| "Unknown".to_string()),
                                usernames: usernames.clone(),
                                on_edit: {
                                    let id = post.id.clone();
                                    move |_| { nav.push(Route::EditRecipe { post_id: id.clone() }); }
                                },
                                on_delete: {
                                    let id = post.id.clone();
                                    let delete_post = delete_post.clone();
                                    move |_| delete_post(id.clone())
                                },
                                post,
                            }
                        }
                    },
                }
            }
        }
    }
}

/// Shared create/edit form. With a post the fields come prefilled and submit
/// updates it; without one submit creates a new recipe. `on_saved` overrides
/// the default navigation to the my-recipes page (the feed embeds this form).
#[component]
pub(crate) fn RecipeForm(
    post: Option<Post>,
    #[props(default)] on_saved: Option<EventHandler<()>>,
) -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let editing = post.as_ref().map(|post| post.id.clone());
    let is_editing = editing.is_some();
    let mut title = use_signal(|| post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        post.as_ref()
            .and_then(|p| p.content_description.clone())
            .unwrap_or_default()
    });
    let mut ingredients = use_signal(|| {
        post.as_ref()
            .map(|p| p.ingredients.join("\n"))
            .unwrap_or_default()
    });
    let mut instructions = use_signal(|| {
        post.as_ref()
            .and_then(|p| p.instructions.clone())
            .unwrap_or_default()
    });
    let mut cooking_time = use_signal(|| {
        post.as_ref()
            .and_then(|p| p.cooking_time.clone())
            .unwrap_or_default()
    });
    let mut difficulty = use_signal(|| {
        post.as_ref()
            .and_then(|p| p.difficulty_level.clone())
            .unwrap_or_default()
    });
    let mut cuisine = use_signal(|| {
        post.as_ref()
            .and_then(|p| p.cuisine_type.clone())
            .unwrap_or_default()
    });
    let mut media = use_signal(|| {
        let mut list = MediaList::default();
        if let Some(post) = &post {
            for (url, media_type) in post.media() {
                let _ = list.add(MediaDraft { url, media_type });
            }
        }
        list
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let editing = editing.clone();
        let me = auth().user.map(|user| user.id).unwrap_or_default();
        spawn(async move {
            error.set(None);
            if title().trim().is_empty() {
                error.set(Some("Please give your recipe a title".to_string()));
                return;
            }
            busy.set(true);
            let (media_links, media_types) = media().into_wire();
            let body = NewPost {
                user_id: me.clone(),
                title: title().trim().to_string(),
                content_description: description(),
                ingredients: super::lines(&ingredients()),
                instructions: instructions(),
                cooking_time: cooking_time(),
                difficulty_level: difficulty(),
                cuisine_type: cuisine(),
                media_links,
                media_types,
            };
            let result = match &editing {
                Some(id) => client.update_post(id, &body, &me).await.map(|_| ()),
                None => client.create_post(&body).await.map(|_| ()),
            };
            match result {
                Ok(()) => match on_saved {
                    Some(saved) => {
                        title.set(String::new());
                        description.set(String::new());
                        ingredients.set(String::new());
                        instructions.set(String::new());
                        cooking_time.set(String::new());
                        difficulty.set(String::new());
                        cuisine.set(String::new());
                        media.set(MediaList::default());
                        saved.call(());
                    }
                    None => {
                        nav.push(Route::MyRecipes {});
                    }
                },
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "form-page",
            h2 {
                if is_editing { "Edit Recipe" } else { "Share a Recipe" }
            }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            form {
                class: "stacked-form",
                onsubmit: onsubmit,
                label { "Title"
                    input {
                        r#type: "text",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                label { "Description"
                    textarea {
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                label { "Ingredients (one per line)"
                    textarea {
                        value: ingredients(),
                        oninput: move |evt| ingredients.set(evt.value()),
                    }
                }
                label { "Instructions"
                    textarea {
                        value: instructions(),
                        oninput: move |evt| instructions.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    label { "Cooking time"
                        input {
                            r#type: "text",
                            placeholder: "e.g. 45 minutes",
                            value: cooking_time(),
                            oninput: move |evt| cooking_time.set(evt.value()),
                        }
                    }
                    label { "Difficulty"
                        select {
                            value: difficulty(),
                            onchange: move |evt| difficulty.set(evt.value()),
                            option { value: "", "Select..." }
                            option { value: "Easy", "Easy" }
                            option { value: "Medium", "Medium" }
                            option { value: "Hard", "Hard" }
                        }
                    }
                    label { "Cuisine"
                        input {
                            r#type: "text",
                            placeholder: "e.g. Italian",
                            value: cuisine(),
                            oninput: move |evt| cuisine.set(evt.value()),
                        }
                    }
                }

                MediaUpload { media }

                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() {
                        "Saving..."
                    } else if is_editing {
                        "Save Changes"
                    } else {
                        "Share Recipe"
                    }
                }
            }
        }
    }
}
