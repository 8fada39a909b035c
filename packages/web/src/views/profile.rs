//! Public profile pages and the profile editor.

use std::collections::HashMap;

use api::models::{NewConnection, Post, User, UserConnection, UserProfile};
use api::ApiClient;
use dioxus::prelude::*;
use ui::{use_api, use_auth, RequireAuth};

use super::post_card::PostCard;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
struct ProfilePage {
    user: User,
    profile: Option<UserProfile>,
    posts: Vec<Post>,
    friend_ids: Vec<String>,
    my_friend_ids: Vec<String>,
    usernames: HashMap<String, String>,
}

#[component]
pub fn Profile(user_id: String) -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();

    let page = {
        let client = client.clone();
        let user_id = user_id.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let user_id = user_id.clone();
            let me = me.clone();
            async move { load_profile_page(&client, &user_id, &me).await }
        })
    };

    let toggle_friend = {
        let client = client.clone();
        let user_id = user_id.clone();
        let me = me.clone();
        move |is_friend: bool| {
            let client = client.clone();
            let user_id = user_id.clone();
            let me = me.clone();
            let mut page = page;
            spawn(async move {
                let result = if is_friend {
                    client.unfriend(&me, &user_id).await
                } else {
                    client
                        .create_user_connection(&NewConnection {
                            user_id: me.clone(),
                            friend_id: user_id.clone(),
                        })
                        .await
                        .map(|_| ())
                };
                if let Err(err) = result {
                    tracing::warn!(%err, "could not update friendship");
                }
                page.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            match page() {
                None => rsx! { div { class: "page-loading", "Loading..." } },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "Could not load this profile: {err.message()}" }
                },
                Some(Ok(data)) => {
                    let own = data.user.id == me;
                    let is_friend = data.my_friend_ids.contains(&data.user.id);
                    let hidden = data
                        .profile
                        .as_ref()
                        .map(|profile| !profile.profile_visibility)
                        .unwrap_or(false)
                        && !own;
                    let friends = data.friend_ids.len();
                    let recipes = data.posts.len();
                    rsx! {
                        div {
                            class: "profile-page",
                            div {
                                class: "profile-head",
                                if let Some(image) = data.profile.as_ref().and_then(|p| p.image.clone()) {
                                    img { class: "profile-avatar", src: "{image}" }
                                }
                                div {
                                    h2 { "{data.user.username}" }
                                    div {
                                        class: "profile-stats",
                                        span { "{recipes} recipes" }
                                        span { "{friends} friends" }
                                    }
                                }
                                div {
                                    class: "profile-actions",
                                    if own {
                                        Link { class: "button", to: Route::EditProfile {}, "Edit Profile" }
                                    } else {
                                        button {
                                            class: if is_friend { "secondary" } else { "" },
                                            onclick: {
                                                let toggle_friend = toggle_friend.clone();
                                                move |_| toggle_friend(is_friend)
                                            },
                                            if is_friend { "Remove Friend" } else { "Add Friend" }
                                        }
                                    }
                                }
                            }

                            if hidden {
                                p { class: "empty-state", "This profile is private." }
                            } else {
                                if let Some(profile) = &data.profile {
                                    if let Some(biography) = &profile.biography {
                                        p { class: "profile-bio", "{biography}" }
                                    }
                                    if let Some(goals) = &profile.cooking_goals {
                                        p { class: "profile-goals", "Cooking goals: {goals}" }
                                    }
                                }

                                h3 { "Recipes" }
                                if data.posts.is_empty() {
                                    p { class: "empty-state", "No recipes shared yet." }
                                }
                                for post in data.posts {
                                    PostCard {
                                        key: "{post.id}",
                                        author: data.user.username.clone(),
                                        usernames: data.usernames.clone(),
                                        post,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn load_profile_page(
    client: &ApiClient,
    user_id: &str,
    me: &str,
) -> Result<ProfilePage, api::ApiError> {
    let user = client.get_user(user_id).await?;
    // A missing profile record is a normal state for new accounts.
    let profile = client.get_profile_by_user(user_id).await.ok();
    let mut posts = client.get_posts_by_user(user_id).await.unwrap_or_default();
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let friend_ids = client
        .get_user_connections(user_id)
        .await
        .map(|connection| connection.friend_ids)
        .unwrap_or_default();
    let my_friend_ids = if me == user_id {
        friend_ids.clone()
    } else {
        client
            .get_user_connections(me)
            .await
            .map(|connection: UserConnection| connection.friend_ids)
            .unwrap_or_default()
    };
    let usernames = client
        .get_users()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|user| (user.id, user.username))
        .collect();
    Ok(ProfilePage {
        user,
        profile,
        posts,
        friend_ids,
        my_friend_ids,
        usernames,
    })
}

#[component]
pub fn EditProfile() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();

    let existing = {
        let client = client.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let me = me.clone();
            async move {
                if me.is_empty() {
                    return None;
                }
                client.get_profile_by_user(&me).await.ok()
            }
        })
    };

    rsx! {
        RequireAuth {
            match existing() {
                None => rsx! { div { class: "page-loading", "Loading..." } },
                Some(profile) => rsx! {
                    ProfileForm { profile, user_id: me.clone() }
                },
            }
        }
    }
}

#[component]
fn ProfileForm(profile: Option<UserProfile>, user_id: String) -> Element {
    let client = use_api();
    let nav = use_navigator();

    let profile_id = profile.as_ref().and_then(|p| p.id.clone());
    let mut biography = use_signal(|| {
        profile
            .as_ref()
            .and_then(|p| p.biography.clone())
            .unwrap_or_default()
    });
    let mut goals = use_signal(|| {
        profile
            .as_ref()
            .and_then(|p| p.cooking_goals.clone())
            .unwrap_or_default()
    });
    let mut image = use_signal(|| {
        profile
            .as_ref()
            .and_then(|p| p.image.clone())
            .unwrap_or_default()
    });
    let mut visible = use_signal(|| {
        profile
            .as_ref()
            .map(|p| p.profile_visibility)
            .unwrap_or(true)
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let profile_id = profile_id.clone();
        let user_id = user_id.clone();
        spawn(async move {
            error.set(None);
            busy.set(true);
            let body = UserProfile {
                id: profile_id.clone(),
                user_id: user_id.clone(),
                image: Some(image()).filter(|value| !value.is_empty()),
                biography: Some(biography()).filter(|value| !value.is_empty()),
                cooking_goals: Some(goals()).filter(|value| !value.is_empty()),
                profile_visibility: visible(),
            };
            let result = match &profile_id {
                Some(id) => client.update_profile(id, &body).await,
                None => client.create_profile(&body).await,
            };
            match result {
                Ok(_) => {
                    nav.push(Route::Profile { user_id });
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "form-page",
            h2 { "Edit Profile" }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            form {
                class: "stacked-form",
                onsubmit: onsubmit,
                label { "Profile image URL"
                    input {
                        r#type: "text",
                        placeholder: "https://...",
                        value: image(),
                        oninput: move |evt| image.set(evt.value()),
                    }
                }
                label { "Biography"
                    textarea {
                        value: biography(),
                        oninput: move |evt| biography.set(evt.value()),
                    }
                }
                label { "Cooking goals"
                    textarea {
                        value: goals(),
                        oninput: move |evt| goals.set(evt.value()),
                    }
                }
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: visible(),
                        onchange: move |evt| visible.set(evt.checked()),
                    }
                    "Profile visible to everyone"
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Saving..." } else { "Save Profile" }
                }
            }
        }
    }
}
