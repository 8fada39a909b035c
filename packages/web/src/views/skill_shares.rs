//! Skill shares: short technique write-ups with attached media.

use std::collections::HashMap;

use api::media::MediaList;
use api::models::{NewSkillShare, SkillShare};
use dioxus::prelude::*;
use ui::{use_api, use_auth, MediaUpload, MediaView, RequireAuth};

use crate::Route;

#[component]
pub fn SkillShares() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();
    let mut editing = use_signal(|| Option::<SkillShare>::None);

    let shares = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                let usernames: HashMap<String, String> = client
                    .get_users()
                    .await
                    .unwrap_or_default()
                    .into_iter()
                    .map(|user| (user.id, user.username))
                    .collect();
                let shares = client.get_skill_shares().await?;
                Ok::<_, api::ApiError>((shares, usernames))
            }
        })
    };

    let delete_share = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut shares = shares;
            spawn(async move {
                if let Err(err) = client.delete_skill_share(&id).await {
                    tracing::warn!(%err, "could not delete skill share");
                }
                shares.restart();
            });
        }
    };

    let save_share = {
        let client = client.clone();
        move |(id, body): (String, NewSkillShare)| {
            let client = client.clone();
            let mut shares = shares;
            spawn(async move {
                if let Err(err) = client.update_skill_share(&id, &body).await {
                    tracing::warn!(%err, "could not update skill share");
                }
                shares.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Skill Shares" }
                    Link { class: "button", to: Route::CreateSkillShare {}, "Share a Skill" }
                }

                match shares() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load skill shares: {err.message()}" }
                    },
                    Some(Ok((shares, usernames))) => rsx! {
                        if shares.is_empty() {
                            p { class: "empty-state", "No skill shares yet." }
                        }
                        for share in shares {
                            if editing().as_ref().map(|s| s.id.as_str()) == Some(share.id.as_str()) {
                                SkillShareEditor {
                                    key: "{share.id}",
                                    share: share.clone(),
                                    on_save: {
                                        let save_share = save_share.clone();
                                        move |payload| {
                                            save_share(payload);
                                            editing.set(None);
                                        }
                                    },
                                    on_cancel: move |_| editing.set(None),
                                }
                            } else {
                                SkillShareCard {
                                    key: "{share.id}",
                                    author: usernames.get(&share.user_id).cloned().unwrap_or_else(|| "Unknown".to_string()),
                                    owned: share.user_id == me,
                                    on_edit: {
                                        let share = share.clone();
                                        move |_| editing.set(Some(share.clone()))
                                    },
                                    on_delete: {
                                        let id = share.id.clone();
                                        let delete_share = delete_share.clone();
                                        move |_| delete_share(id.clone())
                                    },
                                    share,
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SkillShareCard(
    share: SkillShare,
    author: String,
    owned: bool,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let media: Vec<(String, String)> = share
        .media_urls
        .iter()
        .cloned()
        .zip(share.media_types.iter().cloned())
        .collect();

    rsx! {
        article {
            class: "share-card",
            div {
                class: "share-head",
                span { class: "share-author", "{author}" }
                if owned {
                    div {
                        class: "share-actions",
                        button { class: "icon-btn", onclick: move |_| on_edit.call(()), "Edit" }
                        button { class: "icon-btn danger", onclick: move |_| on_delete.call(()), "Delete" }
                    }
                }
            }
            p { class: "share-details", "{share.meal_details}" }
            if let Some(dietary) = &share.dietary_preferences {
                p { class: "share-dietary", "Dietary: {dietary}" }
            }
            if let Some(ingredients) = &share.ingredients {
                p { class: "share-ingredients", "Ingredients: {ingredients}" }
            }
            if !media.is_empty() {
                div {
                    class: "recipe-media",
                    for (url, media_type) in media {
                        MediaView { key: "{url}", url, media_type }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillShareEditor(
    share: SkillShare,
    on_save: EventHandler<(String, NewSkillShare)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut details = use_signal(|| share.meal_details.clone());
    let mut dietary = use_signal(|| share.dietary_preferences.clone().unwrap_or_default());
    let mut ingredients = use_signal(|| share.ingredients.clone().unwrap_or_default());

    let share_id = share.id.clone();
    let user_id = share.user_id.clone();
    let media_urls = share.media_urls.clone();
    let media_types = share.media_types.clone();
    let save = move |_| {
        if details().trim().is_empty() {
            return;
        }
        on_save.call((
            share_id.clone(),
            NewSkillShare {
                user_id: user_id.clone(),
                meal_details: details().trim().to_string(),
                dietary_preferences: dietary(),
                media_urls: media_urls.clone(),
                media_types: media_types.clone(),
                ingredients: ingredients(),
            },
        ));
    };

    rsx! {
        article {
            class: "share-card editing",
            label { "Details"
                textarea {
                    value: details(),
                    oninput: move |evt| details.set(evt.value()),
                }
            }
            label { "Dietary preferences"
                input {
                    r#type: "text",
                    value: dietary(),
                    oninput: move |evt| dietary.set(evt.value()),
                }
            }
            label { "Ingredients"
                input {
                    r#type: "text",
                    value: ingredients(),
                    oninput: move |evt| ingredients.set(evt.value()),
                }
            }
            div {
                class: "share-actions",
                button { onclick: save, "Save" }
                button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}

#[component]
pub fn CreateSkillShare() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let mut details = use_signal(String::new);
    let mut dietary = use_signal(String::new);
    let mut ingredients = use_signal(String::new);
    let media = use_signal(MediaList::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let me = auth().user.map(|user| user.id).unwrap_or_default();
        spawn(async move {
            error.set(None);
            if details().trim().is_empty() {
                error.set(Some("Please describe the skill you're sharing".to_string()));
                return;
            }
            busy.set(true);
            let (media_urls, media_types) = media().into_wire();
            let body = NewSkillShare {
                user_id: me,
                meal_details: details().trim().to_string(),
                dietary_preferences: dietary(),
                media_urls,
                media_types,
                ingredients: ingredients(),
            };
            match client.create_skill_share(&body).await {
                Ok(_) => {
                    nav.push(Route::SkillShares {});
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    rsx! {
        RequireAuth {
            div {
                class: "form-page",
                h2 { "Share a Skill" }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                form {
                    class: "stacked-form",
                    onsubmit: onsubmit,
                    label { "What are you sharing?"
                        textarea {
                            placeholder: "Knife technique, plating, fermentation tips...",
                            value: details(),
                            oninput: move |evt| details.set(evt.value()),
                        }
                    }
                    label { "Dietary preferences"
                        input {
                            r#type: "text",
                            value: dietary(),
                            oninput: move |evt| dietary.set(evt.value()),
                        }
                    }
                    label { "Ingredients"
                        input {
                            r#type: "text",
                            value: ingredients(),
                            oninput: move |evt| ingredients.set(evt.value()),
                        }
                    }

                    MediaUpload { media }

                    button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Sharing..." } else { "Share Skill" }
                    }
                }
            }
        }
    }
}
