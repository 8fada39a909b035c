//! Saved resources: bookmarked recipes plus external links, with notes and
//! free-form tags.

use api::models::{parse_tags, Bookmark, NewBookmark};
use dioxus::prelude::*;
use ui::{use_api, use_auth, RequireAuth};

#[component]
pub fn Bookmarks() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();
    let mut editing = use_signal(|| Option::<Bookmark>::None);
    let mut adding = use_signal(|| false);
    let mut filter = use_signal(String::new);

    let bookmarks = {
        let client = client.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let me = me.clone();
            async move {
                if me.is_empty() {
                    return Ok(Vec::new());
                }
                client.get_bookmarks(&me).await
            }
        })
    };

    let delete_bookmark = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut bookmarks = bookmarks;
            spawn(async move {
                if let Err(err) = client.delete_bookmark(&id).await {
                    tracing::warn!(%err, "could not delete bookmark");
                }
                bookmarks.restart();
            });
        }
    };

    let save_bookmark = {
        let client = client.clone();
        move |(id, body): (Option<String>, NewBookmark)| {
            let client = client.clone();
            let mut bookmarks = bookmarks;
            spawn(async move {
                let result = match id {
                    Some(id) => client.update_bookmark(&id, &body).await,
                    None => client.create_bookmark(&body).await,
                };
                if let Err(err) = result {
                    tracing::warn!(%err, "could not save bookmark");
                }
                bookmarks.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Bookmarks" }
                    button {
                        class: "button",
                        onclick: move |_| {
                            editing.set(None);
                            adding.set(true);
                        },
                        "Add Bookmark"
                    }
                }

                input {
                    class: "bookmark-filter",
                    r#type: "text",
                    placeholder: "Filter by tag...",
                    value: filter(),
                    oninput: move |evt| filter.set(evt.value()),
                }

                if adding() {
                    BookmarkForm {
                        bookmark: None,
                        user_id: me.clone(),
                        on_save: {
                            let save_bookmark = save_bookmark.clone();
                            move |payload| {
                                save_bookmark(payload);
                                adding.set(false);
                            }
                        },
                        on_cancel: move |_| adding.set(false),
                    }
                }

                match bookmarks() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load bookmarks: {err.message()}" }
                    },
                    Some(Ok(items)) => {
                        let wanted = filter().trim().to_lowercase();
                        let items: Vec<Bookmark> = items
                            .into_iter()
                            .filter(|bookmark| {
                                wanted.is_empty()
                                    || bookmark
                                        .tags
                                        .iter()
                                        .any(|tag| tag.to_lowercase().contains(&wanted))
                            })
                            .collect();
                        rsx! {
                            if items.is_empty() {
                                p { class: "empty-state", "Nothing saved yet." }
                            }
                            for bookmark in items {
                                if editing().as_ref().map(|b| b.id.as_str()) == Some(bookmark.id.as_str()) {
                                    BookmarkForm {
                                        key: "{bookmark.id}",
                                        bookmark: Some(bookmark.clone()),
                                        user_id: me.clone(),
                                        on_save: {
                                            let save_bookmark = save_bookmark.clone();
                                            move |payload| {
                                                save_bookmark(payload);
                                                editing.set(None);
                                            }
                                        },
                                        on_cancel: move |_| editing.set(None),
                                    }
                                } else {
                                    BookmarkCard {
                                        key: "{bookmark.id}",
                                        on_edit: {
                                            let bookmark = bookmark.clone();
                                            move |_| {
                                                adding.set(false);
                                                editing.set(Some(bookmark.clone()));
                                            }
                                        },
                                        on_delete: {
                                            let id = bookmark.id.clone();
                                            let delete_bookmark = delete_bookmark.clone();
                                            move |_| delete_bookmark(id.clone())
                                        },
                                        bookmark,
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

#[component]
fn BookmarkCard(
    bookmark: Bookmark,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        article {
            class: "bookmark-card",
            div {
                class: "bookmark-head",
                h3 {
                    if bookmark.resource_type == "post" {
                        Link { to: crate::Route::Feed {}, "{bookmark.title}" }
                    } else {
                        a { href: "{bookmark.resource_id}", target: "_blank", "{bookmark.title}" }
                    }
                }
                div {
                    class: "bookmark-actions",
                    button { class: "icon-btn", onclick: move |_| on_edit.call(()), "Edit" }
                    button { class: "icon-btn danger", onclick: move |_| on_delete.call(()), "Delete" }
                }
            }
            if let Some(note) = &bookmark.note {
                p { class: "bookmark-note", "{note}" }
            }
            if !bookmark.tags.is_empty() {
                div {
                    class: "tag-row",
                    for tag in &bookmark.tags {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}

/// Create/edit form. External links are saved with the URL as the resource id.
#[component]
fn BookmarkForm(
    bookmark: Option<Bookmark>,
    user_id: String,
    on_save: EventHandler<(Option<String>, NewBookmark)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = bookmark.as_ref().map(|b| b.id.clone());
    let resource_type = bookmark
        .as_ref()
        .map(|b| b.resource_type.clone())
        .unwrap_or_else(|| "external".to_string());

    let mut title = use_signal(|| bookmark.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let mut url = use_signal(|| {
        bookmark
            .as_ref()
            .map(|b| b.resource_id.clone())
            .unwrap_or_default()
    });
    let mut note = use_signal(|| {
        bookmark
            .as_ref()
            .and_then(|b| b.note.clone())
            .unwrap_or_default()
    });
    let mut tags = use_signal(|| {
        bookmark
            .as_ref()
            .map(|b| b.tags.join(", "))
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);

    let saved_type = resource_type.clone();
    let save = move |_| {
        error.set(None);
        if title().trim().is_empty() || url().trim().is_empty() {
            error.set(Some("A bookmark needs a title and a link".to_string()));
            return;
        }
        on_save.call((
            editing.clone(),
            NewBookmark {
                user_id: user_id.clone(),
                resource_id: url().trim().to_string(),
                resource_type: saved_type.clone(),
                title: title().trim().to_string(),
                note: note(),
                tags: parse_tags(&tags()),
            },
        ));
    };

    rsx! {
        article {
            class: "bookmark-card editing",

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            label { "Title"
                input {
                    r#type: "text",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            label { "Link"
                input {
                    r#type: "text",
                    placeholder: "https://...",
                    value: url(),
                    readonly: resource_type == "post",
                    oninput: move |evt| url.set(evt.value()),
                }
            }
            label { "Note"
                textarea {
                    value: note(),
                    oninput: move |evt| note.set(evt.value()),
                }
            }
            label { "Tags (comma separated)"
                input {
                    r#type: "text",
                    placeholder: "weeknight, dessert",
                    value: tags(),
                    oninput: move |evt| tags.set(evt.value()),
                }
            }
            div {
                class: "bookmark-actions",
                button { onclick: save, "Save" }
                button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}
