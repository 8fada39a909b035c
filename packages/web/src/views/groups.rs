//! Cooking groups: the directory, group creation, and the group page with
//! its own post stream.

use std::collections::HashMap;

use api::media::MediaList;
use api::models::{parse_tags, Group, GroupPost, NewGroup, NewGroupPost};
use api::ApiClient;
use dioxus::prelude::*;
use ui::{use_api, use_auth, MediaUpload, MediaView, RequireAuth};

use crate::Route;

#[component]
pub fn Groups() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();

    // Public directory plus any private groups the user already belongs to.
    let groups = {
        let client = client.clone();
        let me = me.clone();
        use_resource(move || {
            let client = client.clone();
            let me = me.clone();
            async move {
                let mut groups = client.get_public_groups().await?;
                if !me.is_empty() {
                    let mine = client.get_groups_by_member(&me).await.unwrap_or_else(|err| {
                        tracing::warn!(%err, "could not load joined groups");
                        Vec::new()
                    });
                    for group in mine {
                        if !groups.iter().any(|existing| existing.id == group.id) {
                            groups.push(group);
                        }
                    }
                }
                Ok::<_, api::ApiError>(groups)
            }
        })
    };

    let toggle_membership = {
        let client = client.clone();
        let me = me.clone();
        move |group: Group| {
            let client = client.clone();
            let me = me.clone();
            let mut groups = groups;
            spawn(async move {
                if let Err(err) = toggle_member(&client, &group, &me).await {
                    tracing::warn!(%err, "could not update group membership");
                }
                groups.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Groups" }
                    Link { class: "button", to: Route::CreateGroup {}, "Start a Group" }
                }

                match groups() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load groups: {err.message()}" }
                    },
                    Some(Ok(groups)) => rsx! {
                        if groups.is_empty() {
                            p { class: "empty-state", "No groups yet. Start the first one!" }
                        }
                        for group in groups {
                            GroupCard {
                                key: "{group.id}",
                                member: group.member_ids.contains(&me),
                                on_toggle: {
                                    let group = group.clone();
                                    let toggle_membership = toggle_membership.clone();
                                    move |_| toggle_membership(group.clone())
                                },
                                group,
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn GroupCard(group: Group, member: bool, on_toggle: EventHandler<()>) -> Element {
    let members = group.member_ids.len();
    rsx! {
        article {
            class: "group-card",
            div {
                class: "group-head",
                h3 {
                    Link { to: Route::GroupDetail { group_id: group.id.clone() }, "{group.name}" }
                }
                span {
                    class: "group-badge",
                    if group.is_public { "Public" } else { "Private" }
                }
            }
            if let Some(description) = &group.description {
                p { "{description}" }
            }
            div {
                class: "group-meta",
                span { "{members} members" }
                if !group.tags.is_empty() {
                    div {
                        class: "tag-row",
                        for tag in &group.tags {
                            span { class: "tag", "{tag}" }
                        }
                    }
                }
            }
            if member {
                button { class: "secondary", onclick: move |_| on_toggle.call(()), "Leave" }
            } else if group.is_public {
                button { onclick: move |_| on_toggle.call(()), "Join" }
            }
        }
    }
}

#[component]
pub fn CreateGroup() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut rules = use_signal(String::new);
    let mut public = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let me = auth().user.map(|user| user.id).unwrap_or_default();
        spawn(async move {
            error.set(None);
            if name().trim().is_empty() {
                error.set(Some("Please name your group".to_string()));
                return;
            }
            busy.set(true);
            let body = NewGroup {
                name: name().trim().to_string(),
                description: description(),
                creator_id: me,
                image_url: String::new(),
                tags: parse_tags(&tags()),
                rules: super::lines(&rules()),
                is_public: public(),
            };
            match client.create_group(&body).await {
                Ok(group) => {
                    nav.push(Route::GroupDetail { group_id: group.id });
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
                h2 { "Start a Group" }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                form {
                    class: "stacked-form",
                    onsubmit: onsubmit,
                    label { "Name"
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label { "Description"
                        textarea {
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label { "Tags (comma separated)"
                        input {
                            r#type: "text",
                            value: tags(),
                            oninput: move |evt| tags.set(evt.value()),
                        }
                    }
                    label { "Rules (one per line)"
                        textarea {
                            value: rules(),
                            oninput: move |evt| rules.set(evt.value()),
                        }
                    }
                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: public(),
                            onchange: move |evt| public.set(evt.checked()),
                        }
                        "Anyone can join"
                    }
                    button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Creating..." } else { "Create Group" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn GroupDetail(group_id: String) -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let me = auth().user.map(|user| user.id).unwrap_or_default();
    let mut new_post = use_signal(String::new);
    let post_media = use_signal(|| MediaList::new(1));

    let detail = {
        let client = client.clone();
        let group_id = group_id.clone();
        use_resource(move || {
            let client = client.clone();
            let group_id = group_id.clone();
            async move {
                let usernames: HashMap<String, String> = client
                    .get_users()
                    .await
                    .unwrap_or_default()
                    .into_iter()
                    .map(|user| (user.id, user.username))
                    .collect();
                let group = client.get_group(&group_id).await?;
                let mut posts = client.get_posts_by_group(&group_id).await.unwrap_or_else(|err| {
                    tracing::warn!(%err, "could not load group posts");
                    Vec::new()
                });
                posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                Ok::<_, api::ApiError>((group, posts, usernames))
            }
        })
    };

    let toggle_membership = {
        let client = client.clone();
        let me = me.clone();
        move |group: Group| {
            let client = client.clone();
            let me = me.clone();
            let mut detail = detail;
            spawn(async move {
                if let Err(err) = toggle_member(&client, &group, &me).await {
                    tracing::warn!(%err, "could not update group membership");
                }
                detail.restart();
            });
        }
    };

    let submit_post = {
        let client = client.clone();
        let group_id = group_id.clone();
        let me = me.clone();
        move |_| {
            let client = client.clone();
            let group_id = group_id.clone();
            let me = me.clone();
            let mut detail = detail;
            let mut post_media = post_media;
            spawn(async move {
                let content = new_post().trim().to_string();
                if content.is_empty() {
                    return;
                }
                let attachment = post_media().items().first().cloned();
                let body = NewGroupPost {
                    group_id,
                    user_id: me,
                    content,
                    media_url: attachment.as_ref().map(|item| item.url.clone()),
                    media_type: attachment.map(|item| item.media_type),
                };
                match client.create_group_post(&body).await {
                    Ok(_) => {
                        new_post.set(String::new());
                        post_media.write().clear();
                    }
                    Err(err) => tracing::warn!(%err, "could not post to group"),
                }
                detail.restart();
            });
        }
    };

    let delete_post = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut detail = detail;
            spawn(async move {
                if let Err(err) = client.delete_group_post(&id).await {
                    tracing::warn!(%err, "could not delete group post");
                }
                detail.restart();
            });
        }
    };

    let save_post = {
        let client = client.clone();
        move |(id, body): (String, NewGroupPost)| {
            let client = client.clone();
            let mut detail = detail;
            spawn(async move {
                if let Err(err) = client.update_group_post(&id, &body).await {
                    tracing::warn!(%err, "could not update group post");
                }
                detail.restart();
            });
        }
    };

    let toggle_admin = {
        let client = client.clone();
        move |(group, member_id): (Group, String)| {
            let client = client.clone();
            let mut detail = detail;
            spawn(async move {
                let mut admins = group.admin_ids.clone();
                if let Some(at) = admins.iter().position(|id| id == &member_id) {
                    admins.remove(at);
                } else {
                    admins.push(member_id);
                }
                if let Err(err) = client.update_group_admins(&group.id, &admins).await {
                    tracing::warn!(%err, "could not update group admins");
                }
                detail.restart();
            });
        }
    };

    let delete_group = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_group(&id).await {
                    Ok(()) => {
                        nav.push(Route::Groups {});
                    }
                    Err(err) => tracing::warn!(%err, "could not delete group"),
                }
            });
        }
    };

    let mut editing_group = use_signal(|| false);
    let save_group = {
        let client = client.clone();
        move |(id, body): (String, NewGroup)| {
            let client = client.clone();
            let mut detail = detail;
            spawn(async move {
                if let Err(err) = client.update_group(&id, &body).await {
                    tracing::warn!(%err, "could not update group");
                }
                detail.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            match detail() {
                None => rsx! { div { class: "page-loading", "Loading..." } },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "Could not load the group: {err.message()}" }
                },
                Some(Ok((group, posts, usernames))) => {
                    let is_member = group.member_ids.contains(&me);
                    let is_admin = group.admin_ids.contains(&me) || group.creator_id == me;
                    let is_creator = group.creator_id == me;
                    let member_count = group.member_ids.len();
                    rsx! {
                        div {
                            class: "group-page",
                            div {
                                class: "group-banner",
                                div {
                                    h2 { "{group.name}" }
                                    span { class: "group-badge",
                                        if group.is_public { "Public" } else { "Private" }
                                    }
                                    span { class: "group-members", "{member_count} members" }
                                }
                                div {
                                    class: "group-banner-actions",
                                    if is_member && !is_creator {
                                        button {
                                            class: "secondary",
                                            onclick: {
                                                let group = group.clone();
                                                let toggle_membership = toggle_membership.clone();
                                                move |_| toggle_membership(group.clone())
                                            },
                                            "Leave"
                                        }
                                    } else if !is_member && group.is_public {
                                        button {
                                            onclick: {
                                                let group = group.clone();
                                                let toggle_membership = toggle_membership.clone();
                                                move |_| toggle_membership(group.clone())
                                            },
                                            "Join"
                                        }
                                    }
                                    if is_creator {
                                        button {
                                            class: "secondary",
                                            onclick: move |_| editing_group.toggle(),
                                            if editing_group() { "Close" } else { "Edit" }
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let id = group.id.clone();
                                                let delete_group = delete_group.clone();
                                                move |_| delete_group(id.clone())
                                            },
                                            "Delete Group"
                                        }
                                    }
                                }
                            }

                            if editing_group() {
                                GroupEditor {
                                    group: group.clone(),
                                    on_save: {
                                        let save_group = save_group.clone();
                                        move |payload| {
                                            save_group(payload);
                                            editing_group.set(false);
                                        }
                                    },
                                }
                            }

                            if let Some(description) = &group.description {
                                p { class: "group-description", "{description}" }
                            }
                            if !group.rules.is_empty() {
                                div {
                                    class: "group-rules",
                                    h4 { "Rules" }
                                    ol {
                                        for rule in &group.rules {
                                            li { "{rule}" }
                                        }
                                    }
                                }
                            }

                            if is_creator && member_count > 0 {
                                div {
                                    class: "group-roster",
                                    h4 { "Members" }
                                    for member_id in group.member_ids.iter().cloned() {
                                        div {
                                            key: "{member_id}",
                                            class: "roster-row",
                                            span {
                                                {usernames.get(&member_id).cloned().unwrap_or_else(|| "Unknown".to_string())}
                                            }
                                            if member_id != group.creator_id {
                                                button {
                                                    class: "icon-btn",
                                                    onclick: {
                                                        let group = group.clone();
                                                        let member_id = member_id.clone();
                                                        let toggle_admin = toggle_admin.clone();
                                                        move |_| toggle_admin((group.clone(), member_id.clone()))
                                                    },
                                                    if group.admin_ids.contains(&member_id) { "Remove admin" } else { "Make admin" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            if is_member {
                                div {
                                    class: "group-composer",
                                    textarea {
                                        placeholder: "Share something with the group...",
                                        value: new_post(),
                                        oninput: move |evt| new_post.set(evt.value()),
                                    }
                                    MediaUpload { media: post_media }
                                    button { onclick: submit_post.clone(), "Post" }
                                }
                            }

                            for post in posts {
                                GroupPostCard {
                                    key: "{post.id}",
                                    author: usernames.get(&post.user_id).cloned().unwrap_or_else(|| "Unknown".to_string()),
                                    can_edit: post.user_id == me,
                                    can_delete: post.user_id == me || is_admin,
                                    on_save: save_post.clone(),
                                    on_delete: {
                                        let id = post.id.clone();
                                        let delete_post = delete_post.clone();
                                        move |_| delete_post(id.clone())
                                    },
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

#[component]
fn GroupPostCard(
    post: GroupPost,
    author: String,
    can_edit: bool,
    can_delete: bool,
    on_save: EventHandler<(String, NewGroupPost)>,
    on_delete: EventHandler<()>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(|| post.content.clone());

    let post_for_save = post.clone();
    let save = move |_| {
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        on_save.call((
            post_for_save.id.clone(),
            NewGroupPost {
                group_id: post_for_save.group_id.clone(),
                user_id: post_for_save.user_id.clone(),
                content,
                media_url: post_for_save.media_url.clone(),
                media_type: post_for_save.media_type.clone(),
            },
        ));
        editing.set(false);
    };

    rsx! {
        article {
            class: "group-post",
            div {
                class: "group-post-head",
                span { class: "group-post-author", "{author}" }
                if let Some(when) = &post.timestamp {
                    span { class: "group-post-time", "{when}" }
                }
                div {
                    class: "group-post-actions",
                    if can_edit {
                        button { class: "icon-btn", onclick: move |_| editing.toggle(), "Edit" }
                    }
                    if can_delete {
                        button { class: "icon-btn danger", onclick: move |_| on_delete.call(()), "Delete" }
                    }
                }
            }

            if editing() {
                textarea {
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { onclick: save, "Save" }
            } else {
                p { "{post.content}" }
            }

            if let (Some(url), Some(media_type)) = (&post.media_url, &post.media_type) {
                MediaView { url: url.clone(), media_type: media_type.clone() }
            }
        }
    }
}

/// Inline editor for the group's name, description, and visibility.
#[component]
fn GroupEditor(group: Group, on_save: EventHandler<(String, NewGroup)>) -> Element {
    let mut name = use_signal(|| group.name.clone());
    let mut description = use_signal(|| group.description.clone().unwrap_or_default());
    let mut public = use_signal(|| group.is_public);

    let save = move |_| {
        if name().trim().is_empty() {
            return;
        }
        on_save.call((
            group.id.clone(),
            NewGroup {
                name: name().trim().to_string(),
                description: description(),
                creator_id: group.creator_id.clone(),
                image_url: group.image_url.clone().unwrap_or_default(),
                tags: group.tags.clone(),
                rules: group.rules.clone(),
                is_public: public(),
            },
        ));
    };

    rsx! {
        div {
            class: "group-composer",
            label { "Name"
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label { "Description"
                textarea {
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            label {
                class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: public(),
                    onchange: move |evt| public.set(evt.checked()),
                }
                "Anyone can join"
            }
            button { onclick: save, "Save" }
        }
    }
}

/// Join or leave by rewriting the member list.
async fn toggle_member(client: &ApiClient, group: &Group, user_id: &str) -> Result<(), api::ApiError> {
    let mut members = group.member_ids.clone();
    if let Some(at) = members.iter().position(|id| id == user_id) {
        members.remove(at);
    } else {
        members.push(user_id.to_string());
    }
    client.update_group_members(&group.id, &members).await?;
    Ok(())
}
