//! Notification inbox: unread first, mark one/all read, delete.

use std::collections::HashMap;

use api::models::Notification;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaComment, FaHeart, FaUserPlus};
use dioxus_free_icons::Icon;
use ui::{use_api, use_auth, RequireAuth};

#[component]
pub fn Notifications() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();

    let inbox = {
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
                let mut notifications = client.get_notifications(&me).await?;
                // Unread first, then newest first within each half.
                notifications.sort_by(|a, b| {
                    a.read
                        .cmp(&b.read)
                        .then_with(|| b.timestamp.cmp(&a.timestamp))
                });
                Ok::<_, api::ApiError>((notifications, usernames))
            }
        })
    };

    let mark_read = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut inbox = inbox;
            spawn(async move {
                if let Err(err) = client.mark_notification_read(&id).await {
                    tracing::warn!(%err, "could not mark notification read");
                }
                inbox.restart();
            });
        }
    };

    let mark_all_read = {
        let client = client.clone();
        let me = me.clone();
        move |_| {
            let client = client.clone();
            let me = me.clone();
            let mut inbox = inbox;
            spawn(async move {
                if let Err(err) = client.mark_all_notifications_read(&me).await {
                    tracing::warn!(%err, "could not mark notifications read");
                }
                inbox.restart();
            });
        }
    };

    let remove = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut inbox = inbox;
            spawn(async move {
                if let Err(err) = client.delete_notification(&id).await {
                    tracing::warn!(%err, "could not delete notification");
                }
                inbox.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Notifications" }
                    button { class: "secondary", onclick: mark_all_read, "Mark all read" }
                }

                match inbox() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load notifications: {err.message()}" }
                    },
                    Some(Ok((notifications, usernames))) => rsx! {
                        if notifications.is_empty() {
                            p { class: "empty-state", "You're all caught up." }
                        }
                        for notification in notifications {
                            NotificationRow {
                                key: "{notification.id}",
                                actor: notification
                                    .action_user_id
                                    .as_ref()
                                    .and_then(|id| usernames.get(id).cloned()),
                                on_read: {
                                    let id = notification.id.clone();
                                    let mark_read = mark_read.clone();
                                    move |_| mark_read(id.clone())
                                },
                                on_delete: {
                                    let id = notification.id.clone();
                                    let remove = remove.clone();
                                    move |_| remove(id.clone())
                                },
                                notification,
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn NotificationRow(
    notification: Notification,
    actor: Option<String>,
    on_read: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: if notification.read { "notification" } else { "notification unread" },
            span {
                class: "notification-icon",
                match notification.kind.as_deref() {
                    Some("like") => rsx! { Icon { icon: FaHeart, width: 16, height: 16 } },
                    Some("comment") => rsx! { Icon { icon: FaComment, width: 16, height: 16 } },
                    Some("friend") => rsx! { Icon { icon: FaUserPlus, width: 16, height: 16 } },
                    _ => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
                }
            }
            div {
                class: "notification-body",
                p { "{notification.message}" }
                div {
                    class: "notification-meta",
                    if let Some(actor) = &actor {
                        span { "from {actor}" }
                    }
                    if let Some(when) = &notification.timestamp {
                        span { "{when}" }
                    }
                }
            }
            div {
                class: "notification-actions",
                if !notification.read {
                    button { class: "icon-btn", onclick: move |_| on_read.call(()), "Mark read" }
                }
                button { class: "icon-btn danger", onclick: move |_| on_delete.call(()), "Delete" }
            }
        }
    }
}
