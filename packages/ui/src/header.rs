//! Top navigation bar with the unread-notification badge.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaUtensils};
use dioxus_free_icons::Icon;

use crate::auth::{use_api, use_auth, LogoutButton};

/// How often the unread-notification count is refreshed.
const POLL_SECS: u64 = 60;

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let client = use_api();
    let mut unread = use_signal(|| 0usize);

    // Poll the unread count once a minute while someone is signed in. The
    // loop dies with the header.
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            loop {
                if let Some(user) = auth().user {
                    match client.get_unread_notifications(&user.id).await {
                        Ok(notifications) => unread.set(notifications.len()),
                        Err(err) => tracing::warn!(%err, "could not refresh unread count"),
                    }
                } else {
                    unread.set(0);
                }

                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_SECS)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(POLL_SECS)).await;
            }
        });
    });

    let state = auth();

    rsx! {
        header {
            class: "site-header",
            Link {
                class: "brand",
                to: "/",
                Icon { icon: FaUtensils, width: 18, height: 18 }
                span { "CookBook" }
            }

            if let Some(user) = state.user {
                nav {
                    class: "main-nav",
                    Link { to: "/feed", "Feed" }
                    Link { to: "/meal-plans", "Meal Plans" }
                    Link { to: "/skill-shares", "Skill Shares" }
                    Link { to: "/groups", "Groups" }
                    Link { to: "/bookmarks", "Bookmarks" }
                    Link { to: "/my-recipes", "My Recipes" }
                    Link {
                        class: "nav-bell",
                        to: "/notifications",
                        Icon { icon: FaBell, width: 16, height: 16 }
                        if unread() > 0 {
                            span {
                                class: "badge",
                                if unread() > 9 { "9+" } else { "{unread()}" }
                            }
                        }
                    }
                    Link { to: "/profile/{user.id}",
                        if user.username.is_empty() { "Profile" } else { "{user.username}" }
                    }
                    LogoutButton { class: "logout-btn" }
                }
            } else if !state.loading {
                nav {
                    class: "main-nav",
                    Link { to: "/login", "Login" }
                    Link { to: "/register", "Register" }
                }
            }
        }
    }
}
