//! Auth gate for protected views.

use dioxus::prelude::*;

use crate::auth::use_auth;

/// Renders its children only for an authenticated session. While the stored
/// session is still being restored nothing is shown; anonymous visitors are
/// sent to the login page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }
    if state.user.is_none() {
        nav.replace("/login");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
