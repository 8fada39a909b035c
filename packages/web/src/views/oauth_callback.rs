//! Landing page for the OAuth redirect. The backend appends the tokens to the
//! query string; they are adopted into the session and scrubbed from the URL
//! by navigating away.

use dioxus::prelude::*;
use ui::{use_auth, use_session, AuthState};

use crate::Route;

#[component]
pub fn OAuthCallback() -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut failed = use_signal(|| false);

    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            let Some((token, refresh, user_id)) = callback_params() else {
                failed.set(true);
                return;
            };
            let user = session
                .adopt_tokens(&token, refresh.as_deref(), &user_id)
                .await;
            auth.set(AuthState::authenticated(user));
            nav.replace(Route::Feed {});
        });
    });

    rsx! {
        div {
            class: "auth-page",
            if failed() {
                h2 { "Sign-in failed" }
                p { "The sign-in response was missing its credentials." }
                Link { to: Route::Login {}, "Back to login" }
            } else {
                p { "Completing sign-in..." }
            }
        }
    }
}

/// `token`, optional `refreshToken`, and `userId` from the query string.
#[cfg(target_arch = "wasm32")]
fn callback_params() -> Option<(String, Option<String>, String)> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let token = params.get("token")?;
    let user_id = params.get("userId")?;
    Some((token, params.get("refreshToken"), user_id))
}

#[cfg(not(target_arch = "wasm32"))]
fn callback_params() -> Option<(String, Option<String>, String)> {
    None
}
