//! Username/password sign-in, plus the Google OAuth hand-off.

use dioxus::prelude::*;
use ui::{use_auth, use_session, AuthState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let api_base = use_session().client().config().base_url.clone();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in, nothing to do here.
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Feed {});
        return rsx! {};
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            busy.set(true);
            match session.login(username().trim(), &password()).await {
                Ok(user) => {
                    auth.set(AuthState::authenticated(user));
                    nav.push(Route::Feed {});
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    let google_login = move |_| {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&format!("{api_base}/oauth2/authorization/google"));
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &api_base;
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Welcome back" }
            p { class: "auth-sub", "Sign in to share what you're cooking." }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: onsubmit,
                label { "Username"
                    input {
                        r#type: "text",
                        value: username(),
                        autofocus: true,
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign In" }
                }
            }

            button {
                class: "google-btn",
                onclick: google_login,
                "Continue with Google"
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
