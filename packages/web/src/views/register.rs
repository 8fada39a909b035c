//! Account creation form.

use dioxus::prelude::*;
use ui::{use_api, use_auth, use_session, AuthState};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let client = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Feed {});
        return rsx! {};
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let name = username().trim().to_string();
            if password() != confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            busy.set(true);
            // Catch a taken name before attempting to register it.
            match client.username_exists(&name).await {
                Ok(true) => {
                    error.set(Some("That username is already taken".to_string()));
                    busy.set(false);
                    return;
                }
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(%err, "username check failed, continuing with registration");
                }
            }
            match session.register(&name, &password()).await {
                Ok(user) => {
                    auth.set(AuthState::authenticated(user));
                    nav.push(Route::Feed {});
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create your account" }

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
                label { "Confirm password"
                    input {
                        r#type: "password",
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
