//! Authentication context and hooks for the UI.

use api::models::User;
use api::{ApiClient, ApiConfig, Session};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Still restoring the session from storage on page load.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session holder created by [`AuthProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Shorthand for the API client behind the session.
pub fn use_api() -> ApiClient {
    use_session().client().clone()
}

/// Provider component that owns the session for the lifetime of the tab.
/// Wrap the router with this component.
#[component]
pub fn AuthProvider(#[props(default)] base_url: Option<String>, children: Element) -> Element {
    let session = use_hook(|| {
        let config = base_url
            .as_deref()
            .map(ApiConfig::new)
            .unwrap_or_default();
        Session::new(ApiClient::new(config, api::storage::platform_store()))
    });
    let mut auth_state = use_signal(AuthState::default);

    // A 401 that survives the refresh retry signs the session out inside the
    // client; mirror it here so guards and the header react without a reload.
    {
        let session = session.clone();
        use_hook(move || {
            session.client().on_session_expired(move || {
                let mut auth_state = auth_state;
                auth_state.set(AuthState::anonymous());
            });
        });
    }

    // Restore the session from storage on mount. An expired or undecodable
    // stored token comes back anonymous here, never half signed-in.
    let restoring = session.clone();
    let _ = use_resource(move || {
        let session = restoring.clone();
        async move {
            let state = session.init().await;
            auth_state.set(AuthState {
                user: state.user().cloned(),
                loading: false,
            });
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that tears the session down and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        session.logout();
        auth_state.set(AuthState::anonymous());
        nav.push("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
