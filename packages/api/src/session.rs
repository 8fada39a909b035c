//! Session lifecycle.
//!
//! One explicitly-owned [`Session`] object holds the authentication state for
//! the lifetime of the browser tab. It is created at app start, initialized
//! from the credential store, and handed to the component tree via context —
//! there is no ambient global.
//!
//! States and transitions:
//!
//! ```text
//! anonymous -> authenticating -> authenticated
//!      ^                              |
//!      |      (expired / refresh  <---+ (on page load, stored token
//!      +----   failure / logout)        decoded and checked)
//! ```
//!
//! The refresh flow is a stub that always fails, so any expiry or decode
//! failure of the stored credential unconditionally returns to anonymous.
//! The same applies mid-session: an authorization failure that survives the
//! client's single refresh retry drops the state back to anonymous.

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, User};
use crate::storage::{keys, CredentialStore};
use crate::token;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated { user: User },
    /// Transient: stored credential is stale and a refresh is being attempted.
    TokenExpired,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

/// The session holder. Cheap to clone; all clones share one state cell.
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    state: Rc<RefCell<SessionState>>,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        let state = Rc::new(RefCell::new(SessionState::Anonymous));
        // A 401 that survives the refresh retry wipes the stored credentials
        // inside the client; the in-memory state has to follow.
        let expired = Rc::clone(&state);
        client.on_session_expired(move || {
            *expired.borrow_mut() = SessionState::Anonymous;
        });
        Self { client, state }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    fn set_state(&self, next: SessionState) {
        *self.state.borrow_mut() = next;
    }

    /// Restore the session from durable storage on page load.
    ///
    /// A stored token that is expired or cannot be decoded gets one refresh
    /// attempt; refresh is unimplemented, so that path always ends anonymous
    /// with the stored credentials cleared.
    pub async fn init(&self) -> SessionState {
        let Some(stored) = self.client.credentials().get(keys::ACCESS_TOKEN) else {
            self.set_state(SessionState::Anonymous);
            return self.state();
        };

        match token::decode(&stored) {
            Ok(claims) if !claims.is_expired_at(token::unix_now()) => {
                let user_id = claims
                    .sub
                    .clone()
                    .or_else(|| self.client.credentials().get(keys::USER_ID));
                match user_id {
                    Some(id) => {
                        self.client.credentials().set(keys::USER_ID, &id);
                        self.set_state(SessionState::Authenticated {
                            user: User::minimal(&id),
                        });
                        self.enrich(&id).await;
                    }
                    None => {
                        tracing::error!("no user id in token or storage");
                        self.logout();
                    }
                }
            }
            _ => {
                self.set_state(SessionState::TokenExpired);
                if self.client.refresh_access_token().await.is_err() {
                    self.logout();
                }
            }
        }
        self.state()
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Please enter both username and password".to_string(),
            ));
        }
        self.set_state(SessionState::Authenticating);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self.client.post_json("/api/auth/login", &request).await {
            Ok(response) => Ok(self.establish(response).await),
            Err(err) => {
                self.set_state(SessionState::Anonymous);
                Err(err)
            }
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<User, ApiError> {
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Please enter both username and password".to_string(),
            ));
        }
        self.set_state(SessionState::Authenticating);
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self.client.post_json("/api/auth/register", &request).await {
            Ok(response) => Ok(self.establish(response).await),
            Err(err) => {
                self.set_state(SessionState::Anonymous);
                Err(err)
            }
        }
    }

    /// Accept tokens delivered out of band (the OAuth callback query string).
    pub async fn adopt_tokens(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        user_id: &str,
    ) -> User {
        self.establish(TokenResponse {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.map(str::to_string),
            user_id: user_id.to_string(),
        })
        .await
    }

    /// Persist a complete token response and enter the authenticated state.
    async fn establish(&self, response: TokenResponse) -> User {
        let store = self.client.credentials();
        store.set(keys::ACCESS_TOKEN, &response.access_token);
        if let Some(refresh) = &response.refresh_token {
            store.set(keys::REFRESH_TOKEN, refresh);
        }
        store.set(keys::USER_ID, &response.user_id);

        let user = User::minimal(&response.user_id);
        self.set_state(SessionState::Authenticated { user: user.clone() });

        self.enrich(&response.user_id).await;
        self.current_user().unwrap_or(user)
    }

    /// Best-effort replacement of the minimal `{id}` record with the full user.
    /// Failure is swallowed; the session stays authenticated.
    async fn enrich(&self, user_id: &str) {
        match self
            .client
            .get_json::<User>(&format!("/api/users/{user_id}"))
            .await
        {
            Ok(user) => self.set_state(SessionState::Authenticated { user }),
            Err(err) => {
                tracing::warn!(%err, "could not load full user profile, continuing with id only");
            }
        }
    }

    /// Teardown: clear all persisted credentials and return to anonymous.
    pub fn logout(&self) {
        self.client.credentials().clear();
        self.set_state(SessionState::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiConfig;
    use crate::storage::MemoryStore;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::rc::Rc;

    fn session_with_store() -> (Session, MemoryStore) {
        let store = MemoryStore::new();
        let client = ApiClient::new(ApiConfig::default(), Rc::new(store.clone()));
        (Session::new(client), store)
    }

    fn token_with(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.sig")
    }

    fn unexpired(sub: &str) -> String {
        // Far-future expiry.
        token_with(&format!(r#"{{"sub":"{sub}","exp":4102444800}}"#))
    }

    #[tokio::test]
    async fn test_init_without_stored_token_is_anonymous() {
        let (session, _) = session_with_store();
        assert_eq!(session.init().await, SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_init_with_expired_token_clears_and_goes_anonymous() {
        let (session, store) = session_with_store();
        store.set(keys::ACCESS_TOKEN, &token_with(r#"{"sub":"u1","exp":1}"#));
        store.set(keys::REFRESH_TOKEN, "refresh");
        store.set(keys::USER_ID, "u1");

        assert_eq!(session.init().await, SessionState::Anonymous);
        for key in keys::ALL {
            assert!(store.get(key).is_none(), "{key} should be cleared");
        }
    }

    #[tokio::test]
    async fn test_init_with_undecodable_token_goes_anonymous() {
        let (session, store) = session_with_store();
        store.set(keys::ACCESS_TOKEN, "garbage");

        assert_eq!(session.init().await, SessionState::Anonymous);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
    }

    #[tokio::test]
    async fn test_init_with_valid_token_is_authenticated_with_minimal_user() {
        let (session, store) = session_with_store();
        store.set(keys::ACCESS_TOKEN, &unexpired("u1"));

        // Enrichment fails off the browser; that failure must be swallowed.
        let state = session.init().await;
        assert_eq!(
            state,
            SessionState::Authenticated {
                user: User::minimal("u1")
            }
        );
        assert_eq!(store.get(keys::USER_ID).as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_init_falls_back_to_stored_user_id_when_token_has_no_sub() {
        let (session, store) = session_with_store();
        store.set(keys::ACCESS_TOKEN, &token_with(r#"{"exp":4102444800}"#));
        store.set(keys::USER_ID, "u9");

        let state = session.init().await;
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u9"));
    }

    #[tokio::test]
    async fn test_init_without_any_user_id_logs_out() {
        let (session, store) = session_with_store();
        store.set(keys::ACCESS_TOKEN, &token_with(r#"{"exp":4102444800}"#));

        assert_eq!(session.init().await, SessionState::Anonymous);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
    }

    #[tokio::test]
    async fn test_login_with_empty_credentials_rejected_without_network() {
        let (session, store) = session_with_store();
        let err = session.login("", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
    }

    #[tokio::test]
    async fn test_failed_login_persists_nothing() {
        let (session, store) = session_with_store();
        // Off the browser the send stub errors, standing in for a rejected login.
        assert!(session.login("chef", "secret").await.is_err());
        assert_eq!(session.state(), SessionState::Anonymous);
        for key in keys::ALL {
            assert!(store.get(key).is_none());
        }
    }

    #[tokio::test]
    async fn test_adopt_tokens_persists_all_three_keys() {
        let (session, store) = session_with_store();
        let user = session.adopt_tokens("tok", Some("refresh"), "u1").await;

        assert_eq!(user.id, "u1");
        assert_eq!(store.get(keys::ACCESS_TOKEN).as_deref(), Some("tok"));
        assert_eq!(store.get(keys::REFRESH_TOKEN).as_deref(), Some("refresh"));
        assert_eq!(store.get(keys::USER_ID).as_deref(), Some("u1"));
        assert!(session.current_user().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_everything_from_any_state() {
        let (session, store) = session_with_store();
        session.adopt_tokens("tok", Some("refresh"), "u1").await;

        session.logout();

        assert_eq!(session.state(), SessionState::Anonymous);
        for key in keys::ALL {
            assert!(store.get(key).is_none(), "{key} should be cleared");
        }
    }

    #[tokio::test]
    async fn test_exhausted_401_drops_in_memory_state_to_anonymous() {
        let (session, store) = session_with_store();
        session.adopt_tokens("tok", Some("refresh"), "u1").await;
        assert!(matches!(
            session.state(),
            SessionState::Authenticated { .. }
        ));

        // What the client does when a request dies on a 401 after the
        // refresh retry is spent.
        session.client().expire_session();

        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.current_user().is_none());
        for key in keys::ALL {
            assert!(store.get(key).is_none(), "{key} should be cleared");
        }
    }
}
