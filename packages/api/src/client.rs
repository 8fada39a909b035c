//! HTTP plumbing shared by every endpoint group.
//!
//! Client-side (wasm32): real HTTP via `gloo-net`, bearer token attached from
//! the credential store, and a single refresh-and-retry cycle on a 401 before
//! the error is surfaced and the session is cleared.
//! Native: the network layer is stubbed with an error so the surrounding logic
//! stays unit-testable off the browser.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::storage::{keys, CredentialStore, SharedStore};

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Two-state retry policy for the authorization-refresh cycle: a request gets
/// exactly one refresh attempt, never two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempted: bool,
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the single retry. Returns whether a retry may happen.
    pub fn try_take(&mut self) -> bool {
        if self.attempted {
            false
        } else {
            self.attempted = true;
            true
        }
    }
}

/// Handle on the backend: base URL plus the credential store the bearer token
/// is read from. Cheap to clone and hand to every view through context; all
/// clones share the expiry-observer list.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    credentials: SharedStore,
    expiry_observers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, credentials: SharedStore) -> Self {
        Self {
            config,
            credentials,
            expiry_observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a callback to run when a request dies on an authorization
    /// failure after the refresh retry is spent. The session holder and the
    /// UI state both hook in here so the stored credentials and the in-memory
    /// state can never disagree about whether someone is signed in.
    pub fn on_session_expired(&self, observer: impl Fn() + 'static) {
        self.expiry_observers.borrow_mut().push(Rc::new(observer));
    }

    /// The session is over: wipe the stored credentials and notify observers.
    pub(crate) fn expire_session(&self) {
        self.credentials.clear();
        let observers = self.expiry_observers.borrow().clone();
        for observer in observers {
            observer();
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn credentials(&self) -> &SharedStore {
        &self.credentials
    }

    /// The user id persisted with the tokens, if any.
    pub fn stored_user_id(&self) -> Option<String> {
        self.credentials.get(keys::USER_ID)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Obtain a fresh access token from the refresh credential.
    ///
    /// The backend has no refresh endpoint, so this always fails; every expiry
    /// funnels the session back to anonymous through the caller.
    pub(crate) async fn refresh_access_token(&self) -> Result<(), ApiError> {
        tracing::warn!("access token refresh is not implemented; signing out");
        Err(ApiError::Unauthorized)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::Get, path, None).await?;
        decode_json(&text)
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.execute(Method::Post, path, Some(body)).await?;
        decode_json(&text)
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.execute(Method::Put, path, Some(body)).await?;
        decode_json(&text)
    }

    pub(crate) async fn put_empty(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.execute(Method::Put, path, body).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await.map(|_| ())
    }

    /// Run one request/response cycle with the bearer header attached and the
    /// one-shot 401 refresh-retry applied.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        let mut retry = RetryPolicy::new();
        loop {
            let (status, text) = self.send_once(method, path, body.as_ref()).await?;
            if status == 401 {
                if retry.try_take() && self.refresh_access_token().await.is_ok() {
                    continue;
                }
                // Refresh failed or already spent: the session is over.
                self.expire_session();
                return Err(ApiError::Unauthorized);
            }
            if !(200..300).contains(&status) {
                tracing::error!(status, path, "request failed");
                return Err(ApiError::Status {
                    code: status,
                    message: status_message(status, &text),
                });
            }
            return Ok(text);
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = self.credentials.get(keys::ACCESS_TOKEN) {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Ok((status, text))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_once(
        &self,
        _method: Method,
        path: &str,
        _body: Option<&serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        let _ = path;
        Err(ApiError::Network(
            "requests are only available in the browser".to_string(),
        ))
    }

    /// Send a file as multipart form data to the upload endpoint. Same bearer
    /// and 401 handling as `execute`, but the body is a `FormData` with a
    /// single `file` part.
    #[cfg(target_arch = "wasm32")]
    pub(crate) async fn send_multipart(
        &self,
        path: &str,
        file: &web_sys::File,
    ) -> Result<String, ApiError> {
        use gloo_net::http::Request;

        let mut retry = RetryPolicy::new();
        loop {
            let form = web_sys::FormData::new()
                .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
            form.append_with_blob("file", file)
                .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

            let mut builder = Request::post(&self.url(path));
            if let Some(token) = self.credentials.get(keys::ACCESS_TOKEN) {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = builder
                .body(form)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if status == 401 {
                if retry.try_take() && self.refresh_access_token().await.is_ok() {
                    continue;
                }
                self.expire_session();
                return Err(ApiError::Unauthorized);
            }
            if !(200..300).contains(&status) {
                tracing::error!(status, path, "upload failed");
                return Err(ApiError::Status {
                    code: status,
                    message: status_message(status, &text),
                });
            }
            return Ok(text);
        }
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Short human-readable message for a non-success status. The backend often
/// returns a plain-text explanation in the body; fall back to a generic line.
fn status_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && body.len() <= 200 && !body.starts_with('{') && !body.starts_with('<') {
        body.to_string()
    } else {
        format!("Request failed ({status})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::rc::Rc;

    fn client_with_store() -> (ApiClient, MemoryStore) {
        let store = MemoryStore::new();
        let client = ApiClient::new(ApiConfig::default(), Rc::new(store.clone()));
        (client, store)
    }

    #[test]
    fn test_retry_policy_allows_exactly_one_retry() {
        let mut policy = RetryPolicy::new();
        assert!(policy.try_take());
        assert!(!policy.try_take());
        assert!(!policy.try_take());
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let (client, _) = client_with_store();
        assert_eq!(
            client.url("/api/posts"),
            "http://localhost:8080/api/posts"
        );
    }

    #[tokio::test]
    async fn test_refresh_always_fails() {
        let (client, _) = client_with_store();
        assert_eq!(
            client.refresh_access_token().await,
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn test_status_message_prefers_short_plain_body() {
        assert_eq!(status_message(400, "Username already taken"), "Username already taken");
        assert_eq!(status_message(500, ""), "Request failed (500)");
        assert_eq!(status_message(500, r#"{"error":"x"}"#), "Request failed (500)");
    }

    #[test]
    fn test_expire_session_clears_store_and_notifies_observers() {
        use std::cell::Cell;

        let (client, store) = client_with_store();
        store.set(keys::ACCESS_TOKEN, "tok");
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        client.on_session_expired(move || seen.set(seen.get() + 1));
        // Clones share the observer list.
        let another = client.clone();
        another.expire_session();

        assert_eq!(fired.get(), 1);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
    }

    #[test]
    fn test_stored_user_id_reads_credential_store() {
        let (client, store) = client_with_store();
        assert!(client.stored_user_id().is_none());
        store.set(keys::USER_ID, "u1");
        assert_eq!(client.stored_user_id().as_deref(), Some("u1"));
    }
}
