//! Authentication endpoints not covered by the session itself.

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Whether a username is already taken, used by the registration form.
    pub async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        self.get_json(&format!("/api/users/exists/{username}")).await
    }
}
