use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/users").await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/api/users/{id}")).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/users/{id}")).await
    }
}
