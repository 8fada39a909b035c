use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewConnection, UserConnection};

impl ApiClient {
    pub async fn get_user_connections(&self, user_id: &str) -> Result<UserConnection, ApiError> {
        self.get_json(&format!("/api/userConnections/{user_id}")).await
    }

    pub async fn create_user_connection(
        &self,
        connection: &NewConnection,
    ) -> Result<UserConnection, ApiError> {
        self.post_json("/api/userConnections", connection).await
    }

    pub async fn unfriend(&self, user_id: &str, friend_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/userConnections/{user_id}/friends/{friend_id}"))
            .await
    }
}
