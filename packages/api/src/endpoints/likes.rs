use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Like, NewLike};

impl ApiClient {
    pub async fn create_like(&self, like: &NewLike) -> Result<Like, ApiError> {
        self.post_json("/api/likes", like).await
    }

    pub async fn get_likes_by_post(&self, post_id: &str) -> Result<Vec<Like>, ApiError> {
        self.get_json(&format!("/api/likes/{post_id}")).await
    }

    pub async fn delete_like(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/likes/{id}")).await
    }
}
