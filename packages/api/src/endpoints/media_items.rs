use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::MediaItem;

impl ApiClient {
    pub async fn create_media(&self, media: &MediaItem) -> Result<MediaItem, ApiError> {
        self.post_json("/api/media", media).await
    }

    pub async fn get_media_by_post(&self, post_id: &str) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("/api/media/{post_id}")).await
    }

    pub async fn delete_media(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/media/{id}")).await
    }
}
