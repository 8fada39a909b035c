use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewPost, Post, UploadResponse};

impl ApiClient {
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        self.post_json("/api/posts", post).await
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/api/posts").await
    }

    pub async fn get_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/api/posts/{user_id}")).await
    }

    pub async fn update_post(
        &self,
        id: &str,
        post: &NewPost,
        user_id: &str,
    ) -> Result<Post, ApiError> {
        self.put_json(&format!("/api/posts/{id}?userId={user_id}"), post).await
    }

    pub async fn delete_post(&self, id: &str, user_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/posts/{id}?userId={user_id}")).await
    }

    /// Upload a media file and get back its public URL and content type.
    /// Callers validate size and duration first; see [`crate::media`].
    #[cfg(target_arch = "wasm32")]
    pub async fn upload_media(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let text = self.send_multipart("/api/upload", file).await?;
        crate::client::decode_json(&text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn upload_media(&self) -> Result<UploadResponse, ApiError> {
        Err(ApiError::Network(
            "uploads are only available in the browser".to_string(),
        ))
    }
}
