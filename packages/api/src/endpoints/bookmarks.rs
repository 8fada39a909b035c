use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Bookmark, NewBookmark};

impl ApiClient {
    pub async fn get_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, ApiError> {
        self.get_json(&format!("/api/bookmarks/{user_id}")).await
    }

    pub async fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark, ApiError> {
        self.post_json("/api/bookmarks", bookmark).await
    }

    pub async fn update_bookmark(
        &self,
        id: &str,
        bookmark: &NewBookmark,
    ) -> Result<Bookmark, ApiError> {
        self.put_json(&format!("/api/bookmarks/{id}"), bookmark).await
    }

    pub async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/bookmarks/{id}")).await
    }
}
