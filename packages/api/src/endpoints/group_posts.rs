use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{GroupPost, NewGroupPost};

impl ApiClient {
    pub async fn get_posts_by_group(&self, group_id: &str) -> Result<Vec<GroupPost>, ApiError> {
        self.get_json(&format!("/api/group-posts/group/{group_id}")).await
    }

    pub async fn create_group_post(&self, post: &NewGroupPost) -> Result<GroupPost, ApiError> {
        self.post_json("/api/group-posts", post).await
    }

    pub async fn update_group_post(
        &self,
        id: &str,
        post: &NewGroupPost,
    ) -> Result<GroupPost, ApiError> {
        self.put_json(&format!("/api/group-posts/{id}"), post).await
    }

    pub async fn delete_group_post(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/group-posts/{id}")).await
    }
}
