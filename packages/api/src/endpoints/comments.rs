use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Comment, NewComment};

impl ApiClient {
    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json(&format!("/api/comments/{}", comment.post_id), comment)
            .await
    }

    pub async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/api/comments/post/{post_id}")).await
    }

    pub async fn update_comment(&self, id: &str, comment_text: &str) -> Result<Comment, ApiError> {
        self.put_json(
            &format!("/api/comments/{id}"),
            &json!({ "commentText": comment_text }),
        )
        .await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/comments/{id}")).await
    }
}
