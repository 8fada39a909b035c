use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Group, NewGroup};

impl ApiClient {
    pub async fn get_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.get_json("/api/groups").await
    }

    pub async fn get_public_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.get_json("/api/groups/public").await
    }

    pub async fn get_group(&self, id: &str) -> Result<Group, ApiError> {
        self.get_json(&format!("/api/groups/{id}")).await
    }

    pub async fn get_groups_by_creator(&self, user_id: &str) -> Result<Vec<Group>, ApiError> {
        self.get_json(&format!("/api/groups/creator/{user_id}")).await
    }

    pub async fn get_groups_by_member(&self, user_id: &str) -> Result<Vec<Group>, ApiError> {
        self.get_json(&format!("/api/groups/member/{user_id}")).await
    }

    pub async fn create_group(&self, group: &NewGroup) -> Result<Group, ApiError> {
        self.post_json("/api/groups", group).await
    }

    pub async fn update_group(&self, id: &str, group: &NewGroup) -> Result<Group, ApiError> {
        self.put_json(&format!("/api/groups/{id}"), group).await
    }

    /// Replace the member list wholesale; joining and leaving both go through
    /// this endpoint.
    pub async fn update_group_members(
        &self,
        id: &str,
        member_ids: &[String],
    ) -> Result<Group, ApiError> {
        self.put_json(&format!("/api/groups/{id}/members"), &member_ids).await
    }

    pub async fn update_group_admins(
        &self,
        id: &str,
        admin_ids: &[String],
    ) -> Result<Group, ApiError> {
        self.put_json(&format!("/api/groups/{id}/admins"), &admin_ids).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/groups/{id}")).await
    }
}
