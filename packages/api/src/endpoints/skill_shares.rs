use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewSkillShare, SkillShare};

impl ApiClient {
    pub async fn create_skill_share(&self, share: &NewSkillShare) -> Result<SkillShare, ApiError> {
        self.post_json("/api/SkillShares", share).await
    }

    pub async fn get_skill_shares(&self) -> Result<Vec<SkillShare>, ApiError> {
        self.get_json("/api/SkillShares").await
    }

    pub async fn get_skill_shares_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<SkillShare>, ApiError> {
        self.get_json(&format!("/api/SkillShares/{user_id}")).await
    }

    pub async fn update_skill_share(
        &self,
        id: &str,
        share: &NewSkillShare,
    ) -> Result<SkillShare, ApiError> {
        self.put_json(&format!("/api/SkillShares/{id}"), share).await
    }

    pub async fn delete_skill_share(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/SkillShares/{id}")).await
    }
}
